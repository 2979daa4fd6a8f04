//! Syllabus topics per subject. Reference data only; no score depends on it.

const TOPICS: &[(&str, &[&str])] = &[
    (
        "biology",
        &[
            "Reproduction in Organisms",
            "Sexual Reproduction in Flowering Plants",
            "Principles of Inheritance & Variation",
            "Molecular Basis of Inheritance",
            "Evolution",
            "Human Physiology",
            "Biotechnology & Applications",
            "Ecology",
        ],
    ),
    (
        "chemistry",
        &[
            "Solid State",
            "Solutions",
            "Electrochemistry",
            "Chemical Kinetics",
            "Coordination Compounds",
            "Alcohols, Phenols & Ethers",
            "Aldehydes & Ketones",
            "Carboxylic Acids",
            "Amines",
            "Biomolecules",
            "Polymers",
        ],
    ),
    (
        "physics",
        &[
            "Electric Charges & Fields",
            "Electrostatic Potential & Capacitance",
            "Current Electricity",
            "Moving Charges & Magnetism",
            "Magnetism & Matter",
            "Electromagnetic Induction",
            "Alternating Current",
            "Electromagnetic Waves",
            "Ray Optics",
            "Wave Optics",
            "Dual Nature of Radiation & Matter",
            "Atoms & Nuclei",
            "Semiconductor Electronics",
        ],
    ),
];

pub fn subjects() -> impl Iterator<Item = &'static str> {
    TOPICS.iter().map(|(subject, _)| *subject)
}

/// Case-insensitive lookup.
pub fn topics_for(subject: &str) -> Option<&'static [&'static str]> {
    TOPICS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(subject.trim()))
        .map(|(_, topics)| *topics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_subjects_in_order() {
        let names: Vec<&str> = subjects().collect();
        assert_eq!(names, vec!["biology", "chemistry", "physics"]);
    }

    #[test]
    fn topic_counts() {
        assert_eq!(topics_for("biology").map(<[_]>::len), Some(8));
        assert_eq!(topics_for("Chemistry").map(<[_]>::len), Some(11));
        assert_eq!(topics_for(" PHYSICS ").map(<[_]>::len), Some(13));
        assert_eq!(topics_for("physics").and_then(|t| t.first()), Some(&"Electric Charges & Fields"));
        assert!(topics_for("history").is_none());
    }
}
