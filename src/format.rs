/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(subject: &str) -> String {
    let mut chars = subject.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Two decimal places, with exact ties going to the even neighbour.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

pub fn whole_percent(value: f64) -> String {
    format!("{value:.0}")
}
