use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use quiz_insight::report::{build_report, failure_envelope, success_envelope};
use quiz_insight::{input, topics, Analyzer, AnalyzerError, QuizData};

#[derive(Parser)]
#[command(name = "quiz-insight", version)]
#[command(about = "Quiz attempt analysis and study recommendations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Markdown,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis on a quiz data JSON file ("-" for stdin)
    Analyze {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print only the recommendations
    Recommend {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print only the study plan
    Plan {
        #[arg(long)]
        input: PathBuf,
    },
    /// Analyze per-subject counts from a CSV file (subject,total,correct,answered)
    Import {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long)]
        student_id: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List syllabus topics
    Topics {
        #[arg(long)]
        subject: Option<String>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("quiz_insight=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let analyzer = Analyzer::new();

    match cli.command {
        Commands::Analyze { input, format, out } => {
            let quiz = match load_quiz(&input) {
                Ok(quiz) => quiz,
                Err(err) => return report_failure(&err),
            };
            let result = analyzer.analyze(&quiz);
            let rendered = match format {
                Format::Json => serde_json::to_string_pretty(&success_envelope("data", &result)?)?,
                Format::Markdown => build_report(&result),
            };
            emit(out.as_deref(), &rendered)?;
        }
        Commands::Recommend { input } => {
            let quiz = match load_quiz(&input) {
                Ok(quiz) => quiz,
                Err(err) => return report_failure(&err),
            };
            let recommendations = analyzer.recommendations(&quiz);
            let envelope = success_envelope("recommendations", &recommendations)?;
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
        Commands::Plan { input } => {
            let quiz = match load_quiz(&input) {
                Ok(quiz) => quiz,
                Err(err) => return report_failure(&err),
            };
            let study_plan = analyzer.study_plan(&quiz);
            let envelope = success_envelope("study_plan", &study_plan)?;
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
        Commands::Import {
            csv,
            student_id,
            format,
            out,
        } => {
            let quiz = match input::import_csv(&csv, student_id.as_deref()) {
                Ok(quiz) => quiz,
                Err(err) => return report_failure(&err),
            };
            let result = analyzer.analyze(&quiz);
            let rendered = match format {
                Format::Json => serde_json::to_string_pretty(&success_envelope("data", &result)?)?,
                Format::Markdown => build_report(&result),
            };
            emit(out.as_deref(), &rendered)?;
        }
        Commands::Topics { subject } => match subject {
            Some(subject) => {
                let list = topics::topics_for(&subject)
                    .with_context(|| format!("no topic list for subject {subject}"))?;
                for topic in list {
                    println!("{topic}");
                }
            }
            None => {
                for subject in topics::subjects() {
                    let count = topics::topics_for(subject).map_or(0, <[_]>::len);
                    println!("{subject} ({count} topics)");
                }
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}

fn load_quiz(path: &Path) -> Result<QuizData, AnalyzerError> {
    if path == Path::new("-") {
        return QuizData::from_reader(std::io::stdin().lock());
    }
    let file = std::fs::File::open(path)?;
    QuizData::from_reader(BufReader::new(file))
}

fn report_failure(err: &AnalyzerError) -> anyhow::Result<ExitCode> {
    tracing::error!(kind = err.kind(), "{err}");
    println!("{}", serde_json::to_string_pretty(&failure_envelope(err))?);
    Ok(ExitCode::FAILURE)
}

fn emit(out: Option<&Path>, rendered: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Analysis written to {}.", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
