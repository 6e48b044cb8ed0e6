use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DutyError {
    #[error("invalid date {value:?}: expected YYYY-MM-DD")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("date overflow after {0}")]
    DateOverflow(String),
    #[error("reading roster {}", path.display())]
    ReadRoster {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing roster {}", path.display())]
    ParseRoster {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
