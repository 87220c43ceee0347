use crate::lexer::ScanError;
use crate::types::Component;
use thiserror::Error;

/// Why an origin could not be turned into host, organization and repository.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("cannot parse origin `{origin}`: {source}")]
    Scan { origin: String, source: ScanError },
    #[error("origin `{origin}` has no {missing}")]
    Incomplete { origin: String, missing: Component },
    #[error("origin `{origin}` has an extra {component} `{text}` after the repository")]
    Trailing {
        origin: String,
        component: Component,
        text: String,
    },
    #[error("origin `{origin}` has an invalid {component} `{text}`")]
    InvalidComponent {
        origin: String,
        component: Component,
        text: String,
    },
    /// A `http://`, `https://` or `git@` marker anywhere but the very start.
    #[error("origin `{origin}` has a misplaced prefix `{text}` at byte {offset}")]
    MisplacedPrefix {
        origin: String,
        text: String,
        offset: usize,
    },
}

impl ParseError {
    /// The origin string that was rejected.
    pub fn origin(&self) -> &str {
        match self {
            ParseError::Scan { origin, .. }
            | ParseError::Incomplete { origin, .. }
            | ParseError::Trailing { origin, .. }
            | ParseError::InvalidComponent { origin, .. }
            | ParseError::MisplacedPrefix { origin, .. } => origin,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown format `{0}`, expected one of: http, https, ssh")]
pub struct FormatParseError(pub String);
