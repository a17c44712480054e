use std::fmt;
use std::str::FromStr;

/// Lifecycle of a file on the external indexing service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentState {
    Unspecified,
    Processing,
    Active,
    Failed,
}

impl DocumentState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentState::Unspecified => "STATE_UNSPECIFIED",
            DocumentState::Processing => "PROCESSING",
            DocumentState::Active => "ACTIVE",
            DocumentState::Failed => "FAILED",
        }
    }
}

impl FromStr for DocumentState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STATE_UNSPECIFIED" => Ok(DocumentState::Unspecified),
            "PROCESSING" => Ok(DocumentState::Processing),
            "ACTIVE" => Ok(DocumentState::Active),
            "FAILED" => Ok(DocumentState::Failed),
            _ => Err(format!("Invalid document state: {}", s)),
        }
    }
}

impl fmt::Display for DocumentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
