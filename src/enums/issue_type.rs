use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq)]
pub enum IssueType {
    #[serde(rename = "SYNTAX")]
    Syntax,
    #[serde(rename = "TYPE")]
    Type,
    #[serde(rename = "LOGIC")]
    Logic,
    #[serde(rename = "IMPORT")]
    Import,
    #[serde(rename = "LINTING")]
    Linting,
    #[serde(rename = "INDENTATION")]
    Indentation,
    #[serde(rename = "SECURITY")]
    Security,
}

impl IssueType {
    pub const ALL: [IssueType; 7] = [
        IssueType::Syntax,
        IssueType::Type,
        IssueType::Logic,
        IssueType::Import,
        IssueType::Linting,
        IssueType::Indentation,
        IssueType::Security,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::Syntax => "SYNTAX",
            IssueType::Type => "TYPE",
            IssueType::Logic => "LOGIC",
            IssueType::Import => "IMPORT",
            IssueType::Linting => "LINTING",
            IssueType::Indentation => "INDENTATION",
            IssueType::Security => "SECURITY",
        }
    }

    /// Case-insensitive lookup used for loosely formatted service output.
    pub fn parse(value: &str) -> Option<Self> {
        let wanted = value.trim().to_ascii_uppercase();
        Self::ALL.into_iter().find(|t| t.as_str() == wanted)
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
