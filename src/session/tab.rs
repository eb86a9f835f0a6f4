use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two views of the app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    /// The draft editing form.
    #[default]
    Calculator,
    /// The result of the last submission.
    Breakdown,
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tab::Calculator => write!(f, "calculator"),
            Tab::Breakdown => write!(f, "breakdown"),
        }
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "calculator" => Ok(Tab::Calculator),
            "breakdown" => Ok(Tab::Breakdown),
            other => Err(format!("unknown tab '{}'", other)),
        }
    }
}
