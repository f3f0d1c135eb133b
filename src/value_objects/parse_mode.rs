// src/value_objects/parse_mode.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How strictly version text is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Scans `major.minor[.patch]` from the front of the input and ignores whatever follows.
    #[default]
    Lenient,
    /// Requires the entire input to be `major.minor` or `major.minor.patch`.
    Strict,
}

impl ParseMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

impl FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(format!("unknown parse mode '{other}' (expected 'lenient' or 'strict')")),
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
