use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The four supported therapeutic approaches. Each selects a prompt
/// template and a literature reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Approach {
    Cbt,
    Psychodynamic,
    Humanistic,
    SolutionFocused,
}

impl Approach {
    /// All approaches in the order they appear in the selection dropdown.
    pub const ALL: [Approach; 4] = [
        Approach::Cbt,
        Approach::Psychodynamic,
        Approach::Humanistic,
        Approach::SolutionFocused,
    ];

    /// Stable identifier used on the wire and in query parameters.
    pub fn id(&self) -> &'static str {
        match self {
            Approach::Cbt => "cbt",
            Approach::Psychodynamic => "psychodynamic",
            Approach::Humanistic => "humanistic",
            Approach::SolutionFocused => "solution_focused",
        }
    }

    /// Human-readable label shown in the UI and stored on session records.
    pub fn label(&self) -> &'static str {
        match self {
            Approach::Cbt => "CBT",
            Approach::Psychodynamic => "Psychodynamic",
            Approach::Humanistic => "Humanistic",
            Approach::SolutionFocused => "Solution-Focused",
        }
    }
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Approach {
    type Err = CoreError;

    /// Accepts both the wire identifier and the display label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cbt" | "CBT" => Ok(Approach::Cbt),
            "psychodynamic" | "Psychodynamic" => Ok(Approach::Psychodynamic),
            "humanistic" | "Humanistic" => Ok(Approach::Humanistic),
            "solution_focused" | "solution-focused" | "Solution-Focused" => {
                Ok(Approach::SolutionFocused)
            }
            other => Err(CoreError::UnknownApproach(other.to_string())),
        }
    }
}
