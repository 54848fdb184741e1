//! Emergency priority level shared by the scorer and dispatch layers.
//!
//! Parsing from text is strict: anything other than `low`, `medium` or
//! `high` (case-insensitive, surrounding whitespace ignored) is rejected with
//! [`StmsError::InvalidArgument`] rather than falling back to the default.

use std::str::FromStr;

use crate::StmsError;

/// How aggressively route complexity is penalised for an emergency.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmergencyLevel {
    Low,
    #[default]
    Medium,
    /// Turn count is penalised; fewer, faster segments are preferred.
    High,
}

impl EmergencyLevel {
    pub const ALL: [EmergencyLevel; 3] =
        [EmergencyLevel::Low, EmergencyLevel::Medium, EmergencyLevel::High];

    /// `true` when route scoring should penalise turns.
    #[inline]
    pub fn penalises_turns(self) -> bool {
        matches!(self, EmergencyLevel::High)
    }

    /// Lower-case label, as accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            EmergencyLevel::Low    => "low",
            EmergencyLevel::Medium => "medium",
            EmergencyLevel::High   => "high",
        }
    }
}

impl FromStr for EmergencyLevel {
    type Err = StmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        EmergencyLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                log::debug!("rejected emergency level {s:?}");
                StmsError::invalid(format!(
                    "unknown emergency level {s:?}: expected \"low\", \"medium\" or \"high\""
                ))
            })
    }
}

impl std::fmt::Display for EmergencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
