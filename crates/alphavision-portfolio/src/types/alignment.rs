//! History alignment policies.

use serde::{Deserialize, Serialize};

/// How series aggregation treats reference dates that another selected
/// asset has no observation for.
///
/// The first resolved asset's history defines the date axis. Other assets
/// are matched to it by date, not by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentPolicy {
    /// Drop reference dates not covered by every selected asset.
    #[default]
    Intersect,

    /// Fail with `PortfolioError::MisalignedHistory` on the first gap.
    Strict,
}

impl AlignmentPolicy {
    /// Returns a human-readable name for the policy.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Intersect => "Intersect",
            Self::Strict => "Strict",
        }
    }
}

impl std::fmt::Display for AlignmentPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
