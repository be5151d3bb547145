//! Qualitative labels for risk metrics.
//!
//! Thresholds are in the same units as the metrics: Sharpe is a plain
//! ratio, volatility, returns and drawdown are percentages.

use super::metrics::PortfolioMetrics;
use crate::types::RiskMetrics;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk-adjusted return quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SharpeAssessment {
    /// Sharpe >= 1.
    Excellent,
    /// 0 <= Sharpe < 1.
    Average,
    /// Sharpe < 0.
    Poor,
}

impl SharpeAssessment {
    /// Classifies a Sharpe ratio.
    #[must_use]
    pub fn from_ratio(sharpe: f64) -> Self {
        if sharpe >= 1.0 {
            Self::Excellent
        } else if sharpe >= 0.0 {
            Self::Average
        } else {
            Self::Poor
        }
    }

    /// Returns a short label.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Average => "Average",
            Self::Poor => "Poor",
        }
    }

    /// Returns a one-line description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent risk-adjusted return",
            Self::Average => "Average risk-adjusted return",
            Self::Poor => "Poor risk-adjusted return",
        }
    }
}

/// Price fluctuation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolatilityLevel {
    /// Volatility < 15%.
    Low,
    /// 15% <= volatility < 30%.
    Moderate,
    /// Volatility >= 30%.
    High,
}

impl VolatilityLevel {
    /// Classifies an annualized volatility (%).
    #[must_use]
    pub fn from_volatility(volatility: f64) -> Self {
        if volatility < 15.0 {
            Self::Low
        } else if volatility < 30.0 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Returns a short label.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    /// Returns a one-line description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low price fluctuation",
            Self::Moderate => "Moderate price fluctuation",
            Self::High => "High price fluctuation",
        }
    }
}

/// Historical decline severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawdownSeverity {
    /// |drawdown| < 10%.
    Low,
    /// 10% <= |drawdown| < 20%.
    Moderate,
    /// |drawdown| >= 20%.
    Severe,
}

impl DrawdownSeverity {
    /// Classifies a maximum drawdown (%). The sign is ignored.
    #[must_use]
    pub fn from_drawdown(drawdown: f64) -> Self {
        let magnitude = drawdown.abs();
        if magnitude < 10.0 {
            Self::Low
        } else if magnitude < 20.0 {
            Self::Moderate
        } else {
            Self::Severe
        }
    }

    /// Returns a short label.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
        }
    }

    /// Returns a one-line description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low historical decline",
            Self::Moderate => "Moderate historical decline",
            Self::Severe => "Severe historical decline",
        }
    }
}

/// Sign of the period return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnDirection {
    /// Return > 0.
    Positive,
    /// Return <= 0.
    Negative,
}

impl ReturnDirection {
    /// Classifies a period return (%).
    #[must_use]
    pub fn from_returns(returns: f64) -> Self {
        if returns > 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    /// Returns a short label.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
        }
    }

    /// Returns a one-line description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Positive => "Positive performance",
            Self::Negative => "Negative performance",
        }
    }
}

macro_rules! display_via_name {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.name())
                }
            }
        )*
    };
}

display_via_name!(
    SharpeAssessment,
    VolatilityLevel,
    DrawdownSeverity,
    ReturnDirection
);

/// All labels for one set of metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsAssessment {
    /// Sharpe label.
    pub sharpe: SharpeAssessment,
    /// Volatility label.
    pub volatility: VolatilityLevel,
    /// Return label.
    pub returns: ReturnDirection,
    /// Drawdown label, absent for portfolio metrics.
    pub drawdown: Option<DrawdownSeverity>,
}

/// Labels a single asset's metrics.
#[must_use]
pub fn assess_risk_metrics(metrics: &RiskMetrics) -> MetricsAssessment {
    MetricsAssessment {
        sharpe: SharpeAssessment::from_ratio(metrics.sharpe_ratio),
        volatility: VolatilityLevel::from_volatility(metrics.volatility),
        returns: ReturnDirection::from_returns(metrics.returns),
        drawdown: Some(DrawdownSeverity::from_drawdown(metrics.max_drawdown)),
    }
}

/// Labels aggregated portfolio metrics.
#[must_use]
pub fn assess_portfolio_metrics(metrics: &PortfolioMetrics) -> MetricsAssessment {
    MetricsAssessment {
        sharpe: SharpeAssessment::from_ratio(metrics.sharpe_ratio),
        volatility: VolatilityLevel::from_volatility(metrics.volatility),
        returns: ReturnDirection::from_returns(metrics.returns),
        drawdown: None,
    }
}
