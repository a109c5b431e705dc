//! Domain models for Fundwise

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Investor risk profile used to pick an allocation tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

impl RiskTolerance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Moderate => "moderate",
            Self::Aggressive => "aggressive",
        }
    }

    pub fn all() -> &'static [RiskTolerance] {
        &[Self::Conservative, Self::Moderate, Self::Aggressive]
    }

    /// Resolve an optional, possibly unrecognised label.
    ///
    /// Missing or unknown labels resolve to [`RiskTolerance::Moderate`]. This
    /// is the only place the fallback is applied.
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(str::trim).filter(|l| !l.is_empty()) {
            None => Self::default(),
            Some(l) => l.parse().unwrap_or_else(|_| {
                tracing::warn!(
                    label = l,
                    fallback = Self::default().as_str(),
                    "Unknown risk tolerance, using fallback"
                );
                Self::default()
            }),
        }
    }
}

impl std::str::FromStr for RiskTolerance {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "conservative" | "low" => Ok(Self::Conservative),
            "moderate" | "medium" | "balanced" => Ok(Self::Moderate),
            "aggressive" | "high" => Ok(Self::Aggressive),
            _ => Err(format!("Unknown risk tolerance: {}", s)),
        }
    }
}

impl std::fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recurring monthly income source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeItem {
    pub name: String,
    pub amount: f64,
}

/// A recurring monthly expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseItem {
    pub name: String,
    pub amount: f64,
    pub category: String,
}

/// Category assigned to expenses that arrive without one
pub const DEFAULT_EXPENSE_CATEGORY: &str = "Other";

/// A savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub target_date: NaiveDate,
}

impl Goal {
    /// A goal is complete once the saved amount reaches the target
    pub fn is_complete(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Amount still to be saved (never negative)
    pub fn remaining_amount(&self) -> f64 {
        (self.target_amount - self.current_amount).max(0.0)
    }

    /// Saved share of the target, capped at 100
    pub fn progress_percentage(&self) -> f64 {
        if self.target_amount <= 0.0 {
            return 0.0;
        }
        (self.current_amount / self.target_amount * 100.0).min(100.0)
    }

    /// Calendar months from `as_of` to the target date, unclamped
    pub fn months_until_target(&self, as_of: NaiveDate) -> i64 {
        months_between(as_of, self.target_date)
    }
}

/// A validated snapshot of a user's monthly finances.
///
/// Produced by [`crate::ingest`]; the engine only ever borrows it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancialProfile {
    pub income: Vec<IncomeItem>,
    pub expenses: Vec<ExpenseItem>,
    pub risk_tolerance: RiskTolerance,
    pub goals: Vec<Goal>,
}

impl FinancialProfile {
    pub fn monthly_income(&self) -> f64 {
        self.income.iter().map(|i| i.amount).sum()
    }

    pub fn monthly_expenses(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Income minus expenses, a.k.a. discretionary income
    pub fn net_savings(&self) -> f64 {
        self.monthly_income() - self.monthly_expenses()
    }

    pub fn goal(&self, id: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }
}

/// Whole calendar months between two dates, ignoring the day of month
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to.year() as i64 - from.year() as i64) * 12 + (to.month() as i64 - from.month() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_risk_tolerance_parsing() {
        assert_eq!(
            "Aggressive".parse::<RiskTolerance>().unwrap(),
            RiskTolerance::Aggressive
        );
        assert!("yolo".parse::<RiskTolerance>().is_err());
    }

    #[test]
    fn test_risk_tolerance_fallback() {
        assert_eq!(RiskTolerance::from_label(None), RiskTolerance::Moderate);
        assert_eq!(RiskTolerance::from_label(Some("")), RiskTolerance::Moderate);
        assert_eq!(
            RiskTolerance::from_label(Some("reckless")),
            RiskTolerance::Moderate
        );
        assert_eq!(
            RiskTolerance::from_label(Some(" conservative ")),
            RiskTolerance::Conservative
        );
    }

    #[test]
    fn test_months_between_ignores_day() {
        assert_eq!(months_between(date(2026, 10, 31), date(2027, 10, 1)), 12);
        assert_eq!(months_between(date(2026, 10, 1), date(2026, 10, 31)), 0);
        assert_eq!(months_between(date(2026, 10, 18), date(2026, 8, 1)), -2);
    }

    #[test]
    fn test_goal_progress() {
        let goal = Goal {
            id: "g1".into(),
            name: "Car".into(),
            target_amount: 100_000.0,
            current_amount: 25_000.0,
            target_date: date(2027, 10, 1),
        };
        assert!(!goal.is_complete());
        assert_eq!(goal.remaining_amount(), 75_000.0);
        assert_eq!(goal.progress_percentage(), 25.0);

        let done = Goal {
            current_amount: 120_000.0,
            ..goal
        };
        assert!(done.is_complete());
        assert_eq!(done.remaining_amount(), 0.0);
        assert_eq!(done.progress_percentage(), 100.0);
    }
}
