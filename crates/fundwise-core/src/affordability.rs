//! Purchase affordability
//!
//! Classifies a one-off purchase against monthly discretionary income using
//! an ordered ladder of price/income ratios. The first matching rung wins and
//! every boundary is inclusive.

use serde::Serialize;

use crate::budget::BudgetSummary;

/// Share of discretionary income assumed available for saving toward a purchase
pub const SAVINGS_SHARE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Impact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which rung of the ladder matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AffordabilityTier {
    /// No income left after expenses
    NoDiscretionaryIncome,
    /// price <= 10% of discretionary income
    LowImpact,
    /// price <= 50%
    MediumImpact,
    /// price <= 100%
    HighImpact,
    /// price <= 300%
    SaveOverThreeMonths,
    /// anything larger
    DedicatedSavingsPlan,
}

impl AffordabilityTier {
    /// Classify `price` against `discretionary_income`
    pub fn classify(price: f64, discretionary_income: f64) -> Self {
        if discretionary_income <= 0.0 {
            Self::NoDiscretionaryIncome
        } else if price <= discretionary_income * 0.1 {
            Self::LowImpact
        } else if price <= discretionary_income * 0.5 {
            Self::MediumImpact
        } else if price <= discretionary_income {
            Self::HighImpact
        } else if price <= discretionary_income * 3.0 {
            Self::SaveOverThreeMonths
        } else {
            Self::DedicatedSavingsPlan
        }
    }

    pub fn affordable(&self) -> bool {
        matches!(self, Self::LowImpact | Self::MediumImpact | Self::HighImpact)
    }

    /// Unaffordable rungs report high impact
    pub fn impact(&self) -> Impact {
        match self {
            Self::LowImpact => Impact::Low,
            Self::MediumImpact => Impact::Medium,
            _ => Impact::High,
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::NoDiscretionaryIncome => {
                "You currently have no discretionary income. This purchase is not recommended."
            }
            Self::LowImpact => {
                "This purchase has a low impact on your finances and is affordable."
            }
            Self::MediumImpact => {
                "This purchase is affordable but will use a significant portion of your monthly discretionary income."
            }
            Self::HighImpact => {
                "This purchase will use most of your monthly discretionary income. Consider saving for it over time."
            }
            Self::SaveOverThreeMonths => {
                "This purchase exceeds your monthly discretionary income. Consider saving for it over 3 months."
            }
            Self::DedicatedSavingsPlan => {
                "This purchase is significant compared to your income. It requires a dedicated savings plan."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsPlan {
    pub suggested_monthly_savings: f64,
    /// None when there is no discretionary income to save from
    pub months_to_save: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffordabilityVerdict {
    pub item_name: Option<String>,
    pub item_price: f64,
    pub affordable: bool,
    pub impact: Impact,
    pub tier: AffordabilityTier,
    pub discretionary_income: f64,
    pub recommendation: String,
    pub savings_plan: SavingsPlan,
}

/// Produces [`AffordabilityVerdict`] records
#[derive(Debug, Clone, Copy, Default)]
pub struct AffordabilityAdvisor;

impl AffordabilityAdvisor {
    pub fn new() -> Self {
        Self
    }

    /// Assess a purchase against a budget summary
    pub fn assess(
        &self,
        summary: &BudgetSummary,
        item_name: Option<&str>,
        price: f64,
    ) -> AffordabilityVerdict {
        self.assess_income(summary.discretionary_income(), item_name, price)
    }

    /// Assess a purchase against a bare discretionary income figure
    pub fn assess_income(
        &self,
        discretionary_income: f64,
        item_name: Option<&str>,
        price: f64,
    ) -> AffordabilityVerdict {
        let tier = AffordabilityTier::classify(price, discretionary_income);

        let savings_plan = if discretionary_income > 0.0 {
            let monthly = discretionary_income * SAVINGS_SHARE;
            SavingsPlan {
                suggested_monthly_savings: monthly,
                months_to_save: Some((price / monthly).ceil() as u64),
            }
        } else {
            SavingsPlan {
                suggested_monthly_savings: 0.0,
                months_to_save: None,
            }
        };

        AffordabilityVerdict {
            item_name: item_name.map(str::to_string),
            item_price: price,
            affordable: tier.affordable(),
            impact: tier.impact(),
            tier,
            discretionary_income,
            recommendation: tier.recommendation().to_string(),
            savings_plan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assess(income: f64, price: f64) -> AffordabilityVerdict {
        AffordabilityAdvisor::new().assess_income(income, Some("Item"), price)
    }

    #[test]
    fn test_ladder_scenarios() {
        let low = assess(5000.0, 400.0);
        assert!(low.affordable);
        assert_eq!(low.impact, Impact::Low);

        let medium = assess(5000.0, 2000.0);
        assert!(medium.affordable);
        assert_eq!(medium.impact, Impact::Medium);

        let high = assess(5000.0, 4500.0);
        assert!(high.affordable);
        assert_eq!(high.impact, Impact::High);

        let three = assess(5000.0, 12000.0);
        assert!(!three.affordable);
        assert_eq!(three.tier, AffordabilityTier::SaveOverThreeMonths);
        assert!(three.recommendation.contains("3 months"));

        let plan = assess(5000.0, 20000.0);
        assert!(!plan.affordable);
        assert_eq!(plan.tier, AffordabilityTier::DedicatedSavingsPlan);
        assert!(plan.recommendation.contains("dedicated savings plan"));
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        assert_eq!(
            AffordabilityTier::classify(500.0, 5000.0),
            AffordabilityTier::LowImpact
        );
        assert_eq!(
            AffordabilityTier::classify(500.01, 5000.0),
            AffordabilityTier::MediumImpact
        );
        assert_eq!(
            AffordabilityTier::classify(2500.0, 5000.0),
            AffordabilityTier::MediumImpact
        );
        assert_eq!(
            AffordabilityTier::classify(5000.0, 5000.0),
            AffordabilityTier::HighImpact
        );
        assert_eq!(
            AffordabilityTier::classify(15000.0, 5000.0),
            AffordabilityTier::SaveOverThreeMonths
        );
        assert_eq!(
            AffordabilityTier::classify(15000.01, 5000.0),
            AffordabilityTier::DedicatedSavingsPlan
        );
    }

    #[test]
    fn test_ladder_is_a_partition() {
        // Every ratio lands on exactly one rung and rungs never go backwards
        let mut last = AffordabilityTier::LowImpact;
        let order = [
            AffordabilityTier::LowImpact,
            AffordabilityTier::MediumImpact,
            AffordabilityTier::HighImpact,
            AffordabilityTier::SaveOverThreeMonths,
            AffordabilityTier::DedicatedSavingsPlan,
        ];
        for step in 0..=400 {
            let price = step as f64 * 100.0;
            let tier = AffordabilityTier::classify(price, 1000.0);
            let pos = order.iter().position(|t| *t == tier).unwrap();
            let last_pos = order.iter().position(|t| *t == last).unwrap();
            assert!(pos >= last_pos, "price {} went from {:?} to {:?}", price, last, tier);
            last = tier;
        }
        assert_eq!(last, AffordabilityTier::DedicatedSavingsPlan);
    }

    #[test]
    fn test_no_discretionary_income() {
        for income in [0.0, -250.0] {
            let v = assess(income, 10.0);
            assert!(!v.affordable);
            assert_eq!(v.tier, AffordabilityTier::NoDiscretionaryIncome);
            assert_eq!(v.savings_plan.months_to_save, None);
            assert_eq!(v.savings_plan.suggested_monthly_savings, 0.0);
        }
    }

    #[test]
    fn test_months_to_save() {
        let v = assess(5000.0, 12000.0);
        assert_eq!(v.savings_plan.suggested_monthly_savings, 2500.0);
        assert_eq!(v.savings_plan.months_to_save, Some(5));

        assert_eq!(assess(5000.0, 2500.0).savings_plan.months_to_save, Some(1));
        assert_eq!(assess(5000.0, 0.0).savings_plan.months_to_save, Some(0));
    }
}
