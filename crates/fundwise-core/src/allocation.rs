//! Investment allocation
//!
//! Splits a principal across the asset buckets of a risk tier and projects
//! growth for a regular monthly investment.

use serde::Serialize;

use crate::catalog::{AllocationTier, Catalog, ReturnRange, SuggestedFund};
use crate::models::RiskTolerance;

/// One bucket of an allocation plan with its share of the principal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Allocation {
    #[serde(rename = "type")]
    pub asset_type: String,
    pub percentage: u32,
    pub description: String,
    pub expected_return: ReturnRange,
    pub risk: String,
    pub suggested_amount: f64,
}

/// A principal apportioned across a risk tier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationPlan {
    pub risk_tolerance: RiskTolerance,
    pub principal: f64,
    pub allocation: Vec<Allocation>,
    pub suggested_funds: Vec<SuggestedFund>,
    pub expected_returns: ReturnRange,
    pub rebalancing_frequency: String,
    pub minimum_investment_period: String,
}

/// Projected value of one bucket over the horizon
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedReturn {
    #[serde(rename = "type")]
    pub asset_type: String,
    pub monthly_amount: f64,
    pub yearly_amount: f64,
    /// Midpoint of the bucket's expected return range, in percent
    pub average_return: f64,
    pub projected_value: f64,
    pub risk: String,
    pub expected_return: ReturnRange,
}

/// Growth projection for a monthly investment.
///
/// Projected values apply the average return once to the total contributed
/// (`monthly × 12 × years × (1 + r)`); returns are not compounded year over
/// year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthProjection {
    pub plan: AllocationPlan,
    pub projected_returns: Vec<ProjectedReturn>,
    pub total_projected_value: f64,
    pub investment_horizon: f64,
    pub monthly_investment: f64,
    pub yearly_investment: f64,
}

/// Maps risk tiers from the catalog to concrete amounts
pub struct InvestmentAllocator<'a> {
    catalog: &'a Catalog,
}

impl<'a> InvestmentAllocator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn tier(&self, risk: RiskTolerance) -> &'a AllocationTier {
        self.catalog.tier(risk)
    }

    /// Apportion `principal` across the tier for `risk`
    pub fn allocate(&self, risk: RiskTolerance, principal: f64) -> AllocationPlan {
        let tier = self.tier(risk);
        let allocation = tier
            .buckets
            .iter()
            .map(|bucket| Allocation {
                asset_type: bucket.asset_type.clone(),
                percentage: bucket.percentage,
                description: bucket.description.clone(),
                expected_return: bucket.expected_return,
                risk: bucket.risk.clone(),
                suggested_amount: principal * bucket.percentage as f64 / 100.0,
            })
            .collect();

        AllocationPlan {
            risk_tolerance: risk,
            principal,
            allocation,
            suggested_funds: tier.funds.clone(),
            expected_returns: tier.expected_returns,
            rebalancing_frequency: tier.rebalancing_frequency.clone(),
            minimum_investment_period: tier.minimum_investment_period.clone(),
        }
    }

    /// Project a monthly investment over `horizon_years`
    pub fn project(
        &self,
        risk: RiskTolerance,
        monthly_investment: f64,
        horizon_years: f64,
    ) -> GrowthProjection {
        let yearly_investment = monthly_investment * 12.0;
        let plan = self.allocate(risk, yearly_investment);

        let projected_returns: Vec<ProjectedReturn> = self
            .tier(risk)
            .buckets
            .iter()
            .map(|bucket| {
                let average_return = bucket.expected_return.midpoint();
                let monthly_amount = monthly_investment * bucket.percentage as f64 / 100.0;
                ProjectedReturn {
                    asset_type: bucket.asset_type.clone(),
                    monthly_amount,
                    yearly_amount: monthly_amount * 12.0,
                    average_return,
                    projected_value: monthly_amount
                        * 12.0
                        * horizon_years
                        * (1.0 + average_return / 100.0),
                    risk: bucket.risk.clone(),
                    expected_return: bucket.expected_return,
                }
            })
            .collect();

        let total_projected_value = projected_returns.iter().map(|p| p.projected_value).sum();

        GrowthProjection {
            plan,
            projected_returns,
            total_projected_value,
            investment_horizon: horizon_years,
            monthly_investment,
            yearly_investment,
        }
    }
}
