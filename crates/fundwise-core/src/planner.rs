//! Per-goal financial plan
//!
//! Combines an income growth target, savings strategies and a monthly
//! investment split for the contribution a goal requires.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::allocation::{AllocationPlan, InvestmentAllocator};
use crate::catalog::Catalog;
use crate::feasibility::GoalFeasibilityEvaluator;
use crate::models::{FinancialProfile, Goal};

/// Share of income assumed saveable before extra income is needed
const SAVEABLE_INCOME_SHARE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanSectionKind {
    IncomeGrowth,
    SideHustle,
    IncomeOptimization,
    WealthBuilding,
    ExpenseReduction,
    IncomeIncrease,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSection {
    #[serde(rename = "type")]
    pub kind: PlanSectionKind,
    pub title: String,
    pub description: String,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSummary {
    pub goal_id: String,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub target_amount: f64,
    pub timeline_years: i32,
    pub recommended_monthly_saving: f64,
    /// Required annual income growth in percent, when extra income is needed
    pub annual_growth_percent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialPlan {
    pub summary: PlanSummary,
    pub income_growth: Vec<PlanSection>,
    pub savings_strategies: Vec<PlanSection>,
    pub investment: AllocationPlan,
}

pub struct FinancialPlanner<'a> {
    catalog: &'a Catalog,
}

impl<'a> FinancialPlanner<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn plan(&self, profile: &FinancialProfile, goal: &Goal, as_of: NaiveDate) -> FinancialPlan {
        let income = profile.monthly_income();
        let expenses = profile.monthly_expenses();
        let assessment =
            GoalFeasibilityEvaluator::new(as_of).evaluate(goal, profile.net_savings());
        let recommended = assessment.required_monthly;
        let timeline_years = (goal.target_date.year() - as_of.year()).max(1);

        let (income_growth, annual_growth_percent) =
            self.income_growth(income, recommended, timeline_years);
        let savings_strategies = self.savings_strategies(income, expenses, recommended);
        let investment =
            InvestmentAllocator::new(self.catalog).allocate(profile.risk_tolerance, recommended);

        FinancialPlan {
            summary: PlanSummary {
                goal_id: goal.id.clone(),
                monthly_income: income,
                monthly_expenses: expenses,
                target_amount: goal.target_amount,
                timeline_years,
                recommended_monthly_saving: recommended,
                annual_growth_percent,
            },
            income_growth,
            savings_strategies,
            investment,
        }
    }

    fn income_growth(
        &self,
        income: f64,
        recommended: f64,
        timeline_years: i32,
    ) -> (Vec<PlanSection>, Option<f64>) {
        let strategies = &self.catalog.strategies;
        let monthly_deficit = recommended - income * SAVEABLE_INCOME_SHARE;

        if monthly_deficit <= 0.0 {
            let sections = vec![
                PlanSection {
                    kind: PlanSectionKind::IncomeOptimization,
                    title: "Income Optimization Opportunities".to_string(),
                    description: "Your current income provides good savings potential. Consider these strategies to maximize your financial growth:".to_string(),
                    steps: strategies.income_optimization.clone(),
                },
                PlanSection {
                    kind: PlanSectionKind::WealthBuilding,
                    title: "Long-term Wealth Building".to_string(),
                    description: "Strategies to grow your wealth over time:".to_string(),
                    steps: strategies.wealth_building.clone(),
                },
            ];
            return (sections, None);
        }

        let growth = required_growth_rate(income, recommended, timeline_years);
        let description = match growth {
            Some(pct) => format!("Aim for {:.1}% annual income growth through:", pct),
            None => "Build an income stream through:".to_string(),
        };

        let sections = vec![
            PlanSection {
                kind: PlanSectionKind::IncomeGrowth,
                title: "Income Growth Target".to_string(),
                description,
                steps: strategies.income_growth.clone(),
            },
            PlanSection {
                kind: PlanSectionKind::SideHustle,
                title: "Additional Income Streams".to_string(),
                description: "Explore these side income opportunities:".to_string(),
                steps: strategies.side_hustle.clone(),
            },
        ];
        (sections, growth)
    }

    fn savings_strategies(&self, income: f64, expenses: f64, recommended: f64) -> Vec<PlanSection> {
        if recommended - (income - expenses) <= 0.0 {
            return vec![];
        }
        let strategies = &self.catalog.strategies;
        vec![
            PlanSection {
                kind: PlanSectionKind::ExpenseReduction,
                title: "Expense Optimization".to_string(),
                description: "Trim recurring costs to free up savings:".to_string(),
                steps: strategies.expense_reduction.clone(),
            },
            PlanSection {
                kind: PlanSectionKind::IncomeIncrease,
                title: "Additional Income Sources".to_string(),
                description: "Add income to close the gap:".to_string(),
                steps: strategies.income_increase.clone(),
            },
        ]
    }
}

/// Annual growth (percent, one decimal) needed for half of income plus the
/// recommended saving to be covered within `years`
fn required_growth_rate(income: f64, recommended: f64, years: i32) -> Option<f64> {
    if income <= 0.0 || years <= 0 {
        return None;
    }
    let required_annual = (recommended + income * SAVEABLE_INCOME_SHARE) * 12.0;
    let current_annual = income * 12.0;
    let rate = (required_annual / current_annual).powf(1.0 / years as f64) - 1.0;
    Some((rate * 1000.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseItem, IncomeItem, RiskTolerance};

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn profile(income: f64, expenses: f64) -> FinancialProfile {
        FinancialProfile {
            income: vec![IncomeItem {
                name: "Salary".into(),
                amount: income,
            }],
            expenses: vec![ExpenseItem {
                name: "Living".into(),
                amount: expenses,
                category: "Other".into(),
            }],
            risk_tolerance: RiskTolerance::Conservative,
            goals: vec![],
        }
    }

    fn goal(target: f64, y: i32, m: u32) -> Goal {
        Goal {
            id: "house".into(),
            name: "House".into(),
            target_amount: target,
            current_amount: 0.0,
            target_date: NaiveDate::from_ymd_opt(y, m, 1).unwrap(),
        }
    }

    #[test]
    fn test_plan_needing_income_growth() {
        let catalog = Catalog::embedded().unwrap();
        // 24 months, 240000 -> 10000/month against 10000 income
        let plan = FinancialPlanner::new(&catalog).plan(
            &profile(10_000.0, 6_000.0),
            &goal(240_000.0, 2028, 10),
            as_of(),
        );

        assert_eq!(plan.summary.timeline_years, 2);
        assert_eq!(plan.summary.recommended_monthly_saving, 10_000.0);
        // sqrt(15000 / 10000) - 1 = 22.47%
        assert_eq!(plan.summary.annual_growth_percent, Some(22.5));
        assert_eq!(plan.income_growth[0].kind, PlanSectionKind::IncomeGrowth);
        assert_eq!(
            plan.income_growth[0].description,
            "Aim for 22.5% annual income growth through:"
        );
        assert_eq!(plan.savings_strategies.len(), 2);
        assert_eq!(plan.investment.principal, 10_000.0);
        assert_eq!(plan.investment.risk_tolerance, RiskTolerance::Conservative);
    }

    #[test]
    fn test_plan_within_means() {
        let catalog = Catalog::embedded().unwrap();
        let plan = FinancialPlanner::new(&catalog).plan(
            &profile(10_000.0, 2_000.0),
            &goal(12_000.0, 2027, 10),
            as_of(),
        );

        assert_eq!(plan.summary.recommended_monthly_saving, 1_000.0);
        assert_eq!(plan.summary.annual_growth_percent, None);
        assert_eq!(
            plan.income_growth[0].kind,
            PlanSectionKind::IncomeOptimization
        );
        assert!(plan.savings_strategies.is_empty());
    }

    #[test]
    fn test_growth_rate_without_income() {
        assert_eq!(required_growth_rate(0.0, 500.0, 3), None);
    }
}
