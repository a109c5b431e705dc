//! Planning engine - wires the components together over one profile snapshot

use chrono::NaiveDate;
use serde::Serialize;

use crate::affordability::{AffordabilityAdvisor, AffordabilityVerdict};
use crate::allocation::{GrowthProjection, InvestmentAllocator};
use crate::budget::{BudgetAggregator, BudgetConfig, BudgetSummary};
use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::feasibility::GoalFeasibilityEvaluator;
use crate::health::{HealthReport, HealthScorer, LearningProgress};
use crate::ingest::{validate_amount, validate_price};
use crate::models::{FinancialProfile, RiskTolerance};
use crate::planner::{FinancialPlan, FinancialPlanner};
use crate::recommend::{GoalRecommendation, GoalStatus, RecommendationAssembler};

/// Budget summary plus one recommendation per goal, in profile order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineReport {
    pub as_of: NaiveDate,
    pub budget: BudgetSummary,
    pub goals: Vec<GoalRecommendation>,
}

impl EngineReport {
    /// Goals that need action
    pub fn off_track(&self) -> impl Iterator<Item = &GoalRecommendation> {
        self.goals
            .iter()
            .filter(|g| g.status == GoalStatus::NeedsAction)
    }
}

/// Entry point for callers holding a validated [`FinancialProfile`]
pub struct PlanningEngine<'a> {
    catalog: &'a Catalog,
    aggregator: BudgetAggregator,
}

impl<'a> PlanningEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            aggregator: BudgetAggregator::new(),
        }
    }

    /// Use custom budget thresholds
    pub fn with_budget_config(mut self, config: BudgetConfig) -> Self {
        self.aggregator = BudgetAggregator::with_config(config);
        self
    }

    pub fn summarize(&self, profile: &FinancialProfile) -> BudgetSummary {
        self.aggregator.summarize_profile(profile)
    }

    /// Evaluate every goal and attach recommendations
    pub fn evaluate_goals(
        &self,
        profile: &FinancialProfile,
        as_of: NaiveDate,
    ) -> Vec<GoalRecommendation> {
        let evaluator = GoalFeasibilityEvaluator::new(as_of);
        let assembler = RecommendationAssembler::new(self.catalog);
        let income = profile.monthly_income();

        evaluator
            .evaluate_all(&profile.goals, profile.net_savings())
            .into_iter()
            .map(|assessment| assembler.assemble(assessment, income, profile.risk_tolerance))
            .collect()
    }

    /// Full evaluation: budget summary and per-goal recommendations
    pub fn evaluate(&self, profile: &FinancialProfile, as_of: NaiveDate) -> EngineReport {
        let budget = self.summarize(profile);
        let goals = self.evaluate_goals(profile, as_of);

        let report = EngineReport {
            as_of,
            budget,
            goals,
        };

        tracing::info!(
            as_of = %as_of,
            goals = report.goals.len(),
            off_track = report.off_track().count(),
            net_savings = report.budget.net_savings,
            "Profile evaluated"
        );

        report
    }

    /// Check whether a one-off purchase fits the budget
    pub fn affordability(
        &self,
        profile: &FinancialProfile,
        item_name: Option<&str>,
        price: f64,
    ) -> Result<AffordabilityVerdict> {
        let price = validate_price(price)?;
        let summary = self.summarize(profile);
        let verdict = AffordabilityAdvisor::new().assess(&summary, item_name, price);

        tracing::info!(
            price,
            tier = ?verdict.tier,
            affordable = verdict.affordable,
            "Affordability assessed"
        );

        Ok(verdict)
    }

    /// Project a monthly investment under a risk tier
    pub fn project(
        &self,
        risk: RiskTolerance,
        monthly_investment: f64,
        horizon_years: f64,
    ) -> Result<GrowthProjection> {
        let monthly_investment = validate_amount("monthly investment", monthly_investment)?;
        if !horizon_years.is_finite() || horizon_years <= 0.0 {
            return Err(Error::InvalidData(format!(
                "investment horizon must be a positive number of years (got {})",
                horizon_years
            )));
        }

        let projection =
            InvestmentAllocator::new(self.catalog).project(risk, monthly_investment, horizon_years);

        tracing::debug!(
            risk = risk.as_str(),
            monthly_investment,
            horizon_years,
            total = projection.total_projected_value,
            "Growth projected"
        );

        Ok(projection)
    }

    /// Build a financial plan for one goal
    pub fn plan(
        &self,
        profile: &FinancialProfile,
        goal_id: &str,
        as_of: NaiveDate,
    ) -> Result<FinancialPlan> {
        let goal = profile
            .goal(goal_id)
            .ok_or_else(|| Error::NotFound(format!("goal '{}'", goal_id)))?;

        let plan = FinancialPlanner::new(self.catalog).plan(profile, goal, as_of);

        tracing::info!(
            goal = goal_id,
            recommended = plan.summary.recommended_monthly_saving,
            "Financial plan built"
        );

        Ok(plan)
    }

    /// Score overall financial health
    pub fn health(
        &self,
        profile: &FinancialProfile,
        as_of: NaiveDate,
        learning: Option<LearningProgress>,
    ) -> HealthReport {
        let summary = self.summarize(profile);
        let goals = GoalFeasibilityEvaluator::new(as_of)
            .evaluate_all(&profile.goals, summary.net_savings);
        let report = HealthScorer::new().score(&summary, &goals, learning);

        tracing::info!(score = report.score, "Health score computed");

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{as_of, scenario_a, scenario_b, ProfileBuilder};

    #[test]
    fn test_scenario_a_on_track() {
        let catalog = Catalog::embedded().unwrap();
        let report = PlanningEngine::new(&catalog).evaluate(&scenario_a(), as_of());

        assert_eq!(report.budget.net_savings, 25_000.0);
        let goal = &report.goals[0];
        assert_eq!(goal.assessment.required_monthly, 6250.0);
        assert!(goal.assessment.feasible);
        assert_eq!(goal.assessment.gap, 0.0);
        assert_eq!(goal.status, GoalStatus::OnTrack);
        assert_eq!(report.off_track().count(), 0);
    }

    #[test]
    fn test_scenario_b_needs_action() {
        let catalog = Catalog::embedded().unwrap();
        let report = PlanningEngine::new(&catalog).evaluate(&scenario_b(), as_of());

        let goal = &report.goals[0];
        assert!(!goal.assessment.feasible);
        assert_eq!(goal.assessment.gap, 5250.0);
        assert_eq!(goal.status, GoalStatus::NeedsAction);
        assert_eq!(report.off_track().count(), 1);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let catalog = Catalog::embedded().unwrap();
        let engine = PlanningEngine::new(&catalog);
        let profile = scenario_b();

        let first = serde_json::to_string(&engine.evaluate(&profile, as_of())).unwrap();
        let second = serde_json::to_string(&engine.evaluate(&profile, as_of())).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_affordability_rejects_bad_price() {
        let catalog = Catalog::embedded().unwrap();
        let engine = PlanningEngine::new(&catalog);
        let profile = scenario_a();

        assert!(matches!(
            engine.affordability(&profile, None, -5.0),
            Err(Error::Validation(_))
        ));
        assert!(engine.affordability(&profile, None, f64::NAN).is_err());

        let verdict = engine.affordability(&profile, Some("Laptop"), 2000.0).unwrap();
        assert!(verdict.affordable);
        assert_eq!(verdict.discretionary_income, 25_000.0);
    }

    #[test]
    fn test_project_validates_inputs() {
        let catalog = Catalog::embedded().unwrap();
        let engine = PlanningEngine::new(&catalog);

        assert!(engine.project(RiskTolerance::Moderate, -1.0, 5.0).is_err());
        assert!(matches!(
            engine.project(RiskTolerance::Moderate, 1000.0, 0.0),
            Err(Error::InvalidData(_))
        ));
        let projection = engine.project(RiskTolerance::Moderate, 1000.0, 5.0).unwrap();
        assert_eq!(projection.yearly_investment, 12_000.0);
    }

    #[test]
    fn test_plan_unknown_goal() {
        let catalog = Catalog::embedded().unwrap();
        let engine = PlanningEngine::new(&catalog);
        assert!(matches!(
            engine.plan(&scenario_a(), "missing", as_of()),
            Err(Error::NotFound(_))
        ));
        assert!(engine.plan(&scenario_a(), "car", as_of()).is_ok());
    }

    #[test]
    fn test_engine_uses_custom_budget_config() {
        let catalog = Catalog::embedded().unwrap();
        let profile = ProfileBuilder::new()
            .income("Salary", 10_000.0)
            .expense("Rent", 450.0, "Housing")
            .expense("Groceries", 350.0, "Food")
            .expense("Metro", 200.0, "Transportation")
            .build();

        let default = PlanningEngine::new(&catalog).summarize(&profile);
        assert!(default.concentration.is_none());

        let strict = PlanningEngine::new(&catalog)
            .with_budget_config(BudgetConfig {
                concentration_threshold: 0.4,
                ..Default::default()
            })
            .evaluate(&profile, as_of());
        assert_eq!(strict.budget.concentration.unwrap().category, "Housing");
    }

    #[test]
    fn test_health_without_goals() {
        let catalog = Catalog::embedded().unwrap();
        let profile = ProfileBuilder::new()
            .income("Salary", 10_000.0)
            .expense("Rent", 3_000.0, "Housing")
            .build();
        let report = PlanningEngine::new(&catalog).health(&profile, as_of(), None);

        assert_eq!(report.breakdown.goals, 0.0);
        assert_eq!(report.breakdown.budget_balance, 30.0);
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("savings goals")));
    }
}
