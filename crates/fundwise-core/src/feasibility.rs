//! Goal feasibility
//!
//! Per-goal timeline math: how much must be saved each month to hit the
//! target by its date, and whether current net savings cover it.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Goal;

/// Derived feasibility numbers for one goal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalAssessment {
    pub goal_id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub remaining_amount: f64,
    /// Months until the target date, never less than 1
    pub months_remaining: i64,
    pub required_monthly: f64,
    pub feasible: bool,
    /// How much more must be saved each month; 0 when feasible
    pub gap: f64,
    pub completed: bool,
    pub progress_percentage: f64,
}

/// Evaluates goals against a monthly net savings figure
#[derive(Debug, Clone, Copy)]
pub struct GoalFeasibilityEvaluator {
    as_of: NaiveDate,
}

impl GoalFeasibilityEvaluator {
    pub fn new(as_of: NaiveDate) -> Self {
        Self { as_of }
    }

    pub fn evaluate(&self, goal: &Goal, net_savings: f64) -> GoalAssessment {
        let months_remaining = goal.months_until_target(self.as_of).max(1);

        let (required_monthly, feasible, gap) = if goal.is_complete() {
            (0.0, true, 0.0)
        } else {
            let required = (goal.target_amount - goal.current_amount) / months_remaining as f64;
            let feasible = net_savings >= required;
            let gap = if feasible { 0.0 } else { required - net_savings };
            (required, feasible, gap)
        };

        tracing::debug!(
            goal = goal.id.as_str(),
            months_remaining,
            required_monthly,
            feasible,
            "Goal evaluated"
        );

        GoalAssessment {
            goal_id: goal.id.clone(),
            name: goal.name.clone(),
            target_amount: goal.target_amount,
            current_amount: goal.current_amount,
            remaining_amount: goal.remaining_amount(),
            months_remaining,
            required_monthly,
            feasible,
            gap,
            completed: goal.is_complete(),
            progress_percentage: goal.progress_percentage(),
        }
    }

    pub fn evaluate_all(&self, goals: &[Goal], net_savings: f64) -> Vec<GoalAssessment> {
        goals
            .iter()
            .map(|goal| self.evaluate(goal, net_savings))
            .collect()
    }
}
