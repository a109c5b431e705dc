//! Financial health score
//!
//! A 0-100 score built from four parts:
//! - Budget balance (30): how much of income is saved
//! - Goals (25): having active goals and completing them
//! - Expense diversity (15): number of tracked spending categories
//! - Investment knowledge (30): lessons and quizzes completed

use serde::{Deserialize, Serialize};

use crate::budget::BudgetSummary;
use crate::feasibility::GoalAssessment;

/// Investment education progress tracked outside the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LearningProgress {
    pub lessons_completed: u32,
    pub quizzes_taken: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub budget_balance: f64,
    pub goals: f64,
    pub expense_diversity: f64,
    pub investment_knowledge: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub score: u32,
    pub breakdown: ScoreBreakdown,
    pub recommendations: Vec<String>,
}

const TARGET_SAVINGS_RATE: f64 = 0.2;
const DIVERSE_CATEGORY_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, Default)]
pub struct HealthScorer;

impl HealthScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(
        &self,
        summary: &BudgetSummary,
        goals: &[GoalAssessment],
        learning: Option<LearningProgress>,
    ) -> HealthReport {
        let mut recommendations = Vec::new();

        let rate = summary.savings_rate;
        let budget_balance = if rate >= TARGET_SAVINGS_RATE {
            30.0
        } else if rate > 0.0 {
            15.0 + (rate / TARGET_SAVINGS_RATE) * 15.0
        } else {
            recommendations.push(
                "Your expenses exceed your income. Try to reduce expenses or increase income."
                    .to_string(),
            );
            0.0
        };

        let goal_points = if goals.is_empty() {
            recommendations.push("Set up savings goals to improve your financial health.".to_string());
            0.0
        } else {
            let mut points = 0.0;
            if goals.iter().any(|g| !g.completed) {
                points += 15.0;
            }
            if goals.iter().any(|g| g.completed) {
                points += 10.0;
            }
            points
        };

        let categories = summary.breakdown.len();
        let expense_diversity = if categories >= DIVERSE_CATEGORY_COUNT {
            15.0
        } else {
            categories as f64 * 3.0
        };

        let investment_knowledge = match learning {
            Some(progress) => {
                let lessons = (progress.lessons_completed.saturating_mul(5)).min(15);
                let quizzes = (progress.quizzes_taken.saturating_mul(5)).min(15);
                (lessons + quizzes) as f64
            }
            None => {
                recommendations
                    .push("Learn about investing to boost your financial literacy.".to_string());
                0.0
            }
        };

        let total = budget_balance + goal_points + expense_diversity + investment_knowledge;
        let score = total.round_ties_even().clamp(0.0, 100.0) as u32;

        if recommendations.is_empty() {
            let advice = if score < 30 {
                "Focus on building an emergency fund and tracking expenses."
            } else if score < 60 {
                "Consider paying down high-interest debt and increasing your savings rate."
            } else if score < 90 {
                "Look into diversifying your investments and optimizing your budget."
            } else {
                "Great job! Consider increasing retirement contributions or exploring advanced investment strategies."
            };
            recommendations.push(advice.to_string());
        }

        HealthReport {
            score,
            breakdown: ScoreBreakdown {
                budget_balance,
                goals: goal_points,
                expense_diversity,
                investment_knowledge,
            },
            recommendations,
        }
    }
}
