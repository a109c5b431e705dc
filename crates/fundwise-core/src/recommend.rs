//! Recommendation assembly
//!
//! When a goal is off-track, matches its monthly gap against the catalog:
//! side hustles that could close it, budgeting tools, job-supported skill
//! courses, and an investment split for the remaining amount.

use serde::Serialize;

use crate::allocation::{AllocationPlan, InvestmentAllocator};
use crate::catalog::{BudgetingTool, Catalog, SideHustle, SkillResource};
use crate::feasibility::GoalAssessment;
use crate::format::format_money;
use crate::models::RiskTolerance;

/// Working hours per month assumed when scaling a side hustle's rate
pub const MONTHLY_WORK_HOURS: f64 = 160.0;

const MAX_SIDE_HUSTLES: usize = 3;
const MAX_SKILL_RESOURCES: usize = 3;

/// A group of suggestions of one kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Suggestion {
    Income {
        title: String,
        options: Vec<SideHustle>,
    },
    Budgeting {
        title: String,
        options: Vec<BudgetingTool>,
    },
    Skills {
        title: String,
        options: Vec<SkillResource>,
    },
    Investment {
        title: String,
        options: AllocationPlan,
    },
}

impl Suggestion {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Income { .. } => "income",
            Self::Budgeting { .. } => "budgeting",
            Self::Skills { .. } => "skills",
            Self::Investment { .. } => "investment",
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Income { title, .. }
            | Self::Budgeting { title, .. }
            | Self::Skills { title, .. }
            | Self::Investment { title, .. } => title.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Target already reached
    Completed,
    /// Current net savings cover the required contribution
    OnTrack,
    /// Savings fall short; suggestions are attached
    NeedsAction,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::OnTrack => "on_track",
            Self::NeedsAction => "needs_action",
        }
    }
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Feasibility plus what to do about it, for one goal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalRecommendation {
    #[serde(flatten)]
    pub assessment: GoalAssessment,
    pub status: GoalStatus,
    pub message: String,
    /// Gap as a share of monthly income, in percent (None without income)
    pub income_increase_percent: Option<f64>,
    pub suggestions: Vec<Suggestion>,
}

/// Builds [`GoalRecommendation`] records from catalog data
pub struct RecommendationAssembler<'a> {
    catalog: &'a Catalog,
}

impl<'a> RecommendationAssembler<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Side hustles whose monthly potential covers `gap`, best paid first
    pub fn side_hustles(&self, gap: f64) -> Vec<SideHustle> {
        let mut matches: Vec<&SideHustle> = self
            .catalog
            .side_hustles
            .iter()
            .filter(|h| h.estimated_income() * MONTHLY_WORK_HOURS >= gap)
            .collect();
        matches.sort_by(|a, b| {
            b.estimated_income()
                .partial_cmp(&a.estimated_income())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        matches
            .into_iter()
            .take(MAX_SIDE_HUSTLES)
            .cloned()
            .collect()
    }

    /// Tools with expense tracking or budgeting features, highest rated first
    pub fn budgeting_tools(&self) -> Vec<BudgetingTool> {
        let mut matches: Vec<&BudgetingTool> = self
            .catalog
            .budgeting_tools
            .iter()
            .filter(|tool| {
                tool.features.iter().any(|f| {
                    let f = f.to_lowercase();
                    f.contains("expense") || f.contains("budget")
                })
            })
            .collect();
        matches.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        matches.into_iter().cloned().collect()
    }

    /// Job-supported courses, cheapest first
    pub fn skill_resources(&self) -> Vec<SkillResource> {
        let mut matches: Vec<&SkillResource> = self
            .catalog
            .skill_resources
            .iter()
            .filter(|s| s.job_support)
            .collect();
        matches.sort_by(|a, b| {
            a.min_cost()
                .partial_cmp(&b.min_cost())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        matches
            .into_iter()
            .take(MAX_SKILL_RESOURCES)
            .cloned()
            .collect()
    }

    /// Attach suggestions to an assessment.
    ///
    /// Feasible goals get a positive record and no catalog lookups.
    pub fn assemble(
        &self,
        assessment: GoalAssessment,
        monthly_income: f64,
        risk: RiskTolerance,
    ) -> GoalRecommendation {
        let currency = self.catalog.currency_symbol.as_str();

        if assessment.feasible {
            let (status, message) = if assessment.completed {
                (
                    GoalStatus::Completed,
                    format!("You've reached your {} goal.", assessment.name),
                )
            } else {
                (
                    GoalStatus::OnTrack,
                    format!(
                        "You're on track: saving {}/month over {} months reaches your {} goal.",
                        format_money(currency, assessment.required_monthly),
                        assessment.months_remaining,
                        assessment.name
                    ),
                )
            };
            return GoalRecommendation {
                assessment,
                status,
                message,
                income_increase_percent: None,
                suggestions: vec![],
            };
        }

        let gap = assessment.gap;
        let income_increase_percent = if monthly_income > 0.0 {
            Some(gap / monthly_income * 100.0)
        } else {
            None
        };

        let allocator = InvestmentAllocator::new(self.catalog);
        let suggestions = vec![
            Suggestion::Income {
                title: format!("Increase Income (Need {}/month)", format_money(currency, gap)),
                options: self.side_hustles(gap),
            },
            Suggestion::Budgeting {
                title: "Optimize Your Budget".to_string(),
                options: self.budgeting_tools(),
            },
            Suggestion::Skills {
                title: "Invest in Your Skills".to_string(),
                options: self.skill_resources(),
            },
            Suggestion::Investment {
                title: "Optimize Your Investments".to_string(),
                options: allocator.allocate(risk, assessment.remaining_amount),
            },
        ];

        let message = format!(
            "Your {} goal needs {}/month but you're saving {}/month less than that.",
            assessment.name,
            format_money(currency, assessment.required_monthly),
            format_money(currency, gap)
        );

        GoalRecommendation {
            assessment,
            status: GoalStatus::NeedsAction,
            message,
            income_increase_percent,
            suggestions,
        }
    }
}
