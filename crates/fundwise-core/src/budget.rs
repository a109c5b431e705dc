//! Budget aggregation
//!
//! Totals a profile's income and expenses and derives the health metrics a
//! dashboard shows: savings rate, per-category breakdown, a concentration
//! warning and benchmark-based improvement suggestions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{ExpenseItem, FinancialProfile, IncomeItem};

/// Recommended maximum share of income for a spending category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBenchmark {
    pub category: String,
    /// Fraction of total income, e.g. 0.33
    pub max_share: f64,
}

impl CategoryBenchmark {
    fn new(category: &str, max_share: f64) -> Self {
        Self {
            category: category.to_string(),
            max_share,
        }
    }
}

/// Aggregation thresholds
#[derive(Debug, Clone)]
pub struct BudgetConfig {
    /// Share of total expenses above which a single category is flagged
    pub concentration_threshold: f64,
    /// Savings rate below which a warning insight is emitted
    pub low_savings_rate: f64,
    /// Savings rate at or above which a success insight is emitted
    pub strong_savings_rate: f64,
    /// Per-category spending benchmarks (share of income)
    pub benchmarks: Vec<CategoryBenchmark>,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            concentration_threshold: 0.50,
            low_savings_rate: 0.10,
            strong_savings_rate: 0.20,
            benchmarks: vec![
                CategoryBenchmark::new("Housing", 0.33),
                CategoryBenchmark::new("Food", 0.15),
                CategoryBenchmark::new("Entertainment", 0.10),
                CategoryBenchmark::new("Transportation", 0.15),
            ],
        }
    }
}

/// Spending in one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpend {
    pub category: String,
    pub amount: f64,
    /// Share of total expenses, 0-100
    pub percentage: f64,
}

/// Raised when one category dominates total expenses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConcentrationWarning {
    pub category: String,
    /// Share of total expenses, 0-100
    pub percentage: f64,
    pub message: String,
}

/// A category spending more than its benchmark share of income
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetImprovement {
    pub category: String,
    /// Actual share of income, 0-100
    pub actual_percentage: f64,
    /// Benchmark share of income, 0-100
    pub recommended_percentage: f64,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetInsightKind {
    Warning,
    Success,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetInsight {
    pub kind: BudgetInsightKind,
    pub message: String,
}

/// Aggregated view of a month's budget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_savings: f64,
    /// net_savings / total_income, 0 when there is no income
    pub savings_rate: f64,
    /// Categories sorted by amount, largest first
    pub breakdown: Vec<CategorySpend>,
    pub concentration: Option<ConcentrationWarning>,
    pub improvements: Vec<BudgetImprovement>,
    pub insights: Vec<BudgetInsight>,
}

impl BudgetSummary {
    /// Income left after expenses
    pub fn discretionary_income(&self) -> f64 {
        self.net_savings
    }
}

/// Computes [`BudgetSummary`] records
pub struct BudgetAggregator {
    config: BudgetConfig,
}

impl Default for BudgetAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl BudgetAggregator {
    pub fn new() -> Self {
        Self::with_config(BudgetConfig::default())
    }

    pub fn with_config(config: BudgetConfig) -> Self {
        Self { config }
    }

    pub fn summarize_profile(&self, profile: &FinancialProfile) -> BudgetSummary {
        self.summarize(&profile.income, &profile.expenses)
    }

    pub fn summarize(&self, income: &[IncomeItem], expenses: &[ExpenseItem]) -> BudgetSummary {
        let total_income: f64 = income.iter().map(|i| i.amount).sum();
        let total_expenses: f64 = expenses.iter().map(|e| e.amount).sum();
        let net_savings = total_income - total_expenses;
        let savings_rate = if total_income > 0.0 {
            net_savings / total_income
        } else {
            0.0
        };

        let breakdown = category_breakdown(expenses, total_expenses);
        let concentration = self.concentration(&breakdown);
        let improvements = self.improvements(&breakdown, total_income);
        let insights = self.insights(savings_rate);

        BudgetSummary {
            total_income,
            total_expenses,
            net_savings,
            savings_rate,
            breakdown,
            concentration,
            improvements,
            insights,
        }
    }

    fn concentration(&self, breakdown: &[CategorySpend]) -> Option<ConcentrationWarning> {
        let top = breakdown.first()?;
        if top.percentage / 100.0 <= self.config.concentration_threshold {
            return None;
        }
        Some(ConcentrationWarning {
            category: top.category.clone(),
            percentage: top.percentage,
            message: format!(
                "{} accounts for over {}% of your expenses. Consider if this aligns with your priorities.",
                top.category,
                top.percentage.round()
            ),
        })
    }

    fn improvements(&self, breakdown: &[CategorySpend], total_income: f64) -> Vec<BudgetImprovement> {
        if total_income <= 0.0 {
            return vec![];
        }

        breakdown
            .iter()
            .filter_map(|spend| {
                let benchmark = self
                    .config
                    .benchmarks
                    .iter()
                    .find(|b| b.category.eq_ignore_ascii_case(&spend.category))?;
                let share = spend.amount / total_income;
                if share <= benchmark.max_share {
                    return None;
                }
                let actual = (share * 100.0).round();
                let recommended = (benchmark.max_share * 100.0).round();
                Some(BudgetImprovement {
                    category: spend.category.clone(),
                    actual_percentage: actual,
                    recommended_percentage: recommended,
                    message: format!(
                        "Your {} expenses are {}% of your income, which is higher than the recommended {}%.",
                        spend.category, actual, recommended
                    ),
                })
            })
            .collect()
    }

    fn insights(&self, savings_rate: f64) -> Vec<BudgetInsight> {
        if savings_rate < self.config.low_savings_rate {
            vec![BudgetInsight {
                kind: BudgetInsightKind::Warning,
                message: format!(
                    "Your savings rate is below {}%. Consider reducing expenses to save more.",
                    (self.config.low_savings_rate * 100.0).round()
                ),
            }]
        } else if savings_rate >= self.config.strong_savings_rate {
            vec![BudgetInsight {
                kind: BudgetInsightKind::Success,
                message: format!(
                    "Great job! You're saving more than {}% of your income.",
                    (self.config.strong_savings_rate * 100.0).round()
                ),
            }]
        } else {
            vec![]
        }
    }
}

/// Sum expenses by category, largest first (ties by name)
fn category_breakdown(expenses: &[ExpenseItem], total_expenses: f64) -> Vec<CategorySpend> {
    let mut by_category: HashMap<&str, f64> = HashMap::new();
    for expense in expenses {
        *by_category.entry(expense.category.as_str()).or_insert(0.0) += expense.amount;
    }

    let mut breakdown: Vec<CategorySpend> = by_category
        .into_iter()
        .map(|(category, amount)| CategorySpend {
            category: category.to_string(),
            amount,
            percentage: if total_expenses > 0.0 {
                amount / total_expenses * 100.0
            } else {
                0.0
            },
        })
        .collect();

    breakdown.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });
    breakdown
}
