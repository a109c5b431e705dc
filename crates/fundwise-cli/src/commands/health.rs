//! Health score command

use anyhow::Result;
use chrono::NaiveDate;
use fundwise_core::catalog::Catalog;
use fundwise_core::{FinancialProfile, LearningProgress, PlanningEngine};

use super::print_json;

/// Learning progress is only scored when at least one counter is given
pub fn learning_progress(lessons: Option<u32>, quizzes: Option<u32>) -> Option<LearningProgress> {
    if lessons.is_none() && quizzes.is_none() {
        return None;
    }
    Some(LearningProgress {
        lessons_completed: lessons.unwrap_or(0),
        quizzes_taken: quizzes.unwrap_or(0),
    })
}

pub fn cmd_health(
    catalog: &Catalog,
    profile: &FinancialProfile,
    as_of: NaiveDate,
    lessons: Option<u32>,
    quizzes: Option<u32>,
    json: bool,
) -> Result<()> {
    let report =
        PlanningEngine::new(catalog).health(profile, as_of, learning_progress(lessons, quizzes));
    if json {
        return print_json(&report);
    }

    let b = &report.breakdown;

    println!();
    println!("🩺 Financial Health: {}/100", report.score);
    println!("   ─────────────────────────────");
    println!("   Budget balance:       {:>5.1} / 30", b.budget_balance);
    println!("   Goals:                {:>5.1} / 25", b.goals);
    println!("   Expense diversity:    {:>5.1} / 15", b.expense_diversity);
    println!("   Investment knowledge: {:>5.1} / 30", b.investment_knowledge);
    println!();
    for rec in &report.recommendations {
        println!("💡 {}", rec);
    }

    Ok(())
}
