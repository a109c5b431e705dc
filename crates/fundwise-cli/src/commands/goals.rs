//! Goal evaluation and planning commands

use anyhow::Result;
use chrono::NaiveDate;
use fundwise_core::allocation::AllocationPlan;
use fundwise_core::catalog::Catalog;
use fundwise_core::format::format_money;
use fundwise_core::{FinancialProfile, GoalStatus, PlanningEngine, Suggestion};

use super::print_json;

pub fn cmd_goals(
    catalog: &Catalog,
    profile: &FinancialProfile,
    as_of: NaiveDate,
    json: bool,
) -> Result<()> {
    let report = PlanningEngine::new(catalog).evaluate(profile, as_of);
    if json {
        return print_json(&report);
    }

    let currency = catalog.currency_symbol.as_str();
    let money = |v: f64| format_money(currency, v);

    println!();
    println!("🎯 Goals (as of {})", as_of);
    println!(
        "   Net savings: {}/month",
        money(report.budget.net_savings)
    );
    println!("   ─────────────────────────────────────────────");

    if report.goals.is_empty() {
        println!("   No goals in this profile.");
        return Ok(());
    }

    for rec in &report.goals {
        let a = &rec.assessment;
        let icon = match rec.status {
            GoalStatus::Completed => "🏁",
            GoalStatus::OnTrack => "✅",
            GoalStatus::NeedsAction => "⚠️ ",
        };

        println!();
        println!("{} {} [{}]", icon, a.name, a.goal_id);
        println!(
            "   {} of {} saved ({:.0}%)",
            money(a.current_amount),
            money(a.target_amount),
            a.progress_percentage
        );
        if !a.completed {
            println!(
                "   Needs {}/month over {} month{}",
                money(a.required_monthly),
                a.months_remaining,
                if a.months_remaining == 1 { "" } else { "s" }
            );
        }
        println!("   {}", rec.message);

        if let Some(pct) = rec.income_increase_percent {
            println!("   Income would need to rise by {:.1}%", pct);
        }

        for suggestion in &rec.suggestions {
            print_suggestion(currency, suggestion);
        }
    }

    let off_track = report.off_track().count();
    if off_track > 0 {
        println!();
        println!(
            "💡 {} goal{} need{} attention. Run 'fundwise plan --goal <ID>' for a plan.",
            off_track,
            if off_track == 1 { "" } else { "s" },
            if off_track == 1 { "s" } else { "" }
        );
    }

    Ok(())
}

fn print_suggestion(currency: &str, suggestion: &Suggestion) {
    println!();
    println!("   ▸ {}", suggestion.title());
    match suggestion {
        Suggestion::Income { options, .. } => {
            if options.is_empty() {
                println!("     No side hustle in the catalog covers this gap.");
            }
            for hustle in options {
                println!(
                    "     • {} ({}) - {}",
                    hustle.title,
                    hustle.income.label(currency),
                    hustle.platforms.join(", ")
                );
            }
        }
        Suggestion::Budgeting { options, .. } => {
            for tool in options {
                println!(
                    "     • {} ★{:.1} - {} ({})",
                    tool.name,
                    tool.rating,
                    tool.best_for,
                    tool.cost.label(currency)
                );
            }
        }
        Suggestion::Skills { options, .. } => {
            for course in options {
                println!(
                    "     • {} - {} ({}, {})",
                    course.platform,
                    course.focus,
                    course.cost.label(currency),
                    course.duration
                );
            }
        }
        Suggestion::Investment { options, .. } => print_allocation(currency, options, "     "),
    }
}

/// Print an allocation plan's buckets with their amounts
pub fn print_allocation(currency: &str, plan: &AllocationPlan, indent: &str) {
    println!(
        "{}{} tier, expected {} a year, rebalance {}",
        indent,
        plan.risk_tolerance,
        plan.expected_returns.label(),
        plan.rebalancing_frequency.to_lowercase()
    );
    for bucket in &plan.allocation {
        println!(
            "{}• {:3}% {:22} {:>12}  ({}, {} risk)",
            indent,
            bucket.percentage,
            bucket.asset_type,
            format_money(currency, bucket.suggested_amount),
            bucket.expected_return.label(),
            bucket.risk.to_lowercase()
        );
    }
}

pub fn cmd_plan(
    catalog: &Catalog,
    profile: &FinancialProfile,
    goal_id: &str,
    as_of: NaiveDate,
    json: bool,
) -> Result<()> {
    let plan = PlanningEngine::new(catalog).plan(profile, goal_id, as_of)?;
    if json {
        return print_json(&plan);
    }

    let currency = catalog.currency_symbol.as_str();
    let money = |v: f64| format_money(currency, v);
    let s = &plan.summary;

    println!();
    println!("🗺️  Financial Plan: {}", s.goal_id);
    println!("   ─────────────────────────────────────────────");
    println!("   Target:             {}", money(s.target_amount));
    println!(
        "   Timeline:           {} year{}",
        s.timeline_years,
        if s.timeline_years == 1 { "" } else { "s" }
    );
    println!("   Monthly income:     {}", money(s.monthly_income));
    println!("   Monthly expenses:   {}", money(s.monthly_expenses));
    println!(
        "   Save each month:    {}",
        money(s.recommended_monthly_saving)
    );

    for section in plan.income_growth.iter().chain(&plan.savings_strategies) {
        println!();
        println!("📌 {}", section.title);
        println!("   {}", section.description);
        for step in &section.steps {
            println!("   • {}", step);
        }
    }

    println!();
    println!("📈 Monthly Investment");
    print_allocation(currency, &plan.investment, "   ");

    Ok(())
}
