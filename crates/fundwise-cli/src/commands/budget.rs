//! Budget summary and affordability commands

use anyhow::Result;
use fundwise_core::budget::BudgetInsightKind;
use fundwise_core::catalog::Catalog;
use fundwise_core::format::format_money;
use fundwise_core::{FinancialProfile, PlanningEngine};

use super::{print_json, truncate};

pub fn cmd_summary(catalog: &Catalog, profile: &FinancialProfile, json: bool) -> Result<()> {
    let summary = PlanningEngine::new(catalog).summarize(profile);
    if json {
        return print_json(&summary);
    }

    let money = |v: f64| format_money(&catalog.currency_symbol, v);

    println!();
    println!("📊 Budget Summary");
    println!("   ─────────────────────────────────────────────");
    println!("   Income:       {:>14}", money(summary.total_income));
    println!("   Expenses:     {:>14}", money(summary.total_expenses));
    println!("   Net savings:  {:>14}", money(summary.net_savings));
    println!("   Savings rate: {:>13.1}%", summary.savings_rate * 100.0);

    if !summary.breakdown.is_empty() {
        println!();
        println!("   {:22} │ {:>14} │ {:>6}", "Category", "Amount", "%");
        println!("   ───────────────────────┼────────────────┼───────");
        for cat in &summary.breakdown {
            println!(
                "   {:22} │ {:>14} │ {:>5.1}%",
                truncate(&cat.category, 22),
                money(cat.amount),
                cat.percentage
            );
        }
    }

    if let Some(ref warning) = summary.concentration {
        println!();
        println!("⚠️  {}", warning.message);
    }

    if !summary.improvements.is_empty() {
        println!();
        println!("💡 Suggested improvements");
        for improvement in &summary.improvements {
            println!("   • {}", improvement.message);
        }
    }

    println!();
    for insight in &summary.insights {
        let icon = match insight.kind {
            BudgetInsightKind::Warning => "⚠️ ",
            BudgetInsightKind::Success => "✅",
        };
        println!("{} {}", icon, insight.message);
    }

    Ok(())
}

pub fn cmd_afford(
    catalog: &Catalog,
    profile: &FinancialProfile,
    item: Option<&str>,
    price: f64,
    json: bool,
) -> Result<()> {
    let verdict = PlanningEngine::new(catalog).affordability(profile, item, price)?;
    if json {
        return print_json(&verdict);
    }

    let money = |v: f64| format_money(&catalog.currency_symbol, v);

    println!();
    println!(
        "🛒 Affordability: {} ({})",
        verdict.item_name.as_deref().unwrap_or("Purchase"),
        money(verdict.item_price)
    );
    println!("   ─────────────────────────────────────────────");
    println!(
        "   Discretionary income: {}/month",
        money(verdict.discretionary_income)
    );
    println!(
        "   Affordable: {}   Impact: {}",
        if verdict.affordable { "yes" } else { "no" },
        verdict.impact
    );
    println!();
    println!(
        "{} {}",
        if verdict.affordable { "✅" } else { "⚠️ " },
        verdict.recommendation
    );

    if let Some(months) = verdict.savings_plan.months_to_save {
        println!(
            "   Saving {}/month gets you there in {} month{}.",
            money(verdict.savings_plan.suggested_monthly_savings),
            months,
            if months == 1 { "" } else { "s" }
        );
    }

    Ok(())
}
