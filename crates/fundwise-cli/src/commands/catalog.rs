//! Catalog listing command

use anyhow::Result;
use fundwise_core::catalog::Catalog;
use fundwise_core::RiskTolerance;

use super::{print_json, truncate};

pub fn cmd_catalog(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        return print_json(catalog);
    }

    let currency = catalog.currency_symbol.as_str();

    println!();
    println!("💼 Side Hustles ({})", catalog.side_hustles.len());
    println!("   ─────────────────────────────────────────────");
    for hustle in &catalog.side_hustles {
        println!(
            "   {:32} {}",
            truncate(&hustle.title, 32),
            hustle.income.label(currency)
        );
    }

    println!();
    println!("🧮 Budgeting Tools ({})", catalog.budgeting_tools.len());
    println!("   ─────────────────────────────────────────────");
    for tool in &catalog.budgeting_tools {
        println!(
            "   {:20} ★{:.1}  {}",
            tool.name,
            tool.rating,
            tool.cost.label(currency)
        );
    }

    println!();
    println!("🎓 Skill Resources ({})", catalog.skill_resources.len());
    println!("   ─────────────────────────────────────────────");
    for course in &catalog.skill_resources {
        println!(
            "   {:20} {:28} {}{}",
            course.platform,
            truncate(&course.focus, 28),
            course.cost.label(currency),
            if course.job_support { "  [job support]" } else { "" }
        );
    }

    println!();
    println!("📈 Allocation Tiers");
    println!("   ─────────────────────────────────────────────");
    for &risk in RiskTolerance::all() {
        let tier = catalog.tier(risk);
        let split: Vec<String> = tier
            .buckets
            .iter()
            .map(|b| format!("{}% {}", b.percentage, b.asset_type))
            .collect();
        println!(
            "   {:13} {} ({} expected)",
            risk.as_str(),
            split.join(", "),
            tier.expected_returns.label()
        );
    }

    Ok(())
}
