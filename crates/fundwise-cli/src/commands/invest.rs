//! Investment projection command

use anyhow::Result;
use fundwise_core::catalog::Catalog;
use fundwise_core::format::format_money;
use fundwise_core::{PlanningEngine, RiskTolerance};

use super::print_json;

pub fn cmd_invest(
    catalog: &Catalog,
    risk: RiskTolerance,
    monthly: f64,
    horizon: f64,
    json: bool,
) -> Result<()> {
    let projection = PlanningEngine::new(catalog).project(risk, monthly, horizon)?;
    if json {
        return print_json(&projection);
    }

    let money = |v: f64| format_money(&catalog.currency_symbol, v);
    let plan = &projection.plan;

    println!();
    println!(
        "📈 Investment Projection ({} tier, {} years)",
        plan.risk_tolerance, projection.investment_horizon
    );
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   Investing {}/month ({}/year)",
        money(projection.monthly_investment),
        money(projection.yearly_investment)
    );
    println!();
    println!(
        "   {:22} │ {:>10} │ {:>7} │ {:>14}",
        "Asset", "Monthly", "Return", "Projected"
    );
    println!("   ───────────────────────┼────────────┼─────────┼───────────────");
    for r in &projection.projected_returns {
        println!(
            "   {:22} │ {:>10} │ {:>6.1}% │ {:>14}",
            r.asset_type,
            money(r.monthly_amount),
            r.average_return,
            money(r.projected_value)
        );
    }
    println!();
    println!(
        "   Total projected value: {}",
        money(projection.total_projected_value)
    );
    println!(
        "   Rebalance {}, hold for {}",
        plan.rebalancing_frequency.to_lowercase(),
        plan.minimum_investment_period
    );

    if !plan.suggested_funds.is_empty() {
        println!();
        println!("💡 Suggested funds");
        for fund in &plan.suggested_funds {
            println!(
                "   • {} ({}, {} risk, min {})",
                fund.name,
                fund.kind,
                fund.risk.to_lowercase(),
                money(fund.min_investment)
            );
        }
    }

    Ok(())
}
