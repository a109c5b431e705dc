//! Test utilities for fundwise-core
//!
//! Profile fixture builders shared by unit tests and downstream crates.

use chrono::NaiveDate;

use crate::models::{ExpenseItem, FinancialProfile, Goal, IncomeItem, RiskTolerance};

/// Fixed evaluation date used by fixtures
pub fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

/// Builder for [`FinancialProfile`] fixtures
#[derive(Debug, Default)]
pub struct ProfileBuilder {
    profile: FinancialProfile,
}

impl ProfileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn income(mut self, name: &str, amount: f64) -> Self {
        self.profile.income.push(IncomeItem {
            name: name.to_string(),
            amount,
        });
        self
    }

    pub fn expense(mut self, name: &str, amount: f64, category: &str) -> Self {
        self.profile.expenses.push(ExpenseItem {
            name: name.to_string(),
            amount,
            category: category.to_string(),
        });
        self
    }

    pub fn risk(mut self, risk: RiskTolerance) -> Self {
        self.profile.risk_tolerance = risk;
        self
    }

    /// Add a goal due `months` after [`as_of`]
    pub fn goal(mut self, id: &str, target: f64, current: f64, months: u32) -> Self {
        let target_date = as_of()
            .checked_add_months(chrono::Months::new(months))
            .unwrap();
        self.profile.goals.push(Goal {
            id: id.to_string(),
            name: capitalize(id),
            target_amount: target,
            current_amount: current,
            target_date,
        });
        self
    }

    pub fn build(self) -> FinancialProfile {
        self.profile
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Income 60000, expenses 35000, one car goal (100000, 25000 saved, 12 months)
pub fn scenario_a() -> FinancialProfile {
    ProfileBuilder::new()
        .income("Salary", 60_000.0)
        .expense("Rent", 20_000.0, "Housing")
        .expense("Groceries", 10_000.0, "Food")
        .expense("Fuel", 5_000.0, "Transportation")
        .goal("car", 100_000.0, 25_000.0, 12)
        .build()
}

/// Income 20000, expenses 19000, same car goal
pub fn scenario_b() -> FinancialProfile {
    ProfileBuilder::new()
        .income("Salary", 20_000.0)
        .expense("Rent", 12_000.0, "Housing")
        .expense("Groceries", 7_000.0, "Food")
        .goal("car", 100_000.0, 25_000.0, 12)
        .build()
}
