//! Profile ingestion and validation
//!
//! Turns a raw profile document (JSON, TOML or YAML) into a validated
//! [`FinancialProfile`]. Everything the computational components assume
//! (non-negative amounts, expenses within income, parseable future target
//! dates) is enforced here, so the engine never has to raise errors.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

use crate::error::{Result, ValidationError};
use crate::models::{
    ExpenseItem, FinancialProfile, Goal, IncomeItem, RiskTolerance, DEFAULT_EXPENSE_CATEGORY,
};

/// Supported profile document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    Json,
    Toml,
    Yaml,
}

impl ProfileFormat {
    /// Pick a format from a file extension (defaults to JSON)
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .as_deref()
        {
            Some("toml") => Self::Toml,
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Profile document as supplied by the persistence layer or a file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProfile {
    #[serde(default, alias = "monthlyIncome")]
    pub monthly_income: Option<f64>,
    #[serde(default, alias = "monthlyExpenses")]
    pub monthly_expenses: Option<f64>,
    #[serde(default)]
    pub income: Vec<RawIncomeItem>,
    #[serde(default)]
    pub expenses: Vec<RawExpenseItem>,
    #[serde(default, alias = "riskTolerance")]
    pub risk_tolerance: Option<String>,
    #[serde(default)]
    pub goals: Vec<RawGoal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawIncomeItem {
    #[serde(default)]
    pub name: Option<String>,
    pub amount: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawExpenseItem {
    #[serde(default)]
    pub name: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawGoal {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(alias = "targetAmount")]
    pub target_amount: f64,
    #[serde(default, alias = "currentAmount")]
    pub current_amount: f64,
    #[serde(alias = "targetDate", deserialize_with = "date_text")]
    pub target_date: String,
}

/// Target dates arrive as text, or as native date values in TOML documents
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    Toml(toml::value::Datetime),
}

fn date_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match RawDate::deserialize(deserializer)? {
        RawDate::Text(text) => text,
        // Keep only the date part; a bare time is left for validation to reject
        RawDate::Toml(dt) => match dt.date {
            Some(d) => format!("{:04}-{:02}-{:02}", d.year, d.month, d.day),
            None => dt.to_string(),
        },
    })
}

/// Parse and validate a profile document
pub fn parse_profile(
    content: &str,
    format: ProfileFormat,
    as_of: NaiveDate,
) -> Result<FinancialProfile> {
    let raw: RawProfile = match format {
        ProfileFormat::Json => serde_json::from_str(content)?,
        ProfileFormat::Toml => toml::from_str(content)?,
        ProfileFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(validate(raw, as_of)?)
}

/// Validate a raw profile into a snapshot the engine can consume
pub fn validate(
    raw: RawProfile,
    as_of: NaiveDate,
) -> std::result::Result<FinancialProfile, ValidationError> {
    let income = if raw.income.is_empty() {
        match raw.monthly_income {
            Some(total) => vec![IncomeItem {
                name: "Monthly income".to_string(),
                amount: validate_amount("monthly_income", total)?,
            }],
            None => vec![],
        }
    } else {
        raw.income
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                let name = item.name.unwrap_or_else(|| format!("Income {}", i + 1));
                let amount = validate_amount(&format!("income '{}'", name), item.amount)?;
                Ok(IncomeItem { name, amount })
            })
            .collect::<std::result::Result<Vec<_>, ValidationError>>()?
    };

    let expenses = if raw.expenses.is_empty() {
        match raw.monthly_expenses {
            Some(total) => vec![ExpenseItem {
                name: "Monthly expenses".to_string(),
                amount: validate_amount("monthly_expenses", total)?,
                category: DEFAULT_EXPENSE_CATEGORY.to_string(),
            }],
            None => vec![],
        }
    } else {
        raw.expenses
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                let name = item.name.unwrap_or_else(|| format!("Expense {}", i + 1));
                let amount = validate_amount(&format!("expense '{}'", name), item.amount)?;
                let category = item
                    .category
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .unwrap_or_else(|| DEFAULT_EXPENSE_CATEGORY.to_string());
                Ok(ExpenseItem {
                    name,
                    amount,
                    category,
                })
            })
            .collect::<std::result::Result<Vec<_>, ValidationError>>()?
    };

    let total_income: f64 = income.iter().map(|i| i.amount).sum();
    let total_expenses: f64 = expenses.iter().map(|e| e.amount).sum();
    if total_expenses > total_income {
        return Err(ValidationError::ExpensesExceedIncome {
            income: total_income,
            expenses: total_expenses,
        });
    }

    let mut seen = HashSet::new();
    let mut goals = Vec::with_capacity(raw.goals.len());
    for (i, raw_goal) in raw.goals.into_iter().enumerate() {
        let goal = validate_goal(raw_goal, i, as_of)?;
        if !seen.insert(goal.id.clone()) {
            return Err(ValidationError::DuplicateGoalId(goal.id));
        }
        goals.push(goal);
    }

    Ok(FinancialProfile {
        income,
        expenses,
        risk_tolerance: RiskTolerance::from_label(raw.risk_tolerance.as_deref()),
        goals,
    })
}

fn validate_goal(
    raw: RawGoal,
    index: usize,
    as_of: NaiveDate,
) -> std::result::Result<Goal, ValidationError> {
    let id = raw
        .id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| format!("goal-{}", index + 1));

    if !raw.target_amount.is_finite() {
        return Err(ValidationError::NotFinite {
            field: format!("goal '{}' target_amount", raw.name),
        });
    }
    if raw.target_amount <= 0.0 {
        return Err(ValidationError::NonPositiveTarget {
            goal: raw.name,
            value: raw.target_amount,
        });
    }
    let current_amount = validate_amount(
        &format!("goal '{}' current_amount", raw.name),
        raw.current_amount,
    )?;

    let target_date =
        parse_target_date(&raw.target_date).ok_or_else(|| ValidationError::MalformedDate {
            goal: raw.name.clone(),
            value: raw.target_date.clone(),
        })?;

    let goal = Goal {
        id,
        name: raw.name,
        target_amount: raw.target_amount,
        current_amount,
        target_date,
    };

    if !goal.is_complete() && goal.months_until_target(as_of) < 1 {
        return Err(ValidationError::DeadlineNotInFuture {
            goal: goal.name,
            value: raw.target_date,
        });
    }

    Ok(goal)
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM` (first of month) or an RFC 3339 timestamp
pub fn parse_target_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d").ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Validate a candidate purchase price for the affordability check
pub fn validate_price(price: f64) -> std::result::Result<f64, ValidationError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::InvalidPrice(price));
    }
    Ok(price)
}

/// Reject non-finite or negative amounts
pub fn validate_amount(field: &str, value: f64) -> std::result::Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeAmount {
            field: field.to_string(),
            value,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_parse_json_with_totals_and_camel_case() {
        let json = r#"{
            "monthlyIncome": 60000,
            "monthlyExpenses": 35000,
            "riskTolerance": "aggressive",
            "goals": [
                {"id": "car", "name": "Car", "targetAmount": 100000, "currentAmount": 25000, "targetDate": "2027-10-01"}
            ]
        }"#;
        let profile = parse_profile(json, ProfileFormat::Json, as_of()).unwrap();

        assert_eq!(profile.monthly_income(), 60000.0);
        assert_eq!(profile.monthly_expenses(), 35000.0);
        assert_eq!(profile.expenses[0].category, "Other");
        assert_eq!(profile.risk_tolerance, RiskTolerance::Aggressive);
        assert_eq!(profile.goals[0].months_until_target(as_of()), 12);
    }

    #[test]
    fn test_parse_toml_items() {
        let doc = r#"
risk_tolerance = "conservative"

[[income]]
name = "Salary"
amount = 5000

[[expenses]]
name = "Rent"
amount = 1800
category = "Housing"

[[expenses]]
amount = 200
"#;
        let profile = parse_profile(doc, ProfileFormat::Toml, as_of()).unwrap();
        assert_eq!(profile.income.len(), 1);
        assert_eq!(profile.expenses[1].name, "Expense 2");
        assert_eq!(profile.expenses[1].category, "Other");
        assert!(profile.goals.is_empty());
    }

    #[test]
    fn test_parse_toml_native_dates() {
        let doc = r#"
monthly_income = 5000

[[goals]]
id = "bike"
name = "Bike"
target_amount = 1200
target_date = 2027-05-01

[[goals]]
id = "laptop"
name = "Laptop"
target_amount = 900
target_date = 2027-02-14T09:30:00
"#;
        let profile = parse_profile(doc, ProfileFormat::Toml, as_of()).unwrap();
        assert_eq!(
            profile.goals[0].target_date,
            NaiveDate::from_ymd_opt(2027, 5, 1).unwrap()
        );
        assert_eq!(
            profile.goals[1].target_date,
            NaiveDate::from_ymd_opt(2027, 2, 14).unwrap()
        );
    }

    #[test]
    fn test_rejects_toml_time_without_date() {
        let doc = r#"
monthly_income = 5000

[[goals]]
name = "Bike"
target_amount = 1200
target_date = 09:30:00
"#;
        let err = parse_profile(doc, ProfileFormat::Toml, as_of()).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MalformedDate { .. })
        ));
    }

    #[test]
    fn test_parse_yaml_goal_without_id() {
        let doc = "monthly_income: 3000\nmonthly_expenses: 1000\ngoals:\n  - name: Trip\n    target_amount: 2000\n    target_date: 2027-03\n";
        let profile = parse_profile(doc, ProfileFormat::Yaml, as_of()).unwrap();
        assert_eq!(profile.goals[0].id, "goal-1");
        assert_eq!(
            profile.goals[0].target_date,
            NaiveDate::from_ymd_opt(2027, 3, 1).unwrap()
        );
        assert_eq!(profile.risk_tolerance, RiskTolerance::Moderate);
    }

    #[test]
    fn test_rejects_negative_amount() {
        let raw = RawProfile {
            monthly_income: Some(-5.0),
            ..Default::default()
        };
        assert!(matches!(
            validate(raw, as_of()),
            Err(ValidationError::NegativeAmount { .. })
        ));
    }

    #[test]
    fn test_rejects_expenses_over_income() {
        let raw = RawProfile {
            monthly_income: Some(1000.0),
            monthly_expenses: Some(1000.5),
            ..Default::default()
        };
        assert!(matches!(
            validate(raw, as_of()),
            Err(ValidationError::ExpensesExceedIncome { .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_date() {
        let json = r#"{"monthly_income": 10, "goals": [{"name": "X", "target_amount": 5, "target_date": "next spring"}]}"#;
        let err = parse_profile(json, ProfileFormat::Json, as_of()).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MalformedDate { .. })
        ));
    }

    #[test]
    fn test_rejects_deadline_in_current_month() {
        let json = r#"{"monthly_income": 10, "goals": [{"name": "X", "target_amount": 5, "target_date": "2026-10-30"}]}"#;
        let err = parse_profile(json, ProfileFormat::Json, as_of()).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::DeadlineNotInFuture { .. })
        ));
    }

    #[test]
    fn test_completed_goal_may_have_past_deadline() {
        let json = r#"{"monthly_income": 10, "goals": [{"name": "X", "target_amount": 5, "current_amount": 5, "target_date": "2025-01-01"}]}"#;
        let profile = parse_profile(json, ProfileFormat::Json, as_of()).unwrap();
        assert!(profile.goals[0].is_complete());
    }

    #[test]
    fn test_rejects_zero_target_and_duplicate_ids() {
        let zero = r#"{"goals": [{"name": "X", "target_amount": 0, "target_date": "2027-01"}]}"#;
        assert!(matches!(
            parse_profile(zero, ProfileFormat::Json, as_of()).unwrap_err(),
            Error::Validation(ValidationError::NonPositiveTarget { .. })
        ));

        let dup = r#"{"goals": [
            {"id": "a", "name": "X", "target_amount": 5, "target_date": "2027-01"},
            {"id": "a", "name": "Y", "target_amount": 5, "target_date": "2027-01"}
        ]}"#;
        assert!(matches!(
            parse_profile(dup, ProfileFormat::Json, as_of()).unwrap_err(),
            Error::Validation(ValidationError::DuplicateGoalId(_))
        ));
    }

    #[test]
    fn test_parse_target_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2027, 5, 1).unwrap();
        assert_eq!(parse_target_date("2027-05-01"), Some(expected));
        assert_eq!(parse_target_date("2027-05"), Some(expected));
        assert_eq!(parse_target_date("2027-05-01T12:00:00Z"), Some(expected));
        assert_eq!(parse_target_date("05/01/2027"), None);
    }

    #[test]
    fn test_validate_price() {
        assert_eq!(validate_price(0.0), Ok(0.0));
        assert!(validate_price(-1.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ProfileFormat::from_path(Path::new("p.TOML")),
            ProfileFormat::Toml
        );
        assert_eq!(
            ProfileFormat::from_path(Path::new("p.yml")),
            ProfileFormat::Yaml
        );
        assert_eq!(
            ProfileFormat::from_path(Path::new("profile")),
            ProfileFormat::Json
        );
    }
}
