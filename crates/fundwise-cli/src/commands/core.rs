//! Shared command utilities
//!
//! This module contains:
//! - `resolve_as_of` - Parse --as-of or fall back to today
//! - `load_profile` - Read and validate a profile file
//! - `load_catalog` - Initialise the process-wide catalog
//! - `parse_risk` - Parse a --risk label
//! - `to_json` / `print_json` - Render any record as pretty JSON

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use fundwise_core::catalog::{self, Catalog};
use fundwise_core::ingest::{parse_profile, ProfileFormat};
use fundwise_core::{FinancialProfile, RiskTolerance};
use serde::Serialize;

/// Parse --as-of (YYYY-MM-DD), defaulting to today's local date
pub fn resolve_as_of(value: Option<&str>) -> Result<NaiveDate> {
    match value {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid --as-of date '{}' (use YYYY-MM-DD)", s)),
        None => Ok(Local::now().date_naive()),
    }
}

/// Read a profile file and validate it into a snapshot
pub fn load_profile(path: &Path, as_of: NaiveDate) -> Result<FinancialProfile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    let profile = parse_profile(&content, ProfileFormat::from_path(path), as_of)
        .with_context(|| format!("Invalid profile {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        income_items = profile.income.len(),
        expense_items = profile.expenses.len(),
        goals = profile.goals.len(),
        "Loaded profile"
    );

    Ok(profile)
}

/// Initialise the catalog from an override path, the user data dir, or the
/// built-in default
pub fn load_catalog(path: Option<&Path>) -> Result<&'static Catalog> {
    catalog::init(path).context("Failed to load catalog")
}

pub fn parse_risk(label: &str) -> Result<RiskTolerance> {
    label
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{} (expected conservative, moderate or aggressive)", e))
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

/// Print a record as the only thing on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", to_json(value)?);
    Ok(())
}
