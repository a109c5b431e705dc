//! Recommendation catalog
//!
//! Static reference data the engine ranks against: side hustles, budgeting
//! tools, skill development resources, allocation tiers and planning
//! strategy texts. The catalog is read-only for the life of the process.
//!
//! ## Configuration Resolution
//!
//! The catalog is loaded with a three-layer resolution:
//! 1. An explicit path (e.g. the CLI's `--catalog` flag)
//! 2. An override in the data dir (~/.local/share/fundwise/config/catalog.toml)
//! 3. The embedded default (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::RiskTolerance;

/// Embedded default catalog (compiled into binary)
pub const DEFAULT_CATALOG: &str = include_str!("../../../config/catalog.toml");

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Annual return range in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnRange {
    pub min: f64,
    pub max: f64,
}

impl ReturnRange {
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Human-readable form, e.g. "8-10%"
    pub fn label(&self) -> String {
        format!("{}-{}%", self.min, self.max)
    }
}

/// A money range with an optional unit, e.g. 2000-5000 per hour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl PriceRange {
    pub fn is_free(&self) -> bool {
        self.min == 0.0 && self.max == 0.0
    }

    /// Render with a currency symbol, e.g. "₹2000-5000/hr" or "Free"
    pub fn label(&self, currency: &str) -> String {
        let mut out = if self.is_free() {
            "Free".to_string()
        } else if self.min == self.max {
            format!("{}{}", currency, self.min)
        } else {
            format!("{}{}-{}", currency, self.min, self.max)
        };
        if let Some(ref per) = self.per {
            out.push('/');
            out.push_str(per);
        }
        if let Some(ref note) = self.note {
            out.push_str(&format!(" ({})", note));
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HustleGroup {
    Tech,
    Creative,
    General,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideHustle {
    pub title: String,
    pub description: String,
    pub group: HustleGroup,
    pub focus: String,
    pub platforms: Vec<String>,
    pub income: PriceRange,
}

impl SideHustle {
    /// Conservative income figure used for ranking (the low end of the range)
    pub fn estimated_income(&self) -> f64 {
        self.income.min
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetingTool {
    pub name: String,
    pub features: Vec<String>,
    pub cost: PriceRange,
    pub best_for: String,
    pub platforms: Vec<String>,
    pub rating: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillTrack {
    Programming,
    Business,
    Finance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillResource {
    pub platform: String,
    pub track: SkillTrack,
    pub focus: String,
    pub cost: PriceRange,
    pub certification: bool,
    pub duration: String,
    pub job_support: bool,
}

impl SkillResource {
    pub fn min_cost(&self) -> f64 {
        self.cost.min
    }
}

/// One asset class within an allocation tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetBucket {
    #[serde(rename = "type")]
    pub asset_type: String,
    pub percentage: u32,
    pub description: String,
    pub expected_return: ReturnRange,
    pub risk: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedFund {
    pub name: String,
    pub kind: String,
    pub risk: String,
    pub min_investment: f64,
}

/// Asset split for one risk tolerance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationTier {
    pub expected_returns: ReturnRange,
    pub rebalancing_frequency: String,
    pub minimum_investment_period: String,
    pub buckets: Vec<AssetBucket>,
    #[serde(default)]
    pub funds: Vec<SuggestedFund>,
}

impl AllocationTier {
    pub fn total_percentage(&self) -> u32 {
        self.buckets.iter().map(|b| b.percentage).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tiers {
    pub conservative: AllocationTier,
    pub moderate: AllocationTier,
    pub aggressive: AllocationTier,
}

/// Step lists used by the financial planner
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Strategies {
    #[serde(default)]
    pub income_growth: Vec<String>,
    #[serde(default)]
    pub side_hustle: Vec<String>,
    #[serde(default)]
    pub income_optimization: Vec<String>,
    #[serde(default)]
    pub wealth_building: Vec<String>,
    #[serde(default)]
    pub expense_reduction: Vec<String>,
    #[serde(default)]
    pub income_increase: Vec<String>,
}

/// The full recommendation catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub currency_symbol: String,
    #[serde(default)]
    pub side_hustles: Vec<SideHustle>,
    #[serde(default)]
    pub budgeting_tools: Vec<BudgetingTool>,
    #[serde(default)]
    pub skill_resources: Vec<SkillResource>,
    pub tiers: Tiers,
    #[serde(default)]
    pub strategies: Strategies,
}

impl Catalog {
    /// Parse and validate a catalog document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid catalog TOML: {}", e)))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(DEFAULT_CATALOG)
    }

    /// Load a catalog, preferring an explicit path, then the user override,
    /// then the embedded default
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(Error::NotFound(format!(
                    "catalog file {}",
                    path.display()
                )));
            }
            return Self::load_file(path);
        }

        match default_catalog_path() {
            Some(default_path) if default_path.exists() => Self::load_file(&default_path),
            _ => Self::embedded(),
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            side_hustles = catalog.side_hustles.len(),
            budgeting_tools = catalog.budgeting_tools.len(),
            skill_resources = catalog.skill_resources.len(),
            "Loaded catalog override"
        );
        Ok(catalog)
    }

    pub fn tier(&self, risk: RiskTolerance) -> &AllocationTier {
        match risk {
            RiskTolerance::Conservative => &self.tiers.conservative,
            RiskTolerance::Moderate => &self.tiers.moderate,
            RiskTolerance::Aggressive => &self.tiers.aggressive,
        }
    }

    fn validate(&self) -> Result<()> {
        for &risk in RiskTolerance::all() {
            let tier = self.tier(risk);
            if tier.buckets.is_empty() {
                return Err(Error::Config(format!("Tier '{}' has no buckets", risk)));
            }
            let total = tier.total_percentage();
            if total != 100 {
                return Err(Error::Config(format!(
                    "Tier '{}' percentages sum to {}, expected 100",
                    risk, total
                )));
            }
            for bucket in &tier.buckets {
                let r = bucket.expected_return;
                if !r.min.is_finite() || !r.max.is_finite() || r.min > r.max {
                    return Err(Error::Config(format!(
                        "Tier '{}' bucket '{}' has an invalid return range",
                        risk, bucket.asset_type
                    )));
                }
            }
        }

        if let Some(tool) = self.budgeting_tools.iter().find(|t| !t.rating.is_finite()) {
            return Err(Error::Config(format!(
                "Budgeting tool '{}' has a non-numeric rating",
                tool.name
            )));
        }

        Ok(())
    }
}

/// Default catalog override path
pub fn default_catalog_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("fundwise").join("config").join("catalog.toml"))
}

/// Initialise the process-wide catalog.
///
/// The first successful call wins; later calls return the catalog that is
/// already installed.
pub fn init(path: Option<&Path>) -> Result<&'static Catalog> {
    if let Some(existing) = CATALOG.get() {
        tracing::debug!("Catalog already initialised");
        return Ok(existing);
    }
    let catalog = Catalog::load(path)?;
    Ok(CATALOG.get_or_init(|| catalog))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.currency_symbol, "₹");
        assert_eq!(catalog.side_hustles.len(), 15);
        assert_eq!(catalog.budgeting_tools.len(), 4);
        assert_eq!(catalog.skill_resources.len(), 15);
        assert!(!catalog.strategies.income_growth.is_empty());
    }

    #[test]
    fn test_every_tier_sums_to_100() {
        let catalog = Catalog::embedded().unwrap();
        for &risk in RiskTolerance::all() {
            assert_eq!(catalog.tier(risk).total_percentage(), 100, "{}", risk);
        }
    }

    #[test]
    fn test_rejects_tier_not_summing_to_100() {
        let broken = DEFAULT_CATALOG.replacen("percentage = 40", "percentage = 45", 1);
        let err = Catalog::from_toml_str(&broken).unwrap_err();
        assert!(err.to_string().contains("sum to 105"));
    }

    #[test]
    fn test_missing_explicit_path_is_not_found() {
        let err = Catalog::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_price_range_labels() {
        let hourly = PriceRange {
            min: 2000.0,
            max: 5000.0,
            per: Some("hr".into()),
            note: None,
        };
        assert_eq!(hourly.label("₹"), "₹2000-5000/hr");

        let free = PriceRange {
            min: 0.0,
            max: 0.0,
            per: None,
            note: Some("premium options available".into()),
        };
        assert!(free.is_free());
        assert_eq!(free.label("$"), "Free (premium options available)");
    }

    #[test]
    fn test_return_range_midpoint() {
        let r = ReturnRange {
            min: 8.0,
            max: 10.0,
        };
        assert_eq!(r.midpoint(), 9.0);
        assert_eq!(r.label(), "8-10%");
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        // A directory exists but cannot be read as a file
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(Some(dir.path())).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_init_is_stable() {
        let a = init(None).unwrap() as *const Catalog;
        // Later calls keep the installed catalog, even with another path
        let b = init(Some(Path::new("/definitely/not/here.toml"))).unwrap() as *const Catalog;
        assert_eq!(a, b);
    }
}
