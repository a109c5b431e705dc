//! Fundwise Core Library
//!
//! Goal feasibility and recommendation engine for the Fundwise personal
//! finance tool:
//! - Profile ingestion and validation (JSON, TOML, YAML)
//! - Budget aggregation with category benchmarks
//! - Per-goal feasibility and catalog-backed recommendations
//! - Risk-tiered investment allocation and growth projection
//! - Purchase affordability checks
//! - Financial health scoring and per-goal plans

pub mod affordability;
pub mod allocation;
pub mod budget;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod feasibility;
pub mod format;
pub mod health;
pub mod ingest;
pub mod models;
pub mod planner;
pub mod recommend;

/// Profile fixture builders for tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use affordability::{AffordabilityAdvisor, AffordabilityTier, AffordabilityVerdict, Impact};
pub use allocation::{AllocationPlan, GrowthProjection, InvestmentAllocator};
pub use budget::{BudgetAggregator, BudgetConfig, BudgetSummary};
pub use catalog::Catalog;
pub use engine::{EngineReport, PlanningEngine};
pub use error::{Error, Result, ValidationError};
pub use feasibility::{GoalAssessment, GoalFeasibilityEvaluator};
pub use health::{HealthReport, HealthScorer, LearningProgress};
pub use ingest::{parse_profile, ProfileFormat};
pub use models::{ExpenseItem, FinancialProfile, Goal, IncomeItem, RiskTolerance};
pub use planner::{FinancialPlan, FinancialPlanner};
pub use recommend::{GoalRecommendation, GoalStatus, RecommendationAssembler, Suggestion};
