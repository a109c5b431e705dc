//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (profile/catalog loading, --as-of, JSON output)
//! - `budget` - Budget summary and affordability commands
//! - `goals` - Goal evaluation and per-goal plan commands
//! - `invest` - Investment projection command
//! - `health` - Health score command
//! - `catalog` - Catalog listing command

pub mod budget;
pub mod catalog;
pub mod core;
pub mod goals;
pub mod health;
pub mod invest;

// Re-export command functions for main.rs
pub use budget::*;
pub use catalog::*;
pub use core::*;
pub use goals::*;
pub use health::*;
pub use invest::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
