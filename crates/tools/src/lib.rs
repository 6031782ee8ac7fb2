//! Built-in tool implementations for unitwise.
//!
//! Tools give an orchestrating model access to the conversion engine:
//! `convert_units` does the arithmetic, `list_units` says what is supported.

pub mod convert_units;
pub mod list_units;

use std::sync::Arc;

use unitwise_core::tool::ToolRegistry;
use unitwise_core::units::UnitRegistry;

pub use convert_units::ConvertUnitsTool;
pub use list_units::ListUnitsTool;

/// Create a tool registry with all built-in tools, sharing `units`.
pub fn default_registry(units: Arc<UnitRegistry>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(ConvertUnitsTool::new(units.clone())));
    registry.register(Box::new(ListUnitsTool::new(units)));
    registry
}
