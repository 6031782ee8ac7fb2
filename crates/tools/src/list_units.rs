//! `list_units` tool — tells the model which units exist before it asks for a conversion.

use std::sync::Arc;

use async_trait::async_trait;
use unitwise_core::error::ToolError;
use unitwise_core::tool::{Tool, ToolResult};
use unitwise_core::units::UnitRegistry;

pub struct ListUnitsTool {
    registry: Arc<UnitRegistry>,
}

impl ListUnitsTool {
    pub fn new(registry: Arc<UnitRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl Tool for ListUnitsTool {
    fn name(&self) -> &str {
        "list_units"
    }

    fn description(&self) -> &str {
        "List the supported unit categories and the units in each. Units can only be converted within the same category."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let categories = self.registry.categories();

        let output = categories
            .iter()
            .map(|c| format!("{} (base {}): {}", c.name, c.base_unit, c.units().collect::<Vec<_>>().join(", ")))
            .collect::<Vec<_>>()
            .join("\n");

        let data: serde_json::Map<String, serde_json::Value> = categories
            .iter()
            .map(|c| {
                (
                    c.name.clone(),
                    serde_json::json!({
                        "base_unit": c.base_unit,
                        "units": c.units().collect::<Vec<_>>(),
                    }),
                )
            })
            .collect();

        Ok(ToolResult {
            call_id: String::new(),
            success: true,
            output,
            data: Some(serde_json::Value::Object(data)),
        })
    }
}
