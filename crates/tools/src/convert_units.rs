//! `convert_units` tool — exposes the conversion engine to an orchestrating model.
//!
//! The result is returned as a plain string (`"1000.0"`), with the numeric
//! value also attached as structured data. Unknown or incompatible units
//! are reported as an unsuccessful result rather than a tool error, so the
//! model sees the message and can ask the user again.

use std::sync::Arc;

use async_trait::async_trait;
use unitwise_core::error::ToolError;
use unitwise_core::tool::{Tool, ToolResult};
use unitwise_core::units::UnitRegistry;

pub struct ConvertUnitsTool {
    registry: Arc<UnitRegistry>,
}

impl ConvertUnitsTool {
    pub fn new(registry: Arc<UnitRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl Tool for ConvertUnitsTool {
    fn name(&self) -> &str {
        "convert_units"
    }

    fn description(&self) -> &str {
        "Convert a numeric value from one unit to another. Supports length (km, m, cm, mm, mile, yard, foot, inch) and weight (kg, g, lb, oz)."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "value": {
                    "type": "number",
                    "description": "The numeric value to convert"
                },
                "src_unit": {
                    "type": "string",
                    "description": "The unit of the supplied value, e.g. 'km'"
                },
                "tgt_unit": {
                    "type": "string",
                    "description": "The desired output unit, e.g. 'm'"
                }
            },
            "required": ["value", "src_unit", "tgt_unit"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let value = arguments["value"]
            .as_f64()
            .ok_or_else(|| ToolError::InvalidArguments("Missing or non-numeric 'value' argument".into()))?;
        let src_unit = arguments["src_unit"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'src_unit' argument".into()))?;
        let tgt_unit = arguments["tgt_unit"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'tgt_unit' argument".into()))?;

        match self.registry.convert(value, src_unit, tgt_unit) {
            Ok(result) => Ok(ToolResult {
                call_id: String::new(),
                success: true,
                output: format!("{result:?}"),
                data: Some(serde_json::json!({"result": result})),
            }),
            Err(e) => Ok(ToolResult {
                call_id: String::new(),
                success: false,
                output: format!("Error: {e}"),
                data: None,
            }),
        }
    }
}
