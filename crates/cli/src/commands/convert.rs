//! `unitwise <VALUE> <SRC_UNIT> <TGT_UNIT>` — convert a value.

use std::sync::Arc;

use serde::Serialize;
use unitwise_agent::UnitConverterAgent;
use unitwise_core::units::UnitRegistry;

/// The `--json` envelope.
#[derive(Debug, Serialize)]
pub struct ConversionReport<'a> {
    pub input: ConversionInput<'a>,
    pub output: f64,
}

#[derive(Debug, Serialize)]
pub struct ConversionInput<'a> {
    pub value: f64,
    pub src_unit: &'a str,
    pub tgt_unit: &'a str,
}

impl ConversionReport<'_> {
    /// `1.0 km = 1000.0 m`; very large or small magnitudes switch to exponent form.
    pub fn to_text(&self) -> String {
        format!(
            "{:?} {} = {:?} {}",
            self.input.value, self.input.src_unit, self.output, self.input.tgt_unit
        )
    }
}

pub fn run(value: f64, src_unit: &str, tgt_unit: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config_or_default();
    let converter = UnitConverterAgent::local(Arc::new(UnitRegistry::standard()));

    let output = converter.convert(value, src_unit, tgt_unit)?;
    let report = ConversionReport {
        input: ConversionInput {
            value,
            src_unit,
            tgt_unit,
        },
        output,
    };

    if json || config.output.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", report.to_text());
    }

    Ok(())
}
