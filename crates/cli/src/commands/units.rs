//! `unitwise units` — list the supported units.

use unitwise_core::units::UnitRegistry;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", render(&UnitRegistry::standard()));
    Ok(())
}

fn render(registry: &UnitRegistry) -> String {
    let mut out = String::new();
    for category in registry.categories() {
        out.push_str(&format!("{} (base: {})\n", category.name, category.base_unit));
        for (unit, factor) in category.factors() {
            out.push_str(&format!("  {unit:<6} = {factor} {}\n", category.base_unit));
        }
    }
    out
}
