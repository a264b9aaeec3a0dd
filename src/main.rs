//! formula-cases: generate rendering test cases for formula templates
//!
//! Resolves per-template test options from a YAML hierarchy and expands them
//! into every option combination.

use anyhow::Result;

fn main() -> Result<()> {
    formula_cases::cli::run()
}
