//! Template discovery and test planning

pub mod plan;
pub mod scanner;

pub use plan::{build_plan, validate_config, PlanStats, TestCase, TestPlan};
pub use scanner::{ScanStats, TemplateScanner, DEFAULT_TEMPLATE_PATTERNS};
