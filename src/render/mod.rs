//! Output rendering (text listings, YAML/JSON option maps, JSONL cases)

pub mod jsonl;
pub mod text;

pub use jsonl::{render_case, render_jsonl};
pub use text::{render_case_list, render_options_json, render_options_yaml};
