//! Plain-text rendering

use crate::resolve::OptionMap;
use crate::scan::TestCase;
use anyhow::Result;

/// One case id per line.
pub fn render_case_list(cases: &[TestCase]) -> String {
    cases.iter().map(|case| format!("{}\n", case.id())).collect()
}

pub fn render_options_yaml(options: &OptionMap) -> Result<String> {
    Ok(serde_yaml::to_string(options)?)
}

pub fn render_options_json(options: &OptionMap) -> Result<String> {
    Ok(serde_json::to_string_pretty(options)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combine::Combination;
    use serde_yaml::Value;

    #[test]
    fn test_render_case_list() {
        let cases = vec![
            TestCase { template: "a.sls".into(), combination: Combination::default() },
            TestCase { template: "b.sls".into(), combination: Combination::default() },
        ];
        assert_eq!(render_case_list(&cases), "a.sls\nb.sls\n");
    }

    #[test]
    fn test_render_options_yaml_keeps_order() {
        let mut options = OptionMap::new();
        options.insert("os", vec![Value::String("RedHat/8".into())]);
        options.insert("extra_context", vec![]);

        let yaml = render_options_yaml(&options).expect("yaml");
        assert_eq!(yaml, "os:\n- RedHat/8\nextra_context: []\n");
    }
}
