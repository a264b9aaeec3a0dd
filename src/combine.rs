//! Option combination generation
//!
//! Every resolved option contributes one dimension; the full test surface of a
//! template is the Cartesian product across dimensions.

use crate::context::RenderContext;
use crate::error::Result;
use crate::options::{OptionKind, TestOption};
use crate::resolve::OptionMap;
use itertools::Itertools;
use std::fmt;

/// Every tuple picking one element per set, first set varying slowest.
///
/// No sets yields a single empty tuple; any empty set yields no tuples.
pub fn cartesian_product<T: Clone>(sets: &[Vec<T>]) -> Vec<Vec<T>> {
    if sets.is_empty() {
        return vec![Vec::new()];
    }
    sets.iter().map(|set| set.iter().cloned()).multi_cartesian_product().collect()
}

/// One fully specified test scenario: one selected value per option.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Combination(Vec<TestOption>);

impl Combination {
    pub fn new(options: Vec<TestOption>) -> Self {
        Self(options)
    }

    pub fn options(&self) -> &[TestOption] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn id(&self) -> String {
        self.0.iter().map(|option| option.to_string()).join(",")
    }

    /// A fresh context with every selected option applied in order.
    pub fn render_context(&self) -> RenderContext {
        let mut context = RenderContext::new();
        for option in &self.0 {
            option.apply(&mut context);
        }
        context
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

/// Validate `options` against the registry and expand every combination.
///
/// All option names are checked before any value is built, so an unknown
/// option fails without producing a partial result.
pub fn generate_option_combinations(options: &OptionMap) -> Result<Vec<Combination>> {
    let kinds = options
        .iter()
        .map(|(name, values)| OptionKind::from_key(name).map(|kind| (kind, values)))
        .collect::<Result<Vec<_>>>()?;

    let option_sets = kinds
        .into_iter()
        .map(|(kind, values)| values.iter().map(|raw| kind.build(raw)).collect::<Result<Vec<_>>>())
        .collect::<Result<Vec<_>>>()?;

    let combinations: Vec<Combination> =
        cartesian_product(&option_sets).into_iter().map(Combination).collect();
    tracing::debug!(
        dimensions = option_sets.len(),
        combinations = combinations.len(),
        "Generated option combinations"
    );
    Ok(combinations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CaseError;
    use crate::options::OsRelease;
    use serde_json::json;
    use serde_yaml::Value;
    use similar_asserts::assert_eq;

    fn options(yaml: &str) -> OptionMap {
        let raw: serde_yaml::Mapping = serde_yaml::from_str(yaml).expect("yaml");
        raw.into_iter()
            .map(|(k, v)| {
                let name = k.as_str().expect("string key").to_string();
                let Value::Sequence(values) = v else { panic!("expected list") };
                (name, values)
            })
            .collect()
    }

    #[test]
    fn test_product_preserves_dimension_order() {
        let sets = vec![vec!["small", "big"], vec!["blue", "red"]];
        assert_eq!(
            cartesian_product(&sets),
            vec![
                vec!["small", "blue"],
                vec!["small", "red"],
                vec!["big", "blue"],
                vec!["big", "red"],
            ]
        );
    }

    #[test]
    fn test_product_size_is_product_of_cardinalities() {
        let sets = vec![vec![1, 2, 3], vec![4, 5], vec![6, 7, 8, 9]];
        assert_eq!(cartesian_product(&sets).len(), 3 * 2 * 4);
    }

    #[test]
    fn test_product_edge_cases() {
        let none: Vec<Vec<u8>> = vec![];
        assert_eq!(cartesian_product(&none), vec![Vec::<u8>::new()]);

        let with_empty = vec![vec![1, 2], vec![]];
        assert!(cartesian_product(&with_empty).is_empty());
    }

    #[test]
    fn test_generate_os_and_extra_context() {
        let opts = options(
            r#"
os: [CentOS/7, Ubuntu/18]
extra_context:
  - bootstrap: {pillar: {role: bootstrap}}
  - node: {pillar: {role: node}}
  - minimal:
"#,
        );
        let combinations = generate_option_combinations(&opts).expect("combinations");
        assert_eq!(combinations.len(), 6);

        let ids: Vec<String> = combinations.iter().map(Combination::id).collect();
        assert_eq!(
            ids,
            vec![
                "os=CentOS/7,extra_context=bootstrap",
                "os=CentOS/7,extra_context=node",
                "os=CentOS/7,extra_context=minimal",
                "os=Ubuntu/18,extra_context=bootstrap",
                "os=Ubuntu/18,extra_context=node",
                "os=Ubuntu/18,extra_context=minimal",
            ]
        );

        let context = combinations[4].render_context().into_value();
        assert_eq!(
            context,
            json!({
                "grains": {"os": "Ubuntu", "os_family": "Debian", "osmajorrelease": "18"},
                "pillar": {"role": "node"},
            })
        );
    }

    #[test]
    fn test_unknown_option_fails_before_any_value_is_built() {
        // The invalid `os` value would fail too, but the unknown name is reported.
        let opts = options("os: [Windows/10]\nsize: [small, big]\n");
        let err = generate_option_combinations(&opts).unwrap_err();
        assert!(matches!(err, CaseError::UnknownOption { ref key, .. } if key == "size"));
    }

    #[test]
    fn test_disallowed_value_is_fatal() {
        let opts = options("os: [RedHat/8, Debian/10]\n");
        let err = generate_option_combinations(&opts).unwrap_err();
        assert!(matches!(err, CaseError::DisallowedValue { .. }));
    }

    #[test]
    fn test_no_options_yield_one_default_case() {
        let combinations = generate_option_combinations(&OptionMap::new()).expect("combinations");
        assert_eq!(combinations, vec![Combination::default()]);
        assert_eq!(combinations[0].id(), "");
        assert_eq!(combinations[0].render_context().into_value(), json!({"grains": {}}));
    }

    #[test]
    fn test_empty_value_list_yields_no_cases() {
        let opts = options("os: []\nextra_context: [{a: {}}]\n");
        assert!(generate_option_combinations(&opts).expect("combinations").is_empty());
    }

    #[test]
    fn test_combination_display_matches_id() {
        let combination = Combination::new(vec![TestOption::Os(OsRelease::RedHat7)]);
        assert_eq!(combination.to_string(), "os=RedHat/7");
    }
}
