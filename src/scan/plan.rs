//! Test plan: every (template, combination) pair for a formula tree

use crate::combine::{generate_option_combinations, Combination};
use crate::config::TestsConfig;
use crate::error::{CaseError, Result};
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub template: String,
    pub combination: Combination,
}

impl TestCase {
    /// `<template>` alone when no option applies, `<template>[<id>]` otherwise.
    pub fn id(&self) -> String {
        if self.combination.is_empty() {
            self.template.clone()
        } else {
            format!("{}[{}]", self.template, self.combination.id())
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlanStats {
    pub templates: usize,
    pub skipped: usize,
    pub cases: usize,
}

#[derive(Debug, Clone, Default)]
pub struct TestPlan {
    pub cases: Vec<TestCase>,
    pub skipped: Vec<String>,
    pub stats: PlanStats,
}

/// Resolve and expand every template; the first configuration error aborts.
pub fn build_plan<S: AsRef<str>>(config: &TestsConfig, templates: &[S]) -> Result<TestPlan> {
    let mut plan = TestPlan::default();

    for template in templates {
        let template = template.as_ref();
        plan.stats.templates += 1;

        let Some(options) = config.resolve(Path::new(template)) else {
            plan.skipped.push(template.to_string());
            continue;
        };

        let combinations = generate_option_combinations(&options).map_err(|e| {
            tracing::error!("Cannot expand options for {}: {}", template, e);
            e
        })?;
        plan.cases.extend(
            combinations
                .into_iter()
                .map(|combination| TestCase { template: template.to_string(), combination }),
        );
    }

    plan.stats.skipped = plan.skipped.len();
    plan.stats.cases = plan.cases.len();
    tracing::info!(
        templates = plan.stats.templates,
        skipped = plan.stats.skipped,
        cases = plan.stats.cases,
        "Built test plan"
    );
    Ok(plan)
}

/// Every option value declared anywhere in `config`, checked against the registry.
///
/// Returns one error per invalid option set, labelled by where it was declared.
pub fn validate_config(config: &TestsConfig) -> Vec<(String, CaseError)> {
    config
        .option_sets()
        .into_iter()
        .filter_map(|(location, options)| {
            generate_option_combinations(options).err().map(|err| (location, err))
        })
        .collect()
}
