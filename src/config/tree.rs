//! Typed configuration tree
//!
//! The document has a root-level `default_opts` key; every other key names a
//! directory or file. Under a path node, `_opts` declares option overrides and
//! `_skip` toggles rendering for that path and everything below it.

use crate::error::{CaseError, Result};
use crate::resolve::OptionMap;
use serde_yaml::Value;
use std::collections::BTreeMap;

pub const DEFAULTS_KEY: &str = "default_opts";
pub const OPTS_KEY: &str = "_opts";
pub const SKIP_KEY: &str = "_skip";

/// One directory or file in the configuration hierarchy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigNode {
    opts: OptionMap,
    skip: Option<bool>,
    children: BTreeMap<String, ConfigNode>,
}

impl ConfigNode {
    pub fn opts(&self) -> &OptionMap {
        &self.opts
    }

    /// `None` when the node does not set `_skip` (or sets it to null).
    pub fn skip(&self) -> Option<bool> {
        self.skip
    }

    pub fn child(&self, segment: &str) -> Option<&ConfigNode> {
        self.children.get(segment)
    }

    pub fn children(&self) -> impl Iterator<Item = (&str, &ConfigNode)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// A parsed test configuration document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestsConfig {
    default_opts: OptionMap,
    root: ConfigNode,
}

impl TestsConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let raw: Value = serde_yaml::from_str(content)?;
        Self::from_value(raw)
    }

    pub fn from_value(raw: Value) -> Result<Self> {
        let Value::Mapping(mut mapping) = raw else {
            return Err(CaseError::invalid_node(&[], "expected a mapping at document root"));
        };

        let defaults = mapping.remove(DEFAULTS_KEY).ok_or(CaseError::MissingDefaults)?;
        let default_opts = parse_opts(defaults, &[DEFAULTS_KEY.to_string()])?;

        for reserved in [OPTS_KEY, SKIP_KEY] {
            if mapping.contains_key(reserved) {
                return Err(CaseError::invalid_node(
                    &[],
                    format!("'{}' is not allowed at the root, use '{}'", reserved, DEFAULTS_KEY),
                ));
            }
        }

        let mut trail = Vec::new();
        let root = parse_node(Value::Mapping(mapping), &mut trail)?;

        Ok(Self { default_opts, root })
    }

    pub fn default_opts(&self) -> &OptionMap {
        &self.default_opts
    }

    pub fn root(&self) -> &ConfigNode {
        &self.root
    }

    /// Every path declared in the hierarchy, `/`-joined, depth-first in key order.
    pub fn declared_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_nodes(&self.root, &mut Vec::new(), &mut |trail, _| out.push(trail.join("/")));
        out
    }

    /// Every option map in the document, labelled by where it was declared.
    pub fn option_sets(&self) -> Vec<(String, &OptionMap)> {
        let mut out = vec![(DEFAULTS_KEY.to_string(), &self.default_opts)];
        collect_nodes(&self.root, &mut Vec::new(), &mut |trail, node| {
            if !node.opts.is_empty() {
                out.push((trail.join("/"), &node.opts));
            }
        });
        out
    }
}

fn collect_nodes<'a>(
    node: &'a ConfigNode,
    trail: &mut Vec<&'a str>,
    visit: &mut dyn FnMut(&[&'a str], &'a ConfigNode),
) {
    for (segment, child) in node.children() {
        trail.push(segment);
        visit(trail, child);
        collect_nodes(child, trail, visit);
        trail.pop();
    }
}

fn parse_node(value: Value, trail: &mut Vec<String>) -> Result<ConfigNode> {
    let mapping = match value {
        Value::Null => return Ok(ConfigNode::default()),
        Value::Mapping(mapping) => mapping,
        other => {
            return Err(CaseError::invalid_node(
                trail,
                format!("expected a mapping, found {}", value_kind(&other)),
            ))
        }
    };

    let mut node = ConfigNode::default();
    for (key, value) in mapping {
        let key = segment_key(key, trail)?;
        match key.as_str() {
            OPTS_KEY => node.opts = parse_opts(value, trail)?,
            SKIP_KEY => node.skip = parse_skip(value, trail)?,
            _ => {
                trail.push(key.clone());
                let child = parse_node(value, trail)?;
                trail.pop();
                node.children.insert(key, child);
            }
        }
    }
    Ok(node)
}

/// Path keys may be written unquoted, so `2019:` names the `2019` segment.
fn segment_key(key: Value, trail: &[String]) -> Result<String> {
    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(CaseError::invalid_node(
            trail,
            format!("path keys must be scalars, found {}", value_kind(&other)),
        )),
    }
}

fn parse_opts(value: Value, trail: &[String]) -> Result<OptionMap> {
    let mapping = match value {
        Value::Null => return Ok(OptionMap::new()),
        Value::Mapping(mapping) => mapping,
        other => {
            return Err(CaseError::invalid_node(
                trail,
                format!("options must be a mapping, found {}", value_kind(&other)),
            ))
        }
    };

    let mut opts = OptionMap::new();
    for (key, values) in mapping {
        let Value::String(name) = key else {
            return Err(CaseError::invalid_node(trail, "option names must be strings"));
        };
        let Value::Sequence(values) = values else {
            return Err(CaseError::invalid_node(
                trail,
                format!("option '{}' must list its values, found {}", name, value_kind(&values)),
            ));
        };
        opts.insert(name, values);
    }
    Ok(opts)
}

fn parse_skip(value: Value, trail: &[String]) -> Result<Option<bool>> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(skip) => Ok(Some(skip)),
        other => Err(CaseError::invalid_node(
            trail,
            format!("'{}' must be a boolean, found {}", SKIP_KEY, value_kind(&other)),
        )),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
