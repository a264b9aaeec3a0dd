//! Construction-time errors
//!
//! Every failure here is a configuration-author error: nothing is retried and
//! no partial result is produced.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CaseError>;

#[derive(Debug, Error)]
pub enum CaseError {
    #[error("Unknown option '{key}' (registered options: {registered})")]
    UnknownOption { key: String, registered: String },

    #[error("Value '{value}' is not allowed for option {option} (allowed: {allowed})")]
    DisallowedValue { option: &'static str, value: String, allowed: String },

    #[error("Can only provide a single key to {option} options (got {keys})")]
    MalformedPayload { option: &'static str, keys: usize },

    #[error("Invalid context data for {option} value '{id}': {reason}")]
    InvalidContextData { option: &'static str, id: String, reason: String },

    #[error("Missing root-level 'default_opts' key")]
    MissingDefaults,

    #[error("Invalid configuration node at '{path}': {reason}")]
    InvalidNode { path: String, reason: String },

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CaseError {
    pub(crate) fn invalid_node(trail: &[String], reason: impl Into<String>) -> Self {
        let path = if trail.is_empty() { "<root>".to_string() } else { trail.join("/") };
        CaseError::InvalidNode { path, reason: reason.into() }
    }
}

/// Render a raw YAML value for error messages and labels.
pub(crate) fn display_value(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{:?}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_node_path_formatting() {
        let err = CaseError::invalid_node(&[], "bad");
        assert_eq!(err.to_string(), "Invalid configuration node at '<root>': bad");

        let trail = vec!["metalk8s".to_string(), "init.sls".to_string()];
        let err = CaseError::invalid_node(&trail, "bad");
        assert!(err.to_string().contains("'metalk8s/init.sls'"));
    }

    #[test]
    fn test_display_value_scalars() {
        assert_eq!(display_value(&serde_yaml::Value::String("RedHat/8".into())), "RedHat/8");
        assert_eq!(display_value(&serde_yaml::Value::Null), "null");
        assert_eq!(display_value(&serde_yaml::Value::Bool(true)), "true");
        assert_eq!(display_value(&serde_yaml::Value::Number(7.into())), "7");
    }
}
