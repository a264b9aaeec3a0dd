//! Simulated operating system

use crate::context::RenderContext;
use crate::error::{display_value, CaseError, Result};
use serde_json::Value as JsonValue;
use serde_yaml::Value;

/// One of the OS distributions templates are rendered against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsRelease {
    CentOs7,
    RedHat7,
    RedHat8,
    Ubuntu18,
}

impl OsRelease {
    pub const ALL: [OsRelease; 4] =
        [OsRelease::CentOs7, OsRelease::RedHat7, OsRelease::RedHat8, OsRelease::Ubuntu18];

    pub fn as_str(&self) -> &'static str {
        match self {
            OsRelease::CentOs7 => "CentOS/7",
            OsRelease::RedHat7 => "RedHat/7",
            OsRelease::RedHat8 => "RedHat/8",
            OsRelease::Ubuntu18 => "Ubuntu/18",
        }
    }

    pub fn os_name(&self) -> &'static str {
        match self {
            OsRelease::CentOs7 => "CentOS",
            OsRelease::RedHat7 | OsRelease::RedHat8 => "RedHat",
            OsRelease::Ubuntu18 => "Ubuntu",
        }
    }

    pub fn os_family(&self) -> &'static str {
        match self {
            OsRelease::Ubuntu18 => "Debian",
            _ => "RedHat",
        }
    }

    pub fn major_release(&self) -> &'static str {
        match self {
            OsRelease::CentOs7 | OsRelease::RedHat7 => "7",
            OsRelease::RedHat8 => "8",
            OsRelease::Ubuntu18 => "18",
        }
    }

    pub fn from_value(raw: &Value) -> Result<Self> {
        raw.as_str()
            .and_then(|s| OsRelease::ALL.into_iter().find(|os| os.as_str() == s))
            .ok_or_else(|| CaseError::DisallowedValue {
                option: "os",
                value: display_value(raw),
                allowed: OsRelease::ALL.map(|os| os.as_str()).join(", "),
            })
    }

    pub fn apply(&self, context: &mut RenderContext) {
        context.set_grain("os", JsonValue::from(self.os_name()));
        context.set_grain("os_family", JsonValue::from(self.os_family()));
        context.set_grain("osmajorrelease", JsonValue::from(self.major_release()));
    }
}
