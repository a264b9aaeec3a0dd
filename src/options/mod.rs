//! Option registry
//!
//! Option names in the configuration map to a closed set of option kinds. Each
//! raw value is turned into a typed [`TestOption`] and validated on the way.

use crate::context::RenderContext;
use crate::error::{CaseError, Result};
use serde_yaml::Value;
use std::fmt;

pub mod extra_context;
pub mod os;

pub use extra_context::ExtraContext;
pub use os::OsRelease;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    Os,
    ExtraContext,
}

impl OptionKind {
    pub const ALL: [OptionKind; 2] = [OptionKind::Os, OptionKind::ExtraContext];

    /// Name of the option in the configuration file.
    pub fn key(&self) -> &'static str {
        match self {
            OptionKind::Os => "os",
            OptionKind::ExtraContext => "extra_context",
        }
    }

    pub fn from_key(key: &str) -> Result<Self> {
        OptionKind::ALL.into_iter().find(|kind| kind.key() == key).ok_or_else(|| {
            CaseError::UnknownOption {
                key: key.to_string(),
                registered: OptionKind::ALL.map(|kind| kind.key()).join(", "),
            }
        })
    }

    pub fn build(&self, raw: &Value) -> Result<TestOption> {
        match self {
            OptionKind::Os => OsRelease::from_value(raw).map(TestOption::Os),
            OptionKind::ExtraContext => ExtraContext::from_value(raw).map(TestOption::ExtraContext),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A selected value for one option dimension.
#[derive(Debug, Clone, PartialEq)]
pub enum TestOption {
    Os(OsRelease),
    ExtraContext(ExtraContext),
}

impl TestOption {
    pub fn kind(&self) -> OptionKind {
        match self {
            TestOption::Os(_) => OptionKind::Os,
            TestOption::ExtraContext(_) => OptionKind::ExtraContext,
        }
    }

    /// Short identifier of the selected value, used in test ids.
    pub fn label(&self) -> &str {
        match self {
            TestOption::Os(os) => os.as_str(),
            TestOption::ExtraContext(extra) => extra.id(),
        }
    }

    /// Update the rendering context given the selected value.
    pub fn apply(&self, context: &mut RenderContext) {
        match self {
            TestOption::Os(os) => os.apply(context),
            TestOption::ExtraContext(extra) => extra.apply(context),
        }
    }
}

impl fmt::Display for TestOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.kind(), self.label())
    }
}
