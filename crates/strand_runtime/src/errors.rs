//! Gateway failures and common message fragments.

use std::fmt;

use strand_core::{ResourceId, ValueTag};
use strand_diag::{DiagnosticKind, DiagnosticsFormatter};

pub mod messages {
    pub const EXPECTED_STRING: &str = "a string";
    pub const EXPECTED_RESOURCE: &str = "a stream resource";
    pub const PROTECTED_HELP: &str = "the stream is owned elsewhere and cannot be closed here";
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GatewayError {
    /// An argument carried the wrong type tag.
    TypeMismatch {
        operation: &'static str,
        param: &'static str,
        expected: ValueTag,
        actual: ValueTag,
    },
    /// The resource tag was right but no live stream answers to it.
    UnresolvableHandle(ResourceId),
    /// Close was requested on a stream owned elsewhere.
    ProtectedHandle(ResourceId),
}

impl GatewayError {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            GatewayError::TypeMismatch {
                operation,
                param,
                expected,
                actual,
            } => DiagnosticKind::InvalidArguments {
                operation: *operation,
                param: *param,
                expected: match expected {
                    ValueTag::Str => messages::EXPECTED_STRING,
                    ValueTag::Resource => messages::EXPECTED_RESOURCE,
                    other => other.name(),
                },
                actual: actual.name(),
            },
            GatewayError::UnresolvableHandle(id) => DiagnosticKind::UnresolvableHandle(id.to_string()),
            GatewayError::ProtectedHandle(id) => DiagnosticKind::NotAValidStream(id.to_string()),
        }
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&DiagnosticsFormatter::format(&self.kind()))
    }
}

impl std::error::Error for GatewayError {}
