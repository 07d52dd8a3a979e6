//! Diagnostics raised by the gateway, with a severity and a stable code.

use crate::{DiagnosticKind, DiagnosticsFormatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub code: Option<&'static str>,
    /// Name of the gateway operation that raised the diagnostic.
    pub operation: Option<&'static str>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, kind: DiagnosticKind) -> Self {
        Self {
            severity,
            code: Some(kind.code()),
            message: DiagnosticsFormatter::format(&kind),
            operation: None,
            help: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            code: None,
            operation: None,
            help: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            code: None,
            operation: None,
            help: None,
        }
    }

    pub fn warning_kind(kind: DiagnosticKind) -> Self {
        Self::new(Severity::Warning, kind)
    }

    pub fn with_operation(mut self, operation: &'static str) -> Self {
        self.operation = Some(operation);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

pub mod codes {
    pub const INVALID_ARGUMENTS: &str = "W0001";
    pub const UNRESOLVABLE_HANDLE: &str = "W0002";
    pub const PROTECTED_HANDLE: &str = "W0003";
}
