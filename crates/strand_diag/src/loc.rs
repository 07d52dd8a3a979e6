use crate::codes;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// An argument carried the wrong type tag.
    InvalidArguments {
        operation: &'static str,
        param: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
    /// A resource id that no longer names a live stream.
    UnresolvableHandle(String),
    /// A stream that refuses to be closed from here.
    NotAValidStream(String),
}

impl DiagnosticKind {
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::InvalidArguments { .. } => codes::INVALID_ARGUMENTS,
            DiagnosticKind::UnresolvableHandle(_) => codes::UNRESOLVABLE_HANDLE,
            DiagnosticKind::NotAValidStream(_) => codes::PROTECTED_HANDLE,
        }
    }
}

pub struct DiagnosticsFormatter;

impl DiagnosticsFormatter {
    fn format_en(kind: &DiagnosticKind) -> String {
        match kind {
            DiagnosticKind::InvalidArguments {
                operation,
                param,
                expected,
                actual,
            } => format!(
                "Invalid arguments supplied for {}(): '{}' must be {}, got {}",
                operation, param, expected, actual
            ),
            DiagnosticKind::UnresolvableHandle(id) => {
                format!("{} is not a live stream resource", id)
            }
            DiagnosticKind::NotAValidStream(id) => {
                format!("{} is not a valid stream resource", id)
            }
        }
    }

    pub fn format(kind: &DiagnosticKind) -> String {
        Self::format_en(kind)
    }
}
