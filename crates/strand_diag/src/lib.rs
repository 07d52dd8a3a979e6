//! Diagnostics shared by the strand crates.
//!
mod diagnostic;
mod loc;
mod render;

pub use diagnostic::{Diagnostic, Severity, codes};
pub use loc::{DiagnosticKind, DiagnosticsFormatter};
pub use render::{render_diagnostic, render_diagnostics};
