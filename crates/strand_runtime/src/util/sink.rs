//! Where gateway diagnostics go.

use std::cell::RefCell;
use std::rc::Rc;

use strand_diag::{Diagnostic, Severity, render_diagnostic};

pub trait DiagnosticSink {
    fn emit(&mut self, diag: Diagnostic);
}

/// Forwards diagnostics to the `log` facade.
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&mut self, diag: Diagnostic) {
        let text = render_diagnostic(&diag);
        match diag.severity {
            Severity::Warning => log::warn!(target: "strand", "{text}"),
            Severity::Error => log::error!(target: "strand", "{text}"),
        }
    }
}

/// Keeps every diagnostic in a shared buffer.
///
/// Clones share the buffer, so a host can hand one clone to the gateway and
/// inspect the other.
#[derive(Clone, Default)]
pub struct RecordingSink {
    records: Rc<RefCell<Vec<Diagnostic>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.records.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.records.borrow_mut().clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn emit(&mut self, diag: Diagnostic) {
        self.records.borrow_mut().push(diag);
    }
}
