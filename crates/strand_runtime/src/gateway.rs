use strand_core::{Existence, FileSystem, ResourceId, Value, ValueTag};
use strand_diag::Diagnostic;

use crate::config::GatewayConfig;
use crate::core::table::StreamTable;
use crate::errors::{GatewayError, messages};
use crate::util::{Capabilities, DiagnosticSink};

/// Entry point for the guarded stream operations.
///
/// The gateway owns the stream table the host opens handles in, plus the
/// injected filesystem and diagnostic sink. The operations themselves live
/// in `ops/`.
pub struct Gateway {
    pub(crate) streams: StreamTable,
    caps: Capabilities,
    pub(crate) config: GatewayConfig,
}

impl Gateway {
    pub fn new() -> Self {
        Self::with_config(GatewayConfig::default())
    }

    pub fn with_config(config: GatewayConfig) -> Self {
        Self {
            streams: StreamTable::with_idle_limit(config.max_idle_persistent),
            caps: Capabilities::default(),
            config,
        }
    }

    pub fn with_capabilities(config: GatewayConfig, caps: Capabilities) -> Self {
        Self {
            caps,
            ..Self::with_config(config)
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn streams(&self) -> &StreamTable {
        &self.streams
    }

    pub fn streams_mut(&mut self) -> &mut StreamTable {
        &mut self.streams
    }

    pub fn set_file_system(&mut self, fs: Box<dyn FileSystem>) {
        self.caps.fs = fs;
    }

    pub fn set_diagnostic_sink(&mut self, sink: Box<dyn DiagnosticSink>) {
        self.caps.sink = sink;
    }

    pub(crate) fn fs_exists(&self, path: &[u8]) -> Existence {
        self.caps.fs.exists(path)
    }

    pub(crate) fn warn(&mut self, operation: &'static str, err: &GatewayError) {
        let mut diag = Diagnostic::warning_kind(err.kind()).with_operation(operation);
        if matches!(err, GatewayError::ProtectedHandle(_)) {
            diag = diag.with_help(messages::PROTECTED_HELP);
        }
        self.caps.sink.emit(diag);
    }

    pub(crate) fn expect_resource(
        operation: &'static str,
        param: &'static str,
        value: &Value,
    ) -> Result<ResourceId, GatewayError> {
        match value {
            Value::Resource(id) => Ok(*id),
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_) => {
                Err(GatewayError::TypeMismatch {
                    operation,
                    param,
                    expected: ValueTag::Resource,
                    actual: value.tag(),
                })
            }
        }
    }

    pub(crate) fn expect_str<'v>(
        operation: &'static str,
        param: &'static str,
        value: &'v Value,
    ) -> Result<&'v [u8], GatewayError> {
        match value {
            Value::Str(bytes) => Ok(bytes),
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Resource(_) => {
                Err(GatewayError::TypeMismatch {
                    operation,
                    param,
                    expected: ValueTag::Str,
                    actual: value.tag(),
                })
            }
        }
    }
}
