#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use strand_runtime::{Existence, FileSystem, Gateway, GatewayConfig, RecordingSink, Stream};

/// Everything a `ScriptedStream` was asked to do.
#[derive(Default, Debug)]
pub struct StreamLog {
    pub writes: Vec<Vec<u8>>,
    pub eof_queries: usize,
    pub closes: usize,
    pub pooled_releases: usize,
    pub at_end: bool,
    /// Caps how many bytes a single write accepts.
    pub accept_limit: Option<usize>,
}

/// Test double for `Stream` that records calls into a shared log.
pub struct ScriptedStream {
    log: Rc<RefCell<StreamLog>>,
}

impl ScriptedStream {
    pub fn new() -> (Box<dyn Stream>, Rc<RefCell<StreamLog>>) {
        let log = Rc::new(RefCell::new(StreamLog::default()));
        (Box::new(ScriptedStream { log: log.clone() }), log)
    }

    pub fn accepting(limit: usize) -> (Box<dyn Stream>, Rc<RefCell<StreamLog>>) {
        let (stream, log) = Self::new();
        log.borrow_mut().accept_limit = Some(limit);
        (stream, log)
    }
}

impl Stream for ScriptedStream {
    fn write(&mut self, bytes: &[u8]) -> usize {
        let mut log = self.log.borrow_mut();
        let n = log.accept_limit.map_or(bytes.len(), |l| l.min(bytes.len()));
        log.writes.push(bytes[..n].to_vec());
        n
    }

    fn read(&mut self, _buf: &mut [u8]) -> usize {
        0
    }

    fn is_at_end(&mut self) -> bool {
        let mut log = self.log.borrow_mut();
        log.eof_queries += 1;
        log.at_end
    }

    fn close(&mut self) {
        self.log.borrow_mut().closes += 1;
    }

    fn pooled_release(&mut self) {
        self.log.borrow_mut().pooled_releases += 1;
    }
}

/// Filesystem double that counts queries and knows a fixed set of paths.
pub struct CountingFs {
    pub known: Vec<Vec<u8>>,
    pub queries: Rc<Cell<usize>>,
    pub fail: bool,
}

impl CountingFs {
    pub fn new<P: AsRef<[u8]>>(known: &[P]) -> (Self, Rc<Cell<usize>>) {
        let queries = Rc::new(Cell::new(0));
        (
            Self {
                known: known.iter().map(|p| p.as_ref().to_vec()).collect(),
                queries: queries.clone(),
                fail: false,
            },
            queries,
        )
    }
}

impl FileSystem for CountingFs {
    fn exists(&self, path: &[u8]) -> Existence {
        self.queries.set(self.queries.get() + 1);
        if self.fail {
            return Existence::Failed("scripted failure".into());
        }
        if self.known.iter().any(|k| k.as_slice() == path) {
            Existence::Exists
        } else {
            Existence::Missing
        }
    }
}

pub fn recording_gateway() -> (Gateway, RecordingSink) {
    recording_gateway_with(GatewayConfig::default())
}

pub fn recording_gateway_with(config: GatewayConfig) -> (Gateway, RecordingSink) {
    let sink = RecordingSink::new();
    let mut gw = Gateway::with_config(config);
    gw.set_diagnostic_sink(Box::new(sink.clone()));
    (gw, sink)
}
