use strand_runtime::{
    Capabilities, FileStream, Gateway, GatewayConfig, MemoryStream, RecordingSink, StdFileSystem,
    Value,
};

mod common;
use common::{ScriptedStream, recording_gateway};

#[test]
fn transient_write_check_close() {
    let (mut gw, sink) = recording_gateway();
    let (stream, log) = ScriptedStream::new();
    let h = Value::resource(gw.streams_mut().open(stream));

    assert_eq!(gw.stream_write(&h, &Value::str("abc")), Ok(3));
    assert!(!gw.stream_is_at_end(&h));
    assert!(gw.stream_close(&h));

    let log = log.borrow();
    assert_eq!(log.writes, vec![b"abc".to_vec()]);
    assert_eq!(log.closes, 1);
    assert_eq!(log.pooled_releases, 0);
    assert!(sink.is_empty());
    assert_eq!(gw.streams().live_count(), 0);
}

#[test]
fn memory_stream_round_trip() {
    let (mut gw, sink) = recording_gateway();
    let h = Value::resource(gw.streams_mut().open(Box::new(MemoryStream::new())));
    assert_eq!(gw.stream_write(&h, &Value::str("abc")), Ok(3));
    assert!(!gw.stream_is_at_end(&h));
    assert!(gw.stream_close(&h));
    assert!(sink.is_empty());
}

#[test]
fn file_stream_write_then_exists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.txt");
    let sink = RecordingSink::new();
    let caps = Capabilities {
        fs: Box::new(StdFileSystem),
        sink: Box::new(sink.clone()),
    };
    let mut gw = Gateway::with_capabilities(GatewayConfig::default(), caps);
    let path_value = Value::str(path.to_string_lossy().as_bytes());
    assert!(!gw.file_exists(&path_value));

    let h = Value::resource(gw.streams_mut().open(Box::new(FileStream::create(&path).unwrap())));
    assert!(gw.file_exists(&path_value));
    assert_eq!(gw.stream_write(&h, &Value::str(b"a\0b")), Ok(3));
    // Writing leaves the position at the new end of the file.
    assert!(gw.stream_is_at_end(&h));
    assert!(gw.stream_close(&h));

    assert_eq!(std::fs::read(&path).unwrap(), b"a\0b");
    assert!(sink.is_empty());
}

#[test]
fn close_all_releases_everything_the_host_left_open() {
    let (mut gw, _sink) = recording_gateway();
    let (a, a_log) = ScriptedStream::new();
    let (b, b_log) = ScriptedStream::new();
    gw.streams_mut().open(a);
    gw.streams_mut().open_protected(b);
    assert_eq!(gw.streams_mut().close_all(), 2);
    assert_eq!(a_log.borrow().closes, 1);
    assert_eq!(b_log.borrow().closes, 1);
}
