use chrono::{DateTime, Local, TimeZone};
use dotlog::{Entry, JsonSink, Level, Logger, Message, Origin, Sink, WriterSink};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn recorded_at() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).single().unwrap()
}

fn entry() -> Entry {
    Entry {
        level: Level::Warn,
        time: recorded_at(),
        prefix: "[Warning] disk:".to_string(),
        message: "almost full".to_string(),
        origin: Some(Origin::from("disk")),
        extras: vec!["93%".to_string()],
    }
}

#[test]
fn entry_line_joins_with_spaces() {
    assert_eq!(entry().line(), "[Warning] disk: almost full 93%");
}

#[test]
fn writer_sink_writes_one_line_per_entry() {
    let sink = WriterSink::new(Vec::new());
    sink.write(&entry()).unwrap();
    sink.write(&entry()).unwrap();
    sink.flush().unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(text.ends_with("almost full 93%\n"));
}

#[test]
fn json_sink_writes_structured_lines() {
    let sink = JsonSink::new(Vec::new());
    sink.write(&entry()).unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();
    let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();

    assert_eq!(value["level"], "warn");
    assert_eq!(value["origin"], "disk");
    assert_eq!(value["msg"], "almost full");
    assert_eq!(value["extras"][0], "93%");
    assert_eq!(value["ts"], recorded_at().to_rfc3339());
}

#[test]
fn json_timestamp_is_the_call_time_for_buffered_entries() {
    let sink = Arc::new(JsonSink::new(Vec::new()));
    let logger = Logger::builder().sink(Arc::clone(&sink)).build();

    let before = Local::now();
    logger.info(Message::new("held").silent());
    thread::sleep(Duration::from_millis(300));
    let flushed_at = Local::now();
    logger.flush_silent_records().unwrap();
    drop(logger);

    let sink = Arc::try_unwrap(sink).unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();
    let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
    let ts = DateTime::parse_from_rfc3339(value["ts"].as_str().unwrap())
        .unwrap()
        .with_timezone(&Local);

    assert!(ts >= before);
    assert!(flushed_at - ts >= chrono::Duration::milliseconds(250));
}

#[test]
fn json_sink_omits_empty_fields() {
    let sink = JsonSink::new(Vec::new());
    let mut bare = entry();
    bare.origin = None;
    bare.extras.clear();
    sink.write(&bare).unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();
    let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();

    assert!(value.get("origin").is_none());
    assert!(value.get("extras").is_none());
}

#[test]
fn named_origin_serializes_as_name_and_id() {
    let json = serde_json::to_value(Origin::named("worker", 7)).unwrap();
    assert_eq!(json["name"], "worker");
    assert_eq!(json["id"], "7");
    assert_eq!(Origin::named("worker", 7).to_string(), "worker#7");
}
