use dotlog::{Error, Level, Logger, MemorySink};
use std::thread;
use std::time::Duration;

#[test]
fn stop_returns_elapsed_time() {
    let logger = Logger::builder().sink(MemorySink::new()).build();
    logger.start_timer("x");
    thread::sleep(Duration::from_millis(50));
    let elapsed = logger.stop_timer("x").unwrap();
    assert!(elapsed >= Duration::from_millis(50), "{elapsed:?}");
    assert!(elapsed < Duration::from_secs(2), "{elapsed:?}");
}

#[test]
fn unknown_timer_is_an_error() {
    let logger = Logger::default();
    let err = logger.stop_timer("missing").unwrap_err();
    assert!(matches!(err, Error::UnknownTimer(ref id) if id == "missing"));
    assert_eq!(err.to_string(), "unknown timer id: missing");
}

#[test]
fn stopping_twice_fails_the_second_time() {
    let logger = Logger::builder().sink(MemorySink::new()).build();
    logger.start_timer("once");
    assert!(logger.stop_timer("once").is_ok());
    assert!(logger.stop_timer("once").is_err());
}

#[test]
fn restarting_resets_the_start() {
    let logger = Logger::builder().sink(MemorySink::new()).build();
    logger.start_timer("r");
    thread::sleep(Duration::from_millis(100));
    logger.start_timer("r");
    let elapsed = logger.stop_timer("r").unwrap();
    assert!(elapsed < Duration::from_millis(100), "{elapsed:?}");
}

#[test]
fn stop_and_log_reports_at_debug_level() {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .colors(false)
        .no_timestamps()
        .sink(sink.clone())
        .build();

    logger.start_timer("load");
    logger
        .stop_timer_and_log("load", "config", Some("boot".into()))
        .unwrap();

    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].level, Level::Debug);
    assert!(
        entries[0]
            .message
            .starts_with("config -> measured time for Id(load): "),
        "{}",
        entries[0].message
    );
    assert!(entries[0].message.ends_with("ms"));
    assert!(entries[0].prefix.ends_with("boot:"));
}
