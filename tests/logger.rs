//! Tests for filtering, layout and routing.

use dotlog::{FormatPatch, Gate, Level, LevelMask, Logger, MemorySink, Message, Origin};

fn capture() -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .colors(false)
        .no_timestamps()
        .sink(sink.clone())
        .build();
    (logger, sink)
}

#[test]
fn builder_defaults() {
    let logger = Logger::builder().build();
    assert_eq!(logger.level(), LevelMask::ALL);
    assert_eq!(logger.gate(), Gate::Exact);
    assert!(!logger.is_silent());
    assert!(!logger.has_port());
}

#[test]
fn every_level_reaches_the_sink_by_default() {
    let (logger, sink) = capture();
    logger.trace("t");
    logger.debug("d");
    logger.todo("o");
    logger.info("i");
    logger.warn("w");
    logger.error("e");
    let levels: Vec<Level> = sink.entries().iter().map(|e| e.level).collect();
    assert_eq!(levels, Level::all().to_vec());
}

#[test]
fn warn_bit_alone_passes_only_warn_under_exact_gate() {
    let (logger, sink) = capture();
    logger.set_level(Level::Warn);
    logger.debug("debug");
    logger.info("info");
    logger.warn("warn");
    logger.error("error");
    assert_eq!(sink.messages(), vec!["warn"]);
}

#[test]
fn warn_bit_alone_passes_warn_and_error_under_cumulative_gate() {
    let (logger, sink) = capture();
    logger.set_gate(Gate::Cumulative);
    logger.set_level(Level::Warn);
    logger.debug("debug");
    logger.info("info");
    logger.warn("warn");
    logger.error("error");
    assert_eq!(sink.messages(), vec!["warn", "error"]);
}

#[test]
fn try_log_reports_filtering() {
    let (logger, _sink) = capture();
    logger.set_level(Level::Error);
    assert!(!logger.try_log(Level::Info, "no").unwrap());
    assert!(logger.try_log(Level::Error, "yes").unwrap());
    assert!(logger.enabled(Level::Error));
    assert!(!logger.enabled(Level::Info));
}

#[test]
fn line_contains_prefix_message_and_extras() {
    let (logger, sink) = capture();
    logger.info(Message::new("loaded").origin("cfg").arg(3).arg("files"));
    assert_eq!(sink.lines(), vec!["[Info]    cfg: loaded 3 files"]);
    let entry = &sink.entries()[0];
    assert_eq!(entry.origin, Some(Origin::from("cfg")));
    assert_eq!(entry.extras, vec!["3", "files"]);
}

#[test]
fn dotted_message_uses_logger_defaults() {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .colors(false)
        .no_timestamps()
        .format()
        .total_width(20)
        .fill_pattern("=")
        .done()
        .sink(sink.clone())
        .build();

    logger.info(Message::new("Hi").dotted());
    logger.info("plain");
    assert_eq!(sink.messages(), vec!["======== Hi ========", "plain"]);
}

#[test]
fn per_call_options_override_defaults() {
    let (logger, sink) = capture();
    logger.info(
        Message::new("Hi")
            .origin("app")
            .options(FormatPatch::new().dotted(true).total_width(20)),
    );
    assert_eq!(sink.messages(), vec!["------ Hi ------"]);
}

#[test]
fn logger_format_matches_logged_message() {
    let (logger, sink) = capture();
    let message = Message::new("").dotted();
    let expected = logger.format(&message);
    logger.warn(message);
    assert_eq!(sink.messages(), vec![expected.clone()]);
    assert!(expected.contains(" End "));
}

#[test]
fn port_replaces_the_sink_until_cleared() {
    let (logger, sink) = capture();
    let port = MemorySink::new();
    logger.set_port(port.clone());
    assert!(logger.has_port());

    logger.info(Message::new("to port").origin(Origin::named("flow", "n1")));
    assert!(sink.is_empty());
    assert_eq!(port.messages(), vec!["to port"]);
    assert_eq!(port.entries()[0].origin, Some(Origin::named("flow", "n1")));

    logger.clear_port();
    logger.info("to sink");
    assert_eq!(sink.messages(), vec!["to sink"]);
    assert_eq!(port.len(), 1);
}

#[test]
fn builder_port_is_installed() {
    let port = MemorySink::new();
    let logger = Logger::builder().port(port.clone()).build();
    logger.error("boom");
    assert_eq!(port.len(), 1);
}
