//! The global logger is process-wide, so everything about it lives in one test.

use dotlog::{Logger, MemorySink, global};

#[test]
fn global_logger_lifecycle() {
    assert!(global::get().is_none());
    // Before init the free functions do nothing.
    global::info("lost");

    let sink = MemorySink::new();
    let logger = Logger::builder()
        .colors(false)
        .no_timestamps()
        .sink(sink.clone())
        .build();
    assert!(global::init(logger));
    assert!(!global::init(Logger::default()));
    assert!(global::init_from_config().is_ok());

    global::info("kept");
    global::todo("later");
    assert_eq!(sink.messages(), vec!["kept", "later"]);
    assert!(global::get().is_some());
}
