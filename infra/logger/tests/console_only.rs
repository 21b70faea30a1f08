use packwise_logger::{LevelFilter, Logger};

#[test]
fn console_logger_has_no_file_writer() {
    let logger = Logger::builder()
        .name("packwise-console")
        .level(LevelFilter::DEBUG)
        .init()
        .expect("console logger should install");

    tracing::debug!(order = 12_001, "console logging works");
    assert!(!logger.writes_files());
}
