use packwise_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn second_install_is_a_subscriber_error() {
    let _first = Logger::builder()
        .name("packwise-first")
        .level(LevelFilter::INFO)
        .init()
        .expect("first install should succeed");

    let err = Logger::builder()
        .name("packwise-second")
        .init()
        .expect_err("second install should fail");

    assert!(matches!(err, LoggerError::Subscriber { .. }), "unexpected error: {err}");
}
