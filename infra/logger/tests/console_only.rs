use slm_logger::Logger;

#[test]
fn console_only_logger_has_no_guard() {
    let logger = Logger::builder()
        .name("slm-console-only")
        .console(true)
        .init()
        .expect("logger should initialize");

    tracing::info!("console logging is up");
    logger.flush();

    assert!(logger.guard().is_none(), "console-only logger should not hold a file guard");
}
