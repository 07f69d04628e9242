use super::*;

#[test]
fn defaults_apply_when_nothing_is_configured() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");

    assert_eq!(settings.server.addr.port(), DEFAULT_PORT);
    assert_eq!(settings.server.addr.ip().to_string(), DEFAULT_HOST);
    assert_eq!(settings.logging.level, LevelFilter::INFO);
    assert!(matches!(settings.logging.format, LogFormat::Compact));
    assert_eq!(
        settings.database.max_connections.get(),
        DEFAULT_DB_MAX_CONNECTIONS
    );
    assert!(settings.database.url.is_none());
}

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.server.port = Some(4000);
    raw.logging.level = Some("info".to_string());

    let cli = CliArgs {
        server_port: Some(4321),
        log_level: Some("debug".to_string()),
        ..CliArgs::default()
    };

    raw.apply_cli_overrides(&cli);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.server.addr.port(), 4321);
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
}

#[test]
fn cli_json_logging_enforces_format() {
    let mut raw = RawSettings::default();
    let cli = CliArgs {
        log_json: Some(true),
        ..CliArgs::default()
    };

    raw.apply_cli_overrides(&cli);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert!(matches!(settings.logging.format, LogFormat::Json));
}

#[test]
fn zero_port_is_rejected() {
    let mut raw = RawSettings::default();
    raw.server.port = Some(0);

    let err = Settings::from_raw(raw).expect_err("port 0 must be rejected");
    assert!(matches!(err, LoadError::Invalid { key: "server.port", .. }));
}

#[test]
fn zero_pool_size_is_rejected() {
    let mut raw = RawSettings::default();
    raw.database.max_connections = Some(0);

    let err = Settings::from_raw(raw).expect_err("pool size 0 must be rejected");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "database.max_connections",
            ..
        }
    ));
}

#[test]
fn blank_database_url_is_treated_as_unset() {
    let mut raw = RawSettings::default();
    raw.database.url = Some("   ".to_string());

    let settings = Settings::from_raw(raw).expect("valid settings");
    assert!(settings.database.url.is_none());
}

#[test]
fn invalid_log_level_is_rejected() {
    let mut raw = RawSettings::default();
    raw.logging.level = Some("loud".to_string());

    let err = Settings::from_raw(raw).expect_err("bogus level must be rejected");
    assert!(matches!(err, LoadError::Invalid { key: "logging.level", .. }));
}
