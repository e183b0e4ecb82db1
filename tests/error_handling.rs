use tardy_portal::config::PortalConfig;
use tardy_portal::error;
use tardy_portal::PortalError;
use std::error::Error;

#[test]
fn test_user_friendly_message() {
    let msg = error::user_friendly_message(&PortalError::ConfigError("bad tick".into()));
    assert!(msg.contains("bad tick"));
    assert!(msg.contains("Check your settings"));

    let denied = PortalError::from(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "nope",
    ));
    assert!(error::user_friendly_message(&denied).contains("Permission denied"));
}

#[test]
fn test_io_error_keeps_source() {
    let err = PortalError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
    assert!(err.source().is_some());
    assert!(PortalError::TuiError("x".into()).source().is_none());
}

#[test]
fn test_toml_errors_become_config_errors() {
    let parse_err = toml::from_str::<PortalConfig>("tick_rate_ms = [").unwrap_err();
    match PortalError::from(parse_err) {
        PortalError::ConfigError(msg) => assert!(msg.starts_with("TOML parsing error")),
        other => panic!("unexpected {:?}", other),
    }
}
