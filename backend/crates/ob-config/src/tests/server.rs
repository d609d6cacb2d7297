use crate::Config;
use crate::tests::{EnvGuard, VALID_SECRET, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Server
// =========================================================================

#[test]
#[serial]
fn given_port_below_1024_when_validate_then_error() {
    // Given
    let _env = setup_config_dir();
    let _secret = EnvGuard::set("OB_AUTH_JWT_SECRET", VALID_SECRET);
    let _port = EnvGuard::set("OB_SERVER_PORT", "80");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_port_zero_or_1024_when_validate_then_ok() {
    for port in ["0", "1024"] {
        // Given
        let _env = setup_config_dir();
        let _secret = EnvGuard::set("OB_AUTH_JWT_SECRET", VALID_SECRET);
        let _port = EnvGuard::set("OB_SERVER_PORT", port);

        // When
        let config = Config::load().unwrap();

        // Then
        assert_that!(config.validate(), ok(anything()));
    }
}

#[test]
#[serial]
fn given_zero_request_timeout_when_validate_then_error() {
    // Given
    let _env = setup_config_dir();
    let _secret = EnvGuard::set("OB_AUTH_JWT_SECRET", VALID_SECRET);
    let _timeout = EnvGuard::set("OB_SERVER_REQUEST_TIMEOUT_SECS", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}
