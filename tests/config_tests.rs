use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use wagerbook::error::{ConfigError, Error};
use wagerbook::infrastructure::config::settings::Config;

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn write_temp_config(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let suffix = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!("wagerbook-config-test-{nanos}-{suffix}.toml"));
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn config_loads_full_file() {
    let toml = r#"
[ledger]
data_file = "/var/lib/wagerbook/ledger.json"
starting_balance = 500
commit_timeout_ms = 250
leaderboard_size = 5

[logging]
level = "debug"
format = "json"
"#;

    let path = write_temp_config(toml);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    let config = result.expect("valid config");
    assert_eq!(config.ledger.starting_balance, 500);
    assert_eq!(config.ledger.leaderboard_size, 5);
    assert_eq!(config.ledger.policy().commit_timeout.as_millis(), 250);
    assert_eq!(config.logging.format, "json");
}

#[test]
fn config_rejects_negative_starting_balance() {
    let path = write_temp_config("[ledger]\nstarting_balance = -1\n");
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "starting_balance",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid starting balance error, got {err}"),
        Ok(config) => panic!(
            "Expected negative starting balance to be rejected, got {}",
            config.ledger.starting_balance
        ),
    }
}

#[test]
fn config_rejects_zero_timeout() {
    let path = write_temp_config("[ledger]\ncommit_timeout_ms = 0\n");
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "commit_timeout_ms",
            ..
        }))
    ));
}

#[test]
fn config_rejects_unknown_log_format() {
    let path = write_temp_config("[logging]\nlevel = \"info\"\nformat = \"xml\"\n");
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "format",
            ..
        }))
    ));
}

#[test]
fn config_reports_malformed_toml() {
    let path = write_temp_config("[ledger\n");
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}

#[test]
fn missing_file_is_a_read_error_but_load_or_default_falls_back() {
    let path = std::env::temp_dir().join("wagerbook-config-test-does-not-exist.toml");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
    let config = Config::load_or_default(&path).expect("defaults");
    assert_eq!(config.ledger.starting_balance, 1000);
}
