//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::input::{Delay, ScanCode};
use crate::infrastructure::InjectorBackend;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.create(&AppConfig::defaults()).await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;
    validate_config_value(key, value)?;

    let mut config = store.read().await?.unwrap_or_default();
    let value = value.trim().to_string();

    match key {
        "backend" => config.backend = Some(value.to_lowercase()),
        "scan_code" => config.scan_code = Some(value.clone()),
        "click_delay" => config.click_delay = Some(value.clone()),
        "key_delay" => config.key_delay = Some(value.clone()),
        _ => unreachable!(), // Already validated
    }

    store.write(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;

    let config = store.read().await?.unwrap_or_default();

    let value = match key {
        "backend" => config.backend,
        "scan_code" => config.scan_code,
        "click_delay" => config.click_delay,
        "key_delay" => config.key_delay,
        _ => unreachable!(),
    };

    presenter.output(value.as_deref().unwrap_or(NOT_SET));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = match store.read().await? {
        Some(config) => config,
        None => {
            presenter.info(&format!("No config file at {}", store.path().display()));
            AppConfig::empty()
        }
    };

    presenter.key_value("backend", config.backend.as_deref().unwrap_or(NOT_SET));
    presenter.key_value("scan_code", config.scan_code.as_deref().unwrap_or(NOT_SET));
    presenter.key_value(
        "click_delay",
        config.click_delay.as_deref().unwrap_or(NOT_SET),
    );
    presenter.key_value("key_delay", config.key_delay.as_deref().unwrap_or(NOT_SET));

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn ensure_valid_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        })
    }
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "backend" => {
            let backend = value
                .trim()
                .parse::<InjectorBackend>()
                .map_err(|e| invalid(e.to_string()))?;
            if !backend.is_supported() {
                return Err(invalid(format!(
                    "Backend '{}' is not available on this platform",
                    backend
                )));
            }
        }
        "scan_code" => {
            value
                .parse::<ScanCode>()
                .map_err(|e| invalid(e.to_string()))?;
        }
        "click_delay" | "key_delay" => {
            value.parse::<Delay>().map_err(|e| invalid(e.to_string()))?;
        }
        _ => {}
    }
    Ok(())
}
