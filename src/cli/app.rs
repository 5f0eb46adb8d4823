//! App runner for input commands

use std::process::ExitCode;

use crate::application::ports::{ConfigStore, InputInjector, Pause};
use crate::application::InputFacade;
use crate::domain::config::AppConfig;
use crate::domain::input::MouseButton;
use crate::infrastructure::{create_injector, InjectorBackend, ThreadPause, XdgConfigStore};

use super::args::{InputCommand, InputOptions};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// What an input command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// Events were sent; the message describes them
    Injected(String),
    /// Result of a key-state query
    KeyState(bool),
}

/// Run one input command against the configured backend
pub async fn run_input(command: InputCommand, options: InputOptions) -> ExitCode {
    let presenter = Presenter::new();

    let injector = match create_injector(options.backend) {
        Ok(injector) => injector,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if options.backend == InjectorBackend::Enigo && matches!(command, InputCommand::State { .. }) {
        presenter.warn("The enigo backend cannot read key state; every key reports released");
    }

    let facade = InputFacade::new(injector, ThreadPause::new()).with_scan_code(options.scan_code);

    // Facade calls block for their delay
    let outcome =
        tokio::task::spawn_blocking(move || execute(&facade, command, &options)).await;

    match outcome {
        Ok(InputOutcome::Injected(message)) => {
            presenter.success(&message);
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(InputOutcome::KeyState(pressed)) => {
            presenter.output(Presenter::key_state_word(pressed));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&format!("Input task failed: {}", e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Execute a command on the facade, filling omitted delays from `options`
pub fn execute<I: InputInjector, P: Pause>(
    facade: &InputFacade<I, P>,
    command: InputCommand,
    options: &InputOptions,
) -> InputOutcome {
    match command {
        InputCommand::Move { x, y } => {
            facade.move_cursor(x, y);
            InputOutcome::Injected(format!("Moved pointer by ({}, {})", x, y))
        }
        InputCommand::Click { button, delay } => {
            let delay = delay.unwrap_or(options.click_delay);
            let button: MouseButton = button.into();
            facade.click(button, delay);
            InputOutcome::Injected(format!("Clicked {} button ({})", button, delay))
        }
        InputCommand::Press { key, delay } => {
            let delay = delay.unwrap_or(options.key_delay);
            facade.press_key(key, delay);
            InputOutcome::Injected(format!("Pressed key {} ({})", key, delay))
        }
        InputCommand::Down { key, delay } => {
            let delay = delay.unwrap_or(options.key_delay);
            facade.key_down(key, delay);
            InputOutcome::Injected(format!("Key {} down after {}", key, delay))
        }
        InputCommand::Up { key, delay } => {
            let delay = delay.unwrap_or(options.key_delay);
            facade.key_up(key, delay);
            InputOutcome::Injected(format!("Key {} up after {}", key, delay))
        }
        InputCommand::State { key, mask } => InputOutcome::KeyState(facade.is_key_pressed(key, mask)),
    }
}

/// Load and merge configuration from file and CLI (CLI already carries env)
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.read().await {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            tracing::warn!("Ignoring config file {}: {}", store.path().display(), e);
            AppConfig::empty()
        }
    };

    // Merge: defaults < file < cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::ButtonArg;
    use crate::domain::input::{
        Delay, KeyStateMask, KeyboardEventFlags, MouseEventFlags, ScanCode, VirtualKey,
    };
    use crate::infrastructure::{RecordedCall, RecordingInjector};

    fn options() -> InputOptions {
        InputOptions {
            backend: InjectorBackend::NoOp,
            scan_code: ScanCode::DEFAULT,
            click_delay: Delay::from_millis(15),
            key_delay: Delay::from_millis(25),
        }
    }

    fn facade(recorder: &RecordingInjector) -> InputFacade<RecordingInjector, RecordingInjector> {
        InputFacade::new(recorder.clone(), recorder.clone())
    }

    #[test]
    fn click_without_delay_uses_configured_click_delay() {
        let recorder = RecordingInjector::new();
        let outcome = execute(
            &facade(&recorder),
            InputCommand::Click {
                button: ButtonArg::Right,
                delay: None,
            },
            &options(),
        );

        assert_eq!(
            outcome,
            InputOutcome::Injected("Clicked right button (15ms)".to_string())
        );
        assert_eq!(
            recorder.calls()[1],
            RecordedCall::Pause(Delay::from_millis(15))
        );
    }

    #[test]
    fn explicit_delay_overrides_configured_key_delay() {
        let recorder = RecordingInjector::new();
        execute(
            &facade(&recorder),
            InputCommand::Press {
                key: VirtualKey::new(0x41),
                delay: Some(Delay::from_millis(5)),
            },
            &options(),
        );

        assert_eq!(recorder.calls()[1], RecordedCall::Pause(Delay::from_millis(5)));
    }

    #[test]
    fn key_up_command_sends_single_up() {
        let recorder = RecordingInjector::new();
        execute(
            &facade(&recorder),
            InputCommand::Up {
                key: VirtualKey::TAB,
                delay: None,
            },
            &options(),
        );

        assert_eq!(
            recorder.calls(),
            vec![
                RecordedCall::Pause(Delay::from_millis(25)),
                RecordedCall::Keyboard {
                    key: VirtualKey::TAB,
                    scan: ScanCode::DEFAULT,
                    flags: KeyboardEventFlags::KEYUP,
                    extra_info: 0,
                },
            ]
        );
    }

    #[test]
    fn move_command_reports_deltas() {
        let recorder = RecordingInjector::new();
        let outcome = execute(
            &facade(&recorder),
            InputCommand::Move { x: -3, y: 4 },
            &options(),
        );

        assert_eq!(
            outcome,
            InputOutcome::Injected("Moved pointer by (-3, 4)".to_string())
        );
        assert_eq!(
            recorder.injections(),
            vec![RecordedCall::Mouse {
                flags: MouseEventFlags::MOVE,
                dx: -3,
                dy: 4,
                data: 0,
                extra_info: 0,
            }]
        );
    }

    #[test]
    fn state_command_reports_query() {
        let recorder = RecordingInjector::new();
        recorder.set_key_state(VirtualKey::SHIFT, i16::MIN);
        let outcome = execute(
            &facade(&recorder),
            InputCommand::State {
                key: VirtualKey::SHIFT,
                mask: KeyStateMask::DOWN,
            },
            &options(),
        );

        assert_eq!(outcome, InputOutcome::KeyState(true));
        assert!(recorder.injections().is_empty());
    }
}
