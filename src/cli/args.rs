//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::input::{Delay, KeyStateMask, MouseButton, ScanCode, VirtualKey};
use crate::infrastructure::InjectorBackend;

/// VeduInput - synthetic mouse and keyboard input
#[derive(Parser, Debug)]
#[command(name = "vedu-input")]
#[command(version)]
#[command(about = "Synthesize mouse and keyboard input and query key state")]
#[command(long_about = None)]
pub struct Cli {
    /// Input backend (native, enigo, noop)
    #[arg(
        short = 'b',
        long,
        global = true,
        value_name = "BACKEND",
        env = "VEDU_INPUT_BACKEND"
    )]
    pub backend: Option<String>,

    /// Hardware scan code sent with keyboard events (e.g., 0x45)
    #[arg(long, global = true, value_name = "CODE")]
    pub scan_code: Option<String>,

    /// Log every injected event to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Input(InputCommand),

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Input subcommands, one per facade operation
#[derive(Subcommand, Debug, Clone)]
pub enum InputCommand {
    /// Move the pointer by X, Y
    #[command(allow_negative_numbers = true)]
    Move {
        /// Horizontal delta
        x: i32,
        /// Vertical delta
        y: i32,
    },
    /// Click a mouse button (down, wait, up)
    Click {
        /// Button to click
        #[arg(value_enum, default_value_t = ButtonArg::Left)]
        button: ButtonArg,
        /// Time between down and up (e.g., 50, 50ms, 1s)
        #[arg(short = 'd', long, value_name = "TIME")]
        delay: Option<Delay>,
    },
    /// Press a key (down, wait, up)
    Press {
        /// Key code, letter/digit, or name (e.g., 0x41, a, enter)
        key: VirtualKey,
        /// Time between down and up
        #[arg(short = 'd', long, value_name = "TIME")]
        delay: Option<Delay>,
    },
    /// Wait, then send a single key down
    Down {
        /// Key code, letter/digit, or name
        key: VirtualKey,
        /// Time before the event
        #[arg(short = 'd', long, value_name = "TIME")]
        delay: Option<Delay>,
    },
    /// Wait, then send a single key up
    Up {
        /// Key code, letter/digit, or name
        key: VirtualKey,
        /// Time before the event
        #[arg(short = 'd', long, value_name = "TIME")]
        delay: Option<Delay>,
    },
    /// Print whether a key is pressed
    State {
        /// Key code, letter/digit, or name
        key: VirtualKey,
        /// State bits to test (down, pressed, any, or a code)
        #[arg(short = 'm', long, default_value = "down")]
        mask: KeyStateMask,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Mouse button argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ButtonArg {
    Left,
    Right,
    #[value(alias = "scroll")]
    Middle,
}

impl From<ButtonArg> for MouseButton {
    fn from(arg: ButtonArg) -> Self {
        match arg {
            ButtonArg::Left => MouseButton::Left,
            ButtonArg::Right => MouseButton::Right,
            ButtonArg::Middle => MouseButton::Middle,
        }
    }
}

/// Resolved settings for an input command
#[derive(Debug, Clone, Copy)]
pub struct InputOptions {
    pub backend: InjectorBackend,
    pub scan_code: ScanCode,
    /// Used when `click` has no `--delay`
    pub click_delay: Delay,
    /// Used when `press`, `down` or `up` has no `--delay`
    pub key_delay: Delay,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["backend", "scan_code", "click_delay", "key_delay"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_move_with_negative_numbers() {
        let cli = Cli::parse_from(["vedu-input", "move", "-10", "25"]);
        assert!(matches!(
            cli.command,
            Commands::Input(InputCommand::Move { x: -10, y: 25 })
        ));
    }

    #[test]
    fn cli_parses_click_defaults() {
        let cli = Cli::parse_from(["vedu-input", "click"]);
        if let Commands::Input(InputCommand::Click { button, delay }) = cli.command {
            assert_eq!(button, ButtonArg::Left);
            assert!(delay.is_none());
        } else {
            panic!("Expected Click command");
        }
    }

    #[test]
    fn cli_parses_click_with_delay() {
        let cli = Cli::parse_from(["vedu-input", "click", "right", "-d", "50ms"]);
        if let Commands::Input(InputCommand::Click { button, delay }) = cli.command {
            assert_eq!(button, ButtonArg::Right);
            assert_eq!(delay, Some(Delay::from_millis(50)));
        } else {
            panic!("Expected Click command");
        }
    }

    #[test]
    fn cli_parses_press_key() {
        let cli = Cli::parse_from(["vedu-input", "press", "0x41", "--delay", "1s"]);
        if let Commands::Input(InputCommand::Press { key, delay }) = cli.command {
            assert_eq!(key, VirtualKey::new(0x41));
            assert_eq!(delay, Some(Delay::from_secs(1)));
        } else {
            panic!("Expected Press command");
        }
    }

    #[test]
    fn cli_parses_state_mask() {
        let cli = Cli::parse_from(["vedu-input", "state", "shift", "--mask", "any"]);
        if let Commands::Input(InputCommand::State { key, mask }) = cli.command {
            assert_eq!(key, VirtualKey::SHIFT);
            assert_eq!(mask, KeyStateMask::ANY);
        } else {
            panic!("Expected State command");
        }
    }

    #[test]
    fn cli_state_mask_defaults_to_down() {
        let cli = Cli::parse_from(["vedu-input", "state", "a"]);
        if let Commands::Input(InputCommand::State { mask, .. }) = cli.command {
            assert_eq!(mask, KeyStateMask::DOWN);
        } else {
            panic!("Expected State command");
        }
    }

    #[test]
    fn cli_rejects_invalid_delay() {
        assert!(Cli::try_parse_from(["vedu-input", "click", "-d", "soon"]).is_err());
    }

    #[test]
    fn cli_rejects_invalid_key() {
        assert!(Cli::try_parse_from(["vedu-input", "press", "nosuchkey"]).is_err());
    }

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "vedu-input",
            "up",
            "tab",
            "--backend",
            "noop",
            "--scan-code",
            "0x1c",
            "-v",
        ]);
        assert_eq!(cli.backend, Some("noop".to_string()));
        assert_eq!(cli.scan_code, Some("0x1c".to_string()));
        assert!(cli.verbose);
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["vedu-input", "config", "set", "click_delay", "20ms"]);
        if let Commands::Config {
            action: ConfigAction::Set { key, value },
        } = cli.command
        {
            assert_eq!(key, "click_delay");
            assert_eq!(value, "20ms");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn cli_accepts_scroll_as_middle() {
        let cli = Cli::parse_from(["vedu-input", "click", "scroll"]);
        if let Commands::Input(InputCommand::Click { button, .. }) = cli.command {
            assert_eq!(button, ButtonArg::Middle);
        } else {
            panic!("Expected Click command");
        }
    }

    #[test]
    fn button_arg_converts_to_mouse_button() {
        assert_eq!(MouseButton::from(ButtonArg::Left), MouseButton::Left);
        assert_eq!(MouseButton::from(ButtonArg::Middle), MouseButton::Middle);
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("backend"));
        assert!(is_valid_config_key("key_delay"));
        assert!(!is_valid_config_key("invalid_key"));
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
