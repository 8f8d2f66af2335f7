// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::config::BannerPosition;
use crate::error::{Error, Result};
use std::path::PathBuf;
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Present without auto-dismiss.
    Present,
    /// Present with the configured auto-dismiss delay.
    PresentTimed,
    Dismiss,
    /// Dismiss and count the completion handler run.
    DismissWithHandler,
    /// Cycle the banner through sample icon/text updates.
    NextContent,
    /// Switch between top and bottom placement.
    TogglePosition,
    Tick(Instant), // Animation frame while the banner is moving or a timer is armed
    WindowResized(iced::Size),
}

/// Runtime flags parsed from the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flags {
    /// Overrides the configured screen edge.
    pub position: Option<BannerPosition>,
    /// Overrides the configured auto-dismiss delay (seconds).
    pub dismiss_after: Option<f32>,
    /// Directory holding `settings.toml`.
    pub config_dir: Option<PathBuf>,
}

impl Flags {
    /// Parses `--position`, `--dismiss-after` and `--config-dir`.
    ///
    /// Unknown arguments are rejected.
    pub fn from_args(mut args: pico_args::Arguments) -> Result<Self> {
        let flags = Flags {
            position: args.opt_value_from_str("--position")?,
            dismiss_after: args.opt_value_from_str("--dismiss-after")?,
            config_dir: args
                .opt_value_from_str::<_, String>("--config-dir")?
                .map(PathBuf::from),
        };

        let rest = args.finish();
        if let Some(unexpected) = rest.first() {
            return Err(Error::Cli(format!(
                "unexpected argument: {}",
                unexpected.to_string_lossy()
            )));
        }
        Ok(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn args(raw: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(raw.iter().map(OsString::from).collect())
    }

    #[test]
    fn empty_command_line_yields_defaults() {
        let flags = Flags::from_args(args(&[])).expect("no arguments is valid");
        assert_eq!(flags, Flags::default());
    }

    #[test]
    fn parses_all_flags() {
        let flags = Flags::from_args(args(&[
            "--position",
            "bottom",
            "--dismiss-after",
            "2.5",
            "--config-dir",
            "/tmp/banner",
        ]))
        .expect("valid arguments");

        assert_eq!(flags.position, Some(BannerPosition::Bottom));
        assert_eq!(flags.dismiss_after, Some(2.5));
        assert_eq!(flags.config_dir, Some(PathBuf::from("/tmp/banner")));
    }

    #[test]
    fn rejects_invalid_position() {
        let result = Flags::from_args(args(&["--position", "left"]));
        assert!(matches!(result, Err(Error::Cli(_))));
    }

    #[test]
    fn rejects_unexpected_arguments() {
        let result = Flags::from_args(args(&["stray"]));
        assert!(matches!(result, Err(Error::Cli(message)) if message.contains("stray")));
    }
}
