// SPDX-License-Identifier: MPL-2.0
use iced_banner::app::{self, Flags};

fn main() -> iced::Result {
    // Log to stderr (set `RUST_LOG=debug` for haptic and timer traces).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let flags = match Flags::from_args(pico_args::Arguments::from_env()) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("usage: iced_banner [--position top|bottom] [--dismiss-after SECS] [--config-dir DIR]");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
