// SPDX-License-Identifier: MPL-2.0
use iced_banners::app::{self, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        design: parse_path(&mut args, "--design"),
        config: parse_path(&mut args, "--config"),
    };

    app::run(flags)
}

fn parse_path(args: &mut pico_args::Arguments, key: &'static str) -> Option<PathBuf> {
    match args.opt_value_from_str::<_, PathBuf>(key) {
        Ok(path) => path,
        Err(err) => {
            log::warn!("Ignoring {key}: {err}");
            None
        }
    }
}
