// SPDX-License-Identifier: MPL-2.0
use otp_entry::app::{self, paths, Flags};
use std::path::PathBuf;

const HELP: &str = "\
otp_entry - six-digit one-time-password entry form

USAGE:
  otp_entry [OPTIONS]

OPTIONS:
  --lang <id>            UI language (e.g. en-US, fr)
  --config-dir <dir>     Directory holding settings.toml
  --diagnostics <file>   Write a JSON diagnostics report on exit
  -h, --help             Print this help
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        config_dir: opt_value(&mut args, "--config-dir"),
        diagnostics_path: opt_value::<PathBuf>(&mut args, "--diagnostics"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("Ignoring unexpected arguments: {rest:?}");
    }

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}

fn opt_value<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        log::warn!("Ignoring {key}: {err}");
        None
    })
}
