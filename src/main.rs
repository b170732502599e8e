// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use swipe_button::app::{self, Flags};

const HELP: &str = "\
Swipe to confirm demo

USAGE:
  swipe_button [OPTIONS]

OPTIONS:
  --config <FILE>   Attribute file to load instead of the default location
  --text <LABEL>    Label shown on the button
  -h, --help        Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        config_path: args.opt_value_from_os_str("--config", |s| {
            Ok::<PathBuf, std::convert::Infallible>(PathBuf::from(s))
        })?,
        text: args.opt_value_from_str("--text")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
