// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use welcome_booklet::app::{self, Flags};
use welcome_booklet::logging::{init_logging, LogConfig};

const HELP: &str = "\
welcome_booklet

USAGE:
  welcome_booklet [OPTIONS] [BOOKLET]

ARGS:
  <BOOKLET>              Booklet HTML file, or a directory containing index.html.
                         The built-in sample is shown when omitted.

OPTIONS:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --log-level <LEVEL>    error, warn, info, debug or trace
  -h, --help             Print this help
";

fn parse_args() -> Result<(Flags, Option<String>), pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let log_level = args.opt_value_from_str("--log-level")?;
    let booklet_path = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from);

    Ok((
        Flags {
            lang,
            booklet_path,
            config_dir,
        },
        log_level,
    ))
}

fn main() -> iced::Result {
    let (flags, log_level) = match parse_args() {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let log_config = LogConfig::from_level_name(log_level.as_deref());
    let verbose = log_config.level >= tracing::Level::DEBUG;
    init_logging(&log_config.with_timestamps(verbose).with_target(verbose));
    tracing::info!(booklet = ?flags.booklet_path, "starting");

    app::run(flags)
}
