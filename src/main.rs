// SPDX-License-Identifier: MPL-2.0
use iced_playback::app::{self, paths, Flags};
use log::LevelFilter;

const HELP: &str = "\
iced_playback: play a video with play, pause and restart controls

USAGE:
  iced_playback [OPTIONS] [SOURCE]

ARGS:
  <SOURCE>              Video file path or URL (default: configured source)

OPTIONS:
  --lang <ID>           UI language, e.g. en-US or fr
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help

ENVIRONMENT:
  ICED_PLAYBACK_CONFIG_DIR   Config directory when --config-dir is absent
  ICED_PLAYBACK_LOG          Log filter, e.g. debug or iced_playback=trace
";

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let source = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Some(Flags {
        lang,
        source,
        config_dir,
    }))
}

fn main() -> iced::Result {
    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Info)
        .parse_env("ICED_PLAYBACK_LOG")
        .init();

    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(e) => {
            eprintln!("error: {e}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}
