// SPDX-License-Identifier: MPL-2.0
use ecoleta::app::{self, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
Ecoleta - find waste collection points by state and city

USAGE:
  ecoleta [OPTIONS]

OPTIONS:
  --lang <LOCALE>         Interface language (e.g. en-US, pt-BR)
  --config-dir <PATH>     Directory holding settings.toml
  --directory-url <URL>   Base URL of the IBGE localities API
  -h, --help              Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        directory_url: args.opt_value_from_str("--directory-url")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ecoleta=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match parse_flags() {
        Ok(Some(flags)) => app::run(flags),
        Ok(None) => Ok(()),
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    }
}
