mod cli;
mod commands;
mod diagnostics;

use tracing_subscriber::EnvFilter;

use cli::{
    CheckParams, EventsParams, LoopsParams, ReformatParams, TokensParams, WriteParams, build_cli,
};

fn main() {
    let matches = build_cli().get_matches();

    if let Some((_, m)) = matches.subcommand() {
        init_logging(m.get_count("verbose"));
    }

    match matches.subcommand() {
        Some(("tokens", m)) => {
            let params = TokensParams::from_matches(m);
            commands::tokens::run(params.into());
        }
        Some(("events", m)) => {
            let params = EventsParams::from_matches(m);
            commands::events::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("reformat", m)) => {
            let params = ReformatParams::from_matches(m);
            commands::reformat::run(params.into());
        }
        Some(("write", m)) => {
            let params = WriteParams::from_matches(m);
            commands::write::run(params.into());
        }
        Some(("loops", m)) => {
            let params = LoopsParams::from_matches(m);
            commands::loops::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// `-v` wins over `RUST_LOG`; without either only warnings are shown.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
