use clap::Parser as _;
use ring_keypad_tools::commands;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(clap::Parser)]
#[clap(version, about)]
enum Commands {
    Tables(commands::tables::Args),
    Codes(commands::codes::Args),
    Events(commands::events::Args),
    State(commands::build::StateArgs),
    Alarm(commands::build::AlarmArgs),
    Chime(commands::build::ChimeArgs),
}

fn end<E: std::error::Error>(r: Result<(), E>) {
    std::process::exit(match r {
        Ok(_) => 0,
        Err(e) => {
            eprintln!("error: {e}");
            let mut cause = e.source();
            while let Some(e) = cause {
                eprintln!("  because: {e}");
                cause = e.source();
            }
            1
        }
    });
}

fn main() {
    let filter_description =
        std::env::var("RING_KEYPAD_TOOLS_LOG").unwrap_or_else(|_| "warn".to_string());
    let filter = match filter_description.parse::<tracing_subscriber::filter::targets::Targets>() {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("error: RING_KEYPAD_TOOLS_LOG is not a valid filter");
            eprintln!("  because: {e}");
            std::process::exit(1);
        }
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
    match Commands::parse() {
        Commands::Tables(args) => end(commands::tables::run(args)),
        Commands::Codes(args) => end(commands::codes::run(args)),
        Commands::Events(args) => end(commands::events::run(args)),
        Commands::State(args) => end(commands::build::run_state(args)),
        Commands::Alarm(args) => end(commands::build::run_alarm(args)),
        Commands::Chime(args) => end(commands::build::run_chime(args)),
    }
}
