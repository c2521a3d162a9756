use clap::Parser;

use dayplan_core::Config;

mod display;
mod session;
mod sinks;

#[derive(Parser)]
#[command(name = "dayplan", version, about = "Interactive daily activity planner")]
struct Cli {
    /// Print events as JSON lines instead of notification text
    #[arg(long)]
    json: bool,

    /// Disable the desktop notification channel
    #[arg(long)]
    no_desktop: bool,

    /// Override the countdown tick period in seconds
    #[arg(long, value_name = "SECS")]
    tick_secs: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("config: {e}; using defaults");
        Config::default()
    });
    if let Some(secs) = cli.tick_secs {
        config.cadence.tick_secs = secs;
    }
    if cli.no_desktop {
        config.notifications.desktop = false;
    }

    let session = session::Session::new(config, cli.json);
    if let Err(e) = session.run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
