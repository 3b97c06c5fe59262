use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use coach::{commands, config, Topic, VehicleVariant};

#[derive(Parser)]
#[command(name = "coach")]
#[command(about = "Coach - vehicle guidance videos\nPick, override and reset the video shown for each guidance topic")]
#[command(version)]
struct Cli {
  /// Act on this vehicle instead of the selected one (3, Y, S, X, CT)
  #[arg(short = 'm', long, global = true)]
  vehicle: Option<VehicleVariant>,

  /// Enable debug logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Show the selected vehicle, or select another one
  Vehicle {
    /// Vehicle to select (3, Y, S, X, CT)
    choice: Option<VehicleVariant>,
  },
  /// List all topics with the video each one resolves to
  Topics,
  /// Show the video for a topic
  Show { topic: Topic },
  /// Save a custom video link for a topic (an empty link means no video)
  Set { topic: Topic, url: String },
  /// Go back to the recommended video for a topic
  Reset { topic: Topic },
  /// List the recommended playlist for a topic
  Playlist { topic: Topic },
  /// Use an entry from the recommended playlist
  Pick {
    topic: Topic,
    /// Zero-based position in the playlist
    index: usize,
  },
}

fn init_logging(verbose: bool) {
  let filter = if verbose {
    EnvFilter::new("coach=debug,warn")
  } else {
    EnvFilter::try_from_env("COACH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
  };

  tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  let data_dir = config::data_dir()?;
  let mut service = coach::open(&data_dir);
  let vehicle = cli.vehicle.unwrap_or_else(|| service.selected_vehicle());

  match cli.command {
    Commands::Vehicle { choice } => commands::vehicle(&mut service, choice)?,
    Commands::Topics => commands::list_topics(&service, vehicle)?,
    Commands::Show { topic } => commands::show(&service, vehicle, topic)?,
    Commands::Set { topic, url } => commands::set(&mut service, vehicle, topic, &url)?,
    Commands::Reset { topic } => commands::reset(&mut service, vehicle, topic)?,
    Commands::Playlist { topic } => commands::playlist(&service, vehicle, topic)?,
    Commands::Pick { topic, index } => commands::pick(&mut service, vehicle, topic, index)?,
  }

  Ok(())
}
