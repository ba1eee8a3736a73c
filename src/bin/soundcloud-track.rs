use clap::{Parser, Subcommand};
use soundcloud_track::{
    get_soundcloud_music_details, ClientConfig, SoundCloudClient, SoundCloudMusic, TrackPacket,
};

/// Resolve SoundCloud tracks and print their stream locations
#[derive(Parser)]
#[command(
    name = "soundcloud-track",
    about = "Resolve SoundCloud tracks and print their stream locations",
    long_about = None
)]
struct Cli {
    /// Show detailed debug information
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the metadata of a track URL as JSON
    Resolve {
        /// Public track URL, e.g. https://soundcloud.com/artist/track
        url: String,
    },
    /// Resolve a track URL and print its direct stream location
    Stream {
        /// Public track URL, e.g. https://soundcloud.com/artist/track
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: {e}");
            eprintln!();
            eprintln!("Please set the following environment variable:");
            eprintln!("  SOUNDCLOUD_CLIENT_ID=your_client_id");
            std::process::exit(1);
        }
    };

    let client = SoundCloudClient::new(
        Box::new(http_client::native::NativeClient::new()),
        config,
    );

    if let Err(e) = run(args.command, &client).await {
        eprintln!("❌ Command failed: {e}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run(command: Command, client: &SoundCloudClient) -> soundcloud_track::Result<()> {
    match command {
        Command::Resolve { url } => {
            let details = get_soundcloud_music_details(client, &url).await?;
            println!("{}", serde_json::to_string_pretty(&details)?);
        }
        Command::Stream { url } => {
            let details = get_soundcloud_music_details(client, &url).await?;
            let track = SoundCloudMusic::new(TrackPacket::from_details(url, details));
            log::info!("Resolved {track}");
            println!("{}", track.mrl(client).await?);
        }
    }
    Ok(())
}
