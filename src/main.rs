use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use playlist_insights::{web, Config, PlaylistAnalyzer};

#[derive(Parser)]
#[command(name = "playlist-insights")]
#[command(about = "Chart the genres and audio features of a Spotify playlist")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the web front end
    Serve {
        /// Address to listen on (or set PLAYLIST_INSIGHTS_BIND env var)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Analyze one playlist and write the report to an HTML file
    Analyze {
        /// Playlist URL, spotify: URI or bare playlist ID
        playlist_url: String,

        /// Where to write the report
        #[arg(short, long, default_value = "playlist_report.html")]
        output: PathBuf,

        /// Maximum concurrent catalog requests (or set PLAYLIST_INSIGHTS_CONCURRENCY env var)
        #[arg(long)]
        concurrency: Option<usize>,
    },

    /// Show setup guide
    Setup,
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    match cli.command {
        Commands::Serve { bind } => {
            serve(bind).await?;
        }
        Commands::Analyze {
            playlist_url,
            output,
            concurrency,
        } => {
            analyze(&playlist_url, &output, concurrency).await?;
        }
        Commands::Setup => {
            show_setup_guide();
        }
    }

    Ok(())
}

fn load_config() -> Result<Config> {
    let config = Config::from_env().context("Failed to load configuration")?;

    let missing = config.get_missing_config();
    if !missing.is_empty() {
        println!("{}", "Missing configuration:".red());
        for item in &missing {
            println!("   - {}", item);
        }
        println!(
            "\n{}",
            "Run `playlist-insights setup` to see how to provide credentials.".yellow()
        );
        std::process::exit(1);
    }

    Ok(config)
}

async fn serve(bind: Option<String>) -> Result<()> {
    let config = load_config()?;
    let bind_addr = bind.unwrap_or_else(|| config.bind_addr.clone());

    let analyzer = PlaylistAnalyzer::connect(&config)
        .await
        .context("Failed to connect to Spotify")?;

    let app = web::build_router(web::AppState::new(analyzer));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    info!("Listening on http://{}", bind_addr);
    println!("{} http://{}", "Playlist Insights running at".green(), bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn analyze(playlist_url: &str, output: &Path, concurrency: Option<usize>) -> Result<()> {
    println!("{}", "Playlist Insights".cyan().bold());
    println!("{}", "=".repeat(50));

    let mut config = load_config()?;
    if let Some(concurrency) = concurrency {
        config.max_concurrency = concurrency.max(1);
    }

    let analyzer = PlaylistAnalyzer::connect(&config)
        .await
        .context("Failed to connect to Spotify")?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("Invalid progress template")?,
    );
    spinner.set_message("Fetching tracks, artists and audio features...");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let analysis = analyzer.analyze(playlist_url).await;
    spinner.finish_and_clear();
    let analysis = analysis.context("Failed to analyze playlist")?;

    std::fs::write(output, analysis.to_html())
        .with_context(|| format!("Failed to write {}", output.display()))?;

    let dated = analysis
        .records
        .iter()
        .filter(|r| r.release_date.is_some())
        .count();

    println!("Playlist: {}", analysis.playlist_id.green());
    println!("Tracks analyzed: {}", analysis.records.len());
    println!("Tracks with a release date: {}", dated);
    println!("Genre rows: {}", analysis.genre_rows.len());
    println!("Artists charted: {}", analysis.data.artists.len());
    println!(
        "\n{} {}",
        "Report written to".green(),
        output.display().to_string().cyan()
    );

    Ok(())
}

fn show_setup_guide() {
    println!("{}", "Playlist Insights Setup Guide".cyan().bold());
    println!("{}", "=".repeat(50));

    println!("\n{}", "1. Spotify API Setup".yellow());
    println!("   - Go to https://developer.spotify.com/dashboard/");
    println!("   - Create a new app");
    println!("   - Copy your Client ID and Client Secret");

    println!("\n{}", "2. Configuration".yellow());
    println!("   - Create a .env file with:");
    println!("     SPOTIFY_CLIENT_ID=your_spotify_client_id");
    println!("     SPOTIFY_CLIENT_SECRET=your_spotify_client_secret");
    println!("   - Optional:");
    println!("     PLAYLIST_INSIGHTS_BIND=127.0.0.1:5000");
    println!("     PLAYLIST_INSIGHTS_CONCURRENCY=8");

    println!("\n{}", "3. Usage".yellow());
    println!("   - playlist-insights serve                      (web front end)");
    println!("   - playlist-insights analyze <playlist-url>     (write playlist_report.html)");

    println!("\n{}", "Ready to chart some playlists!".green());
}
