use clap::{Parser, Subcommand};
use log::info;
use lyrembed::clients::errors::Result;

use crate::scrape;

#[derive(Parser)]
#[command(name = "lyrembed")]
#[command(version, about = "Scrape an artist's lyrics and embed them with Cohere", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape the artist's discography and embed every song's lyrics
    Scrape {
        /// Artist name as shown on letras.mus.br
        #[arg(long, default_value = "coldplay")]
        artist: String,

        /// Keep at most this many albums from the discography page
        #[arg(long, default_value_t = 1)]
        max_albums: usize,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Scrape { artist, max_albums } => {
            scrape_artist(artist, *max_albums).await?;
        }
    }
    Ok(())
}

async fn scrape_artist(artist: &str, max_albums: usize) -> Result<()> {
    info!("Building config ...");
    let config = scrape::ConfigBuilder::new()
        .artist(artist)
        .max_albums(max_albums)
        .build()?;

    let scraper = scrape::Scraper::new(config);
    let albums = scraper.run().await?;

    // The first embedding doubles as the run's visible output
    if let Some(embedding) = albums
        .first()
        .and_then(|album| album.songs.first())
        .and_then(|song| song.embedding.as_ref())
    {
        println!("{embedding:?}");
    }

    Ok(())
}
