use log::{debug, info, warn};
use lyrembed::clients::entities::{Album, Song};
use lyrembed::clients::errors::{Error, Result};
use lyrembed::clients::parsing::AlbumListing;
use lyrembed::clients::{CohereClient, LetrasClient, LetrasParser};
use scraper::Html;

// Configuration for the Scraper struct
pub struct Config {
    pub letras: LetrasClient,
    pub cohere: CohereClient,
    pub artist: String,
    pub max_albums: usize,
}

pub struct ConfigBuilder {
    letras: Option<LetrasClient>,
    cohere: Option<CohereClient>,
    artist: Option<String>,
    max_albums: Option<usize>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            letras: None,
            cohere: None,
            artist: None,
            max_albums: None, // Cap on albums kept from the discography page. Default is 1.
        }
    }

    pub fn artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn max_albums(mut self, max_albums: usize) -> Self {
        self.max_albums = Some(max_albums);
        self
    }

    pub fn build(self) -> Result<Config> {
        let letras = match self.letras {
            Some(l) => l,
            None => LetrasClient::try_default()?,
        };
        let cohere = match self.cohere {
            Some(c) => c,
            None => CohereClient::try_default()?,
        };
        Ok(Config {
            letras,
            cohere,
            artist: self.artist.unwrap_or_else(|| "coldplay".to_string()),
            max_albums: self.max_albums.unwrap_or(1),
        })
    }
}

// The main Scraper struct that runs the scrape-then-embed pipeline
pub struct Scraper {
    config: Config,
    parser: LetrasParser,
}

impl Scraper {
    pub fn new(config: Config) -> Self {
        Scraper {
            config,
            parser: LetrasParser::new(),
        }
    }

    pub async fn run(&self) -> Result<Vec<Album>> {
        info!("Starting scrape for artist {} ...", self.config.artist);
        let mut albums = self.scrape_albums().await?;

        // One flat batch over all albums, in traversal order
        let texts: Vec<String> = albums
            .iter()
            .flat_map(|album| &album.songs)
            .map(|song| song.lyrics.clone())
            .collect();

        if texts.is_empty() {
            info!("No songs with lyrics were scraped. Skipping embedding.");
            return Ok(albums);
        }

        debug!("Requesting embeddings for {} lyrics texts", texts.len());
        let embeddings = self.config.cohere.embed(&texts).await?;
        attach_embeddings(&mut albums, embeddings)?;

        info!(
            "Scrape completed successfully: {} albums, {} songs embedded",
            albums.len(),
            texts.len()
        );
        Ok(albums)
    }

    async fn scrape_albums(&self) -> Result<Vec<Album>> {
        let artist = &self.config.artist;
        debug!("Fetching discography page for {artist} ...");

        let body = self
            .config
            .letras
            .fetch_discography(artist)
            .await
            .ok_or_else(|| Error::DiscographyUnavailable(artist.clone()))?;

        // Html holds non-Send internals, keep it out of the await points below
        let listings = {
            let document = Html::parse_document(&body);
            self.parser.parse_discography(
                &document,
                self.config.letras.base_url(),
                self.config.max_albums,
            )
        };
        debug!("Found {} albums for {artist}", listings.len());

        let mut albums = Vec::with_capacity(listings.len());
        for listing in listings {
            albums.push(self.scrape_album(listing).await);
        }
        Ok(albums)
    }

    async fn scrape_album(&self, listing: AlbumListing) -> Album {
        info!("{}", listing.title);

        let mut songs = Vec::new();
        for url in &listing.song_urls {
            if let Some(song) = self.scrape_song(url).await {
                songs.push(song);
            }
        }

        Album {
            title: listing.title,
            songs,
        }
    }

    // Fetch and parse one song page. Any failure skips the song.
    async fn scrape_song(&self, url: &str) -> Option<Song> {
        let body = self.config.letras.fetch(url).await?;

        let parsed = {
            let document = Html::parse_document(&body);
            self.parser.parse_song_page(&document)
        };

        match parsed {
            Ok(page) => Some(Song {
                title: page.title,
                lyrics: page.lyrics,
                url: url.to_string(),
                embedding: None,
            }),
            Err(e) => {
                warn!("Couldn't get lyrics from {url}: {e}");
                None
            }
        }
    }
}

// Distribute one embedding per song, consuming the batch in traversal order
fn attach_embeddings(albums: &mut [Album], embeddings: Vec<Vec<f32>>) -> Result<()> {
    let expected: usize = albums.iter().map(|album| album.songs.len()).sum();
    if embeddings.len() != expected {
        return Err(Error::EmbeddingCountMismatch {
            requested: expected,
            received: embeddings.len(),
        });
    }

    let mut embeddings = embeddings.into_iter();
    for album in albums.iter_mut() {
        for song in album.songs.iter_mut() {
            song.embedding = embeddings.next();
        }
    }
    Ok(())
}
