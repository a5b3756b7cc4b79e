use log::debug;
use scraper::{ElementRef, Html, Selector};

use crate::clients::errors::{Error, Result};

/// Shown by the site in place of lyrics that nobody has transcribed yet.
/// Compared against properly decoded page text.
pub const LYRICS_PLACEHOLDER: &str = "Ainda não temos a letra desta música.";

/// Marker inside the container type label that identifies a real album.
/// Singles, compilations and EPs share the same markup with other labels.
pub const ALBUM_TYPE_LABEL: &str = "Álbum";

/// One album entry from the discography page: title plus the absolute URLs
/// of its song pages.
#[derive(Debug, Clone)]
pub struct AlbumListing {
    pub title: String,
    pub song_urls: Vec<String>,
}

/// Title and lyrics extracted from a single song page.
#[derive(Debug, Clone)]
pub struct SongPage {
    pub title: String,
    pub lyrics: String,
}

/// Parser for letras.mus.br HTML pages.
///
/// Stateless and purely structural: it takes parsed documents and returns
/// data, so it can be tested offline against captured fixtures.
#[derive(Debug, Clone)]
pub struct LetrasParser;

impl LetrasParser {
    pub fn new() -> Self {
        Self
    }

    /// Extract album listings from the discography page.
    ///
    /// Containers whose type label lacks the album marker are excluded.
    /// Collection stops once `max_albums` qualifying albums have been kept,
    /// in page order.
    pub fn parse_discography(
        &self,
        document: &Html,
        base_url: &str,
        max_albums: usize,
    ) -> Vec<AlbumListing> {
        let container_selector = Selector::parse("div.album-item.g-sp").unwrap();

        let mut listings = Vec::new();
        for container in document.select(&container_selector) {
            if listings.len() >= max_albums {
                break;
            }
            match self.parse_album_container(&container, base_url) {
                Ok(Some(listing)) => listings.push(listing),
                Ok(None) => {}
                Err(e) => debug!("Skipping malformed album container: {e}"),
            }
        }

        debug!("Parsed {} album listings", listings.len());
        listings
    }

    // Returns Ok(None) for containers that aren't albums (singles etc.)
    fn parse_album_container(
        &self,
        container: &ElementRef,
        base_url: &str,
    ) -> Result<Option<AlbumListing>> {
        let title_selector = Selector::parse("h1").unwrap();
        let type_selector = Selector::parse("span.header-info-type").unwrap();
        let song_selector = Selector::parse("a.bt-play-song").unwrap();

        let title = container
            .select(&title_selector)
            .next()
            .ok_or_else(|| Error::ParseError("Missing album title".to_string()))?
            .text()
            .collect::<String>()
            .trim()
            .to_string();

        let info_type = container
            .select(&type_selector)
            .next()
            .ok_or_else(|| Error::ParseError("Missing album type label".to_string()))?
            .text()
            .collect::<String>();

        if !info_type.contains(ALBUM_TYPE_LABEL) {
            return Ok(None);
        }

        let song_urls = container
            .select(&song_selector)
            .filter_map(|link| link.value().attr("href"))
            .map(|href| format!("{base_url}{href}"))
            .collect();

        Ok(Some(AlbumListing { title, song_urls }))
    }

    /// Extract title and lyrics from a song page.
    ///
    /// Lyrics text nodes are joined with newlines so line breaks survive.
    /// Placeholder lyrics are rejected as [`Error::LyricsUnavailable`].
    pub fn parse_song_page(&self, document: &Html) -> Result<SongPage> {
        let title_selector = Selector::parse("div.cnt-head_title h1").unwrap();
        let lyrics_selector = Selector::parse("div.cnt-letra").unwrap();

        let title = document
            .select(&title_selector)
            .next()
            .ok_or_else(|| Error::ParseError("Missing song title".to_string()))?
            .text()
            .collect::<String>()
            .trim()
            .to_string();

        let lyrics_block = document
            .select(&lyrics_selector)
            .next()
            .ok_or_else(|| Error::ParseError("Missing lyrics block".to_string()))?;

        let lyrics = lyrics_block
            .text()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        if lyrics.contains(LYRICS_PLACEHOLDER) {
            return Err(Error::LyricsUnavailable);
        }

        Ok(SongPage { title, lyrics })
    }
}

impl Default for LetrasParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_URL: &str = "https://www.letras.mus.br";

    const DISCOGRAPHY_HTML: &str = r#"
        <html><body>
        <div class="album-item g-sp">
            <h1> Parachutes </h1>
            <span class="header-info-type">Álbum · 2000</span>
            <a class="bt-play-song" href="/coldplay/yellow/">Yellow</a>
            <a class="bt-play-song" href="/coldplay/trouble/">Trouble</a>
        </div>
        <div class="album-item g-sp">
            <h1>Acoustic</h1>
            <span class="header-info-type">Single · 2000</span>
            <a class="bt-play-song" href="/coldplay/sparks/">Sparks</a>
        </div>
        <div class="album-item g-sp">
            <h1>A Rush of Blood to the Head</h1>
            <span class="header-info-type">Álbum · 2002</span>
            <a class="bt-play-song" href="/coldplay/the-scientist/">The Scientist</a>
        </div>
        </body></html>
    "#;

    #[test]
    fn keeps_albums_and_resolves_song_urls() {
        let document = Html::parse_document(DISCOGRAPHY_HTML);
        let listings = LetrasParser::new().parse_discography(&document, BASE_URL, 100);

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].title, "Parachutes");
        assert_eq!(
            listings[0].song_urls,
            vec![
                "https://www.letras.mus.br/coldplay/yellow/",
                "https://www.letras.mus.br/coldplay/trouble/",
            ]
        );
        assert_eq!(listings[1].title, "A Rush of Blood to the Head");
    }

    #[test]
    fn excludes_entries_without_album_label() {
        let document = Html::parse_document(DISCOGRAPHY_HTML);
        let listings = LetrasParser::new().parse_discography(&document, BASE_URL, 100);

        assert!(listings.iter().all(|l| l.title != "Acoustic"));
    }

    #[test]
    fn truncates_to_max_albums() {
        let document = Html::parse_document(DISCOGRAPHY_HTML);
        let listings = LetrasParser::new().parse_discography(&document, BASE_URL, 1);

        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title, "Parachutes");
    }

    #[test]
    fn skips_containers_missing_title() {
        let html = r#"
            <div class="album-item g-sp">
                <span class="header-info-type">Álbum</span>
            </div>
            <div class="album-item g-sp">
                <h1>Kept</h1>
                <span class="header-info-type">Álbum</span>
            </div>
        "#;
        let document = Html::parse_document(html);
        let listings = LetrasParser::new().parse_discography(&document, BASE_URL, 100);

        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title, "Kept");
    }

    #[test]
    fn extracts_title_and_lyrics_with_line_breaks() {
        let html = r#"
            <div class="cnt-head_title"><h1>Yellow</h1><h2>Coldplay</h2></div>
            <div class="cnt-letra p402_premium">
                <p>Look at the stars<br>Look how they shine for you</p>
                <p>And everything you do</p>
            </div>
        "#;
        let document = Html::parse_document(html);
        let page = LetrasParser::new().parse_song_page(&document).unwrap();

        assert_eq!(page.title, "Yellow");
        assert_eq!(
            page.lyrics,
            "Look at the stars\nLook how they shine for you\nAnd everything you do"
        );
    }

    #[test]
    fn rejects_placeholder_lyrics() {
        let html = r#"
            <div class="cnt-head_title"><h1>Unreleased</h1></div>
            <div class="cnt-letra"><p>Ainda não temos a letra desta música.</p></div>
        "#;
        let document = Html::parse_document(html);
        let result = LetrasParser::new().parse_song_page(&document);

        assert!(matches!(result, Err(Error::LyricsUnavailable)));
    }

    #[test]
    fn missing_lyrics_block_is_an_error() {
        let html = r#"<div class="cnt-head_title"><h1>No Lyrics Here</h1></div>"#;
        let document = Html::parse_document(html);
        let result = LetrasParser::new().parse_song_page(&document);

        assert!(matches!(result, Err(Error::ParseError(_))));
    }
}
