//! Lyrembed - Scrape artist lyrics and compute embeddings
//!
//! This library provides functionality to scrape an artist's discography
//! from letras.mus.br and attach a Cohere embedding vector to every song
//! whose lyrics are available.

/// Client modules for interacting with the lyrics site and the embedding service
pub mod clients;
