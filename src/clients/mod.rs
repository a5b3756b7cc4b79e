/// Cohere embedding API client
pub mod cohere;
/// Data entities for albums and songs
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// letras.mus.br HTTP client
pub mod letras;
/// HTML parsing for letras.mus.br pages
pub mod parsing;

pub use cohere::CohereClient;
pub use letras::LetrasClient;
pub use parsing::LetrasParser;
