//! scry-cards: fetch a single card document from the Scryfall API and read
//! its fields through typed, presence-checked getters.

pub mod card;
pub mod config;
pub mod document;
pub mod endpoint;
pub mod error;
pub mod fetch;

pub use card::{Card, Currency};
pub use config::{ClientConfig, RequestConfig};
pub use document::Document;
pub use endpoint::{CardPath, NameMatch};
pub use error::{CardError, Result};
