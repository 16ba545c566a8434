//! Card accessor surface: one presence-checked getter per document field.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::config::{ClientConfig, RequestConfig};
use crate::document::Document;
use crate::error::{CardError, Result};
use crate::fetch::{HttpTransport, Transport, check_document, fetch_document};

/// Price modes accepted by [`Card::currency`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Usd,
    Eur,
    Tix,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Eur, Currency::Tix];

    /// The document key holding this price.
    pub fn key(self) -> &'static str {
        match self {
            Currency::Usd => "usd",
            Currency::Eur => "eur",
            Currency::Tix => "tix",
        }
    }
}

impl FromStr for Currency {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self> {
        Currency::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| CardError::InvalidArgument {
                argument: "currency mode",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single card document, fetched once and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    document: Document,
}

impl Card {
    /// Fetches `path` from the configured API origin over HTTP.
    ///
    /// Blocks until the response is parsed. Fails with [`CardError::Api`]
    /// when the service answers with an error document.
    pub fn fetch(path: &str, config: &RequestConfig) -> Result<Self> {
        let client = ClientConfig::from_env();
        let transport = HttpTransport::new(&client)?;
        Self::fetch_with(&transport, &client.origin, path, config)
    }

    /// Same as [`Card::fetch`] over a caller-supplied transport.
    pub fn fetch_with<T>(
        transport: &T,
        origin: &str,
        path: &str,
        config: &RequestConfig,
    ) -> Result<Self>
    where
        T: Transport + ?Sized,
    {
        let document = fetch_document(transport, origin, path, config)?;
        Ok(Self { document })
    }

    /// Wraps an already-parsed document, applying the same error-document check.
    pub fn from_document(document: Document) -> Result<Self> {
        Ok(Self {
            document: check_document(document)?,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Price in the given mode (`usd`, `eur` or `tix`).
    pub fn currency(&self, mode: &str) -> Result<&str> {
        let currency = mode.parse::<Currency>()?;
        self.currency_for(currency)
    }

    pub fn currency_for(&self, currency: Currency) -> Result<&str> {
        self.document.str(currency.key())
    }

    /// Color indicator of the face at `index` in `card_faces`.
    pub fn color_indicator(&self, index: usize) -> Result<&[Value]> {
        self.document
            .indexed_array("card_faces", index, "color_indicator")
    }
}

macro_rules! getters {
    ($($(#[$meta:meta])* $name:ident => $key:literal, $lookup:ident -> $ty:ty;)*) => {
        impl Card {
            $(
                $(#[$meta])*
                pub fn $name(&self) -> Result<$ty> {
                    self.document.$lookup($key)
                }
            )*
        }
    };
}

getters! {
    /// Kind of object ("card").
    object => "object", str -> &str;
    /// Scryfall's unique id for this printing.
    id => "id", str -> &str;
    /// Gatherer multiverse ids.
    multiverse_ids => "multiverse_ids", array -> &[Value];
    mtgo_id => "mtgo_id", u64 -> u64;
    mtgo_foil_id => "mtgo_foil_id", u64 -> u64;
    /// Oracle name of the card.
    name => "name", str -> &str;
    uri => "uri", str -> &str;
    scryfall_uri => "scryfall_uri", str -> &str;
    /// Card layout ("normal", "transform", "split", ...).
    layout => "layout", str -> &str;
    highres_image => "highres_image", bool -> bool;
    image_uris => "image_uris", object -> &Map<String, Value>;
    /// Converted mana cost.
    cmc => "cmc", f64 -> f64;
    type_line => "type_line", str -> &str;
    oracle_text => "oracle_text", str -> &str;
    mana_cost => "mana_cost", str -> &str;
    colors => "colors", array -> &[Value];
    color_identity => "color_identity", array -> &[Value];
    /// Format name to legality ("legal", "not_legal", ...).
    legalities => "legalities", object -> &Map<String, Value>;
    /// Whether the card is on the reserved list.
    reserved => "reserved", bool -> bool;
    /// Whether the card has been printed before.
    reprint => "reprint", bool -> bool;
    /// Set code; stored under the `set` key.
    set_code => "set", str -> &str;
    set_name => "set_name", str -> &str;
    set_uri => "set_uri", str -> &str;
    set_search_uri => "set_search_uri", str -> &str;
    scryfall_set_uri => "scryfall_set_uri", str -> &str;
    rulings_uri => "rulings_uri", str -> &str;
    prints_search_uri => "prints_search_uri", str -> &str;
    collector_number => "collector_number", str -> &str;
    /// Whether this is a digital-only printing.
    digital => "digital", bool -> bool;
    rarity => "rarity", str -> &str;
    illustration_id => "illustration_id", str -> &str;
    artist => "artist", str -> &str;
    frame => "frame", str -> &str;
    full_art => "full_art", bool -> bool;
    border_color => "border_color", str -> &str;
    timeshifted => "timeshifted", bool -> bool;
    colorshifted => "colorshifted", bool -> bool;
    futureshifted => "futureshifted", bool -> bool;
    /// Rank on EDHREC.
    edhrec_rank => "edhrec_rank", u64 -> u64;
    related_uris => "related_uris", object -> &Map<String, Value>;
    purchase_uris => "purchase_uris", object -> &Map<String, Value>;
    /// Vanguard life modifier.
    life_modifier => "life_modifier", str -> &str;
    /// Vanguard hand modifier.
    hand_modifier => "hand_modifier", str -> &str;
    /// Related cards (tokens, meld parts, combo pieces).
    all_parts => "all_parts", array -> &[Value];
    /// Faces of a multi-faced card.
    card_faces => "card_faces", array -> &[Value];
    watermark => "watermark", str -> &str;
    story_spotlight => "story_spotlight", bool -> bool;
    power => "power", str -> &str;
    toughness => "toughness", str -> &str;
    flavor_text => "flavor_text", str -> &str;
    arena_id => "arena_id", u64 -> u64;
    /// Language code of this printing.
    lang => "lang", str -> &str;
    /// Localized name, for non-English printings.
    printed_name => "printed_name", str -> &str;
    printed_type_line => "printed_type_line", str -> &str;
    printed_text => "printed_text", str -> &str;
    oracle_id => "oracle_id", str -> &str;
    foil => "foil", bool -> bool;
    loyalty => "loyalty", str -> &str;
    nonfoil => "nonfoil", bool -> bool;
    oversized => "oversized", bool -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ORIGIN: &str = "https://api.example.com";

    fn card(value: Value) -> Card {
        Card::from_document(Document::from_value(value).unwrap()).unwrap()
    }

    fn opt() -> Value {
        json!({
            "object": "card",
            "id": "c9b0e2b6-7d2f-4f2b-9e0a-1f0c8c3d5e11",
            "name": "Opt",
            "layout": "normal",
            "cmc": 1.0,
            "mana_cost": "{U}",
            "type_line": "Instant",
            "oracle_text": "Scry 1.\nDraw a card.",
            "colors": ["U"],
            "set": "xln",
            "rarity": "common",
            "reserved": false,
            "edhrec_rank": 112,
            "usd": "0.25",
            "legalities": {"modern": "legal", "standard": "not_legal"},
        })
    }

    #[test]
    fn present_fields_are_returned_unchanged() {
        let card = card(opt());
        assert_eq!(card.object().unwrap(), "card");
        assert_eq!(card.name().unwrap(), "Opt");
        assert_eq!(card.cmc().unwrap(), 1.0);
        assert_eq!(card.set_code().unwrap(), "xln");
        assert_eq!(card.colors().unwrap(), &[json!("U")]);
        assert_eq!(card.edhrec_rank().unwrap(), 112);
        assert!(!card.reserved().unwrap());
        assert_eq!(card.legalities().unwrap()["modern"], json!("legal"));
    }

    #[test]
    fn absent_field_fails_without_poisoning_the_card() {
        let card = card(opt());
        match card.power().unwrap_err() {
            CardError::MissingField { field } => assert_eq!(field, "power"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(card.loyalty().is_err());
        assert_eq!(card.name().unwrap(), "Opt");
    }

    #[test]
    fn currency_reads_the_mode_key() {
        let card = card(opt());
        assert_eq!(card.currency("usd").unwrap(), "0.25");
        assert!(matches!(
            card.currency("eur"),
            Err(CardError::MissingField { ref field }) if field == "eur"
        ));
    }

    #[test]
    fn unknown_currency_is_an_invalid_argument() {
        let card = card(json!({"object": "card", "btc": "1"}));
        match card.currency("btc").unwrap_err() {
            CardError::InvalidArgument { argument, value } => {
                assert_eq!(argument, "currency mode");
                assert_eq!(value, "btc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn color_indicator_is_scoped_to_a_face() {
        let card = card(json!({
            "object": "card",
            "card_faces": [{"color_indicator": ["U", "B"]}],
        }));
        assert_eq!(card.color_indicator(0).unwrap(), &[json!("U"), json!("B")]);
        match card.color_indicator(1).unwrap_err() {
            CardError::MissingTupleField {
                parent,
                index,
                field,
            } => {
                assert_eq!(parent, "card_faces");
                assert_eq!(index, 1);
                assert_eq!(field, "color_indicator");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn color_indicator_without_faces() {
        let card = card(opt());
        assert!(matches!(
            card.color_indicator(0),
            Err(CardError::MissingTupleField { index: 0, .. })
        ));
    }

    #[test]
    fn mistyped_field_is_reported() {
        let card = card(json!({"object": "card", "cmc": "one"}));
        assert!(matches!(
            card.cmc(),
            Err(CardError::TypeMismatch { expected: "a number", found: "a string", .. })
        ));
    }

    #[test]
    fn getters_are_idempotent() {
        let card = card(opt());
        assert_eq!(card.oracle_text().unwrap(), card.oracle_text().unwrap());
        assert_eq!(card.colors().unwrap(), card.colors().unwrap());
        assert_eq!(
            card.power().unwrap_err().to_string(),
            card.power().unwrap_err().to_string()
        );
    }

    #[test]
    fn error_document_never_yields_a_card() {
        let transport = |_: &str| -> Result<String> {
            Ok(json!({"object": "error", "details": "X"}).to_string())
        };
        let err = Card::fetch_with(&transport, ORIGIN, "cards/nope", &RequestConfig::default())
            .unwrap_err();
        assert!(matches!(err, CardError::Api { ref details, .. } if details == "X"));

        let doc = Document::from_value(json!({"object": "error", "details": "Y"})).unwrap();
        assert!(matches!(Card::from_document(doc), Err(CardError::Api { .. })));
    }

    #[test]
    fn fetching_twice_yields_equal_cards() {
        let transport = |_: &str| -> Result<String> { Ok(opt().to_string()) };
        let config = RequestConfig::from_options([("pretty", "true")]);
        let first = Card::fetch_with(&transport, ORIGIN, "cards/xln/65", &config).unwrap();
        let second = Card::fetch_with(&transport, ORIGIN, "cards/xln/65", &config).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.type_line().unwrap(), second.type_line().unwrap());
    }

    #[test]
    fn currency_parses_all_modes() {
        for mode in ["usd", "eur", "tix"] {
            let currency: Currency = mode.parse().unwrap();
            assert_eq!(currency.to_string(), mode);
        }
        assert!("USD".parse::<Currency>().is_err());
    }
}
