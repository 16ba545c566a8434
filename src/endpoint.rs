//! Relative paths of the single-card endpoints.

use std::fmt;

use urlencoding::encode;

/// How `cards/named` matches the given name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    Exact,
    Fuzzy,
}

/// A single-card endpoint. Renders to the path handed to the fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardPath {
    Named {
        name: String,
        mode: NameMatch,
        set: Option<String>,
    },
    Id(String),
    Random {
        query: Option<String>,
    },
    Collector {
        set: String,
        number: String,
        lang: Option<String>,
    },
    Multiverse(u64),
    Mtgo(u64),
    Arena(u64),
    Tcgplayer(u64),
}

impl CardPath {
    pub fn exact(name: impl Into<String>) -> Self {
        CardPath::Named {
            name: name.into(),
            mode: NameMatch::Exact,
            set: None,
        }
    }

    pub fn fuzzy(name: impl Into<String>) -> Self {
        CardPath::Named {
            name: name.into(),
            mode: NameMatch::Fuzzy,
            set: None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            CardPath::Named { name, mode, set } => {
                let key = match mode {
                    NameMatch::Exact => "exact",
                    NameMatch::Fuzzy => "fuzzy",
                };
                let mut path = format!("cards/named?{}={}", key, encode(name));
                if let Some(set) = set {
                    path.push_str(&format!("&set={}", encode(set)));
                }
                path
            }
            CardPath::Id(id) => format!("cards/{}", encode(id)),
            CardPath::Random { query: None } => "cards/random".to_string(),
            CardPath::Random { query: Some(q) } => format!("cards/random?q={}", encode(q)),
            CardPath::Collector { set, number, lang } => {
                let mut path = format!("cards/{}/{}", encode(set), encode(number));
                if let Some(lang) = lang {
                    path.push('/');
                    path.push_str(&encode(lang));
                }
                path
            }
            CardPath::Multiverse(id) => format!("cards/multiverse/{}", id),
            CardPath::Mtgo(id) => format!("cards/mtgo/{}", id),
            CardPath::Arena(id) => format!("cards/arena/{}", id),
            CardPath::Tcgplayer(id) => format!("cards/tcgplayer/{}", id),
        }
    }
}

impl fmt::Display for CardPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_paths_encode_the_name() {
        assert_eq!(
            CardPath::exact("Lightning Bolt").path(),
            "cards/named?exact=Lightning%20Bolt"
        );
        let path = CardPath::Named {
            name: "Jace, the Mind Sculptor".to_string(),
            mode: NameMatch::Fuzzy,
            set: Some("a25".to_string()),
        };
        assert_eq!(
            path.path(),
            "cards/named?fuzzy=Jace%2C%20the%20Mind%20Sculptor&set=a25"
        );
    }

    #[test]
    fn collector_path_with_language() {
        let path = CardPath::Collector {
            set: "war".to_string(),
            number: "97★".to_string(),
            lang: Some("ja".to_string()),
        };
        assert_eq!(path.to_string(), "cards/war/97%E2%98%85/ja");
    }

    #[test]
    fn numeric_id_paths() {
        assert_eq!(CardPath::Multiverse(409574).path(), "cards/multiverse/409574");
        assert_eq!(CardPath::Mtgo(54957).path(), "cards/mtgo/54957");
        assert_eq!(CardPath::Arena(67330).path(), "cards/arena/67330");
        assert_eq!(CardPath::Tcgplayer(162145).path(), "cards/tcgplayer/162145");
    }

    #[test]
    fn random_paths() {
        assert_eq!(CardPath::Random { query: None }.path(), "cards/random");
        assert_eq!(
            CardPath::Random {
                query: Some("t:dragon".to_string())
            }
            .path(),
            "cards/random?q=t%3Adragon"
        );
    }
}
