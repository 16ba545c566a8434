//! # scry-cards
//!
//! Fetches one card from the Scryfall API and prints selected fields.

use anyhow::{Context, Result, bail};
use clap::Parser;
use scry_cards::fetch::HttpTransport;
use scry_cards::{Card, CardPath, ClientConfig, NameMatch, RequestConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "scry-cards: fetch a single card from the Scryfall API.\n\
                  Give a raw API path (e.g. cards/xln/65) or use --named / --id."
)]
struct Args {
    /// Raw API path, relative to the origin
    path: Option<String>,

    /// Look a card up by name
    #[arg(short, long, conflicts_with_all = ["path", "id"])]
    named: Option<String>,

    /// Use fuzzy name matching with --named
    #[arg(long, requires = "named")]
    fuzzy: bool,

    /// Restrict --named to a set code
    #[arg(long, requires = "named")]
    set: Option<String>,

    /// Look a card up by its Scryfall id
    #[arg(long, conflicts_with = "path")]
    id: Option<String>,

    /// Response format option
    #[arg(long, default_value = "json")]
    format: String,

    /// Card face option (front, back)
    #[arg(long, default_value = "")]
    face: String,

    /// Image version option (small, normal, large, ...)
    #[arg(long = "image-version", default_value = "")]
    image_version: String,

    /// Pretty-print option passed to the API
    #[arg(long, default_value = "")]
    pretty: String,

    /// Print the raw JSON value of a field (repeatable)
    #[arg(short, long)]
    field: Vec<String>,

    /// Print the whole document
    #[arg(long)]
    raw: bool,

    /// API origin (overrides SCRYFALL_API_ORIGIN)
    #[arg(long)]
    origin: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_path(args: &Args) -> Result<String> {
    if let Some(name) = &args.named {
        let mode = if args.fuzzy {
            NameMatch::Fuzzy
        } else {
            NameMatch::Exact
        };
        return Ok(CardPath::Named {
            name: name.clone(),
            mode,
            set: args.set.clone(),
        }
        .path());
    }
    if let Some(id) = &args.id {
        return Ok(CardPath::Id(id.clone()).path());
    }
    match &args.path {
        Some(path) => Ok(path.clone()),
        None => bail!("Give an API path, --named NAME or --id ID."),
    }
}

/// Turns a missing field into `None`; any other failure still propagates.
fn optional<T>(result: scry_cards::Result<T>) -> scry_cards::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_missing() => Ok(None),
        Err(err) => Err(err),
    }
}

fn print_summary(card: &Card) -> Result<()> {
    let name = card.name()?;
    match optional(card.mana_cost())? {
        Some(cost) if !cost.is_empty() => println!("{} {}", name, cost),
        _ => println!("{}", name),
    }
    if let Some(type_line) = optional(card.type_line())? {
        println!("{}", type_line);
    }
    if let Some(text) = optional(card.oracle_text())? {
        println!("{}", text);
    }
    if let (Some(power), Some(toughness)) = (optional(card.power())?, optional(card.toughness())?) {
        println!("{}/{}", power, toughness);
    }
    if let Some(loyalty) = optional(card.loyalty())? {
        println!("Loyalty: {}", loyalty);
    }
    if let Some(faces) = optional(card.card_faces())? {
        println!("Faces: {}", faces.len());
    }
    if let (Some(set), Some(rarity)) = (optional(card.set_code())?, optional(card.rarity())?) {
        println!("{} ({})", set.to_uppercase(), rarity);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut client = ClientConfig::from_env();
    if let Some(origin) = &args.origin {
        client = client.with_origin(origin.clone());
    }
    let request = RequestConfig::default()
        .with_format(args.format.clone())
        .with_face(args.face.clone())
        .with_version(args.image_version.clone())
        .with_pretty(args.pretty.clone());

    let path = resolve_path(&args)?;
    let transport = HttpTransport::new(&client).context("failed to build HTTP client")?;
    let card = Card::fetch_with(&transport, &client.origin, &path, &request)
        .with_context(|| format!("failed to fetch {}", path))?;

    if args.raw {
        println!("{}", serde_json::to_string_pretty(card.document().fields())?);
        return Ok(());
    }

    if args.field.is_empty() {
        return print_summary(&card);
    }

    for key in &args.field {
        match optional(card.document().get(key))? {
            Some(value) => println!("{}: {}", key, value),
            None => println!("{}: <missing>", key),
        }
    }
    Ok(())
}
