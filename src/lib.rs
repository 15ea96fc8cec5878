use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

pub mod districts;
pub mod error;
pub mod load;
pub mod search;
pub mod view;

pub use error::{LoadError, PageError};

/// One row of the Paris voies dataset.
///
/// Every field is optional; the dataset producer owns the schema and rows
/// outside any arrondissement carry a null `arrtd`. A field of the wrong JSON
/// type never rejects the row: see [`lenient_string`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoieRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub arrtd: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub l_longmin: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub l_courtmin: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub l_voie: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub c_desi: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub c_liaison: Option<String>,
}

/// Strings pass through, numbers keep their JSON text, anything else is absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Install the stderr `fmt` subscriber shared by every subcommand.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,voies_paris=info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
