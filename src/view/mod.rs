use anyhow::Result;
use clap::Args;
use std::cmp::Ordering;
use std::io::Write;
use tracing::{debug, error};
use urlencoding::{decode, encode};

use crate::load::{load_with_spinner, DatasetSource, DEFAULT_DATASET};
use crate::{PageError, VoieRecord};

mod district;
mod name;
mod render;
pub use district::{filter_by_district, DistrictKey, ALL_DISTRICTS};
pub use name::{resolve_name, voie_type_label, UNKNOWN_NAME};
pub use render::{stats_line, Body, OutputFormat, Page, EMPTY_STATE};

/// Page the district links point at.
pub const PAGE_PATH: &str = "arrondissement.html";

/// Options shared by every command that opens a district page.
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    /// Postal code of the arrondissement (75000 lists every voie)
    #[arg(short, long, conflicts_with = "page_url")]
    pub code: Option<String>,

    /// Page URL or query string carrying the postal code, e.g. "arrondissement.html?code=75005"
    #[arg(long)]
    pub page_url: Option<String>,

    /// Dataset location: JSON file (optionally .gz) or http(s) URL
    #[arg(short, long, default_value = DEFAULT_DATASET)]
    pub data: String,

    /// Request timeout in seconds (unbounded when omitted)
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

impl PageArgs {
    /// Postal code from `--code` or from the `code` parameter of `--page-url`.
    /// Empty values count as absent.
    pub fn postal_code(&self) -> Option<String> {
        self.code
            .clone()
            .or_else(|| self.page_url.as_deref().and_then(postal_code_from_page_url))
            .filter(|code| !code.trim().is_empty())
    }
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Only list voies whose name contains this text (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Extract the percent-decoded `code` parameter from a page URL or query string.
pub fn postal_code_from_page_url(url: &str) -> Option<String> {
    let query = url.split_once('?').map_or(url, |(_, q)| q);
    let query = query.split('#').next().unwrap_or_default();

    query
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| *key == "code")
        .and_then(|(_, value)| {
            decode(&value.replace('+', " "))
                .ok()
                .map(|decoded| decoded.into_owned())
        })
}

/// Link to the page of `key`, e.g. "arrondissement.html?code=75005".
pub fn page_link(key: &DistrictKey) -> String {
    format!("{}?code={}", PAGE_PATH, encode(&key.postal_code()))
}

/// Accent- and case-insensitive sort key, close to a French collation.
fn collation_key(name: &str) -> String {
    deunicode::deunicode(name).to_lowercase()
}

struct Entry {
    name: String,
    sort_key: String,
    lowered: String,
}

impl Entry {
    fn new(name: String) -> Self {
        Self {
            sort_key: collation_key(&name),
            lowered: name.to_lowercase(),
            name,
        }
    }

    /// Raw name breaks ties between names that fold to the same key.
    fn collate(a: &Entry, b: &Entry) -> Ordering {
        a.sort_key
            .cmp(&b.sort_key)
            .then_with(|| a.name.cmp(&b.name))
    }
}

/// District-filtered, name-sorted view of a dataset snapshot.
///
/// Built once per page; [`DistrictView::search`] derives every later state
/// from it without touching the dataset again.
pub struct DistrictView {
    key: DistrictKey,
    entries: Vec<Entry>,
}

impl DistrictView {
    pub fn new(records: &[VoieRecord], key: DistrictKey) -> Self {
        let mut entries: Vec<Entry> = filter_by_district(records, &key)
            .into_iter()
            .map(|record| Entry::new(resolve_name(record)))
            .collect();
        entries.sort_by(Entry::collate);

        debug!(
            "District {} keeps {} of {} voies",
            key.code(),
            entries.len(),
            records.len()
        );

        Self { key, entries }
    }

    pub fn key(&self) -> DistrictKey {
        self.key
    }

    pub fn title(&self) -> String {
        self.key.title()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolved names of the whole district, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// The unfiltered district page.
    pub fn render(&self) -> Page {
        Page::listing(self.title(), self.names().map(String::from).collect())
    }

    /// The district page narrowed to names containing `query`, ignoring case.
    pub fn search(&self, query: &str) -> Page {
        let needle = query.to_lowercase();
        let names = self
            .entries
            .iter()
            .filter(|entry| entry.lowered.contains(&needle))
            .map(|entry| entry.name.clone())
            .collect();

        Page::listing(self.title(), names)
    }
}

/// Check the page parameter, then load the dataset and build the view.
/// No fetch happens when the parameter is missing or names no arrondissement.
pub async fn open_view(args: &PageArgs) -> Result<DistrictView, PageError> {
    let postal_code = args.postal_code().ok_or(PageError::MissingParameter)?;
    let key = DistrictKey::from_postal_code(&postal_code)?;

    let source = DatasetSource::parse(&args.data);
    let records = load_with_spinner(&source, args.timeout).await?;

    Ok(DistrictView::new(&records, key))
}

/// Render `err` as the page's error state and hand it back for the exit status.
pub fn report_error<W: Write>(err: PageError, format: OutputFormat, out: W) -> anyhow::Error {
    error!("{}", err);
    if let Err(write_err) = Page::error(err.to_string()).write_to(format, out) {
        return write_err.context(err.to_string());
    }
    err.into()
}

pub async fn build_page(args: &ViewArgs) -> Result<Page, PageError> {
    let view = open_view(&args.page).await?;
    Ok(match &args.search {
        Some(query) => view.search(query),
        None => view.render(),
    })
}

pub fn run(args: ViewArgs) -> Result<()> {
    crate::init_logging();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run_async(args))
}

pub async fn run_async(args: ViewArgs) -> Result<()> {
    let format = args.page.format;
    match build_page(&args).await {
        Ok(page) => page.write_to(format, std::io::stdout().lock()),
        Err(err) => Err(report_error(err, format, std::io::stdout().lock())),
    }
}
