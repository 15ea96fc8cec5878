use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::io::Write;

use crate::view::{page_link, DistrictKey, OutputFormat};

#[derive(Args, Debug)]
pub struct DistrictsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// One entry of the arrondissement index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistrictEntry {
    pub code: String,
    pub postal_code: String,
    pub title: String,
    pub link: String,
}

impl From<DistrictKey> for DistrictEntry {
    fn from(key: DistrictKey) -> Self {
        Self {
            code: key.code().to_string(),
            postal_code: key.postal_code(),
            title: key.title(),
            link: page_link(&key),
        }
    }
}

pub fn district_index() -> Vec<DistrictEntry> {
    DistrictKey::all().map(DistrictEntry::from).collect()
}

pub fn write_index<W: Write>(format: OutputFormat, mut out: W) -> Result<()> {
    let index = district_index();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut out, &index)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for entry in &index {
                writeln!(out, "{}  {:<45}  {}", entry.postal_code, entry.title, entry.link)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

pub fn run(args: DistrictsArgs) -> Result<()> {
    crate::init_logging();
    write_index(args.format, std::io::stdout().lock())
}
