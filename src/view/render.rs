use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

/// Replaces the list when nothing matched.
pub const EMPTY_STATE: &str = "Aucune voie trouvée";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Body {
    List { names: Vec<String> },
    Empty { message: String },
    Error { message: String },
}

/// One rendered state of a district page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<String>,
    #[serde(flatten)]
    pub body: Body,
}

impl Page {
    /// Titled page over already sorted names.
    pub fn listing(title: String, names: Vec<String>) -> Self {
        let stats = Some(stats_line(names.len()));
        let body = if names.is_empty() {
            Body::Empty {
                message: EMPTY_STATE.to_string(),
            }
        } else {
            Body::List { names }
        };

        Self {
            title: Some(title),
            stats,
            body,
        }
    }

    /// Error state: no title, no stats, no partial list.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: None,
            stats: None,
            body: Body::Error {
                message: message.into(),
            },
        }
    }

    /// Names currently on display; empty for the empty and error states.
    pub fn names(&self) -> &[String] {
        match &self.body {
            Body::List { names } => names,
            _ => &[],
        }
    }

    pub fn write_to<W: Write>(&self, format: OutputFormat, mut out: W) -> Result<()> {
        match format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut out, self)?;
                writeln!(out)?;
            }
            OutputFormat::Text => {
                if let Some(title) = &self.title {
                    writeln!(out, "{}", title)?;
                }
                if let Some(stats) = &self.stats {
                    writeln!(out, "{}", stats)?;
                }
                match &self.body {
                    Body::List { names } => {
                        for name in names {
                            writeln!(out, "  {}", name)?;
                        }
                    }
                    Body::Empty { message } | Body::Error { message } => {
                        writeln!(out, "{}", message)?;
                    }
                }
            }
        }
        out.flush()?;
        Ok(())
    }
}

/// "1 voie trouvée", "12 voies trouvées". Zero takes the singular.
pub fn stats_line(count: usize) -> String {
    if count > 1 {
        format!("{} voies trouvées", count)
    } else {
        format!("{} voie trouvée", count)
    }
}
