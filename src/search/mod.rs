use anyhow::{Context, Result};
use clap::Args;
use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::view::{open_view, report_error, DistrictView, OutputFormat, PageArgs};

#[derive(Args, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub page: PageArgs,
}

/// Live search over one district view.
///
/// The full district page is written first. After that every input line is
/// taken as the whole content of the search box and the page is re-rendered
/// from the view, so no state carries over between lines. Returns the number
/// of queries handled once `input` is exhausted.
pub fn run_session<R: BufRead, W: Write>(
    view: &DistrictView,
    input: R,
    mut out: W,
    format: OutputFormat,
) -> Result<usize> {
    view.render().write_to(format, &mut out)?;

    let mut queries = 0;
    for line in input.lines() {
        let line = line.context("Failed to read search query")?;
        let query = line.strip_suffix('\r').unwrap_or(&line);

        let page = view.search(query);
        debug!("Query {:?} matches {} voies", query, page.names().len());

        if format == OutputFormat::Text {
            writeln!(out)?;
        }
        page.write_to(format, &mut out)?;
        queries += 1;
    }

    Ok(queries)
}

pub fn run(args: SearchArgs) -> Result<()> {
    crate::init_logging();

    let format = args.page.format;
    let rt = tokio::runtime::Runtime::new()?;
    let view = match rt.block_on(open_view(&args.page)) {
        Ok(view) => view,
        Err(err) => return Err(report_error(err, format, std::io::stdout().lock())),
    };

    let stdin = std::io::stdin();
    let queries = run_session(&view, stdin.lock(), std::io::stdout().lock(), format)?;
    info!("Search session ended after {} queries", queries);

    Ok(())
}
