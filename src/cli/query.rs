//! Query command implementation.
//!
//! Resolves the page layout from the data file and prints it as JSON,
//! for scripts and CI checks that need to know which sections render.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::args::QueryArgs;
use crate::config::SiteConfig;
use crate::data::Portfolio;
use crate::layout::{Layout, resolve};
use crate::log;

/// Scroll tracker parameters as the page runtime receives them.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientQuery {
    threshold: f64,
    root_margin: String,
}

#[derive(Debug, Serialize)]
struct QueryResult {
    #[serde(flatten)]
    layout: Layout,
    client: ClientQuery,
}

/// Run the query command.
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let portfolio = Portfolio::load(&config.site.data)
        .with_context(|| format!("Failed to load '{}'", config.site.data.display()))?;
    let formatted = format_result(&query(&portfolio, config), args.pretty)?;

    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("Failed to create '{}'", output_path.display()))?;
        writeln!(file, "{formatted}")?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{formatted}");
    }

    Ok(())
}

fn query(portfolio: &Portfolio, config: &SiteConfig) -> QueryResult {
    let options = config.observer_options();
    QueryResult {
        layout: resolve(portfolio),
        client: ClientQuery {
            threshold: options.threshold,
            root_margin: options.root_margin_css(),
        },
    }
}

fn format_result(result: &QueryResult, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    })
}
