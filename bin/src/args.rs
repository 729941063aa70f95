//! Selection options shared by the `query` and `plan` commands.

use anyhow::{Context, Result};
use clap::Args;
use gexhist_lib::prelude::*;
use gexhist_lib::parse_date;
use std::path::PathBuf;
use tracing::debug;

/// Options that build the run [`Settings`].
///
/// Resolution order: built-in defaults, then the selection file, then each
/// list flag that was given (replacing that list).
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct SelectionArgs {
    /// Trading day to query (YYYY-MM-DD). Defaults to 2025-11-14.
    #[arg(short, long)]
    date: Option<String>,

    /// API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// JSON selection file with tickers and per-group categories
    #[arg(short, long)]
    selection: Option<PathBuf>,

    /// Tickers to query, comma separated
    #[arg(short, long, value_delimiter = ',')]
    tickers: Option<Vec<String>>,

    /// Categories for the state package GEX group (gex_full, gex_zero, gex_one)
    #[arg(long, value_delimiter = ',')]
    state_gex: Option<Vec<String>>,

    /// Categories for the state package zero-DTE greeks group (delta_zero, gamma_zero, ...)
    #[arg(long, value_delimiter = ',')]
    state_greeks_zero: Option<Vec<String>>,

    /// Categories for the state package one-DTE greeks group (delta_one, gamma_one, ...)
    #[arg(long, value_delimiter = ',')]
    state_greeks_one: Option<Vec<String>>,

    /// Categories for the classic package (gex_full)
    #[arg(long, value_delimiter = ',')]
    classic: Option<Vec<String>>,

    /// Categories for the orderflow package (orderflow)
    #[arg(long, value_delimiter = ',')]
    orderflow: Option<Vec<String>>,
}

impl SelectionArgs {
    /// Builds settings from the environment, the selection file and the flags.
    pub(crate) fn resolve(&self) -> Result<Settings> {
        let mut settings = Settings::from_env();

        if let Some(path) = &self.selection {
            settings.selection = Selection::from_json_file(path)
                .with_context(|| format!("Failed to load selection from {}", path.display()))?;
        }
        if let Some(date) = &self.date {
            settings.date = parse_date(date)?;
        }
        if let Some(base_url) = &self.base_url {
            settings.base_url.clone_from(base_url);
        }
        if let Some(tickers) = &self.tickers {
            settings.selection.tickers = non_blank(tickers);
        }
        for (group, categories) in self.group_overrides() {
            if let Some(categories) = categories {
                settings.selection.set_categories(group, non_blank(categories));
            }
        }

        debug!(?settings, "resolved settings");
        Ok(settings)
    }

    fn group_overrides(&self) -> [(CategoryGroup, Option<&Vec<String>>); 5] {
        [
            (CategoryGroup::StateGex, self.state_gex.as_ref()),
            (CategoryGroup::StateGreeksZero, self.state_greeks_zero.as_ref()),
            (CategoryGroup::StateGreeksOne, self.state_greeks_one.as_ref()),
            (CategoryGroup::Classic, self.classic.as_ref()),
            (CategoryGroup::Orderflow, self.orderflow.as_ref()),
        ]
    }
}

/// Trims values and drops empty ones, so `--classic=` clears a list.
fn non_blank(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}
