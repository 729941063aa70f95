//! Plan command implementation.
//!
//! This module prints the combinations a query would run, without touching
//! the network.

use anyhow::Result;
use gexhist_lib::prelude::*;
use gexhist_lib::{is_known_ticker, url::history_url};

/// Print the combinations and history URLs for the given settings.
pub(crate) fn plan(settings: &Settings) -> Result<()> {
    let combinations = settings.selection.combinations();

    if combinations.is_empty() {
        println!("No active ticker/category combinations selected.");
        return Ok(());
    }

    println!(
        "{} combinations for {}:\n",
        combinations.len(),
        settings.date
    );
    println!("{:<4} {:<10} {:<10} {:<12} URL", "#", "TICKER", "PACKAGE", "CATEGORY");
    println!("{}", "-".repeat(90));

    let mut uncatalogued = false;
    for (i, combination) in combinations.iter().enumerate() {
        let marker = if is_catalogued(combination) {
            ""
        } else {
            uncatalogued = true;
            " *"
        };
        println!(
            "{:<4} {:<10} {:<10} {:<12} {}{}",
            i + 1,
            combination.ticker(),
            combination.package(),
            combination.category(),
            history_url(&settings.base_url, combination, settings.date),
            marker
        );
    }

    if uncatalogued {
        println!("\n* ticker or category not in the catalog; it will still be queried.");
    }
    if !settings.has_credential() {
        println!("\nNote: {API_KEY_ENV} is not set; `gexhist query` will refuse to run.");
    }

    Ok(())
}

/// Returns true if both the ticker and the category are listed in the catalog.
fn is_catalogued(combination: &Combination) -> bool {
    is_known_ticker(combination.ticker())
        && CategoryGroup::all().iter().any(|group| {
            group.package() == combination.package()
                && group.known_categories().contains(&combination.category())
        })
}
