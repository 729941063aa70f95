//! Catalog command implementation.

use crate::display::columns;
use anyhow::{Result, anyhow};
use gexhist_lib::prelude::*;

/// List known tickers and the categories of each group, or of one group.
pub(crate) fn catalog(group: Option<&str>) -> Result<()> {
    let groups: Vec<CategoryGroup> = match group {
        Some(name) => vec![name.parse::<CategoryGroup>().map_err(|e| anyhow!("{e}"))?],
        None => CategoryGroup::all().to_vec(),
    };

    if group.is_none() {
        println!("Tickers ({}):", KNOWN_TICKERS.len());
        for row in columns(KNOWN_TICKERS, 8, 8) {
            println!("  {row}");
        }
        println!();
    }

    println!("{:<20} {:<10} CATEGORIES", "GROUP", "PACKAGE");
    println!("{}", "-".repeat(70));
    for group in groups {
        println!(
            "{:<20} {:<10} {}",
            group.as_str(),
            group.package(),
            group.known_categories().join(", ")
        );
    }

    Ok(())
}
