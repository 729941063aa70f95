//! Logging setup and table output for the gexhist CLI.

use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level follows the `-v` count
/// (warn, info, debug, trace), or error only with `-q`.
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Lays out values in fixed-width columns, `per_row` values per line.
pub(crate) fn columns(values: &[&str], width: usize, per_row: usize) -> Vec<String> {
    values
        .chunks(per_row.max(1))
        .map(|row| {
            row.iter()
                .map(|value| format!("{value:<width$}"))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns() {
        let rows = columns(&["SPX", "NDX", "RUT"], 6, 2);
        assert_eq!(rows, ["SPX   NDX", "RUT"]);
    }

    #[test]
    fn test_columns_empty() {
        assert!(columns(&[], 6, 2).is_empty());
    }
}
