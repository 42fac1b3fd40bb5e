//! Search command handler for the CLI.
//!
//! Called from `main` after config and logging are established. Resolves the
//! credential, runs the search-and-rank pipeline, and hands the ordered rows
//! to the table printer, JSON dump, or CSV exporter.

use std::path::PathBuf;

use leadscout_core::AppConfig;
use leadscout_places::pipeline::search_and_rank_with_base_url;
use leadscout_places::NormalizedPlace;

use crate::export;

/// Where to write the CSV export: an explicit path, or a name derived from
/// the query when `--csv` is given without a value.
#[derive(Debug)]
pub(crate) struct CsvTarget {
    path: PathBuf,
}

impl CsvTarget {
    pub(crate) fn new(path: Option<PathBuf>, query: &str) -> Self {
        Self {
            path: path.unwrap_or_else(|| PathBuf::from(default_csv_name(query))),
        }
    }
}

/// Derive a CSV file name from the query, spaces replaced with underscores.
fn default_csv_name(query: &str) -> String {
    format!("search_results_{}.csv", query.replace(' ', "_"))
}

/// Run a places search and present the ranked results.
///
/// The API key is taken from the `--api-key` flag when given, otherwise from
/// `GOOGLE_PLACES_API_KEY`. Missing credentials fail before any network call.
///
/// # Errors
///
/// Returns an error if no API key is available, the pipeline fails
/// (validation, HTTP, transport, or deserialization), or the CSV file cannot
/// be written.
pub(crate) async fn run_search(
    config: &AppConfig,
    query: &str,
    api_key_flag: Option<&str>,
    csv_target: Option<CsvTarget>,
    json: bool,
) -> anyhow::Result<()> {
    let api_key = match api_key_flag
        .map(ToString::to_string)
        .or_else(|| config.google_places_api_key.clone())
    {
        Some(key) => key,
        None => {
            tracing::warn!("no API key from --api-key flag or GOOGLE_PLACES_API_KEY");
            anyhow::bail!(
                "no API key: pass --api-key or set GOOGLE_PLACES_API_KEY in the environment"
            );
        }
    };

    tracing::info!(query, "starting places search");

    let rows = search_and_rank_with_base_url(
        query,
        &api_key,
        config.request_timeout_secs,
        &config.places_base_url,
    )
    .await?;

    if rows.is_empty() {
        println!("no results found for '{query}'");
        return Ok(());
    }

    println!("found {} result(s) for '{query}'", rows.len());
    println!();

    if json {
        print_json(&rows)?;
    } else {
        print_table(&rows);
    }

    if let Some(target) = csv_target {
        export::write_csv_file(&target.path, &rows)?;
        tracing::info!(
            path = %target.path.display(),
            count = rows.len(),
            "wrote csv export"
        );
        println!();
        println!("wrote {} row(s) to {}", rows.len(), target.path.display());
    }

    Ok(())
}

/// Print the ranked rows as a fixed-width table, websiteless leads on top.
fn print_table(rows: &[NormalizedPlace]) {
    let header = format!("{:<32}{:<40}{:<24}WEBSITE", "NAME", "ADDRESS", "PRICE LEVEL");
    println!("{header}");
    for row in rows {
        let website = if row.has_website {
            row.website.as_str()
        } else {
            "\u{2014}"
        };
        println!(
            "{:<32}{:<40}{:<24}{}",
            truncate(&row.name, 28),
            truncate(&row.address, 36),
            row.price_level,
            website
        );
    }
}

/// Dump the normalized rows as a JSON array, field order matching the CSV
/// export.
fn print_json(rows: &[NormalizedPlace]) -> anyhow::Result<()> {
    let values: Vec<serde_json::Value> = rows
        .iter()
        .map(|row| {
            serde_json::json!({
                "name": row.name,
                "address": row.address,
                "price_level": row.price_level,
                "has_website": row.has_website,
                "website": row.website,
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&values)?);
    Ok(())
}

/// Truncate a string to `max` characters, appending `...` when shortened.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        format!("{}...", s.chars().take(max).collect::<String>())
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn run_search_without_api_key_fails_before_any_request() {
        let config = AppConfig {
            google_places_api_key: None,
            log_level: "info".to_string(),
            request_timeout_secs: 30,
            // TEST-NET address; never contacted because the handler bails first.
            places_base_url: "http://192.0.2.1".to_string(),
        };

        let result = run_search(&config, "coffee shops", None, None, false).await;
        let err = result.expect_err("missing API key must be an error");
        assert!(
            err.to_string().contains("GOOGLE_PLACES_API_KEY"),
            "error should name the env var, got: {err}"
        );
    }

    #[test]
    fn default_csv_name_replaces_spaces() {
        assert_eq!(
            default_csv_name("coffee shops in houston"),
            "search_results_coffee_shops_in_houston.csv"
        );
    }

    #[test]
    fn csv_target_prefers_explicit_path() {
        let target = CsvTarget::new(Some(PathBuf::from("out.csv")), "coffee shops");
        assert_eq!(target.path, PathBuf::from("out.csv"));
    }

    #[test]
    fn csv_target_derives_name_from_query() {
        let target = CsvTarget::new(None, "coffee shops");
        assert_eq!(target.path, PathBuf::from("search_results_coffee_shops.csv"));
    }

    #[test]
    fn truncate_leaves_short_strings_alone() {
        assert_eq!(truncate("short", 28), "short");
    }

    #[test]
    fn truncate_shortens_long_strings() {
        let long = "a".repeat(40);
        let out = truncate(&long, 28);
        assert_eq!(out.chars().count(), 31);
        assert!(out.ends_with("..."));
    }
}
