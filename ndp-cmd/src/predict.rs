//! Prediction queries against the remote service.

use log::info;
use ndp_core::category::DisasterCategory;
use ndp_core::dates;
use serde_json::Value;

/// Fetch and print predictions for a year.
///
/// With `--json` the payload (or the selected category's slice of it) is
/// printed verbatim; otherwise each category gets a one-line summary. An
/// unknown `--category` fails before any network call is made.
pub async fn run_predict(
    year: Option<i32>,
    category: Option<&str>,
    json: bool,
    base_url: &str,
) -> anyhow::Result<()> {
    let year = year.unwrap_or_else(dates::current_year);

    // Validate the filter up front so a typo doesn't cost a network call.
    let filter: Option<DisasterCategory> = category.map(str::parse).transpose()?;

    let client = ndp_api::native::http_client()?;
    info!("Requesting predictions for {year} from {base_url}");
    let payload = ndp_api::native::fetch_prediction(&client, base_url, year).await?;

    match filter {
        Some(category) => {
            let series = payload.get(category.label()).cloned().unwrap_or(Value::Null);
            if json {
                println!("{}", serde_json::to_string_pretty(&series)?);
            } else {
                println!("{}", summarize(category.label(), &series));
            }
        }
        None => {
            if json {
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                for category in DisasterCategory::ALL {
                    let series = payload.get(category.label()).cloned().unwrap_or(Value::Null);
                    println!("{}", summarize(category.label(), &series));
                }
            }
        }
    }
    Ok(())
}

/// Print the supported categories, one per line.
pub fn run_categories() {
    for category in DisasterCategory::ALL {
        println!("{category}");
    }
}

/// One-line summary of a category's series.
fn summarize(label: &str, series: &Value) -> String {
    match series {
        Value::Array(entries) => format!("{label}: {} prediction entries", entries.len()),
        Value::Null => format!("{label}: no data"),
        other => format!("{label}: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summarize_counts_array_entries() {
        let series = json!([
            { "state": "TX", "probability": 0.82 },
            { "state": "OK", "probability": 0.74 },
        ]);
        assert_eq!(
            summarize("Severe Storm", &series),
            "Severe Storm: 2 prediction entries"
        );
    }

    #[test]
    fn summarize_handles_missing_category() {
        assert_eq!(summarize("Tornado", &Value::Null), "Tornado: no data");
    }

    #[test]
    fn summarize_passes_scalars_through() {
        assert_eq!(summarize("Flood", &json!(0.5)), "Flood: 0.5");
    }
}
