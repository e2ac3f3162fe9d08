//! Basic example demonstrating forecast-actual anomaly detection
//!
//! Run with: cargo run --example basic -p detect-facade

use chrono::NaiveDate;
use detect_facade::{AnomalyDetector, ComparisonEngine, EngineConfig};
use frame::{Frame, Value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Forecast-Actual Comparison Examples ===\n");

    let cell = "100|90|92|95|98|100|102|105|108|110";
    let dates: Vec<Value> = (1..=3)
        .map(|d| Value::Date(NaiveDate::from_ymd_opt(2025, 6, d).unwrap()))
        .collect();

    // Forecast batch: one pipe-delimited quantile cell per (date, metric).
    let forecast = Frame::from_columns(vec![
        ("date", dates.clone()),
        (
            "desktop_organic",
            vec![Value::from(cell), Value::from(cell), Value::from(cell)],
        ),
    ])?;

    // Observed values for the same dates.
    let actual = Frame::from_columns(vec![
        ("date", dates),
        (
            "desktop_organic",
            vec![
                Value::Float(100.0), // inside the interval
                Value::Float(115.0), // above the p90 bound
                Value::Float(81.0),  // below the p10 bound
            ],
        ),
    ])?;

    let config = EngineConfig::default().with_dimension_names(vec!["platform", "channel"]);
    let engine = ComparisonEngine::new(config)?;

    println!("1. Structured comparison results");
    for result in engine.compare(&forecast, &actual)? {
        println!(
            "   {} {} actual={} interval=[{}, {}] => {} (deviation {:.2}%)",
            result.date.map(|d| d.to_string()).unwrap_or_default(),
            result.metric,
            result.actual,
            result.lower,
            result.upper,
            result.status,
            result.deviation_pct,
        );
    }

    println!("\n2. Detection report frame");
    let report = engine.detect(forecast, actual)?;
    println!("   columns: {:?}", report.column_names());
    println!("   rows: {}", report.n_rows());
    let anomalies = report
        .column("status")?
        .iter()
        .filter(|s| matches!(s.as_str(), Some("ABOVE_UPPER") | Some("BELOW_LOWER")))
        .count();
    println!("   anomalies: {anomalies}");

    println!("\n=== Examples Complete ===");
    Ok(())
}
