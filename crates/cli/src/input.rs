//! Hex summary ingestion: CSV or Parquet -> `Feature` rows.
//!
//! Expected columns: an id column, a count column, and optionally
//! `min_x`/`min_y`/`max_x`/`max_y` per-hexagon bounds (all four or none).

use anyhow::{bail, Context, Result};
use hexstyle::{Bounds, Feature};
use polars::prelude::*;
use std::path::Path;

const BOUNDS_COLUMNS: [&str; 4] = ["min_x", "min_y", "max_x", "max_y"];

pub fn read_features(path: &Path, id_column: &str, value_column: &str) -> Result<Vec<Feature>> {
    let df = load_frame(path)?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_shape");

    let ids = string_column(&df, id_column)?;
    let values = f64_column(&df, value_column)?;
    let bounds = if BOUNDS_COLUMNS.iter().all(|c| df.column(c).is_ok()) {
        let [min_x, min_y, max_x, max_y] = BOUNDS_COLUMNS.map(|c| f64_column(&df, c));
        let (min_x, min_y, max_x, max_y) = (min_x?, min_y?, max_x?, max_y?);
        Some(
            (0..df.height())
                .map(|row| Bounds::new(min_x[row], min_y[row], max_x[row], max_y[row]))
                .collect::<Vec<_>>(),
        )
    } else {
        None
    };

    let features = ids
        .into_iter()
        .zip(values)
        .enumerate()
        .map(|(row, (id, value))| {
            let feature = Feature::new(id, value);
            match &bounds {
                Some(b) => feature.with_bounds(b[row]),
                None => feature,
            }
        })
        .collect();
    Ok(features)
}

fn load_frame(path: &Path) -> Result<DataFrame> {
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()?,
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
        _ => bail!("unsupported input {} (expected .csv or .parquet)", path.display()),
    };
    lf.collect()
        .with_context(|| format!("reading {}", path.display()))
}

fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column '{name}'"))?
        .cast(&DataType::Float64)?;
    series
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("null '{name}' at row {row}")))
        .collect()
}

fn string_column(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column '{name}'"))?
        .cast(&DataType::String)?;
    series
        .str()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| {
            v.map(str::to_string)
                .with_context(|| format!("null '{name}' at row {row}"))
        })
        .collect()
}
