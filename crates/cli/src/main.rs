use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use hexstyle::{
    build_layer, compute_breaks, spawn_breaks, style_layer, LayerCfg, Palette, PaletteName,
    StyledLayer,
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "hexstyle-cli")]
#[command(about = "Classify hexagon counts and emit renderer-ready styles")]
struct Cmd {
    /// Optional run tag; propagated to provenance sidecars and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    /// Log solver and layer details
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build a styled layer (breaks, legend, per-feature styles) and write it as JSON
    Style(StyleArgs),
    /// Print Jenks breaks for the value column
    Breaks {
        #[command(flatten)]
        table: TableArgs,
        #[arg(long, default_value_t = 5)]
        classes: usize,
    },
    /// List built-in palettes and their colors
    Palettes,
}

#[derive(Args)]
struct TableArgs {
    /// Hex summary table (.csv or .parquet)
    #[arg(long)]
    input: PathBuf,
    #[arg(long, default_value = "hex_id")]
    id_column: String,
    #[arg(long, default_value = "pipe_count")]
    value_column: String,
}

#[derive(Args)]
struct StyleArgs {
    #[command(flatten)]
    table: TableArgs,
    #[arg(long)]
    out: PathBuf,
    /// Palette name; unknown names fall back to grey_blue unless --strict-palette
    #[arg(long, default_value = "grey_blue")]
    palette: String,
    #[arg(long)]
    strict_palette: bool,
    #[arg(long, default_value_t = 5)]
    classes: usize,
    /// Tooltip fields (comma separated); defaults to the value column
    #[arg(long, value_delimiter = ',')]
    tooltip: Vec<String>,
    /// Give up on the breaks solve after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Style(args) => style(args, cmd.tag).map(|_| ()),
        Action::Breaks { table, classes } => breaks(table, classes),
        Action::Palettes => palettes(),
    }
}

fn style(args: StyleArgs, tag: Option<String>) -> Result<StyledLayer> {
    tracing::info!(
        input = %args.table.input.display(),
        palette = %args.palette,
        classes = args.classes,
        tag = ?tag,
        "style"
    );
    let features = input::read_features(
        &args.table.input,
        &args.table.id_column,
        &args.table.value_column,
    )?;
    let cfg = LayerCfg {
        value_column: args.table.value_column.clone(),
        palette: resolve_palette(&args.palette, args.strict_palette)?,
        classes: args.classes,
        tooltip_fields: (!args.tooltip.is_empty()).then(|| args.tooltip.clone()),
        ..LayerCfg::default()
    };

    let layer = match args.timeout_ms {
        Some(ms) if !features.is_empty() => {
            let values = features.iter().map(|f| f.value).collect();
            let breaks = spawn_breaks(values, args.classes)
                .wait_timeout(Duration::from_millis(ms))
                .context("solving breaks")?;
            style_layer(&features, breaks, &cfg)?
        }
        _ => build_layer(&features, &cfg).context("building layer")?,
    };

    write_json(&args.out, &layer)?;
    let params = serde_json::json!({
        "input": args.table.input.to_string_lossy(),
        "id_column": args.table.id_column,
        "value_column": args.table.value_column,
        "palette": args.palette,
        "classes": args.classes,
        "features": layer.features.len(),
        "breaks": layer.breaks,
    });
    provenance::write_sidecar(&args.out, provenance::Payload::new(params).tagged(tag))?;
    tracing::info!(
        features = layer.features.len(),
        out = %args.out.display(),
        "layer_written"
    );
    Ok(layer)
}

fn breaks(table: TableArgs, classes: usize) -> Result<()> {
    let features = input::read_features(&table.input, &table.id_column, &table.value_column)?;
    let values: Vec<f64> = features.iter().map(|f| f.value).collect();
    let breaks = compute_breaks(&values, classes)
        .with_context(|| format!("classifying '{}'", table.value_column))?;
    println!("{}", serde_json::to_string(&breaks)?);
    Ok(())
}

fn palettes() -> Result<()> {
    for name in PaletteName::ALL {
        println!("{:<10} {}", name.as_str(), name.colors().join(" "));
    }
    Ok(())
}

fn resolve_palette(name: &str, strict: bool) -> Result<Palette> {
    if strict {
        let named: PaletteName = name.parse()?;
        return Ok(named.into());
    }
    if name.parse::<PaletteName>().is_err() {
        tracing::warn!(palette = name, "unknown palette; using grey_blue");
    }
    Ok(Palette::by_name(name))
}

fn write_json(out: &Path, layer: &StyledLayer) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(layer)?)
        .with_context(|| format!("writing {}", out.display()))
}
