//! Classify a synthetic count column and print the legend plus a few styled rows.
//!
//! Usage:
//!   cargo run -p hexstyle --example classify_counts -- [classes] [palette]

use hexstyle::{build_layer, Feature, LayerCfg, Palette};

fn main() {
    let mut args = std::env::args().skip(1);
    let classes = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(5usize);
    let palette = Palette::by_name(&args.next().unwrap_or_else(|| "grey_blue".to_string()));

    let features: Vec<Feature> = (0..60u32)
        .map(|i| {
            let count = match i % 6 {
                0 => 200 + i,
                1 | 2 => 40 + i % 7,
                _ => 1 + i % 5,
            };
            Feature::new(format!("hex-{i:03}"), f64::from(count))
        })
        .collect();

    let cfg = LayerCfg {
        classes,
        palette,
        ..LayerCfg::default()
    };
    let layer = build_layer(&features, &cfg).expect("layer builds");
    let legend = layer.legend.expect("non-empty input has a legend");

    println!("{} breaks={:?}", legend.caption, legend.index);
    for (i, color) in legend.colors.iter().enumerate() {
        let upper = legend.index[(i + 1).min(legend.index.len() - 1)];
        println!("  [{:>6.1}, {:>6.1}) {color}", legend.index[i], upper);
    }
    for f in layer.features.iter().take(6) {
        println!(
            "{} value={} fill={} opacity={:.3} weight={:.3}",
            f.id, f.value, f.style.fill_color, f.style.fill_opacity, f.style.stroke_weight
        );
    }
}
