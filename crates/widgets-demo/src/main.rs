// File: crates/widgets-demo/src/main.rs
// Summary: Demo feed; pushes synthetic samples into a line chart and a number readout, writing PNG frames.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use live_widgets::types::{HEIGHT, WIDTH};
use live_widgets::{LineChart, NumberChart, RectI32, RenderSurface, SeriesId, Widget, WidgetConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "widgets-demo", about = "Render live widgets from a synthetic feed")]
struct Args {
    /// TOML widget config; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of line-chart frames to write.
    #[arg(short, long, default_value_t = 8)]
    frames: usize,

    /// Output directory for PNGs.
    #[arg(short, long, default_value = "target/out")]
    out: PathBuf,

    /// Series to feed when the config lists none.
    #[arg(short, long, default_value_t = 3)]
    series: usize,

    /// Halve the period after this many frames.
    #[arg(long)]
    shrink_at: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let cfg = match &args.config {
        Some(path) => WidgetConfig::load(path).with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => WidgetConfig::default(),
    };

    let ids: Vec<SeriesId> = if cfg.series.is_empty() {
        (0..args.series).map(|i| SeriesId::new(format!("s{i}"))).collect()
    } else {
        cfg.series_ids().cloned().collect()
    };
    let catalog = cfg.catalog()?;
    if catalog.is_empty() {
        tracing::info!("no series metadata configured; labels fall back to ids");
    }
    tracing::info!(
        series = ids.len(),
        described = catalog.len(),
        period = cfg.period_secs,
        sampling_ms = cfg.sampling_time_ms,
        "starting feed"
    );

    let mut surface = RenderSurface::new(WIDTH, HEIGHT)?;
    let catalog = Rc::new(catalog);
    let mut line = LineChart::from_config(surface.bounds(), &cfg, catalog)?;
    let mut number = NumberChart::from_config(RectI32::from_ltwh(0, 0, 320, 160), &cfg)?;

    for id in &ids {
        line.add_data_type(id.clone());
        number.add_data_type(id.clone());
    }

    // one frame covers a quarter of the visible history
    let per_frame = (line.amount_of_values() / 4).max(1);
    let mut tick = 0usize;
    for frame in 0..args.frames {
        if args.shrink_at == Some(frame) {
            let period = line.period() / 2.0;
            line.change_period(period)?;
            tracing::info!(period, capacity = line.amount_of_values(), "period shrunk");
        }
        for _ in 0..per_frame {
            for (k, id) in ids.iter().enumerate() {
                let v = sample(tick, k);
                line.push(id, v);
                number.push(id, v);
            }
            tick += 1;
        }
        surface.draw(&line);
        let path = args.out.join(format!("line_{frame:04}.png"));
        write(&mut surface, &path)?;
        tracing::info!(frame, max = line.max_value(), "wrote {}", path.display());
    }

    let mut readout = RenderSurface::new(320, 160)?;
    readout.draw(&number);
    let path = args.out.join("number.png");
    write(&mut readout, &path)?;
    tracing::info!(value = number.text(), "wrote {}", path.display());
    Ok(())
}

/// Deterministic waveform per series: a sine with a slow drift and a periodic spike.
fn sample(tick: usize, series: usize) -> f64 {
    let t = tick as f64 * 0.02;
    let phase = series as f64 * 1.3;
    let base = (t + phase).sin() * 2.0 + 3.0 + series as f64;
    let spike = if (tick + series * 37) % 211 == 0 { 4.0 } else { 0.0 };
    base + spike + (t * 0.05).sin()
}

fn write(surface: &mut RenderSurface, path: &Path) -> Result<()> {
    surface
        .write_png(path)
        .with_context(|| format!("failed to write '{}'", path.display()))
}
