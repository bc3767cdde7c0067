use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use planar::prelude::*;
use std::path::Path;
use std::rc::Rc;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod load;
mod provenance;
mod report;

use provenance::{write_sidecar, Provenance};
use report::Summary;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Planar figure statistics and demonstration driver")]
struct Cmd {
    /// Worker threads for background representation work (0 = shared pool)
    #[arg(long, default_value_t = 0)]
    workers: usize,

    /// Log registry events at debug level
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build every figure kind from sample points and print its statistics
    Demo,
    /// Load figures from a CSV (figure,kind,name,x,y) and print statistics
    Run {
        #[arg(long)]
        input: String,
        /// Optional JSON summary path; a provenance sidecar is written next to it
        #[arg(long)]
        out: Option<String>,
    },
    /// Draw seeded random figures and print statistics
    Random {
        #[arg(long, default_value_t = 10)]
        count: usize,
        #[arg(long, default_value_t = 2025)]
        seed: u64,
        #[arg(long)]
        out: Option<String>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    let cfg = MathematicsCfg {
        worker_threads: cmd.workers,
        ..MathematicsCfg::default()
    };
    match cmd.action {
        Action::Demo => demo(cfg),
        Action::Run { input, out } => run(cfg, input, out),
        Action::Random { count, seed, out } => random(cfg, count, seed, out),
        Action::Report => report(),
    }
}

/// Prints the longest description of every delivery.
struct ConsoleObserver;

impl RepresentationObserver for ConsoleObserver {
    fn on_representation_found(&self, longest: &str) {
        println!("observer: longest representation is \"{longest}\"");
    }
}

fn demo(cfg: MathematicsCfg) -> Result<()> {
    tracing::info!(workers = cfg.worker_threads, "demo");
    let p = [
        Point::new(0.0, 0.0),
        Point::new(3.0, 0.0),
        Point::new(3.0, 4.0),
        Point::new(0.0, 4.0),
    ];
    let candidates = [
        (FigureKind::Line, vec![p[0], p[1]]),
        (FigureKind::Triangle, vec![p[0], p[1], p[2]]),
        (FigureKind::Quadrilateral, p.to_vec()),
        (FigureKind::Rhombus, p.to_vec()),
        (FigureKind::Rectangle, p.to_vec()),
        (FigureKind::Square, p.to_vec()),
        (FigureKind::Unknown, vec![p[0], p[2]]),
        // malformed on purpose: reported and skipped
        (FigureKind::Triangle, p.to_vec()),
    ];

    let mut m = Mathematics::with_cfg(cfg)?;
    for (kind, points) in candidates {
        match Figure::new(kind, points, Some(kind.default_name().to_string())) {
            Ok(f) => m.add(f),
            Err(e) => eprintln!("skipping {kind}: {e}"),
        }
    }

    let observer = Rc::new(ConsoleObserver);
    m.set_observer(&observer);
    m.set_default_handler(Box::new(|r: &Representations| {
        println!("callback: longest    = {}", r.longest);
        println!("callback: shortest   = {}", r.shortest);
        println!("callback: largest    = {}", r.largest);
        println!("callback: smallest   = {}", r.smallest);
    }));
    m.find_figure_representations(None);
    m.wait_all();

    m.clear_observer();
    Summary::collect(&mut m).print();
    Ok(())
}

fn run(cfg: MathematicsCfg, input: String, out: Option<String>) -> Result<()> {
    tracing::info!(input, out = ?out, "run");
    let mut m = Mathematics::with_cfg(cfg)?;
    let mut skipped = 0usize;
    for loaded in load::load_figures_csv(&input)? {
        match loaded.figure {
            Ok(f) => m.add(f),
            Err(e) => {
                skipped += 1;
                eprintln!("skipping figure {}: {e}", loaded.id);
            }
        }
    }
    tracing::info!(figures = m.len(), skipped, "loaded");
    let summary = Summary::collect(&mut m);
    summary.print();
    if let Some(out) = out {
        let params = serde_json::json!({ "input": input, "skipped": skipped });
        write_summary(&out, &summary, Provenance::new("run", params))?;
    }
    Ok(())
}

fn random(cfg: MathematicsCfg, count: usize, seed: u64, out: Option<String>) -> Result<()> {
    tracing::info!(count, seed, "random");
    let mut m = Mathematics::with_cfg(cfg)?;
    for f in draw_figures(&RandomFiguresCfg::default(), seed, count) {
        m.add(f);
    }
    let summary = Summary::collect(&mut m);
    summary.print();
    if let Some(out) = out {
        let params = serde_json::json!({ "count": count, "seed": seed });
        write_summary(&out, &summary, Provenance::new("random", params))?;
    }
    Ok(())
}

fn write_summary(out: &str, summary: &Summary, prov: Provenance) -> Result<()> {
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(summary)?)
        .with_context(|| format!("writing {out}"))?;
    let prov_path = write_sidecar(out_path, prov)?;
    tracing::info!(out, provenance = %prov_path.display(), "summary written");
    Ok(())
}

fn report() -> Result<()> {
    let prov = Provenance::new("report", serde_json::json!({}));
    println!("{}", serde_json::to_string_pretty(&prov)?);
    Ok(())
}
