//! CLI tool for splitgrid - drives a headless grid and prints scroll state as JSON
//!
//! Usage:
//!   splitgrid_cli [--rows N] [COMMAND...]
//!
//! Commands:
//!   wheel:PX      wheel scroll by PX pixels (negative = up)
//!   ticks:N       legacy wheel ticks
//!   page-up       click the track above the thumb
//!   page-down     click the track below the thumb
//!   drag:F        drag the thumb to fraction F
//!   refresh       reconcile and resync the scrollbar
//!
//! Set `RUST_LOG=trace` to see every reconciliation.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::io::{self, Write};

use serde::Serialize;
use splitgrid::{
    Axis, Cell, ColumnDescriptor, GridConfig, RawWheel, RecordingPane, ReconcileStats, Row,
    ScrollDebug, ScrollDelta, ViewportEngine,
};

#[derive(Serialize)]
struct Step<'a> {
    command: &'a str,
    stats: Option<ReconcileStats>,
    state: ScrollDebug,
    attached_static: usize,
    attached_floating: usize,
}

fn columns() -> Vec<ColumnDescriptor> {
    let mut columns = vec![ColumnDescriptor::text("Hierarchy")];
    columns.extend((1..12).map(|i| ColumnDescriptor::amount(format!("Period {i}"))));
    columns
}

fn run(
    grid: &mut ViewportEngine<RecordingPane>,
    command: &str,
) -> splitgrid::Result<Option<ReconcileStats>> {
    if let Some(px) = command.strip_prefix("wheel:") {
        let delta = px.parse().unwrap_or(0.0);
        return grid.handle_scroll(ScrollDelta::vertical(delta));
    }
    if let Some(n) = command.strip_prefix("ticks:") {
        let ticks = n.parse().unwrap_or(0);
        return grid.handle_wheel(RawWheel::Ticks {
            axis: Axis::Vertical,
            ticks,
        });
    }
    if let Some(f) = command.strip_prefix("drag:") {
        let target: f64 = f.parse().unwrap_or(0.0);
        let (top, length, track) = {
            let bar = grid.scrollbar();
            (bar.thumb_position(), bar.thumb_length(), bar.track_length())
        };
        let grip = length / 2.0;
        grid.scrollbar_pointer_down(top + grip)?;
        grid.scrollbar_pointer_up(target * (track - length) + grip)?;
        return Ok(None);
    }
    match command {
        "page-up" => {
            grid.scrollbar_pointer_down(-1.0)?;
            Ok(None)
        }
        "page-down" => {
            let y = grid.scrollbar().track_length() + 1.0;
            grid.scrollbar_pointer_down(y)?;
            Ok(None)
        }
        "refresh" => grid.refresh().map(Some),
        other => {
            eprintln!("Unknown command: {other}");
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let mut rows: usize = 100_000;
    if args.first().map(String::as_str) == Some("--rows") {
        if args.len() < 2 {
            eprintln!("Usage: splitgrid_cli [--rows N] [COMMAND...]");
            std::process::exit(1);
        }
        rows = match args[1].parse() {
            Ok(n) => n,
            Err(e) => {
                eprintln!("Invalid row count {}: {}", args[1], e);
                std::process::exit(1);
            }
        };
        args.drain(..2);
    }

    let mut grid = match ViewportEngine::new(
        columns(),
        GridConfig::default(),
        RecordingPane::new(),
        RecordingPane::new(),
    ) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error building grid: {}", e);
            std::process::exit(1);
        }
    };

    for i in 0..rows {
        let mut cells = vec![Cell::Text(format!("Hierarchy-Level-{}", i + 1))];
        cells.extend(
            (1..12).map(|p| Cell::Amount(((i * 7919 + p * 104_729) % 1_200_000) as f64)),
        );
        grid.register_row(Row::new(cells));
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut commands = vec!["refresh".to_string()];
    commands.extend(args);

    for command in &commands {
        let stats = match run(&mut grid, command) {
            Ok(stats) => stats,
            Err(e) => {
                eprintln!("Error running {command}: {e}");
                std::process::exit(1);
            }
        };
        let step = Step {
            command,
            stats,
            state: grid.scroll_debug(),
            attached_static: grid.static_pane().attached_count(),
            attached_floating: grid.floating_pane().attached_count(),
        };
        let json = serde_json::to_string(&step).expect("scroll state serializes");
        writeln!(out, "{json}").expect("write to stdout");
    }
}
