// File: crates/demo/src/main.rs
// Summary: Demo loads bar/line entries from CSV, builds a combined chart and resolves touch points against it.

use anyhow::{Context, Result};
use chart_highlight::{
    Axis, AxisTransformers, BarData, BarEntry, Chart, ChartEntry, CombinedData, DataSet, Entry, Highlighter, Insets, LineData, Point, Rect, Selection,
    SelectionChange,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const SURFACE_WIDTH: u32 = 800;
const SURFACE_HEIGHT: u32 = 600;

/// One CSV row: x, optional line value, bar stack values.
struct Row {
    x: f64,
    line: Option<f64>,
    stack: Vec<f64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Usage: highlight-demo [data.csv] [x,y ...]
    let mut args = std::env::args().skip(1);
    let raw = args.next().unwrap_or_else(|| "crates/demo/data/sample.csv".to_string());
    let touches = args.map(|a| parse_touch(&a)).collect::<Result<Vec<_>>>()?;

    let (path, used_alt) = resolve_path(&raw)?;
    info!(path = %path.display(), "using input file");
    if used_alt {
        info!("extension swapped between .csv/.cvs");
    }

    let rows = load_rows_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    info!(rows = rows.len(), "loaded rows");
    if rows.is_empty() {
        anyhow::bail!("no rows loaded, check headers/delimiter.");
    }

    let chart = build_chart(&rows)?;
    let touches = if touches.is_empty() { default_touches(&chart) } else { touches };

    let mut highlighter = Highlighter::new();
    let mut selection = Selection::new();
    for touch in touches {
        let hit = highlighter.highlight(&chart, touch);
        match &hit {
            Some(h) => info!(
                touch_x = touch.x,
                touch_y = touch.y,
                x = h.x,
                y = h.y,
                data_index = ?h.data_index,
                data_set = h.data_set_index,
                stack = ?h.stack_index,
                "highlighted"
            ),
            None => info!(touch_x = touch.x, touch_y = touch.y, "nothing under touch"),
        }
        match selection.tap(hit, &chart.options) {
            SelectionChange::Selected(h) => info!(x = h.x, y = h.y, "selected"),
            SelectionChange::Cleared => info!("selection cleared"),
            SelectionChange::Unchanged => {}
        }
    }
    Ok(())
}

fn build_chart(rows: &[Row]) -> Result<Chart> {
    let bars: Vec<BarEntry> = rows
        .iter()
        .filter(|r| !r.stack.is_empty())
        .map(|r| if r.stack.len() == 1 { BarEntry::new(r.x, r.stack[0]) } else { BarEntry::stacked(r.x, r.stack.clone()) })
        .collect();
    let line: Vec<Entry> = rows.iter().filter_map(|r| r.line.map(|y| Entry::new(r.x, y))).collect();

    let (x_min, x_max) = minmax(rows.iter().map(|r| r.x));
    let (y_min, y_max) = minmax(
        bars.iter()
            .flat_map(|b| [-b.negative_sum(), b.positive_sum(), b.y()])
            .chain(line.iter().map(|e| e.y)),
    );

    let mut data = CombinedData::default();
    if !bars.is_empty() {
        let set = DataSet::new("bars", bars)?;
        info!(label = set.label(), entries = set.entry_count(), stack_size = set.stack_size(), "built data set");
        data.bar = Some(BarData::new(vec![set]));
    }
    if !line.is_empty() {
        let set = DataSet::new("line", line)?;
        info!(label = set.label(), entries = set.entry_count(), "built data set");
        data.line = Some(LineData::new(vec![set]));
    }

    // half a bar of room on either side of the x range
    let x_axis = Axis::new("x", x_min - 0.5, x_max + 0.5);
    let y_axis = Axis::new("y", y_min.min(0.0), y_max.max(0.0) * 1.05);
    let content = Rect::content(SURFACE_WIDTH, SURFACE_HEIGHT, &Insets::new(60, 20, 20, 40));
    let transformers = AxisTransformers::vertical(&x_axis, &y_axis, &y_axis, content).context("building transformers")?;
    Ok(Chart::combined(data, transformers))
}

/// Touches across the surface that have candidates, then the last one again to show deselection.
fn default_touches(chart: &Chart) -> Vec<Point> {
    let mut hl = Highlighter::new();
    let sweep = Rect::content(SURFACE_WIDTH, SURFACE_HEIGHT, &Insets::default());
    let step = sweep.width() / 8.0;
    let mut out: Vec<Point> = (0..8)
        .flat_map(|i| {
            let x = sweep.left + step * (i as f64 + 0.5);
            [Point::new(x, sweep.height() * 0.3), Point::new(x, sweep.height() * 0.7)]
        })
        .filter(|p| !hl.candidates(chart, *p).is_empty())
        .collect();
    if let Some(&last) = out.last() {
        out.push(last);
    }
    out
}

fn parse_touch(s: &str) -> Result<Point> {
    let (x, y) = s.split_once(',').with_context(|| format!("touch '{s}' is not of the form x,y"))?;
    let x = x.trim().parse::<f64>().with_context(|| format!("bad touch x in '{s}'"))?;
    let y = y.trim().parse::<f64>().with_context(|| format!("bad touch y in '{s}'"))?;
    Ok(Point::new(x, y))
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Load rows from a CSV with an x column, an optional line column and any number of bar columns.
fn load_rows_csv(path: &Path) -> Result<Vec<Row>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    info!(?headers, "csv headers");

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_x = idx(&["x", "index", "time", "category"]);
    let i_line = idx(&["line", "value", "close"]);
    let i_bars: Vec<usize> = headers.iter().enumerate().filter(|(_, h)| h.starts_with("bar")).map(|(i, _)| i).collect();

    if i_line.is_none() && i_bars.is_empty() {
        warn!("no line or bar* columns found");
    }

    let mut out = Vec::new();
    for (row_index, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |ix: usize| -> Option<f64> { rec.get(ix).and_then(|s| s.trim().parse::<f64>().ok()) };

        let x = i_x.and_then(parse).unwrap_or(row_index as f64);
        let line = i_line.and_then(parse);
        let stack: Vec<f64> = i_bars.iter().filter_map(|&ix| parse(ix)).collect();
        if line.is_none() && stack.is_empty() {
            warn!(row = row_index, "skipping row without values");
            continue;
        }
        out.push(Row { x, line, stack });
    }
    Ok(out)
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

fn minmax(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min_v = f64::INFINITY;
    let mut max_v = f64::NEG_INFINITY;
    for v in values {
        min_v = min_v.min(v);
        max_v = max_v.max(v);
    }
    (min_v, max_v)
}
