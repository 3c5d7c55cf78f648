// File: crates/demo/src/main.rs
// Summary: Demo loads x/y samples from CSV and renders the smoothed curve to PNG and SVG.

use anyhow::{Context, Result};
use curve_core::{build_scene, DataPoint, PathMode, Viewport};
use curve_render_skia::theme::find as find_theme;
use curve_render_skia::{RenderOptions, SkiaRenderer, Theme};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const USAGE: &str = "usage: smoothcurve-demo <samples.csv> [--config viewport.json] [--linear] [--theme light|dark] [--out dir]";

#[derive(Debug)]
struct Args {
    input: String,
    config: Option<PathBuf>,
    mode: PathMode,
    theme: Theme,
    out_dir: PathBuf,
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut input = None;
    let mut config = None;
    let mut mode = PathMode::Smooth;
    let mut theme = Theme::default();
    let mut out_dir = PathBuf::from("target/out");
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => config = Some(PathBuf::from(it.next().context("--config needs a path")?)),
            "--out" => out_dir = PathBuf::from(it.next().context("--out needs a directory")?),
            "--linear" => mode = PathMode::Linear,
            "--theme" => theme = find_theme(&it.next().context("--theme needs a name")?),
            "-h" | "--help" => anyhow::bail!(USAGE),
            s if s.starts_with("--") => anyhow::bail!("unknown flag {s}\n{USAGE}"),
            _ => input = Some(arg),
        }
    }
    let input = input.context(USAGE)?;
    Ok(Args { input, config, mode, theme, out_dir })
}

fn main() -> Result<()> {
    let _ = curve_core::telemetry::init_default_tracing();
    let args = parse_args(std::env::args().skip(1))?;

    let (path, used_alt) = resolve_path(&args.input)?;
    info!(input = %path.display(), "using input file");
    if used_alt {
        info!("extension swapped between .csv/.cvs");
    }

    let viewport = match &args.config {
        Some(cfg) => load_viewport(cfg).with_context(|| format!("failed to load config '{}'", cfg.display()))?,
        None => Viewport::default(),
    };

    let data = load_xy_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    info!(points = data.len(), "loaded samples");

    let scene = build_scene(&data, &viewport, args.mode)
        .with_context(|| format!("cannot plot {} samples at {}x{}", data.len(), viewport.width, viewport.height))?;

    let out_png = out_name_with(&args.out_dir, &path, args.mode)?;
    let opts = RenderOptions { theme: args.theme, ..RenderOptions::default() };
    SkiaRenderer::new().render_to_png(&scene, &opts, &out_png)?;
    info!(path = %out_png.display(), theme = opts.theme.name, "wrote png");

    let out_svg = out_png.with_extension("svg");
    std::fs::write(&out_svg, scene.to_svg_document()).with_context(|| format!("writing {}", out_svg.display()))?;
    info!(path = %out_svg.display(), "wrote svg");

    Ok(())
}

fn load_viewport(path: &Path) -> Result<Viewport> {
    let text = std::fs::read_to_string(path)?;
    let viewport: Viewport = serde_json::from_str(&text)?;
    Ok(viewport)
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

/// Produce output file name like <out>/curve_<stem>_<mode>.png
fn out_name_with(out_dir: &Path, input: &Path, mode: PathMode) -> Result<PathBuf> {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("samples");
    let suffix = match mode {
        PathMode::Smooth => "smooth",
        PathMode::Linear => "linear",
    };
    std::fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
    Ok(out_dir.join(format!("curve_{stem}_{suffix}.png")))
}

/// Load x/y samples. Columns named `x` and `y` win; otherwise the first two.
fn load_xy_csv(path: &Path) -> Result<Vec<DataPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |name: &str| headers.iter().position(|h| h == name);
    let (i_x, i_y) = match (idx("x"), idx("y")) {
        (Some(x), Some(y)) => (x, y),
        _ => {
            warn!(?headers, "no x/y header; using the first two columns");
            (0, 1)
        }
    };

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.parse::<f64>().ok());
        match (parse(i_x), parse(i_y)) {
            (Some(x), Some(y)) => out.push(DataPoint::new(x, y)),
            _ => warn!(row, "skipping row without numeric x/y"),
        }
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
