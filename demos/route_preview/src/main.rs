//! route_preview — frame an encoded route polyline under a bottom sheet.
//!
//! Decodes a polyline, drops origin/destination markers on its ends, and
//! walks the sheet through a drag-up and a drag-down, printing every
//! framing the map would receive as one JSON line.
//!
//! ```text
//! route_preview [ENCODED] [WINDOW_HEIGHT_PX] [--config FIT_CONFIG.json]
//! RUST_LOG=debug route_preview '_p~iF~ps|U_ulLnnqC_mqNvxq`@' 900
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use ride_core::{GeoPoint, Marker};
use ride_map::{BottomSheet, Detent, FitConfig, Framing, MapFramer, RegionFitter, SheetConfig};

// ── Defaults ──────────────────────────────────────────────────────────────────

const DEFAULT_ROUTE:         &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";
const DEFAULT_WINDOW_HEIGHT: f64  = 844.0;

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Encoded route polyline.
    #[arg(default_value = DEFAULT_ROUTE)]
    encoded: String,

    /// Height of the map window in pixels.
    #[arg(default_value_t = DEFAULT_WINDOW_HEIGHT)]
    window_height: f64,

    /// JSON file with `FitConfig` overrides.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(path: Option<&PathBuf>) -> Result<FitConfig> {
    let Some(path) = path else {
        return Ok(FitConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: FitConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

fn print_framing(step: &str, framing: &Framing) -> Result<()> {
    let json = serde_json::json!({ "step": step, "framing": framing });
    println!("{}", serde_json::to_string(&json)?);
    Ok(())
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;

    // 1. Decode the route.
    let route: Vec<GeoPoint> = ride_polyline::decode_validated(&args.encoded)
        .with_context(|| format!("decoding {:?}", args.encoded))?;
    let (Some(&first), Some(&last)) = (route.first(), route.last()) else {
        bail!("route has no points");
    };
    let length_km: f64 = route.windows(2).map(|w| w[0].distance_km(w[1])).sum();
    log::info!("decoded {} route points, {length_km:.1} km", route.len());

    // 2. Framer with markers on the route ends.
    let mut framer = MapFramer::new(RegionFitter::new(config)?, |_: &Framing| {});
    framer.set_route(route);
    framer.set_markers(vec![Marker::origin(first), Marker::destination(last)]);
    print_framing("markers", framer.framing())?;

    // 3. Sheet at rest.
    let mut sheet = BottomSheet::new(SheetConfig::for_window(args.window_height))?;
    framer.set_viewport(Some(sheet.viewport()));
    print_framing("sheet-mid", framer.framing())?;

    // 4. Drag the sheet up past the snap tolerance, then release.
    sheet.begin_drag();
    for dy in [-40.0, -80.0, -120.0] {
        if sheet.drag(dy) {
            framer.set_occlusion(sheet.occlusion());
        }
    }
    let detent = sheet.release();
    framer.set_occlusion(sheet.occlusion());
    print_framing(&format!("release-{detent:?}").to_lowercase(), framer.framing())?;

    // 5. Drag it back down to the minimum.
    sheet.begin_drag();
    let moved = sheet.drag(args.window_height);
    log::debug!("oversized drag moved the sheet: {moved}");
    sheet.drag(sheet.detent_height(Detent::Max) - 150.0);
    let detent = sheet.release();
    framer.set_occlusion(sheet.occlusion());
    print_framing(&format!("release-{detent:?}").to_lowercase(), framer.framing())?;

    Ok(())
}
