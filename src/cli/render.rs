use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use argodash::dashboard::{DashboardController, RenderPayload};
use argodash::store::{load_bundle, FloatId};

use super::config::Config;

/// Compute one dashboard view and print its series.
///
/// Selection strings from flags and config pass through the same fallible
/// setters the UI uses, so an unknown view name or malformed date is rejected
/// here with the selection error instead of silently rendering the wrong
/// view.
pub fn run(
    bundle: PathBuf,
    view: Option<String>,
    float_id: Option<String>,
    date: Option<String>,
    json: bool,
    config: Option<PathBuf>,
) -> Result<()> {
    let store = load_bundle(&bundle)
        .with_context(|| format!("Failed to load bundle {}", bundle.display()))?;
    let mut dashboard = DashboardController::new(store);

    let defaults = match config {
        Some(path) => Config::from_file(&path)?,
        None => Config::default(),
    };

    // Config file first, command-line flags override.
    let view = view.or(defaults.render.view);
    let float_id = float_id.or(defaults.render.float_id);
    let date = date.or(defaults.render.reference_date);

    if let Some(id) = float_id {
        dashboard.set_selected_float(FloatId::new(id));
    }
    if let Some(date) = date.as_deref() {
        dashboard.set_selected_date_named(date)?;
    }
    if let Some(view) = view.as_deref() {
        dashboard.set_active_view_named(view)?;
    }

    let selection = dashboard.selection();
    info!(
        "Rendering {} (float {}, date {})",
        selection.active_view, selection.float_id, selection.reference_date
    );

    if json {
        println!("{}", serde_json::to_string_pretty(dashboard.published())?);
    } else {
        print_payload(dashboard.published());
    }

    Ok(())
}

fn print_payload(payload: &RenderPayload) {
    println!("View: {}", payload.view);

    if payload.series.is_empty() {
        println!("  (no matching measurements - placeholder chart)");
        return;
    }

    for series in &payload.series {
        println!(
            "Series: {} ({}) - {:?}, {} points{}",
            series.label,
            series.unit,
            series.style,
            series.point_count(),
            if series.invert_y { ", inverted y" } else { "" }
        );
        for point in &series.points {
            match &point.caption {
                Some(caption) => println!("  {:>10.3} {:>10.3}  {}", point.x, point.y, caption),
                None => println!("  {:>10.3} {:>10.3}", point.x, point.y),
            }
        }
    }
}
