//! `geoview search`: one concurrent webcam and trail lookup, printed as a
//! table or as JSON.

use clap::{ArgGroup, Args};
use geoview_aggregator::{GeoAggregator, SearchResults};
use geoview_core::{resolve_or_default, AppConfig, Coordinate, FixedCoordinate};
use geoview_trails::TrailRecord;
use geoview_webcams::WebcamRecord;

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("location").required(true).args(["lat", "here"])))]
pub(crate) struct SearchArgs {
    /// Latitude in decimal degrees
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub(crate) lat: Option<f64>,
    /// Longitude in decimal degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub(crate) lon: Option<f64>,
    /// Search around the current location, or the configured default point
    #[arg(long, conflicts_with = "lon")]
    pub(crate) here: bool,
    /// Only show trails offering this activity (repeatable)
    #[arg(long = "activity", value_name = "NAME")]
    pub(crate) activities: Vec<String>,
    /// Print results as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

/// Runs one search and prints it to stdout.
///
/// # Errors
///
/// Returns an error if the sources cannot be built from `config`, the
/// coordinate is invalid, or JSON encoding fails. Source fetch failures are
/// reported in the status lines, not as errors.
pub(crate) async fn run_search(config: &AppConfig, args: &SearchArgs) -> anyhow::Result<()> {
    let aggregator = GeoAggregator::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build search sources: {e}"))?;

    let mut results = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => aggregator.search_lat_lon(lat, lon).await?,
        _ => {
            // No device location in a terminal; the provider always defers to config.
            let coordinate =
                resolve_or_default(&FixedCoordinate(None), config.default_coordinate).await;
            aggregator.search(coordinate).await
        }
    };

    if !args.activities.is_empty() {
        results.trails = results
            .trails_offering(&args.activities)
            .into_iter()
            .cloned()
            .collect();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!("{}", render_text(&results, &args.activities));
    }
    Ok(())
}

pub(crate) fn render_text(results: &SearchResults, activities: &[String]) -> String {
    let mut lines = vec![format!("search around {}", fmt_coordinate(results.coordinate))];

    lines.push(format!("webcams: {}", results.webcam_status));
    if !results.webcams.is_empty() {
        lines.push(format!(
            "  {:<12}{:<36}{:<22}LOCATION",
            "ID", "TITLE", "UPDATED"
        ));
        lines.extend(results.webcams.iter().map(webcam_row));
    }

    let filter_note = if activities.is_empty() {
        String::new()
    } else {
        format!(" [activity: {}]", activities.join(", "))
    };
    lines.push(format!("trails: {}{filter_note}", results.trail_status));
    if !results.trails.is_empty() {
        lines.push(format!(
            "  {:<10}{:<32}{:<24}ACTIVITIES",
            "PLACE", "NAME", "CITY"
        ));
        lines.extend(results.trails.iter().map(trail_row));
    }

    lines.join("\n")
}

fn webcam_row(webcam: &WebcamRecord) -> String {
    let updated = webcam.last_updated().map_or_else(
        || "-".to_string(),
        |t| t.format("%Y-%m-%d %H:%M UTC").to_string(),
    );
    format!(
        "  {:<12}{:<36}{:<22}{}",
        webcam.id,
        truncate(&webcam.title, 34),
        updated,
        fmt_coordinate(webcam.coordinate())
    )
}

fn trail_row(trail: &TrailRecord) -> String {
    let place = match (trail.city.as_str(), trail.state.as_str()) {
        ("", "") => "-".to_string(),
        (city, "") => city.to_string(),
        ("", state) => state.to_string(),
        (city, state) => format!("{city}, {state}"),
    };
    let activities: Vec<&str> = trail
        .activities
        .iter()
        .map(|(key, a)| {
            if a.activity_type_name.is_empty() {
                key.as_str()
            } else {
                a.activity_type_name.as_str()
            }
        })
        .collect();
    format!(
        "  {:<10}{:<32}{:<24}{}",
        trail.place_id,
        truncate(&trail.name, 30),
        truncate(&place, 22),
        activities.join(", ")
    )
}

fn fmt_coordinate(coordinate: Coordinate) -> String {
    format!("{:.4}, {:.4}", coordinate.latitude(), coordinate.longitude())
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut out: String = value.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('\u{2026}');
    out
}
