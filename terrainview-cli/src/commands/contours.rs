//! Contours command - show which contour intervals apply at each zoom.

use clap::Args;
use terrainview::app::AppConfig;
use terrainview::contour::ContourPolicy;

use crate::error::CliError;

/// Arguments for the contours command.
#[derive(Debug, Args)]
pub struct ContoursArgs {
    /// Show a single zoom level instead of the whole table
    #[arg(long)]
    pub zoom: Option<u8>,

    /// Report the line level drawn at this elevation (meters); needs --zoom
    #[arg(long, requires = "zoom", allow_hyphen_values = true)]
    pub elevation: Option<i32>,
}

/// Run the contours command.
pub fn run(args: &ContoursArgs, config: &AppConfig) -> Result<(), CliError> {
    let policy = &config.policy;

    match (args.zoom, args.elevation) {
        (Some(zoom), Some(elevation)) => {
            println!("{}", describe_elevation(policy, zoom, elevation));
        }
        (Some(zoom), None) => {
            println!("{}", describe_zoom(policy, zoom));
        }
        _ => {
            for zoom in 0..=config.contour_max_zoom {
                println!("{}", describe_zoom(policy, zoom));
            }
        }
    }
    Ok(())
}

fn describe_zoom(policy: &ContourPolicy, zoom: u8) -> String {
    match policy.levels(zoom) {
        Some(levels) => {
            let intervals: Vec<String> = policy
                .active_intervals(zoom)
                .iter()
                .map(|i| format!("{}m", i))
                .collect();
            format!(
                "z{:<2}  {}  (minor {}m, major {}m)",
                zoom,
                intervals.join(" / "),
                levels.minor,
                levels.major
            )
        }
        None => format!("z{:<2}  no contours", zoom),
    }
}

fn describe_elevation(policy: &ContourPolicy, zoom: u8, elevation: i32) -> String {
    let levels = match policy.levels(zoom) {
        Some(levels) => levels,
        None => return format!("z{}: no contours are drawn at this zoom", zoom),
    };

    match policy.level_for_elevation(zoom, elevation) {
        Some(level) => {
            let kind = if level == 0 && levels.minor != levels.major {
                "minor"
            } else {
                "major"
            };
            format!("z{} {}m: {} line, level {}", zoom, elevation, kind, level)
        }
        None => format!(
            "z{} {}m: no line (not a multiple of {}m)",
            zoom, elevation, levels.minor
        ),
    }
}
