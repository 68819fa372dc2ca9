//! Peaks command - list the built-in mountains or show one of them.

use clap::Args;
use terrainview::archive::ArchiveLayout;
use terrainview::peaks::{Peak, PeakCatalog};

use crate::error::CliError;

/// Arguments for the peaks command.
#[derive(Debug, Args)]
pub struct PeaksArgs {
    /// Name (or part of it) of a peak to show
    pub name: Option<String>,

    /// Zoom level of the terrain tile reported for the peak
    #[arg(long, default_value = "14")]
    pub zoom: u8,
}

/// Run the peaks command.
pub fn run(args: &PeaksArgs, catalog: &PeakCatalog, layout: &ArchiveLayout) -> Result<(), CliError> {
    let Some(query) = args.name.as_deref() else {
        for (i, peak) in catalog.peaks().iter().enumerate() {
            println!("{:>2}. {:<16} {:>9.4}, {:>9.4}", i + 1, peak.name, peak.lat, peak.lon);
        }
        return Ok(());
    };

    let peak = catalog
        .find(query)
        .ok_or_else(|| CliError::Usage(format!("No peak matches '{}'", query)))?;
    print!("{}", describe(peak, args.zoom, layout)?);
    Ok(())
}

fn describe(peak: &Peak, zoom: u8, layout: &ArchiveLayout) -> Result<String, CliError> {
    let target = peak.camera_target();
    let tile = peak.tile(zoom)?;
    let locator = layout.resolve(&tile);

    Ok(format!(
        "{}\n  Summit:   {:.4}, {:.4}\n  Camera:   zoom {}, pitch {}, bearing {}, {} ms\n  Tile:     {}\n  Archive:  {}\n",
        peak.name,
        peak.lat,
        peak.lon,
        target.zoom,
        target.pitch,
        target.bearing,
        target.duration.as_millis(),
        tile,
        locator.archive_key(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrainview::coord::TileCoord;

    #[test]
    fn test_describe_fuji() {
        let catalog = PeakCatalog::japan();
        let fuji = catalog.find("fuji").unwrap();

        let text = describe(fuji, 14, &ArchiveLayout::default()).unwrap();
        assert_eq!(fuji.tile(14).unwrap(), TileCoord::new(14, 14505, 6470).unwrap());
        assert!(text.contains("Tile:     14/14505/6470"));
        assert!(text.contains("Archive:  6-56-25"));
        assert!(text.contains("5000 ms"));
    }

    #[test]
    fn test_describe_low_zoom_uses_planet() {
        let catalog = PeakCatalog::japan();
        let fuji = catalog.find("fuji").unwrap();

        let text = describe(fuji, 10, &ArchiveLayout::default()).unwrap();
        assert!(text.contains("Archive:  planet"));
    }

    #[test]
    fn test_unknown_peak_is_usage_error() {
        let args = PeaksArgs {
            name: Some("Everest".to_string()),
            zoom: 14,
        };
        let result = run(&args, &PeakCatalog::japan(), &ArchiveLayout::default());
        assert!(matches!(result, Err(CliError::Usage(_))));
    }
}
