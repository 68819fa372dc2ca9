//! Resolve command - show which archive serves a tile.

use clap::Args;
use terrainview::app::AppConfig;
use terrainview::archive::ArchiveLocator;
use terrainview::config::ConfigFile;
use terrainview::coord::{to_tile_coords, TileCoord};
use terrainview::protocol::tile_url;

use crate::error::CliError;

/// Arguments for the resolve command.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Tile as three numbers: zoom x y
    #[arg(num_args = 3, value_names = ["Z", "X", "Y"], conflicts_with_all = ["lat", "lon"])]
    pub tile: Vec<u32>,

    /// Latitude in decimal degrees (with --lon and --zoom)
    #[arg(long, requires_all = ["lon", "zoom"], allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees (with --lat and --zoom)
    #[arg(long, requires_all = ["lat", "zoom"], allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Zoom level for --lat/--lon
    #[arg(long)]
    pub zoom: Option<u8>,
}

impl ResolveArgs {
    /// The tile the arguments name.
    pub fn coord(&self) -> Result<TileCoord, CliError> {
        match (self.tile.as_slice(), self.lat, self.lon, self.zoom) {
            ([z, x, y], None, None, _) => {
                let zoom = u8::try_from(*z)
                    .map_err(|_| CliError::Usage(format!("Zoom level {} is out of range", z)))?;
                Ok(TileCoord::new(zoom, *x, *y)?)
            }
            ([], Some(lat), Some(lon), Some(zoom)) => Ok(to_tile_coords(lat, lon, zoom)?),
            _ => Err(CliError::Usage(
                "Give a tile as 'Z X Y' or a location with --lat, --lon and --zoom".to_string(),
            )),
        }
    }
}

/// Run the resolve command.
pub fn run(args: &ResolveArgs, file: &ConfigFile, config: &AppConfig) -> Result<(), CliError> {
    let coord = args.coord()?;
    let locator = config.layout.resolve(&coord);
    print!("{}", describe(&locator, file, &config.scheme));
    Ok(())
}

fn describe(locator: &ArchiveLocator, file: &ConfigFile, scheme: &str) -> String {
    let rows = [
        ("Tile", locator.coord().to_string()),
        ("Archive", locator.archive_key().to_string()),
        ("Archive URL", locator.archive_url(&file.archive.base_url)),
        (
            "PMTiles URL",
            locator.protocol_url(&file.archive.base_url, &file.archive.tile_extension),
        ),
        ("Request URL", tile_url(scheme, locator.coord())),
    ];
    rows.iter()
        .map(|(label, value)| format!("{:<13} {}\n", format!("{}:", label), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tile: Vec<u32>) -> ResolveArgs {
        ResolveArgs {
            tile,
            lat: None,
            lon: None,
            zoom: None,
        }
    }

    #[test]
    fn test_coord_from_tile_numbers() {
        let coord = args(vec![14, 14505, 6469]).coord().unwrap();
        assert_eq!(coord, TileCoord::new(14, 14505, 6469).unwrap());
    }

    #[test]
    fn test_coord_from_location() {
        let coord = ResolveArgs {
            tile: vec![],
            lat: Some(35.3606),
            lon: Some(138.7274),
            zoom: Some(14),
        }
        .coord()
        .unwrap();
        assert_eq!((coord.x(), coord.y()), (14505, 6469));
    }

    #[test]
    fn test_coord_rejects_out_of_grid_tile() {
        assert!(matches!(
            args(vec![2, 4, 0]).coord(),
            Err(CliError::Coordinates(_))
        ));
        assert!(matches!(
            args(vec![300, 0, 0]).coord(),
            Err(CliError::Usage(_))
        ));
    }

    #[test]
    fn test_describe_high_zoom_tile() {
        let file = ConfigFile::default();
        let config = AppConfig::from_config_file(&file).unwrap();
        let locator = config.layout.resolve(&TileCoord::new(14, 14505, 6469).unwrap());

        let text = describe(&locator, &file, &config.scheme);
        assert!(text
            .lines()
            .any(|line| line.starts_with("Archive:") && line.ends_with(" 6-56-25")));
        assert!(text.contains(
            "pmtiles://https://download.mapterhorn.com/6-56-25.pmtiles/14/14505/6469.webp"
        ));
        assert!(text.contains("mapterhorn://14/14505/6469"));
    }
}
