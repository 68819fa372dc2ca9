//! INI serialization logic for converting `ConfigFile` → INI string.

use std::path::Path;

use super::parser::format_thresholds;
use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub fn to_config_string(config: &ConfigFile) -> String {
    let archive_directory = config
        .archive
        .directory
        .as_ref()
        .map(|p| path_to_string(p))
        .unwrap_or_default();
    let use_protocol = if config.dem.use_protocol {
        "true"
    } else {
        "false"
    };

    format!(
        r#"[archive]
; Base URL the partitioned terrain archives are published under
base_url = {}
; URL scheme the terrain protocol handler is registered as
scheme = {}
; Zoom levels at or below this value are served from a single archive
low_zoom_cutoff = {}
; Archive key used for low zoom tiles
low_zoom_key = {}
; Zoom level of the grid that partitions high zoom tiles into archives
grid_shift = {}
; Tile image extension inside archives
tile_extension = {}
; Local directory of unpacked archives (<key>/<z>/<x>/<y>.<ext>), used by `fetch`
directory = {}

[dem]
; TileJSON endpoint for the terrain and hillshade source
tilejson_url = {}
; Serve terrain tiles through the archive protocol instead of TileJSON
use_protocol = {}
; Elevation encoding: terrarium or mapbox
encoding = {}
tile_size = {}
min_zoom = {}
max_zoom = {}
attribution = {}
; Vertical exaggeration of the 3-D terrain
exaggeration = {}

[contour]
; Tile URL the contour generator samples elevation from
dem_url = {}
dem_max_zoom = {}
; Contour intervals in meters per zoom band: zoom:minor,major;zoom:minor,major
thresholds = {}
elevation_key = {}
level_key = {}
layer = {}
; Pixels of neighbouring tiles sampled around each tile
buffer = {}
; Zoom levels of DEM overzoom before generating lines
overzoom = {}
; Highest zoom the contour source is requested at
max_zoom = {}

[logging]
directory = {}
file = {}
"#,
        config.archive.base_url,
        config.archive.scheme,
        config.archive.low_zoom_cutoff,
        config.archive.low_zoom_key,
        config.archive.grid_shift,
        config.archive.tile_extension,
        archive_directory,
        config.dem.tilejson_url,
        use_protocol,
        config.dem.encoding,
        config.dem.tile_size,
        config.dem.min_zoom,
        config.dem.max_zoom,
        config.dem.attribution,
        config.dem.exaggeration,
        config.contour.dem_url,
        config.contour.dem_max_zoom,
        format_thresholds(&config.contour.thresholds),
        config.contour.fields.elevation_key,
        config.contour.fields.level_key,
        config.contour.fields.layer_name,
        config.contour.fields.buffer_pixels,
        config.contour.fields.overzoom_levels,
        config.contour.max_zoom,
        path_to_string(&config.logging.directory),
        config.logging.file,
    )
}

fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_string_contains_every_section() {
        let content = to_config_string(&ConfigFile::default());
        for section in ["[archive]", "[dem]", "[contour]", "[logging]"] {
            assert!(content.contains(section), "missing {}", section);
        }
        assert!(content.contains("thresholds = 12:100,500;14:20,100"));
        assert!(content.contains("encoding = terrarium"));
        assert!(content.contains("directory = \n"));
    }
}
