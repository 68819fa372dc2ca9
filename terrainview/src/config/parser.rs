//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;
use std::str::FromStr;

use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::contour::ThresholdBand;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [archive] section
    if let Some(section) = ini.section(Some("archive")) {
        if let Some(v) = section.get("base_url") {
            config.archive.base_url = non_empty("archive", "base_url", v)?;
        }
        if let Some(v) = section.get("scheme") {
            config.archive.scheme = non_empty("archive", "scheme", v)?;
        }
        if let Some(v) = section.get("low_zoom_cutoff") {
            config.archive.low_zoom_cutoff =
                parse_number("archive", "low_zoom_cutoff", v, "expected a zoom level (0-24)")?;
        }
        if let Some(v) = section.get("low_zoom_key") {
            config.archive.low_zoom_key = non_empty("archive", "low_zoom_key", v)?;
        }
        if let Some(v) = section.get("grid_shift") {
            config.archive.grid_shift =
                parse_number("archive", "grid_shift", v, "expected a zoom level (0-24)")?;
        }
        if let Some(v) = section.get("tile_extension") {
            config.archive.tile_extension =
                non_empty("archive", "tile_extension", v.trim_start_matches('.'))?;
        }
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.archive.directory = Some(expand_tilde(v));
            }
        }
    }

    // [dem] section
    if let Some(section) = ini.section(Some("dem")) {
        if let Some(v) = section.get("tilejson_url") {
            config.dem.tilejson_url = non_empty("dem", "tilejson_url", v)?;
        }
        if let Some(v) = section.get("use_protocol") {
            config.dem.use_protocol = parse_bool("dem", "use_protocol", v)?;
        }
        if let Some(v) = section.get("encoding") {
            config.dem.encoding = v.trim().to_lowercase().parse().map_err(|reason| {
                ConfigFileError::InvalidValue {
                    section: "dem".to_string(),
                    key: "encoding".to_string(),
                    value: v.to_string(),
                    reason,
                }
            })?;
        }
        if let Some(v) = section.get("tile_size") {
            config.dem.tile_size =
                parse_number("dem", "tile_size", v, "expected a pixel size like 256 or 512")?;
        }
        if let Some(v) = section.get("min_zoom") {
            config.dem.min_zoom = parse_number("dem", "min_zoom", v, "expected a zoom level")?;
        }
        if let Some(v) = section.get("max_zoom") {
            config.dem.max_zoom = parse_number("dem", "max_zoom", v, "expected a zoom level")?;
        }
        if let Some(v) = section.get("attribution") {
            config.dem.attribution = v.trim().to_string();
        }
        if let Some(v) = section.get("exaggeration") {
            let exaggeration: f64 =
                parse_number("dem", "exaggeration", v, "expected a number like 1.0")?;
            if !exaggeration.is_finite() || exaggeration <= 0.0 {
                return Err(invalid("dem", "exaggeration", v, "must be greater than 0"));
            }
            config.dem.exaggeration = exaggeration;
        }
        if config.dem.min_zoom > config.dem.max_zoom {
            return Err(invalid(
                "dem",
                "min_zoom",
                &config.dem.min_zoom.to_string(),
                "must not exceed max_zoom",
            ));
        }
    }

    // [contour] section
    if let Some(section) = ini.section(Some("contour")) {
        if let Some(v) = section.get("dem_url") {
            config.contour.dem_url = non_empty("contour", "dem_url", v)?;
        }
        if let Some(v) = section.get("dem_max_zoom") {
            config.contour.dem_max_zoom =
                parse_number("contour", "dem_max_zoom", v, "expected a zoom level")?;
        }
        if let Some(v) = section.get("thresholds") {
            config.contour.thresholds =
                parse_thresholds(v).map_err(|reason| invalid("contour", "thresholds", v, &reason))?;
        }
        if let Some(v) = section.get("elevation_key") {
            config.contour.fields.elevation_key = non_empty("contour", "elevation_key", v)?;
        }
        if let Some(v) = section.get("level_key") {
            config.contour.fields.level_key = non_empty("contour", "level_key", v)?;
        }
        if let Some(v) = section.get("layer") {
            config.contour.fields.layer_name = non_empty("contour", "layer", v)?;
        }
        if let Some(v) = section.get("buffer") {
            config.contour.fields.buffer_pixels =
                parse_number("contour", "buffer", v, "expected a pixel count")?;
        }
        if let Some(v) = section.get("overzoom") {
            config.contour.fields.overzoom_levels =
                parse_number("contour", "overzoom", v, "expected a number of zoom levels")?;
        }
        if let Some(v) = section.get("max_zoom") {
            config.contour.max_zoom =
                parse_number("contour", "max_zoom", v, "expected a zoom level")?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("file") {
            config.logging.file = non_empty("logging", "file", v)?;
        }
    }

    Ok(config)
}

/// Parse a threshold table written as `zoom:interval,interval;zoom:...`.
///
/// Only the syntax is checked here. Ordering and positivity rules are
/// enforced by [`crate::contour::ContourPolicy::new`].
///
/// # Example
///
/// ```
/// use terrainview::config::parse_thresholds;
///
/// let bands = parse_thresholds("12:100,500;14:20,100").unwrap();
/// assert_eq!(bands[1].zoom_floor, 14);
/// assert_eq!(bands[1].intervals, vec![20, 100]);
/// ```
pub fn parse_thresholds(value: &str) -> Result<Vec<ThresholdBand>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("expected at least one band like '12:100,500'".to_string());
    }

    value
        .split(';')
        .map(str::trim)
        .filter(|band| !band.is_empty())
        .map(|band| {
            let (zoom, intervals) = band
                .split_once(':')
                .ok_or_else(|| format!("band '{}' is missing ':'", band))?;
            let zoom_floor = zoom
                .trim()
                .parse::<u8>()
                .map_err(|_| format!("'{}' is not a zoom level", zoom.trim()))?;
            let intervals = intervals
                .split(',')
                .map(str::trim)
                .filter(|i| !i.is_empty())
                .map(|i| {
                    i.parse::<u32>()
                        .map_err(|_| format!("'{}' is not a whole-meter interval", i))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(ThresholdBand::new(zoom_floor, intervals))
        })
        .collect()
}

/// Inverse of [`parse_thresholds`].
pub fn format_thresholds(bands: &[ThresholdBand]) -> String {
    bands
        .iter()
        .map(|band| {
            let intervals: Vec<String> = band.intervals.iter().map(u32::to_string).collect();
            format!("{}:{}", band.zoom_floor, intervals.join(","))
        })
        .collect::<Vec<_>>()
        .join(";")
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn non_empty(section: &str, key: &str, value: &str) -> Result<String, ConfigFileError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(invalid(section, key, value, "must not be empty"));
    }
    Ok(value.to_string())
}

fn parse_number<T: FromStr>(
    section: &str,
    key: &str,
    value: &str,
    reason: &str,
) -> Result<T, ConfigFileError> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(section, key, value, reason))
}

fn parse_bool(section: &str, key: &str, value: &str) -> Result<bool, ConfigFileError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(invalid(section, key, value, "expected true or false")),
    }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::DemEncoding;

    fn parse(content: &str) -> Result<ConfigFile, ConfigFileError> {
        let ini = Ini::load_from_str(content).unwrap();
        parse_ini(&ini)
    }

    #[test]
    fn test_empty_ini_is_default() {
        assert_eq!(parse("").unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_parse_thresholds_default_table() {
        let bands = parse_thresholds("12:100,500;14:20,100").unwrap();
        assert_eq!(
            bands,
            vec![
                ThresholdBand::new(12, vec![100, 500]),
                ThresholdBand::new(14, vec![20, 100]),
            ]
        );
    }

    #[test]
    fn test_parse_thresholds_tolerates_whitespace_and_trailing_separator() {
        let bands = parse_thresholds(" 12 : 100 , 500 ; ").unwrap();
        assert_eq!(bands, vec![ThresholdBand::new(12, vec![100, 500])]);
    }

    #[test]
    fn test_parse_thresholds_rejects_garbage() {
        assert!(parse_thresholds("").is_err());
        assert!(parse_thresholds("12").is_err());
        assert!(parse_thresholds("x:100").is_err());
        assert!(parse_thresholds("12:100,abc").is_err());
        assert!(parse_thresholds("12:-5").is_err());
    }

    #[test]
    fn test_format_thresholds_matches_config_syntax() {
        let bands = vec![
            ThresholdBand::new(12, vec![100, 500]),
            ThresholdBand::new(14, vec![20, 100]),
        ];
        assert_eq!(format_thresholds(&bands), "12:100,500;14:20,100");
    }

    #[test]
    fn test_dem_section() {
        let config = parse(
            "[dem]\nencoding = Mapbox\nuse_protocol = yes\nmin_zoom = 3\nmax_zoom = 15\n",
        )
        .unwrap();
        assert_eq!(config.dem.encoding, DemEncoding::Mapbox);
        assert!(config.dem.use_protocol);
        assert_eq!(config.dem.min_zoom, 3);
        assert_eq!(config.dem.max_zoom, 15);
    }

    #[test]
    fn test_dem_rejects_inverted_zoom_range() {
        let err = parse("[dem]\nmin_zoom = 15\nmax_zoom = 3\n").unwrap_err();
        assert!(matches!(err, ConfigFileError::InvalidValue { ref key, .. } if key == "min_zoom"));
    }

    #[test]
    fn test_dem_rejects_unknown_encoding() {
        let err = parse("[dem]\nencoding = png\n").unwrap_err();
        assert!(matches!(err, ConfigFileError::InvalidValue { ref key, .. } if key == "encoding"));
    }

    #[test]
    fn test_dem_rejects_non_positive_exaggeration() {
        assert!(parse("[dem]\nexaggeration = 0\n").is_err());
        assert!(parse("[dem]\nexaggeration = -1.5\n").is_err());
    }

    #[test]
    fn test_contour_fields() {
        let config = parse(
            "[contour]\nelevation_key = height\nlevel_key = rank\nlayer = iso\nbuffer = 2\noverzoom = 1\n",
        )
        .unwrap();
        let fields = &config.contour.fields;
        assert_eq!(fields.elevation_key, "height");
        assert_eq!(fields.level_key, "rank");
        assert_eq!(fields.layer_name, "iso");
        assert_eq!(fields.buffer_pixels, 2);
        assert_eq!(fields.overzoom_levels, 1);
    }

    #[test]
    fn test_empty_string_values_rejected() {
        let err = parse("[archive]\nlow_zoom_key =\n").unwrap_err();
        assert!(
            matches!(err, ConfigFileError::InvalidValue { ref key, .. } if key == "low_zoom_key")
        );
    }

    #[test]
    fn test_tile_extension_strips_leading_dot() {
        let config = parse("[archive]\ntile_extension = .png\n").unwrap();
        assert_eq!(config.archive.tile_extension, "png");
    }

    #[test]
    fn test_unsorted_thresholds_pass_syntax_check() {
        // Semantic validation is deferred to the contour policy.
        let config = parse("[contour]\nthresholds = 14:20;12:100\n").unwrap();
        assert_eq!(config.contour.thresholds.len(), 2);
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde("/var/tiles"), PathBuf::from("/var/tiles"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/tiles"), home.join("tiles"));
        }
    }
}
