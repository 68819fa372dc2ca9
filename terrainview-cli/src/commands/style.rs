//! Template and sources commands - print what the map engine registers.

use terrainview::app::TerrainViewApp;
use terrainview::contour::ContourTemplate;

use crate::error::CliError;

/// Print the contour tile URL template.
pub fn run_template(app: &TerrainViewApp) -> Result<(), CliError> {
    println!("{}", app.template());
    Ok(())
}

/// Decode a contour template and print its bands and fields.
pub fn run_parse_template(url: &str) -> Result<(), CliError> {
    let (policy, fields) = ContourTemplate::parse(url).map_err(CliError::Template)?;

    println!("Thresholds:");
    for band in policy.bands() {
        let intervals: Vec<String> = band.intervals.iter().map(u32::to_string).collect();
        println!("  z{}+  {}", band.zoom_floor, intervals.join(", "));
    }
    println!("Elevation key:  {}", fields.elevation_key);
    println!("Level key:      {}", fields.level_key);
    println!("Layer:          {}", fields.layer_name);
    println!("Buffer:         {}", fields.buffer_pixels);
    println!("Overzoom:       {}", fields.overzoom_levels);
    Ok(())
}

/// Print the style sources as JSON.
pub fn run_sources(app: &TerrainViewApp) -> Result<(), CliError> {
    let style = app.style_json()?;
    println!("{}", serde_json::to_string_pretty(&style)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use terrainview::archive::MemoryArchiveReader;
    use terrainview::config::ConfigFile;

    fn app() -> TerrainViewApp {
        TerrainViewApp::start(&ConfigFile::default(), Arc::new(MemoryArchiveReader::new())).unwrap()
    }

    #[test]
    fn test_parse_template_accepts_configured_template() {
        let app = app();
        assert!(run_parse_template(app.template().as_str()).is_ok());
    }

    #[test]
    fn test_parse_template_rejects_malformed_url() {
        let result = run_parse_template("dem-contour://{z}/{x}/{y}?buffer=1");
        assert!(matches!(result, Err(CliError::Template(_))));
    }

    #[test]
    fn test_parse_template_rejects_unsorted_bands() {
        let result =
            run_parse_template("dem-contour://{z}/{x}/{y}?thresholds=14*20*100~12*100*500");
        assert!(matches!(result, Err(CliError::Template(_))));
    }

    #[test]
    fn test_template_and_sources_print() {
        let app = app();
        assert!(run_template(&app).is_ok());
        assert!(run_sources(&app).is_ok());
    }
}
