//! Auxiliary fields embedded in the contour template.

use super::error::PolicyError;

/// Property names and generator parameters for contour vector tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContourFields {
    /// Feature property holding the elevation in meters.
    pub elevation_key: String,
    /// Feature property holding the line level (0 = minor).
    pub level_key: String,
    /// Vector tile layer name.
    pub layer_name: String,
    /// Pixels of neighbouring tiles sampled around each tile edge.
    pub buffer_pixels: u32,
    /// Zoom levels past the DEM maxzoom synthesized by resampling.
    pub overzoom_levels: u8,
}

impl Default for ContourFields {
    fn default() -> Self {
        Self {
            elevation_key: "ele".to_string(),
            level_key: "level".to_string(),
            layer_name: "contours".to_string(),
            buffer_pixels: 1,
            overzoom_levels: 2,
        }
    }
}

impl ContourFields {
    /// Check that every name is present.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.elevation_key.is_empty() {
            return Err(PolicyError::EmptyField("elevation_key"));
        }
        if self.level_key.is_empty() {
            return Err(PolicyError::EmptyField("level_key"));
        }
        if self.layer_name.is_empty() {
            return Err(PolicyError::EmptyField("layer_name"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ContourFields::default().validate().is_ok());
    }

    #[test]
    fn test_empty_layer_rejected() {
        let fields = ContourFields {
            layer_name: String::new(),
            ..Default::default()
        };
        assert_eq!(fields.validate(), Err(PolicyError::EmptyField("layer_name")));
    }
}
