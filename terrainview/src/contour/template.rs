//! Contour tile request template.
//!
//! The template is the vector source URL registered with the rendering
//! engine. Its query string carries the full threshold table and the field
//! names, encoded the way the contour generator's protocol expects:
//!
//! ```text
//! dem-contour://{z}/{x}/{y}?buffer=1&contourLayer=contours&elevationKey=ele
//!     &levelKey=level&overzoom=2&thresholds=12*100*500~14*20*100
//! ```
//!
//! Query keys are sorted, values are URI-component encoded, bands are joined
//! with `~` and a band's floor and intervals with `*`.

use std::fmt;

use super::error::PolicyError;
use super::fields::ContourFields;
use super::policy::{ContourPolicy, ThresholdBand};
use crate::coord::TileCoord;

/// Protocol id of the contour generator's URL scheme.
pub const DEFAULT_PROTOCOL_ID: &str = "dem-contour";

const TILE_PLACEHOLDERS: &str = "{z}/{x}/{y}";
const BAND_SEPARATOR: char = '~';
const VALUE_SEPARATOR: char = '*';

/// Immutable contour source URL template, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContourTemplate {
    url: String,
}

/// Validate `bands` and `fields` and encode them into a template on
/// [`DEFAULT_PROTOCOL_ID`].
///
/// # Errors
///
/// [`PolicyError`] if the band table or field names are malformed.
pub fn build_template(
    bands: Vec<ThresholdBand>,
    fields: ContourFields,
) -> Result<ContourTemplate, PolicyError> {
    let policy = ContourPolicy::new(bands)?;
    ContourTemplate::build(&policy, &fields, DEFAULT_PROTOCOL_ID)
}

impl ContourTemplate {
    /// Encode a validated policy.
    ///
    /// # Errors
    ///
    /// [`PolicyError::EmptyField`] for empty field names,
    /// [`PolicyError::MalformedTemplate`] for an empty protocol id.
    pub fn build(
        policy: &ContourPolicy,
        fields: &ContourFields,
        protocol_id: &str,
    ) -> Result<Self, PolicyError> {
        fields.validate()?;
        if protocol_id.is_empty() {
            return Err(PolicyError::MalformedTemplate(
                "protocol id must not be empty".to_string(),
            ));
        }

        let params = [
            ("buffer", fields.buffer_pixels.to_string()),
            ("contourLayer", fields.layer_name.clone()),
            ("elevationKey", fields.elevation_key.clone()),
            ("levelKey", fields.level_key.clone()),
            ("overzoom", fields.overzoom_levels.to_string()),
            ("thresholds", encode_thresholds(policy.bands())),
        ];
        let query = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, encode_component(value)))
            .collect::<Vec<_>>()
            .join("&");

        Ok(Self {
            url: format!("{}://{}?{}", protocol_id, TILE_PLACEHOLDERS, query),
        })
    }

    /// Decode a template back into its policy and fields.
    ///
    /// Keys other than the six written by [`build`](Self::build) are ignored;
    /// missing optional keys take their [`ContourFields::default`] values.
    ///
    /// # Errors
    ///
    /// [`PolicyError::MalformedTemplate`] when the URL shape, encoding or a
    /// number is invalid, or any policy validation error for the decoded
    /// table.
    pub fn parse(url: &str) -> Result<(ContourPolicy, ContourFields), PolicyError> {
        let malformed = |reason: &str| PolicyError::MalformedTemplate(format!("{reason}: {url}"));

        let (base, query) = url
            .split_once('?')
            .ok_or_else(|| malformed("missing query string"))?;
        let placeholder_suffix = format!("://{}", TILE_PLACEHOLDERS);
        match base.strip_suffix(&placeholder_suffix) {
            Some(id) if !id.is_empty() => {}
            _ => return Err(malformed("missing {z}/{x}/{y} placeholders")),
        }

        let mut fields = ContourFields::default();
        let mut bands = None;

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, raw) = pair
                .split_once('=')
                .ok_or_else(|| malformed("query pair without '='"))?;
            let value = decode_component(raw).ok_or_else(|| malformed("bad percent-encoding"))?;

            match key {
                "buffer" => {
                    fields.buffer_pixels = value.parse().map_err(|_| malformed("bad buffer"))?
                }
                "overzoom" => {
                    fields.overzoom_levels =
                        value.parse().map_err(|_| malformed("bad overzoom"))?
                }
                "contourLayer" => fields.layer_name = value,
                "elevationKey" => fields.elevation_key = value,
                "levelKey" => fields.level_key = value,
                "thresholds" => {
                    let decoded =
                        decode_thresholds(&value).ok_or_else(|| malformed("bad thresholds"))?;
                    bands = Some(decoded);
                }
                _ => {}
            }
        }

        let bands = bands.ok_or_else(|| malformed("missing thresholds"))?;
        let policy = ContourPolicy::new(bands)?;
        fields.validate()?;
        Ok((policy, fields))
    }

    /// The template string, placeholders included.
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// The scheme part (protocol id) of the template.
    pub fn protocol_id(&self) -> &str {
        self.url
            .split_once("://")
            .map(|(id, _)| id)
            .unwrap_or_default()
    }

    /// Concrete request URL for one tile.
    pub fn tile_url(&self, coord: &TileCoord) -> String {
        self.url
            .replacen("{z}", &coord.zoom().to_string(), 1)
            .replacen("{x}", &coord.x().to_string(), 1)
            .replacen("{y}", &coord.y().to_string(), 1)
    }
}

impl fmt::Display for ContourTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

fn encode_thresholds(bands: &[ThresholdBand]) -> String {
    bands
        .iter()
        .map(|band| {
            std::iter::once(band.zoom_floor.to_string())
                .chain(band.intervals.iter().map(u32::to_string))
                .collect::<Vec<_>>()
                .join(&VALUE_SEPARATOR.to_string())
        })
        .collect::<Vec<_>>()
        .join(&BAND_SEPARATOR.to_string())
}

fn decode_thresholds(encoded: &str) -> Option<Vec<ThresholdBand>> {
    encoded
        .split(BAND_SEPARATOR)
        .map(|band| {
            let mut parts = band.split(VALUE_SEPARATOR);
            let zoom_floor = parts.next()?.parse().ok()?;
            let intervals = parts.map(|p| p.parse().ok()).collect::<Option<Vec<u32>>>()?;
            Some(ThresholdBand::new(zoom_floor, intervals))
        })
        .collect()
}

/// Characters `encodeURIComponent` leaves untouched.
fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}

fn decode_component(value: &str) -> Option<String> {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let pair = bytes.get(i + 1..i + 3)?;
            if !pair.iter().all(u8::is_ascii_hexdigit) {
                return None;
            }
            let hex = std::str::from_utf8(pair).ok()?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_URL: &str = "dem-contour://{z}/{x}/{y}?buffer=1&contourLayer=contours\
        &elevationKey=ele&levelKey=level&overzoom=2&thresholds=12*100*500~14*20*100";

    fn sample_bands() -> Vec<ThresholdBand> {
        vec![
            ThresholdBand::new(12, vec![100, 500]),
            ThresholdBand::new(14, vec![20, 100]),
        ]
    }

    #[test]
    fn test_build_matches_generator_format() {
        let template = build_template(sample_bands(), ContourFields::default()).unwrap();
        assert_eq!(template.as_str(), SAMPLE_URL);
        assert_eq!(template.protocol_id(), "dem-contour");
    }

    #[test]
    fn test_build_rejects_invalid_policy() {
        assert_eq!(
            build_template(vec![], ContourFields::default()),
            Err(PolicyError::EmptyTable)
        );
        let unsorted = vec![
            ThresholdBand::new(14, vec![20, 100]),
            ThresholdBand::new(12, vec![100, 500]),
        ];
        assert!(matches!(
            build_template(unsorted, ContourFields::default()),
            Err(PolicyError::UnsortedBands { .. })
        ));
    }

    #[test]
    fn test_build_rejects_empty_protocol_id() {
        let policy = ContourPolicy::new(sample_bands()).unwrap();
        let result = ContourTemplate::build(&policy, &ContourFields::default(), "");
        assert!(matches!(result, Err(PolicyError::MalformedTemplate(_))));
    }

    #[test]
    fn test_field_values_are_encoded() {
        let fields = ContourFields {
            layer_name: "contour lines".to_string(),
            elevation_key: "ele&m".to_string(),
            ..Default::default()
        };
        let policy = ContourPolicy::new(sample_bands()).unwrap();
        let template = ContourTemplate::build(&policy, &fields, "dem-contour").unwrap();
        assert!(template.as_str().contains("contourLayer=contour%20lines"));
        assert!(template.as_str().contains("elevationKey=ele%26m"));

        let (_, parsed) = ContourTemplate::parse(template.as_str()).unwrap();
        assert_eq!(parsed, fields);
    }

    #[test]
    fn test_parse_recovers_policy() {
        let (policy, fields) = ContourTemplate::parse(SAMPLE_URL).unwrap();
        assert_eq!(policy.bands(), sample_bands().as_slice());
        assert_eq!(fields, ContourFields::default());
        assert_eq!(policy.active_intervals(13), &[100, 500]);
    }

    #[test]
    fn test_parse_accepts_percent_encoded_thresholds() {
        let url = "dem-contour://{z}/{x}/{y}?thresholds=12%2A100%2A500%7E14%2A20%2A100";
        let (policy, _) = ContourTemplate::parse(url).unwrap();
        assert_eq!(policy.bands(), sample_bands().as_slice());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for url in [
            "dem-contour://{z}/{x}/{y}",
            "dem-contour://1/2/3?thresholds=12*100",
            "dem-contour://{z}/{x}/{y}?buffer=1",
            "dem-contour://{z}/{x}/{y}?thresholds=12*abc",
            "dem-contour://{z}/{x}/{y}?thresholds=12*100&buffer=%ZZ",
        ] {
            assert!(
                matches!(ContourTemplate::parse(url), Err(PolicyError::MalformedTemplate(_))),
                "expected malformed: {url}"
            );
        }
    }

    #[test]
    fn test_decode_component_requires_two_hex_digits() {
        assert_eq!(decode_component("a%20b").as_deref(), Some("a b"));
        assert_eq!(decode_component("%+A"), None);
        assert_eq!(decode_component("%-1"), None);
        assert_eq!(decode_component("%4"), None);

        let url = "dem-contour://{z}/{x}/{y}?thresholds=12*100&contourLayer=a%+A";
        assert!(matches!(
            ContourTemplate::parse(url),
            Err(PolicyError::MalformedTemplate(_))
        ));
    }

    #[test]
    fn test_parse_validates_decoded_table() {
        let url = "dem-contour://{z}/{x}/{y}?thresholds=14*20*100~12*100*500";
        assert!(matches!(
            ContourTemplate::parse(url),
            Err(PolicyError::UnsortedBands { .. })
        ));
    }

    #[test]
    fn test_tile_url() {
        let template = build_template(sample_bands(), ContourFields::default()).unwrap();
        let coord = TileCoord::new(14, 14505, 6469).unwrap();
        let url = template.tile_url(&coord);
        assert!(url.starts_with("dem-contour://14/14505/6469?buffer=1"));
    }

    #[test]
    fn test_encode_component_matches_uri_component_rules() {
        assert_eq!(encode_component("12*100~14"), "12*100~14");
        assert_eq!(encode_component("a b/c?"), "a%20b%2Fc%3F");
        assert_eq!(encode_component("標高"), "%E6%A8%99%E9%AB%98");
        assert_eq!(decode_component("%E6%A8%99%E9%AB%98").as_deref(), Some("標高"));
        assert_eq!(decode_component("%4"), None);
    }
}
