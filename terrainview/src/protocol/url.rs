//! Protocol URL parsing.
//!
//! Tile requests arrive as `{scheme}://{z}/{x}/{y}`, e.g.
//! `mapterhorn://14/14505/6469`.

use regex::Regex;
use std::sync::OnceLock;

use super::error::FetchError;
use crate::coord::TileCoord;

/// Get the tile URL regex pattern.
///
/// We capture:
/// - Group 1: scheme (letter followed by letters, digits, `+`, `-`, `.`)
/// - Group 2: zoom
/// - Group 3: x
/// - Group 4: y
fn tile_url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([A-Za-z][A-Za-z0-9+.\-]*)://(\d+)/(\d+)/(\d+)$")
            .expect("tile URL pattern is valid")
    })
}

/// Extract the scheme of a URL (the part before `://`).
pub fn url_scheme(url: &str) -> Option<&str> {
    url.split_once("://").map(|(scheme, _)| scheme)
}

/// Parse a protocol URL into a validated tile coordinate.
///
/// # Errors
///
/// * [`FetchError::InvalidUrl`] if the URL does not match the pattern, uses
///   another scheme, or has a number that does not fit
/// * [`FetchError::InvalidCoordinate`] if the coordinate is off the grid
///
/// # Examples
///
/// ```
/// use terrainview::protocol::parse_tile_url;
///
/// let tile = parse_tile_url("mapterhorn", "mapterhorn://14/14505/6469").unwrap();
/// assert_eq!((tile.zoom(), tile.x(), tile.y()), (14, 14505, 6469));
///
/// assert!(parse_tile_url("mapterhorn", "mapterhorn://14/14505").is_err());
/// ```
pub fn parse_tile_url(scheme: &str, url: &str) -> Result<TileCoord, FetchError> {
    let captures = tile_url_pattern()
        .captures(url)
        .ok_or_else(|| FetchError::InvalidUrl(url.to_string()))?;

    if &captures[1] != scheme {
        return Err(FetchError::InvalidUrl(url.to_string()));
    }

    let zoom = captures[2]
        .parse::<u8>()
        .map_err(|_| FetchError::InvalidUrl(url.to_string()))?;
    let x = captures[3]
        .parse::<u32>()
        .map_err(|_| FetchError::InvalidUrl(url.to_string()))?;
    let y = captures[4]
        .parse::<u32>()
        .map_err(|_| FetchError::InvalidUrl(url.to_string()))?;

    Ok(TileCoord::new(zoom, x, y)?)
}

/// Build the protocol URL for a tile.
pub fn tile_url(scheme: &str, coord: &TileCoord) -> String {
    format!("{}://{}", scheme, coord)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::CoordError;

    #[test]
    fn test_parse_valid_url() {
        let tile = parse_tile_url("mapterhorn", "mapterhorn://12/3626/1617").unwrap();
        assert_eq!(tile, TileCoord::new(12, 3626, 1617).unwrap());
    }

    #[test]
    fn test_parse_rejects_other_scheme() {
        let result = parse_tile_url("mapterhorn", "pmtiles://12/3626/1617");
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }

    #[test]
    fn test_parse_rejects_trailing_garbage() {
        assert!(parse_tile_url("mapterhorn", "mapterhorn://12/3626/1617.webp").is_err());
        assert!(parse_tile_url("mapterhorn", "mapterhorn://12/3626/1617/").is_err());
        assert!(parse_tile_url("mapterhorn", "mapterhorn://12/-1/1617").is_err());
    }

    #[test]
    fn test_parse_rejects_overflowing_numbers() {
        let result = parse_tile_url("mapterhorn", "mapterhorn://300/0/0");
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }

    #[test]
    fn test_parse_rejects_out_of_grid() {
        let result = parse_tile_url("mapterhorn", "mapterhorn://2/4/0");
        assert!(matches!(
            result,
            Err(FetchError::InvalidCoordinate(CoordError::InvalidCoordinate { .. }))
        ));
    }

    #[test]
    fn test_url_scheme() {
        assert_eq!(url_scheme("mapterhorn://1/0/0"), Some("mapterhorn"));
        assert_eq!(url_scheme("no-scheme"), None);
    }

    #[test]
    fn test_tile_url_parses_back() {
        let coord = TileCoord::new(16, 58022, 25878).unwrap();
        let url = tile_url("mapterhorn", &coord);
        assert_eq!(url, "mapterhorn://16/58022/25878");
        assert_eq!(parse_tile_url("mapterhorn", &url).unwrap(), coord);
    }
}
