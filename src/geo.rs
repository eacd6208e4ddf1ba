//! Well-known-text decoding for location coordinates.
//!
//! Location geometry is stored in the database and read back as WKT
//! (`POINT(lng lat)`); this module turns that text into the
//! longitude/latitude pair used in API responses.

use geo_types::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use wkt::TryFromWkt;

/// Decoded geographic coordinates for transport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinates {
    /// East-west position in degrees
    #[schema(example = -73.9857)]
    pub longitude: f64,
    /// North-south position in degrees
    #[schema(example = 40.7484)]
    pub latitude: f64,
}

/// Errors that can occur while decoding stored geometry.
#[derive(Debug, Error)]
pub enum GeoDecodeError {
    #[error("invalid WKT geometry '{raw}': {message}")]
    InvalidWkt { raw: String, message: String },
}

/// Decodes a WKT point into [`Coordinates`].
///
/// A missing or empty geometry is not an error: rows seeded before
/// geocoding ran have no coordinates, and those listings still render
/// without a map pin. Malformed non-empty text is rejected.
pub fn decode_point(raw: Option<&str>) -> Result<Option<Coordinates>, GeoDecodeError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let point: Point<f64> =
        Point::try_from_wkt_str(trimmed).map_err(|err| GeoDecodeError::InvalidWkt {
            raw: trimmed.to_string(),
            message: err.to_string(),
        })?;

    Ok(Some(Coordinates {
        longitude: point.x(),
        latitude: point.y(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_point() {
        let coords = decode_point(Some("POINT(-73.9857 40.7484)"))
            .unwrap()
            .unwrap();
        assert_eq!(coords.longitude, -73.9857);
        assert_eq!(coords.latitude, 40.7484);
    }

    #[test]
    fn test_decode_point_with_whitespace() {
        let coords = decode_point(Some("  POINT(10 20)  ")).unwrap().unwrap();
        assert_eq!(coords.longitude, 10.0);
        assert_eq!(coords.latitude, 20.0);
    }

    #[test]
    fn test_empty_geometry_is_not_an_error() {
        assert_eq!(decode_point(None).unwrap(), None);
        assert_eq!(decode_point(Some("")).unwrap(), None);
        assert_eq!(decode_point(Some("   ")).unwrap(), None);
    }

    #[test]
    fn test_malformed_wkt_is_rejected() {
        let err = decode_point(Some("POINT(not numbers)")).unwrap_err();
        assert!(matches!(err, GeoDecodeError::InvalidWkt { .. }));

        let err = decode_point(Some("garbage")).unwrap_err();
        assert!(err.to_string().contains("garbage"));
    }

    #[test]
    fn test_non_point_geometry_is_rejected() {
        let result = decode_point(Some("LINESTRING(0 0, 1 1)"));
        assert!(result.is_err());
    }
}
