//! Fixed-point grid coordinates.
//!
//! The backend ships coordinates as integers scaled by 100 (two decimal
//! digits). `grid_x` carries longitude and `grid_y` latitude, for hotspot and
//! anomaly rows alike.

use crate::error::ParseKeyError;
use crate::model::GeoPoint;

/// Scale factor between degrees and grid units.
pub const GRID_SCALE: f64 = 100.0;

/// Convert grid units to a geographic point. Values are not range-checked.
pub fn decode(grid_x: i64, grid_y: i64) -> GeoPoint {
    GeoPoint {
        latitude: grid_y as f64 / GRID_SCALE,
        longitude: grid_x as f64 / GRID_SCALE,
    }
}

/// Convert a geographic point to the nearest `(grid_x, grid_y)`.
pub fn encode(point: GeoPoint) -> (i64, i64) {
    (
        (point.longitude * GRID_SCALE).round() as i64,
        (point.latitude * GRID_SCALE).round() as i64,
    )
}

/// Split an anomaly key such as `"-7393_4073"` into `(x, y)`.
pub fn parse_composite_key(key: &str) -> Result<(i64, i64), ParseKeyError> {
    let tokens: Vec<&str> = key.split('_').collect();
    if tokens.len() != 2 {
        return Err(ParseKeyError::TokenCount {
            key: key.to_string(),
            found: tokens.len(),
        });
    }

    let parse = |token: &str| {
        token
            .parse::<i64>()
            .map_err(|_| ParseKeyError::NotAnInteger {
                key: key.to_string(),
                token: token.to_string(),
            })
    };

    Ok((parse(tokens[0])?, parse(tokens[1])?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_divides_by_scale() {
        let point = decode(100, 200);
        assert_eq!(point.latitude, 2.0);
        assert_eq!(point.longitude, 1.0);

        let point = decode(-7393, 4073);
        assert_eq!(point.latitude, 4073.0 / 100.0);
        assert_eq!(point.longitude, -7393.0 / 100.0);
    }

    #[test]
    fn test_decode_accepts_out_of_range_values() {
        let point = decode(i32::MAX as i64, -100_000);
        assert_eq!(point.latitude, -1000.0);
        assert_eq!(point.longitude, i32::MAX as f64 / 100.0);
    }

    #[test]
    fn test_encode_inverts_decode() {
        for (x, y) in [(0, 0), (-7393, 4073), (50, 75), (-1, 1)] {
            assert_eq!(encode(decode(x, y)), (x, y));
        }
    }

    #[test]
    fn test_parse_composite_key() {
        assert_eq!(parse_composite_key("50_75"), Ok((50, 75)));
        assert_eq!(parse_composite_key("-7393_4073"), Ok((-7393, 4073)));
        assert_eq!(parse_composite_key("0_0"), Ok((0, 0)));
    }

    #[test]
    fn test_parse_composite_key_token_count() {
        for (key, found) in [("", 1), ("5075", 1), ("1_2_3", 3), ("1__2", 3)] {
            assert_eq!(
                parse_composite_key(key),
                Err(ParseKeyError::TokenCount {
                    key: key.to_string(),
                    found,
                })
            );
        }
    }

    #[test]
    fn test_parse_composite_key_non_numeric() {
        assert!(matches!(
            parse_composite_key("abc_75"),
            Err(ParseKeyError::NotAnInteger { ref token, .. }) if token == "abc"
        ));
        assert!(matches!(
            parse_composite_key("50_"),
            Err(ParseKeyError::NotAnInteger { ref token, .. }) if token.is_empty()
        ));
        assert!(matches!(
            parse_composite_key("1.5_2"),
            Err(ParseKeyError::NotAnInteger { .. })
        ));
    }
}
