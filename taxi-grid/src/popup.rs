//! Popup HTML for hotspot circles and anomaly markers.

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::model::{AnomalyCell, GeoPoint, GridCell};

const MISSING: &str = "n/a";

/// Popup for a hotspot circle at `at`.
///
/// ```text
/// <b>Grid: 100_200</b><br>Trips: 10<br>Avg Fare: $12.50<br>Lat: 2.0000, Lon: 1.0000
/// ```
pub fn hotspot_popup(cell: &GridCell, at: GeoPoint) -> String {
    let mut popup = format!(
        "<b>Grid: {}</b><br>Trips: {}<br>Avg Fare: ${}",
        escape_html(&cell.grid_key),
        cell.count,
        two_decimals(cell.avg_fare),
    );
    if let Some(distance) = cell.avg_distance {
        popup.push_str(&format!("<br>Avg Distance: {} mi", two_places(distance)));
    }
    popup.push_str(&format!("<br>{}", coordinates(at)));
    popup
}

/// Popup for an anomaly marker at `at`.
pub fn anomaly_popup(cell: &AnomalyCell, at: GeoPoint) -> String {
    format!(
        "<b>Anomaly</b><br>Grid: {}<br>Trips: {}<br>Z-Score: {}<br>{}",
        escape_html(&cell.grid_key),
        cell.count,
        two_decimals(cell.score()),
        coordinates(at),
    )
}

fn two_decimals(value: Option<f64>) -> String {
    match value {
        Some(value) => two_places(value),
        None => MISSING.to_string(),
    }
}

/// `value` with two decimals, rounding its shortest decimal form half to even.
///
/// `{:.2}` rounds the binary value instead, so `2.345` (stored as
/// 2.34500000000000019...) would come out as `2.35`.
fn two_places(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let shortest = value.abs().to_string();
    let (whole, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(2))
        .collect();
    let rest = fraction.get(2..).unwrap_or("").as_bytes();
    let round_up = match rest.split_first() {
        None => false,
        Some((&first, tail)) => match first.cmp(&b'5') {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => {
                tail.iter().any(|&d| d != b'0')
                    || digits.last().is_some_and(|&d| (d - b'0') % 2 == 1)
            }
        },
    };

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let (whole, fraction) = digits.split_at(digits.len() - 2);
    format!(
        "{}{}.{}",
        if value < 0.0 { "-" } else { "" },
        String::from_utf8_lossy(whole),
        String::from_utf8_lossy(fraction)
    )
}

fn coordinates(at: GeoPoint) -> String {
    format!("Lat: {:.4}, Lon: {:.4}", at.latitude, at.longitude)
}

/// Grid keys come from the server verbatim; keep them from injecting markup.
fn escape_html(raw: &str) -> Cow<'_, str> {
    if !raw.contains(|c: char| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
        return Cow::Borrowed(raw);
    }
    let mut escaped = String::with_capacity(raw.len() + 8);
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode;

    fn hotspot(avg_fare: Option<f64>, avg_distance: Option<f64>) -> GridCell {
        GridCell {
            grid_key: "100_200".to_string(),
            grid_x: 100,
            grid_y: 200,
            count: 10,
            avg_fare,
            avg_distance,
            hour: Some(5),
        }
    }

    fn anomaly(z: Option<f64>, zscore: Option<f64>) -> AnomalyCell {
        AnomalyCell {
            grid_key: "50_75".to_string(),
            count: 3,
            z,
            zscore,
            hour: None,
        }
    }

    #[test]
    fn test_hotspot_popup() {
        let popup = hotspot_popup(&hotspot(Some(12.5), None), decode(100, 200));
        assert_eq!(
            popup,
            "<b>Grid: 100_200</b><br>Trips: 10<br>Avg Fare: $12.50<br>Lat: 2.0000, Lon: 1.0000"
        );
    }

    #[test]
    fn test_hotspot_popup_optional_fields() {
        let popup = hotspot_popup(&hotspot(None, Some(3.456)), decode(100, 200));
        assert!(popup.contains("Avg Fare: $n/a"));
        assert!(popup.contains("<br>Avg Distance: 3.46 mi<br>"));
    }

    #[test]
    fn test_anomaly_popup() {
        let popup = anomaly_popup(&anomaly(None, Some(2.345)), decode(50, 75));
        assert_eq!(
            popup,
            "<b>Anomaly</b><br>Grid: 50_75<br>Trips: 3<br>Z-Score: 2.34<br>Lat: 0.7500, Lon: 0.5000"
        );
    }

    #[test]
    fn test_anomaly_popup_scores() {
        let at = decode(50, 75);
        assert!(anomaly_popup(&anomaly(None, None), at).contains("Z-Score: n/a<br>"));
        assert!(anomaly_popup(&anomaly(Some(0.0), Some(4.0)), at).contains("Z-Score: 0.00<br>"));
        assert!(anomaly_popup(&anomaly(Some(-3.2), None), at).contains("Z-Score: -3.20<br>"));
    }

    #[test]
    fn test_two_places_rounds_decimal_half_to_even() {
        assert_eq!(two_places(2.345), "2.34");
        assert_eq!(two_places(2.355), "2.36");
        assert_eq!(two_places(0.125), "0.12");
        assert_eq!(two_places(1.005), "1.00");
        assert_eq!(two_places(2.3451), "2.35");
        assert_eq!(two_places(9.995), "10.00");
        assert_eq!(two_places(12.5), "12.50");
        assert_eq!(two_places(7.0), "7.00");
        assert_eq!(two_places(0.0), "0.00");
        assert_eq!(two_places(-3.2), "-3.20");
        assert_eq!(two_places(-2.345), "-2.34");
    }

    #[test]
    fn test_fare_uses_same_rounding() {
        let popup = hotspot_popup(&hotspot(Some(8.125), None), decode(100, 200));
        assert!(popup.contains("Avg Fare: $8.12<br>"));
    }

    #[test]
    fn test_grid_key_is_escaped() {
        let mut cell = hotspot(Some(1.0), None);
        cell.grid_key = "<img src=x onerror=alert(1)>".to_string();
        let popup = hotspot_popup(&cell, decode(0, 0));
        assert!(popup.contains("Grid: &lt;img src=x onerror=alert(1)&gt;</b>"));
    }
}
