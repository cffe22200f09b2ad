//! Map click formatting

use crate::dashboard::LatLng;

/// Format a click position with four decimal places.
///
/// Uses Rust's `{:.4}`, which rounds the exact binary value to the nearest
/// representable decimal (ties to even).
pub fn format_coordinates(click: LatLng) -> String {
    format!("Latitude = {:.4}, Longitude = {:.4}", click.lat, click.lng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_decimal_places() {
        let click = LatLng {
            lat: 9.08204,
            lng: 8.67534,
        };
        assert_eq!(
            format_coordinates(click),
            "Latitude = 9.0820, Longitude = 8.6753"
        );
    }

    #[test]
    fn test_negative_and_padded() {
        let click = LatLng {
            lat: -33.9,
            lng: 151.0,
        };
        assert_eq!(
            format_coordinates(click),
            "Latitude = -33.9000, Longitude = 151.0000"
        );
    }
}
