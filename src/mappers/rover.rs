//! Mars rover photos mapper

use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::{MapError, decode};
use crate::dashboard::DisplayItem;

/// Fixed cap on photos shown per request
pub const MAX_PHOTOS: usize = 10;

#[derive(Debug, Deserialize)]
struct RoverPayload {
    #[serde(default)]
    photos: Vec<JsonValue>,
}

#[derive(Debug, Deserialize)]
struct RoverPhoto {
    img_src: String,
    camera: RoverCamera,
    earth_date: String,
}

#[derive(Debug, Deserialize)]
struct RoverCamera {
    full_name: String,
}

/// Map a rover photos payload to at most [MAX_PHOTOS] captioned images, in
/// upstream order. Photos past the cap are never inspected.
pub fn map_rover_photos(payload: JsonValue) -> Result<Vec<DisplayItem>, MapError> {
    let payload: RoverPayload = decode(payload, "rover photos")?;
    if payload.photos.is_empty() {
        return Err(MapError::Empty);
    }

    payload
        .photos
        .into_iter()
        .take(MAX_PHOTOS)
        .map(|raw| -> Result<DisplayItem, MapError> {
            let photo: RoverPhoto = decode(raw, "rover photo")?;
            let caption = format!("{} ({})", photo.camera.full_name, photo.earth_date);
            Ok(DisplayItem::image(photo.img_src, Some(caption)))
        })
        .collect()
}
