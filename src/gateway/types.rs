use std::io::Cursor;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Deserialize;

/// One row of the listing. Density is computed by the gateway; the client
/// renders it as-is and never recomputes it for the list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountrySummary {
    pub name: String,
    pub population: u64,
    pub area: f64,
    pub population_density: f64,
    pub region: String,
}

/// Per-country record from the detail endpoint. Every field except the name
/// may be absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CountryDetail {
    pub country_name: String,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub region: Option<String>,
}

impl CountryDetail {
    /// Density is derived client-side, and only when both inputs are known.
    pub fn population_density(&self) -> Option<f64> {
        match (self.population, self.area) {
            (Some(population), Some(area)) if area > 0.0 => Some(population as f64 / area),
            _ => None,
        }
    }
}

/// Wire form of a gallery entry: base64 content plus optional metadata.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageRecord {
    pub file: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

// The directory service historically served JPEGs, so that is the fallback
// when the payload cannot be sniffed.
const DEFAULT_MEDIA_TYPE: &str = "image/jpeg";

/// A gallery entry decoded once at load time, so rendering never touches
/// base64 again.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryImage {
    pub title: Option<String>,
    pub description: Option<String>,
    pub media_type: &'static str,
    pub byte_len: usize,
    pub dimensions: Option<(u32, u32)>,
    /// `data:<media>;base64,…` form for direct display or export.
    pub data_uri: String,
}

impl GalleryImage {
    pub fn from_record(record: ImageRecord) -> Self {
        let decoded = BASE64.decode(record.file.as_bytes()).ok();
        let media_type = decoded
            .as_deref()
            .and_then(|bytes| image::guess_format(bytes).ok())
            .map(|format| format.to_mime_type())
            .unwrap_or(DEFAULT_MEDIA_TYPE);
        let dimensions = decoded.as_deref().and_then(read_dimensions);

        Self {
            media_type,
            byte_len: decoded.as_ref().map(Vec::len).unwrap_or(0),
            dimensions,
            data_uri: format!("data:{};base64,{}", media_type, record.file),
            title: record.title,
            description: record.description,
        }
    }
}

fn read_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1x1 transparent PNG.
    const PNG_BASE64: &str =
        "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    #[test]
    fn density_needs_both_population_and_area() {
        let detail = CountryDetail {
            country_name: "Testland".to_string(),
            population: Some(1000),
            area: Some(100.0),
            region: None,
        };
        assert_eq!(detail.population_density(), Some(10.0));

        let missing_area = CountryDetail {
            area: None,
            ..detail.clone()
        };
        assert_eq!(missing_area.population_density(), None);

        let zero_area = CountryDetail {
            area: Some(0.0),
            ..detail
        };
        assert_eq!(zero_area.population_density(), None);
    }

    #[test]
    fn gallery_image_sniffs_png() {
        let record = ImageRecord {
            file: PNG_BASE64.to_string(),
            title: Some("flag".to_string()),
            description: None,
        };
        let image = GalleryImage::from_record(record);
        assert_eq!(image.media_type, "image/png");
        assert_eq!(image.dimensions, Some((1, 1)));
        assert!(image.byte_len > 0);
        assert!(image.data_uri.starts_with("data:image/png;base64,iVBOR"));
    }

    #[test]
    fn gallery_image_falls_back_to_jpeg_for_undecodable_payloads() {
        let record = ImageRecord {
            file: "not base64!!!".to_string(),
            title: None,
            description: None,
        };
        let image = GalleryImage::from_record(record);
        assert_eq!(image.media_type, "image/jpeg");
        assert_eq!(image.byte_len, 0);
        assert_eq!(image.dimensions, None);
        assert!(image.data_uri.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn non_image_payload_keeps_bytes_but_no_dimensions() {
        let record = ImageRecord {
            file: BASE64.encode(b"plain text"),
            title: None,
            description: None,
        };
        let image = GalleryImage::from_record(record);
        assert_eq!(image.byte_len, 10);
        assert_eq!(image.dimensions, None);
    }
}
