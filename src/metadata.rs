//! Brand metadata from the simple-icons dataset.
//!
//! The dataset is a JSON document rooted at an `icons` array:
//!
//! ```json
//! {
//!   "icons": [
//!     { "title": ".NET", "hex": "5C2D91", "source": "https://..." },
//!     { "title": "1Password", "hex": "0094F5", "source": "https://..." }
//!   ]
//! }
//! ```
//!
//! Only `title` and `hex` are used; other fields are ignored. Entry order is
//! kept as declared.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::{ColorError, IconError};

// ============================================================================
// BrandColor
// ============================================================================

/// A brand color: exactly six hex digits, without a leading `#`.
///
/// The text is kept verbatim (including its case) so that it ends up in the
/// generated markup exactly as the dataset spells it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BrandColor(String);

impl BrandColor {
    /// Validates a six-digit hex color.
    pub fn parse(hex: &str) -> Result<Self, ColorError> {
        if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Self(hex.to_owned()))
        } else {
            Err(ColorError(hex.to_owned()))
        }
    }

    /// The six hex digits as given.
    pub fn as_hex(&self) -> &str {
        &self.0
    }

    /// The color as an SVG fill value, e.g. `#5C2D91`.
    pub fn fill(&self) -> String {
        format!("#{}", self.0)
    }

    /// The color as 8-bit sRGB components.
    pub fn rgb(&self) -> Srgb<u8> {
        // Validated in `parse`, so the hex conversion cannot fail.
        Srgb::from_str(&self.0).unwrap_or(Srgb::new(0, 0, 0))
    }
}

impl fmt::Display for BrandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BrandColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BrandColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BrandColor> for String {
    fn from(color: BrandColor) -> Self {
        color.0
    }
}

// ============================================================================
// IconMetadata
// ============================================================================

/// One dataset record: a brand's display title and color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconMetadata {
    /// Display title, e.g. `".NET"`.
    pub title: String,

    /// Brand color.
    #[serde(rename = "hex")]
    pub color: BrandColor,
}

impl IconMetadata {
    /// Creates a metadata entry.
    pub fn new(title: impl Into<String>, color: BrandColor) -> Self {
        Self {
            title: title.into(),
            color,
        }
    }

    /// Glyph filename for this entry's title.
    pub fn filename(&self) -> String {
        crate::slug::slug(&self.title)
    }
}

// ============================================================================
// Dataset loading
// ============================================================================

#[derive(Debug, Deserialize)]
struct Dataset {
    icons: Vec<IconMetadata>,
}

/// Parses a dataset document from a JSON string.
pub fn parse_dataset(json: &str) -> Result<Vec<IconMetadata>, serde_json::Error> {
    serde_json::from_str::<Dataset>(json).map(|dataset| dataset.icons)
}

/// Reads and parses the dataset file at `path`.
pub fn load_dataset(path: &Path) -> Result<Vec<IconMetadata>, IconError> {
    let json = fs::read_to_string(path).map_err(|source| IconError::DatasetIo {
        path: path.to_path_buf(),
        source,
    })?;
    parse_dataset(&json).map_err(|source| IconError::Dataset {
        path: path.to_path_buf(),
        source,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_color_validation() {
        assert!(BrandColor::parse("5C2D91").is_ok());
        assert!(BrandColor::parse("abcdef").is_ok());
        assert!(BrandColor::parse("#5C2D91").is_err());
        assert!(BrandColor::parse("FFF").is_err());
        assert!(BrandColor::parse("GGGGGG").is_err());
        assert!(BrandColor::parse("5C2D911").is_err());
    }

    #[test]
    fn brand_color_is_verbatim() {
        let color = BrandColor::parse("5c2D91").unwrap();
        assert_eq!(color.as_hex(), "5c2D91");
        assert_eq!(color.fill(), "#5c2D91");
        assert_eq!(color.to_string(), "5c2D91");
    }

    #[test]
    fn brand_color_rgb() {
        let rgb = BrandColor::parse("5C2D91").unwrap().rgb();
        assert_eq!((rgb.red, rgb.green, rgb.blue), (0x5C, 0x2D, 0x91));
    }

    #[test]
    fn dataset_preserves_order_and_ignores_extra_fields() {
        let json = r#"{
            "icons": [
                { "title": "Zeta", "hex": "000000", "source": "https://example.com" },
                { "title": "Alpha", "hex": "FFFFFF", "guidelines": "x" }
            ]
        }"#;
        let entries = parse_dataset(json).unwrap();
        let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Zeta", "Alpha"]);
        assert_eq!(entries[1].color.as_hex(), "FFFFFF");
    }

    #[test]
    fn dataset_rejects_bad_color() {
        let json = r##"{ "icons": [ { "title": "Bad", "hex": "#123456" } ] }"##;
        let err = parse_dataset(json).unwrap_err();
        assert!(err.to_string().contains("invalid brand color"));
    }

    #[test]
    fn dataset_requires_icons_key() {
        assert!(parse_dataset(r#"{ "entries": [] }"#).is_err());
    }

    #[test]
    fn metadata_serialization_uses_hex_field() {
        let entry = IconMetadata::new(".NET", BrandColor::parse("5C2D91").unwrap());
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"title":".NET","hex":"5C2D91"}"#);
        assert_eq!(entry.filename(), "dot-net.svg");
    }

    #[test]
    fn missing_dataset_file() {
        let err = load_dataset(Path::new("/nonexistent/simple-icons.json")).unwrap_err();
        assert!(matches!(err, IconError::DatasetIo { .. }));
    }
}
