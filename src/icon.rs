//! Finished icons.

use image::RgbaImage;

use crate::document::Document;
use crate::error::IconError;

/// Edge length of rasterized icons, in pixels.
pub const RASTER_SIZE: u32 = 800;

/// A brand icon with its background overlay applied.
///
/// Icons are produced by [`IconCatalog`](crate::IconCatalog) and are meant to
/// be written out or rasterized right away.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    title: String,
    filename: String,
    document: Document,
}

impl Icon {
    /// Creates an icon from its parts.
    pub fn new(title: impl Into<String>, filename: impl Into<String>, document: Document) -> Self {
        Self {
            title: title.into(),
            filename: filename.into(),
            document,
        }
    }

    /// Brand title, e.g. `".NET"`.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Glyph filename, e.g. `"dot-net.svg"`.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Filename with the extension replaced, e.g. `"dot-net.png"`.
    pub fn filename_with_extension(&self, extension: &str) -> String {
        let stem = self
            .filename
            .rsplit_once('.')
            .map_or(self.filename.as_str(), |(stem, _)| stem);
        format!("{stem}.{extension}")
    }

    /// The transformed document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Consumes the icon, returning its document.
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Serialized SVG markup.
    pub fn to_svg_string(&self) -> String {
        self.document.to_svg_string()
    }

    /// Renders the icon to a [`RASTER_SIZE`] square PNG.
    pub fn render_png(&self) -> Result<Vec<u8>, IconError> {
        self.render_png_sized(RASTER_SIZE, RASTER_SIZE)
    }

    /// Renders the icon to a PNG of the given size.
    pub fn render_png_sized(&self, width: u32, height: u32) -> Result<Vec<u8>, IconError> {
        self.document
            .rasterize(width, height)
            .map_err(|source| self.render_error(source))
    }

    /// Renders the icon to an RGBA image of the given size.
    pub fn render_rgba(&self, width: u32, height: u32) -> Result<RgbaImage, IconError> {
        self.document
            .render_rgba(width, height)
            .map_err(|source| self.render_error(source))
    }

    fn render_error(&self, source: crate::error::RenderError) -> IconError {
        IconError::Render {
            filename: self.filename.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon() -> Icon {
        let doc = Document::parse(
            r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><rect width="24" height="24" fill="#00ff00"/></svg>"##,
        )
        .unwrap();
        Icon::new("Brand+", "brandplus.svg", doc)
    }

    #[test]
    fn accessors() {
        let icon = icon();
        assert_eq!(icon.title(), "Brand+");
        assert_eq!(icon.filename(), "brandplus.svg");
        assert_eq!(icon.filename_with_extension("png"), "brandplus.png");
        assert!(icon.to_svg_string().starts_with("<?xml"));
    }

    #[test]
    fn render_png_is_800_square() {
        let png = icon().render_png().unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (RASTER_SIZE, RASTER_SIZE));
    }

    #[test]
    fn render_failure_names_the_file() {
        let err = icon().render_png_sized(0, 0).unwrap_err();
        assert!(matches!(err, IconError::Render { ref filename, .. } if filename == "brandplus.svg"));
    }

    #[test]
    fn filename_without_extension() {
        let icon = Icon::new("x", "plain", Document::new("svg", Default::default()));
        assert_eq!(icon.filename_with_extension("png"), "plain.png");
    }
}
