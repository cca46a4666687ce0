//! Rasterization using resvg/usvg.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use super::Document;
use crate::error::RenderError;

impl Document {
    /// Renders the document to an RGBA image of exactly `width` x `height`.
    ///
    /// The document's own size is stretched to fill the canvas on both axes.
    pub fn render_rgba(&self, width: u32, height: u32) -> Result<RgbaImage, RenderError> {
        let tree = Tree::from_str(&self.to_svg_string(), &Options::default())?;

        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::InvalidSize { width, height })?;
        let size = tree.size();
        let transform = Transform::from_scale(
            width as f32 / size.width(),
            height as f32 / size.height(),
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        Ok(pixmap_to_rgba_image(&pixmap))
    }

    /// Renders the document to PNG bytes of exactly `width` x `height`.
    pub fn rasterize(&self, width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
        let image = self.render_rgba(width, height)?;
        let mut png = Cursor::new(Vec::new());
        image.write_to(&mut png, ImageFormat::Png)?;
        Ok(png.into_inner())
    }
}

/// Copies a premultiplied pixmap into a straight-alpha image.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    RgbaImage::from_fn(pixmap.width(), pixmap.height(), |x, y| {
        pixmap.pixel(x, y).map_or(Rgba([0, 0, 0, 0]), |pixel| {
            let color = pixel.demultiply();
            Rgba([color.red(), color.green(), color.blue(), color.alpha()])
        })
    })
}
