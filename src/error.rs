//! Error types for icon generation.
//!
//! [`IconError`] is what the catalog hands back to callers. The lower-level
//! [`ParseError`] and [`RenderError`] are produced by [`Document`](crate::Document)
//! and wrapped with the file they came from.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for icon operations.
#[derive(Debug, Error)]
pub enum IconError {
    /// No source glyph exists for the slug computed from a title.
    #[error("no icon source for '{title}' at {path}")]
    NotFound { title: String, path: PathBuf },

    /// The source glyph exists but is not well-formed vector markup.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// A parsed icon could not be rasterized.
    #[error("failed to render {filename}: {source}")]
    Render {
        filename: String,
        #[source]
        source: RenderError,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read icon dataset {path}: {source}")]
    DatasetIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse icon dataset {path}: {source}")]
    Dataset {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("icon dataset contains no entries")]
    EmptyCatalog,
}

/// Markup that could not be turned into a [`Document`](crate::Document).
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed markup: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("expected <{expected}> root element, found <{found}>")]
    UnexpectedRoot { expected: String, found: String },
}

/// A parsed document that could not be rasterized.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unrenderable SVG: {0}")]
    Svg(#[from] resvg::usvg::Error),

    #[error("invalid raster size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
}

/// A brand color that is not exactly six hexadecimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid brand color '{0}': expected 6 hex digits without '#'")]
pub struct ColorError(pub String);
