//! aegis-icons: brand icons for Aegis Authenticator
//!
//! This crate turns the monochrome glyphs of the
//! [simple-icons](https://simpleicons.org) dataset into Aegis entry icons:
//! each glyph is shrunk, drawn in white and placed on a disc in the brand's
//! color. Icons can be written out as SVG or rasterized to PNG.
//!
//! # Example
//!
//! ```no_run
//! use aegis_icons::IconCatalog;
//!
//! let catalog = IconCatalog::open("simple-icons")?;
//!
//! // A single entry
//! let entry = catalog.find(".NET").expect("entry exists");
//! let icon = catalog.generate(entry)?;
//! assert_eq!(icon.filename(), "dot-net.svg");
//! let svg = icon.to_svg_string();
//! let png = icon.render_png()?;
//!
//! // A random entry
//! let icon = catalog.generate_random()?;
//!
//! // Every entry, generated on demand
//! for icon in catalog.generate_all() {
//!     let icon = icon?;
//!     println!("{}", icon.filename());
//! }
//! # Ok::<(), aegis_icons::IconError>(())
//! ```
//!
//! # Building blocks
//!
//! The catalog composes three pieces that are usable on their own:
//!
//! - [`slug`] maps a brand title to its glyph filename.
//! - [`Document`] is an order-preserving SVG tree with parse, serialize and
//!   rasterize operations.
//! - [`BackgroundOverlay`] inserts the colored disc and restyles the glyph.
//!
//! ```
//! use aegis_icons::{BackgroundOverlay, BrandColor, Document, slug};
//!
//! assert_eq!(slug("A & B"), "a-and-b.svg");
//!
//! let doc = Document::parse(r#"<svg viewBox="0 0 24 24"><path d="M0 0h24v24H0z"/></svg>"#)?;
//! let doc = BackgroundOverlay::new(BrandColor::parse("5C2D91")?).apply(doc);
//! assert!(doc.to_svg_string().contains(r##"<circle cx="12" cy="12" r="12" fill="#5C2D91">"##));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod logger;

mod catalog;
mod document;
mod error;
mod icon;
mod metadata;
mod overlay;
mod slug;

pub use catalog::{CatalogLayout, IconCatalog, Icons};
pub use document::{Child, Document, Element};
pub use error::{ColorError, IconError, ParseError, RenderError};
pub use icon::{Icon, RASTER_SIZE};
pub use metadata::{BrandColor, IconMetadata, load_dataset, parse_dataset};
pub use overlay::{BackgroundOverlay, GLYPH_FILL, GLYPH_TRANSFORM};
pub use slug::{RULES, Rule, SVG_EXTENSION, Scope, slug, slug_stem};
