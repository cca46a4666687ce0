//! Background overlay for simple-icons glyphs.
//!
//! simple-icons glyphs are a single monochrome `<path>` on a 24x24 canvas.
//! The overlay puts a brand-colored disc behind the glyph and shrinks the
//! glyph into the middle of it, drawn in white:
//!
//! ```text
//! <svg>                          <svg>
//!   <title>…</title>               <title>…</title>
//!   <path d="…"/>        ──►       <circle cx="12" cy="12" r="12" fill="#HEX"/>
//! </svg>                           <path d="…" transform="translate(4.8, 4.8) scale(0.6)" fill="white"/>
//!                                </svg>
//! ```

use indexmap::IndexMap;

use crate::document::{Child, Document, Element};
use crate::metadata::BrandColor;

/// Tag of the glyph element the overlay is placed behind.
pub const PATH_TAG: &str = "path";

/// Tag of the inserted background element.
pub const BACKGROUND_TAG: &str = "circle";

/// Transform applied to the glyph so it fits inside the disc.
pub const GLYPH_TRANSFORM: &str = "translate(4.8, 4.8) scale(0.6)";

/// Fill applied to the glyph.
pub const GLYPH_FILL: &str = "white";

/// Center and radius of the disc on the 24x24 canvas.
const DISC_CENTER: &str = "12";
const DISC_RADIUS: &str = "12";

// ============================================================================
// BackgroundOverlay
// ============================================================================

/// Inserts a colored disc behind a document's top-level glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundOverlay {
    /// Fill color of the disc.
    pub color: BrandColor,
}

impl BackgroundOverlay {
    /// Creates an overlay with the given disc color.
    pub fn new(color: BrandColor) -> Self {
        Self { color }
    }

    /// The disc element inserted before the glyph.
    pub fn background(&self) -> Element {
        Element::new()
            .with_attribute("cx", DISC_CENTER)
            .with_attribute("cy", DISC_CENTER)
            .with_attribute("r", DISC_RADIUS)
            .with_attribute("fill", self.color.fill())
    }

    /// Applies the overlay to `doc`.
    ///
    /// The root's children are rebuilt in their original order. Immediately
    /// before the `path` key a `circle` key holding the disc is inserted, and
    /// every element under `path` gets the glyph transform and a white fill
    /// (replacing any previous fill). All other children pass through
    /// unchanged. A document without a top-level `path` is returned as is.
    ///
    /// If the document already has a top-level `circle` key, its elements
    /// share the key with the disc, which stays directly before `path`. When
    /// the existing key came before the glyph its elements precede the disc,
    /// otherwise they follow it. This is the one case where the relative
    /// order of the other children is not kept: an earlier `circle` key
    /// moves past everything between it and `path`, so `[circle, rect, path]`
    /// becomes `[rect, circle, path]`.
    pub fn apply(&self, doc: Document) -> Document {
        let (root_name, mut root) = doc.into_parts();
        if !root.children.contains_key(PATH_TAG) {
            return Document::new(root_name, root);
        }

        let old_children = std::mem::take(&mut root.children);
        let mut children: IndexMap<String, Child> =
            IndexMap::with_capacity(old_children.len() + 1);
        let mut seen_glyph = false;

        for (tag, mut child) in old_children {
            if tag == PATH_TAG {
                let background = match children.shift_remove(BACKGROUND_TAG) {
                    Some(mut earlier) => {
                        earlier.push(self.background());
                        earlier
                    }
                    None => Child::One(self.background()),
                };
                children.insert(BACKGROUND_TAG.to_owned(), background);

                for glyph in child.elements_mut() {
                    style_glyph(glyph);
                }
                seen_glyph = true;
            } else if tag == BACKGROUND_TAG && seen_glyph {
                if let Some(background) = children.get_mut(BACKGROUND_TAG) {
                    for element in child.into_elements() {
                        background.push(element);
                    }
                }
                continue;
            }
            children.insert(tag, child);
        }

        root.children = children;
        Document::new(root_name, root)
    }
}

fn style_glyph(glyph: &mut Element) {
    glyph.set_attribute("transform", GLYPH_TRANSFORM);
    glyph.set_attribute("fill", GLYPH_FILL);
}

// ============================================================================
// Tests
// ============================================================================
