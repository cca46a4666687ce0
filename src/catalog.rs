//! Icon generation over the bundled simple-icons dataset.

use std::fs;
use std::io;
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

use rand::CryptoRng;
use rand::seq::IndexedRandom;

use crate::debug;
use crate::document::Document;
use crate::error::{IconError, ParseError};
use crate::icon::Icon;
use crate::metadata::{IconMetadata, load_dataset};
use crate::overlay::BackgroundOverlay;
use crate::slug::slug;

/// Root element every glyph must have.
const SVG_ROOT: &str = "svg";

// ============================================================================
// CatalogLayout
// ============================================================================

/// Where the dataset and glyphs live inside a simple-icons checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLayout {
    /// The JSON metadata file.
    pub metadata_path: PathBuf,

    /// Directory holding one `<slug>.svg` per entry.
    pub icon_dir: PathBuf,
}

impl CatalogLayout {
    /// Metadata file, relative to the simple-icons root.
    pub const METADATA_FILE: &'static str = "_data/simple-icons.json";

    /// Glyph directory, relative to the simple-icons root.
    pub const ICON_DIR: &'static str = "icons";

    /// The standard layout under a simple-icons root directory.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            metadata_path: root.join(Self::METADATA_FILE),
            icon_dir: root.join(Self::ICON_DIR),
        }
    }
}

// ============================================================================
// IconCatalog
// ============================================================================

/// Generates brand icons from simple-icons glyphs.
///
/// The catalog loads the dataset once and never modifies it. Every
/// generation reads and parses its glyph file afresh, so icons share no
/// state with each other or with the catalog.
///
/// # Example
///
/// ```no_run
/// use aegis_icons::IconCatalog;
///
/// let catalog = IconCatalog::open("simple-icons")?;
/// for icon in catalog.generate_all() {
///     let icon = icon?;
///     std::fs::write(icon.filename(), icon.to_svg_string())?;
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct IconCatalog {
    entries: Vec<IconMetadata>,
    icon_dir: PathBuf,
}

impl IconCatalog {
    /// Creates a catalog from already-loaded entries and a glyph directory.
    pub fn new(entries: Vec<IconMetadata>, icon_dir: impl Into<PathBuf>) -> Self {
        Self {
            entries,
            icon_dir: icon_dir.into(),
        }
    }

    /// Opens the simple-icons checkout at `root`.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, IconError> {
        Self::with_layout(CatalogLayout::from_root(root))
    }

    /// Opens a catalog with explicit dataset and glyph locations.
    pub fn with_layout(layout: CatalogLayout) -> Result<Self, IconError> {
        let entries = load_dataset(&layout.metadata_path)?;
        debug!(
            "catalog";
            "loaded {} entries from {}",
            entries.len(),
            layout.metadata_path.display()
        );
        Ok(Self::new(entries, layout.icon_dir))
    }

    /// Dataset entries in declared order.
    pub fn entries(&self) -> &[IconMetadata] {
        &self.entries
    }

    /// Number of dataset entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the dataset has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The glyph directory.
    pub fn icon_dir(&self) -> &Path {
        &self.icon_dir
    }

    /// Path of a glyph file inside the glyph directory.
    pub fn source_path(&self, filename: &str) -> PathBuf {
        self.icon_dir.join(filename)
    }

    /// Finds an entry by title, ignoring case.
    pub fn find(&self, title: &str) -> Option<&IconMetadata> {
        let wanted = title.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.title.to_lowercase() == wanted)
    }

    /// Generates the icon for one entry.
    ///
    /// # Errors
    ///
    /// - [`IconError::NotFound`] if no glyph file exists for the entry's slug
    /// - [`IconError::Parse`] if the glyph is malformed or not an `<svg>`
    /// - [`IconError::Io`] if the glyph cannot be read for another reason
    pub fn generate(&self, metadata: &IconMetadata) -> Result<Icon, IconError> {
        let filename = slug(&metadata.title);
        let path = self.source_path(&filename);

        let text = fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => IconError::NotFound {
                title: metadata.title.clone(),
                path: path.clone(),
            },
            _ => IconError::Io {
                path: path.clone(),
                source,
            },
        })?;

        let document = parse_glyph(&text).map_err(|source| IconError::Parse {
            path: path.clone(),
            source,
        })?;

        let document = BackgroundOverlay::new(metadata.color.clone()).apply(document);
        debug!("icon"; "{} -> {}", metadata.title, filename);

        Ok(Icon::new(metadata.title.clone(), filename, document))
    }

    /// Generates the icon for an entry chosen with the thread-local CSPRNG.
    ///
    /// # Errors
    ///
    /// [`IconError::EmptyCatalog`] if there are no entries, otherwise as
    /// [`generate`](Self::generate).
    pub fn generate_random(&self) -> Result<Icon, IconError> {
        self.generate_random_with(&mut rand::rng())
    }

    /// Generates the icon for an entry chosen with `rng`.
    ///
    /// Only cryptographically secure generators are accepted, so the choice
    /// cannot be predicted from earlier outputs.
    pub fn generate_random_with<R>(&self, rng: &mut R) -> Result<Icon, IconError>
    where
        R: CryptoRng + ?Sized,
    {
        let entry = self.entries.choose(rng).ok_or(IconError::EmptyCatalog)?;
        self.generate(entry)
    }

    /// Lazily generates one icon per entry, in dataset order.
    ///
    /// Each call starts a fresh pass. Failures are yielded in place and do
    /// not affect icons already produced; the caller decides whether to stop.
    pub fn generate_all(&self) -> Icons<'_> {
        Icons {
            catalog: self,
            entries: self.entries.iter(),
        }
    }
}

fn parse_glyph(text: &str) -> Result<Document, ParseError> {
    let document = Document::parse(text)?;
    if document.root_name() != SVG_ROOT {
        return Err(ParseError::UnexpectedRoot {
            expected: SVG_ROOT.to_owned(),
            found: document.root_name().to_owned(),
        });
    }
    Ok(document)
}

// ============================================================================
// Icons
// ============================================================================

/// Iterator returned by [`IconCatalog::generate_all`].
#[derive(Debug, Clone)]
pub struct Icons<'a> {
    catalog: &'a IconCatalog,
    entries: std::slice::Iter<'a, IconMetadata>,
}

impl Iterator for Icons<'_> {
    type Item = Result<Icon, IconError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|entry| self.catalog.generate(entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for Icons<'_> {}

impl FusedIterator for Icons<'_> {}

// ============================================================================
// Tests
// ============================================================================
