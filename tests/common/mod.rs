#![allow(dead_code)]

use std::path::PathBuf;

/// Titles of the fixture dataset, in declared order.
pub const FIXTURE_TITLES: [&str; 3] = [".NET", "Brand+", "A & B"];

/// Glyph filenames of the fixture dataset, in declared order.
pub const FIXTURE_FILES: [&str; 3] = ["dot-net.svg", "brandplus.svg", "a-and-b.svg"];

/// Root of the bundled simple-icons fixture.
pub fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/simple-icons")
}
