//! Directory scanning: finds `.resx` files and loads them as decoded
//! [`InputFile`]s.

use std::{
    fs::File,
    hash::{Hash, Hasher},
    io::Read,
    path::Path,
};

use encoding_rs_io::DecodeReaderBytesBuilder;
use ignore::WalkBuilder;

use resxgen::InputFile;

/// Collects every `.resx` file under `input_dir`, sorted by path.
///
/// Content is decoded through a BOM-sniffing reader, so UTF-16 resource
/// files (common for resx) load correctly; a file that cannot be read
/// becomes an [`InputFile`] with no content, which the generator reports
/// as a comment placeholder instead of failing the run.
pub fn collect_resx_files(input_dir: &Path) -> Vec<InputFile> {
    let mut files = Vec::new();
    for entry in WalkBuilder::new(input_dir).build().flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_resx = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("resx"));
        if !is_resx {
            continue;
        }
        let path_string = path.to_string_lossy().into_owned();
        let content = read_decoded(path);
        let hash = change_token(&path_string, content.as_deref());
        files.push(InputFile::new(path_string, hash, content));
    }
    files.sort_by(|a, b| a.path.cmp(&b.path));
    files
}

fn read_decoded(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;
    let mut decoder = DecodeReaderBytesBuilder::new()
        .encoding(Some(encoding_rs::UTF_8))
        .bom_override(true)
        .build(file);
    let mut decoded = String::new();
    decoder.read_to_string(&mut decoded).ok()?;
    Some(decoded)
}

/// An opaque change token for the core's equality checks; any stable
/// function of the observed content works.
fn change_token(path: &str, content: Option<&str>) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    path.hash(&mut hasher);
    content.hash(&mut hasher);
    hasher.finish()
}
