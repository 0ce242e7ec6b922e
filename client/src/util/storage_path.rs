//! Randomized object paths for uploaded blobs.
//!
//! Paths are `<uuid-v4>` plus the original extension. No uniqueness check is
//! made against the bucket; a v4 collision is treated as impossible.

#[cfg(test)]
#[path = "storage_path_test.rs"]
mod storage_path_test;

/// Fallback content type when the browser declares none.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Extension of `file_name`: the text after the last `.`, lowercased and
/// restricted to ASCII alphanumerics so it is safe inside a URL path.
pub fn file_extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() {
        // Dotfile such as `.env`: the name is all stem.
        return None;
    }
    let ext: String = ext
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    (!ext.is_empty()).then_some(ext)
}

/// Build a fresh object path for `file_name`.
pub fn object_path_for(file_name: &str) -> String {
    let id = uuid::Uuid::new_v4();
    match file_extension(file_name) {
        Some(ext) => format!("{id}.{ext}"),
        None => id.to_string(),
    }
}

/// The declared content type, or the octet-stream fallback when blank.
pub fn effective_content_type(declared: &str) -> String {
    let declared = declared.trim();
    if declared.is_empty() { FALLBACK_CONTENT_TYPE.to_owned() } else { declared.to_owned() }
}
