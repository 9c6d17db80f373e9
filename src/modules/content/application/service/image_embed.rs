use std::io;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Resolves an image reference against the static-asset root and returns the
/// file embedded as a `data:<mime>;base64,<payload>` URI.
///
/// The reference is reduced to its final path component before joining, so a
/// value like `../../etc/passwd` can only ever name a file inside the root.
/// A missing file is not an error: records carry images optionally, and the
/// endpoints degrade to returning the record without `imageData`. An existing
/// file that cannot be read does surface the I/O error to the caller.
pub fn embed_image(image_ref: &str, asset_root: &Path) -> io::Result<Option<String>> {
    let Some(file_name) = Path::new(image_ref).file_name() else {
        return Ok(None);
    };
    let path = asset_root.join(file_name);

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err),
    };

    let mime = mime_for_extension(&path);
    Ok(Some(format!("data:{mime};base64,{}", STANDARD.encode(bytes))))
}

fn mime_for_extension(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "image/jpeg",
    }
}
