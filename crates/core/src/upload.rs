//! Image upload policy.
//!
//! Decides whether a declared MIME type and original filename may be
//! stored, and what server-side name the file is stored under. The
//! original filename only ever contributes its lowercased extension.

use std::path::Path;

use rand::Rng;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum accepted image size in bytes (10 MiB).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// URL prefix under which stored uploads are served.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// Allowed MIME types and the extensions that may accompany each.
pub const ALLOWED_IMAGE_TYPES: &[(&str, &[&str])] = &[
    ("image/jpeg", &["jpg", "jpeg"]),
    ("image/png", &["png"]),
    ("image/gif", &["gif"]),
    ("image/webp", &["webp"]),
    ("image/svg+xml", &["svg"]),
];

/// Upper bound (exclusive) of the random component of stored names.
const RANDOM_SUFFIX_BOUND: u32 = 1_000_000_000;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Reasons an upload is refused. The `Display` text is shown to the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejection {
    #[error("Only image files (jpg, png, gif, webp, svg) are allowed")]
    UnsupportedType,

    #[error("File extension '.{extension}' does not match declared type '{mime}'")]
    ExtensionMismatch { mime: String, extension: String },

    #[error("File exceeds the {} MiB limit", MAX_UPLOAD_BYTES / (1024 * 1024))]
    TooLarge,

    #[error("Uploaded file is empty")]
    Empty,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Lowercased last extension of `filename`, without the dot.
///
/// `shell.php.jpg` yields `jpg`; `.png` and `README` yield `None`.
pub fn effective_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

/// Strip MIME parameters (`; charset=...`) and lowercase the essence.
fn mime_essence(mime: &str) -> String {
    mime.split(';').next().unwrap_or("").trim().to_ascii_lowercase()
}

/// Check the declared MIME type and the filename extension together.
///
/// Both must be in the allow-set and the extension must be one of those
/// listed for the declared type. Returns the extension to store under.
pub fn validate_image(declared_mime: &str, original_filename: &str) -> Result<String, UploadRejection> {
    let mime = mime_essence(declared_mime);
    let allowed_exts = ALLOWED_IMAGE_TYPES
        .iter()
        .find(|(m, _)| *m == mime)
        .map(|(_, exts)| *exts)
        .ok_or(UploadRejection::UnsupportedType)?;

    let extension = effective_extension(original_filename).ok_or(UploadRejection::UnsupportedType)?;

    let known_anywhere = ALLOWED_IMAGE_TYPES
        .iter()
        .any(|(_, exts)| exts.contains(&extension.as_str()));
    if !known_anywhere {
        return Err(UploadRejection::UnsupportedType);
    }
    if !allowed_exts.contains(&extension.as_str()) {
        return Err(UploadRejection::ExtensionMismatch { mime, extension });
    }

    Ok(extension)
}

/// Check the payload size against [`MAX_UPLOAD_BYTES`].
pub fn validate_size(len: usize) -> Result<(), UploadRejection> {
    if len == 0 {
        return Err(UploadRejection::Empty);
    }
    if len > MAX_UPLOAD_BYTES {
        return Err(UploadRejection::TooLarge);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Naming
// ---------------------------------------------------------------------------

/// Generate a collision-resistant storage name: `{unix_millis}-{random}.{ext}`.
pub fn stored_filename(extension: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::rng().random_range(0..RANDOM_SUFFIX_BOUND);
    format!("{millis}-{suffix}.{extension}")
}

/// Public URL for a stored upload name.
pub fn public_url(stored_name: &str) -> String {
    format!("{UPLOADS_URL_PREFIX}/{stored_name}")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn accepts_matching_type_and_extension() {
        assert_eq!(validate_image("image/jpeg", "photo.JPG").unwrap(), "jpg");
        assert_eq!(validate_image("image/jpeg", "photo.jpeg").unwrap(), "jpeg");
        assert_eq!(validate_image("image/png", "a.png").unwrap(), "png");
        assert_eq!(validate_image("image/svg+xml", "logo.svg").unwrap(), "svg");
        assert_eq!(validate_image("IMAGE/WEBP; q=1", "x.webp").unwrap(), "webp");
    }

    #[test]
    fn double_extension_uses_last_segment() {
        assert_eq!(validate_image("image/jpeg", "shell.php.jpg").unwrap(), "jpg");
        assert_matches!(
            validate_image("image/jpeg", "shell.jpg.php"),
            Err(UploadRejection::UnsupportedType)
        );
    }

    #[test]
    fn rejects_disallowed_mime() {
        assert_matches!(
            validate_image("application/x-php", "shell.jpg"),
            Err(UploadRejection::UnsupportedType)
        );
        assert_matches!(
            validate_image("text/html", "page.svg"),
            Err(UploadRejection::UnsupportedType)
        );
    }

    #[test]
    fn rejects_extension_of_another_image_type() {
        assert_matches!(
            validate_image("image/png", "photo.jpg"),
            Err(UploadRejection::ExtensionMismatch { .. })
        );
    }

    #[test]
    fn rejects_missing_extension() {
        assert_matches!(validate_image("image/png", "png"), Err(UploadRejection::UnsupportedType));
        assert_matches!(validate_image("image/png", ".png"), Err(UploadRejection::UnsupportedType));
    }

    #[test]
    fn size_ceiling() {
        assert!(validate_size(1).is_ok());
        assert!(validate_size(MAX_UPLOAD_BYTES).is_ok());
        assert_eq!(validate_size(MAX_UPLOAD_BYTES + 1), Err(UploadRejection::TooLarge));
        assert_eq!(validate_size(0), Err(UploadRejection::Empty));
    }

    #[test]
    fn too_large_message_mentions_limit() {
        assert_eq!(UploadRejection::TooLarge.to_string(), "File exceeds the 10 MiB limit");
    }

    #[test]
    fn stored_names_are_unique_and_never_contain_original_name() {
        let names: HashSet<String> = (0..200).map(|_| stored_filename("jpg")).collect();
        assert_eq!(names.len(), 200, "stored names must not collide");

        for name in &names {
            assert!(name.ends_with(".jpg"));
            assert!(!name.contains('/'));
            assert!(!name.contains("shell"));
            let stem = name.trim_end_matches(".jpg");
            let (millis, random) = stem.split_once('-').expect("millis-random format");
            assert!(millis.parse::<i64>().is_ok());
            assert!(random.parse::<u32>().unwrap() < RANDOM_SUFFIX_BOUND);
        }
    }

    #[test]
    fn public_url_is_under_uploads_prefix() {
        assert_eq!(public_url("1-2.png"), "/uploads/1-2.png");
    }
}
