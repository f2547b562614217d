/// Media-type classification — resolves a file to a mimetype string and
/// matches it against the configured category list.
///
/// Two detection strategies:
/// - **Fast:** extension-based guess via `mime_guess`. Never touches file
///   content, never fails.
/// - **Thorough:** magic-byte sniffing via `infer`, which reads the file
///   header and therefore can fail with an I/O error when the file is
///   unreadable or vanished mid-scan. When the sniffer recognises no
///   binary signature (plain text has none), the extension guess is used
///   as a fallback so text files still classify.
use crate::model::CategorySpec;
use std::io;
use std::path::Path;

/// How mimetypes are resolved during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectionMode {
    /// Filename/extension guess only — no file reads.
    #[default]
    Fast,
    /// Sniff file content (magic bytes), falling back to the extension.
    Thorough,
}

/// Resolve the mimetype of `path`.
///
/// Returns `Ok(None)` when no mimetype could be determined; such files
/// never match any configured category. Only `Thorough` mode performs I/O
/// and can return an error.
pub fn classify(path: &Path, mode: DetectionMode) -> io::Result<Option<String>> {
    match mode {
        DetectionMode::Fast => Ok(guess_from_extension(path)),
        DetectionMode::Thorough => {
            let sniffed = infer::get_from_path(path)?;
            Ok(sniffed
                .map(|kind| kind.mime_type().to_string())
                .or_else(|| guess_from_extension(path)))
        }
    }
}

fn guess_from_extension(path: &Path) -> Option<String> {
    mime_guess::from_path(path)
        .first_raw()
        .map(|mime| mime.to_string())
}

/// Find the bucket for a resolved mimetype: the index of the FIRST spec
/// (configuration order) whose prefix is a string-prefix of `mime`.
///
/// At most one category matches — overlapping prefixes never double-count
/// a file. An empty mimetype matches nothing.
pub fn match_category(categories: &[CategorySpec], mime: &str) -> Option<usize> {
    if mime.is_empty() {
        return None;
    }
    categories
        .iter()
        .position(|spec| mime.starts_with(spec.prefix.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn default_categories() -> Vec<CategorySpec> {
        vec![
            CategorySpec::new("Image", "image/"),
            CategorySpec::new("Text", "text/"),
            CategorySpec::new("Audio", "audio/"),
            CategorySpec::new("Video", "video/"),
            CategorySpec::new("Application", "application/"),
        ]
    }

    // ── classify, fast mode ──────────────────────────────────────────────

    #[test]
    fn fast_mode_guesses_from_extension() {
        let mime = classify(Path::new("photo.jpg"), DetectionMode::Fast)
            .unwrap()
            .expect("jpg must resolve");
        assert!(mime.starts_with("image/"), "got {mime}");
    }

    #[test]
    fn fast_mode_unknown_extension_resolves_to_none() {
        assert_eq!(
            classify(Path::new("mystery.zzqq"), DetectionMode::Fast).unwrap(),
            None
        );
        assert_eq!(
            classify(Path::new("no_extension"), DetectionMode::Fast).unwrap(),
            None
        );
    }

    /// Fast mode never reads the file, so a nonexistent path still succeeds.
    #[test]
    fn fast_mode_does_not_touch_the_file() {
        let mime = classify(Path::new("/definitely/not/there.mp3"), DetectionMode::Fast).unwrap();
        assert!(mime.is_some_and(|m| m.starts_with("audio/")));
    }

    // ── classify, thorough mode ──────────────────────────────────────────

    #[test]
    fn thorough_mode_sniffs_magic_bytes() {
        let tmp = TempDir::new().unwrap();
        // A minimal PNG header is enough for the sniffer, extension is a lie.
        let path = tmp.path().join("disguised.txt");
        fs::write(&path, b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR").unwrap();
        let mime = classify(&path, DetectionMode::Thorough).unwrap().unwrap();
        assert_eq!(mime, "image/png");
    }

    #[test]
    fn thorough_mode_falls_back_to_extension_for_plain_text() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("notes.txt");
        fs::write(&path, b"just some words").unwrap();
        let mime = classify(&path, DetectionMode::Thorough).unwrap().unwrap();
        assert!(mime.starts_with("text/"), "got {mime}");
    }

    #[test]
    fn thorough_mode_errors_on_missing_file() {
        let err = classify(Path::new("/nope/gone.bin"), DetectionMode::Thorough);
        assert!(err.is_err());
    }

    // ── match_category ───────────────────────────────────────────────────

    #[test]
    fn matches_first_category_by_configuration_order() {
        let overlapping = vec![
            CategorySpec::new("AnyImage", "image/"),
            CategorySpec::new("Jpeg", "image/jpeg"),
        ];
        // Both prefixes match — the first configured spec wins.
        assert_eq!(match_category(&overlapping, "image/jpeg"), Some(0));
    }

    #[test]
    fn unmatched_mimetype_returns_none() {
        let cats = default_categories();
        assert_eq!(match_category(&cats, "font/woff2"), None);
    }

    #[test]
    fn empty_mimetype_never_matches() {
        let cats = default_categories();
        assert_eq!(match_category(&cats, ""), None);
    }

    #[test]
    fn each_default_prefix_matches_its_own_family() {
        let cats = default_categories();
        assert_eq!(match_category(&cats, "image/png"), Some(0));
        assert_eq!(match_category(&cats, "text/plain"), Some(1));
        assert_eq!(match_category(&cats, "audio/mpeg"), Some(2));
        assert_eq!(match_category(&cats, "video/mp4"), Some(3));
        assert_eq!(match_category(&cats, "application/zip"), Some(4));
    }
}
