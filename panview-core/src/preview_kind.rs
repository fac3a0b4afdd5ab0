//! Which preview modal, if any, a file opens in.
//!
//! Mirrors the server's extension table so the listing can decide on the
//! client without another round trip.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewKind {
    Image,
    Text,
}

const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff", "svg", "ico", "heic", "avif",
    "psd", "ai", "eps",
];

const TEXT_EXTENSIONS: &[&str] = &[
    // documents, config, logs
    "txt", "rtf", "xml", "yml", "toml", "md", "ini", "env", "properties", "log", "out", "err",
    // source and scripts
    "py", "java", "json", "pyc", "pyo", "js", "ts", "jsx", "tsx", "html", "htm", "css", "class",
    "jar", "c", "cpp", "h", "hpp", "cs", "go", "rs", "php", "rb", "swift", "kt", "kts", "dart",
    "json5", "vue", "jsp", "asp", "aspx", "sql", "db", "sqlite", "bat", "cmd", "sh", "bash",
    "zsh",
];

/// Look up the preview kind for a file name by its last extension,
/// case-insensitively (full Unicode lowercasing, like the server). Returns
/// `None` for unknown or missing extensions. Leading dots do not start an
/// extension, so `.env` has none.
pub fn preview_kind_for(filename: &str) -> Option<PreviewKind> {
    let (_, ext) = filename.trim_start_matches('.').rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    let ext = ext.to_lowercase();

    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Some(PreviewKind::Image)
    } else if TEXT_EXTENSIONS.contains(&ext.as_str()) {
        Some(PreviewKind::Text)
    } else {
        None
    }
}
