#[cfg(test)]
#[path = "staged_file_test.rs"]
mod tests;

use std::path::Path;
use std::path::PathBuf;

pub const PDF_MIME_TYPE: &str = "application/pdf";
const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Resolves a MIME type from the file extension, the same way a browser types
/// a file picked from disk.
pub fn mime_type_for(path: &Path) -> &'static str {
    let is_pdf = path
        .extension()
        .map(|ext| return ext.to_string_lossy().eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);

    if is_pdf {
        return PDF_MIME_TYPE;
    }

    return FALLBACK_MIME_TYPE;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StagedFile {
    pub path: PathBuf,
    pub name: String,
    pub mime_type: String,
}

impl StagedFile {
    pub fn from_path(path: &Path) -> StagedFile {
        let name = path
            .file_name()
            .map(|name| return name.to_string_lossy().to_string())
            .unwrap_or_else(|| return path.to_string_lossy().to_string());

        return StagedFile {
            path: path.to_path_buf(),
            name,
            mime_type: mime_type_for(path).to_string(),
        };
    }

    pub fn is_pdf(&self) -> bool {
        return self.mime_type == PDF_MIME_TYPE;
    }
}
