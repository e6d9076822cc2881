#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use tempfile::TempDir;

/// Smallest byte sequence a PDF reader would still sniff as a PDF.
pub fn pdf_fixture_bytes() -> &'static str {
    return "%PDF-1.4\n1 0 obj << /Type /Catalog >> endobj\ntrailer << /Root 1 0 R >>\n%%EOF\n";
}

/// A temporary directory for test files. Everything written into it is
/// removed when it drops, so keep it alive for as long as the files are read.
pub struct Fixtures {
    dir: TempDir,
}

impl Fixtures {
    pub fn new() -> Fixtures {
        return Fixtures {
            dir: tempfile::tempdir().unwrap(),
        };
    }

    pub fn dir(&self) -> &Path {
        return self.dir.path();
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();

        return path;
    }

    pub fn pdf(&self, name: &str) -> PathBuf {
        return self.write(name, pdf_fixture_bytes());
    }
}

impl Default for Fixtures {
    fn default() -> Fixtures {
        return Fixtures::new();
    }
}
