#[cfg(test)]
#[path = "staging_test.rs"]
mod tests;

use crate::domain::models::StagedFile;

/// Ordered list of files picked locally and waiting to be uploaded.
#[derive(Default)]
pub struct StagingStore {
    files: Vec<StagedFile>,
}

impl StagingStore {
    /// Appends the PDF subset of `candidates`, in order. Duplicates are kept.
    /// Returns how many files were admitted.
    pub fn add(&mut self, candidates: Vec<StagedFile>) -> usize {
        let before = self.files.len();
        self.files
            .extend(candidates.into_iter().filter(|file| return file.is_pdf()));

        return self.files.len() - before;
    }

    /// Removes the file at `index`. Out of range indexes are ignored.
    pub fn remove_at(&mut self, index: usize) -> Option<StagedFile> {
        if index >= self.files.len() {
            return None;
        }

        return Some(self.files.remove(index));
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn files(&self) -> &[StagedFile] {
        return &self.files;
    }

    pub fn len(&self) -> usize {
        return self.files.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.files.is_empty();
    }
}
