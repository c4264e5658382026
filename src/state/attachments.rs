//! Pre-submission attachment staging.
//!
//! Candidates are screened before they enter the list. Rejections stay
//! invisible in the UI; a debug line records the reason.

#[cfg(test)]
#[path = "attachments_test.rs"]
mod attachments_test;

use super::entries::EvidenceRef;

/// Upper size bound for a staged file.
pub const MAX_FILE_BYTES: u64 = 50 * 1024 * 1024;

/// MIME type prefixes admitted by the stager.
pub const ACCEPTED_MIME_PREFIXES: [&str; 3] = ["image/", "audio/", "video/"];

/// A file reference held before submission. No bytes are kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StagedFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

/// Why a candidate was dropped.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RejectReason {
    #[error("file larger than 50 MiB")]
    TooLarge,
    #[error("file type is not image, audio, or video")]
    UnsupportedType,
}

/// Check a candidate against the acceptance policy. Size is checked first.
pub fn screen(mime: &str, size: u64) -> Result<(), RejectReason> {
    if size > MAX_FILE_BYTES {
        return Err(RejectReason::TooLarge);
    }
    if !ACCEPTED_MIME_PREFIXES.iter().any(|prefix| mime.starts_with(prefix)) {
        return Err(RejectReason::UnsupportedType);
    }
    Ok(())
}

/// Staged attachments in submission order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttachmentList {
    files: Vec<StagedFile>,
}

impl AttachmentList {
    /// Stage a candidate. Returns whether it was admitted.
    pub fn add(&mut self, file: StagedFile) -> bool {
        match screen(&file.mime, file.size) {
            Ok(()) => {
                self.files.push(file);
                true
            }
            Err(reason) => {
                log::debug!("dropped attachment {:?}: {reason}", file.name);
                false
            }
        }
    }

    /// Stage every admissible candidate, preserving order.
    pub fn add_many(&mut self, candidates: impl IntoIterator<Item = StagedFile>) {
        for candidate in candidates {
            self.add(candidate);
        }
    }

    /// Remove by position. Out-of-range indexes are a no-op.
    pub fn remove(&mut self, index: usize) -> Option<StagedFile> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            log::debug!("ignored removal at index {index} with {} staged", self.files.len());
            None
        }
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn files(&self) -> &[StagedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Evidence references for a complaint built from the staged list.
    pub fn evidence(&self) -> Vec<EvidenceRef> {
        self.files
            .iter()
            .map(|file| EvidenceRef { name: file.name.clone(), mime: file.mime.clone() })
            .collect()
    }
}
