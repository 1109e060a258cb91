//! State for the font upload panel.
//!
//! Accepted files are held in insertion order and only ever leave the list
//! through an explicit delete. The suffix filter is case-sensitive: `.ttf`
//! matches, `.TTF` does not. Files failing the filter are not silently
//! dropped; their names are handed back to the caller so the UI can report
//! them.

use crate::model::font::UploadedFont;

/// The one accepted font format, matched case-sensitively against the end of
/// the file name.
pub const FONT_SUFFIX: &str = ".ttf";

pub fn is_font_file(name: &str) -> bool {
    name.ends_with(FONT_SUFFIX)
}

/// Result of offering a batch of files to the panel.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptOutcome {
    /// Ids of the newly created entries, in the order they were appended.
    pub accepted: Vec<String>,
    /// Names that failed the suffix filter, in input order.
    pub rejected: Vec<String>,
}

/// Ordered list of uploaded fonts. Append-only except for deletions.
#[derive(Debug, Default)]
pub struct UploadList {
    pub fonts: Vec<UploadedFont>,
}

impl UploadList {
    /// Offers a batch of file names to the panel. Names passing the suffix
    /// filter become entries with fresh ids and empty byte buffers (to be
    /// filled via [`UploadList::attach_bytes`] once the file content has been
    /// read); the rest are reported back as rejected.
    pub fn accept<I>(&mut self, names: I) -> AcceptOutcome
    where
        I: IntoIterator<Item = String>,
    {
        let mut outcome = AcceptOutcome {
            accepted: Vec::new(),
            rejected: Vec::new(),
        };

        for name in names {
            if !is_font_file(&name) {
                outcome.rejected.push(name);
                continue;
            }
            let id = uuid::Uuid::new_v4().to_string();
            outcome.accepted.push(id.clone());
            self.fonts.push(UploadedFont {
                id,
                name,
                bytes: Vec::new(),
            });
        }

        outcome
    }

    /// Stores the file content for a previously accepted entry. No-op when
    /// the entry has been deleted in the meantime.
    pub fn attach_bytes(&mut self, id: &str, bytes: Vec<u8>) {
        if let Some(font) = self.fonts.iter_mut().find(|f| f.id == id) {
            font.bytes = bytes;
        }
    }

    /// Removes the entry with the given id. No-op when absent.
    pub fn delete(&mut self, id: &str) {
        self.fonts.retain(|f| f.id != id);
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}
