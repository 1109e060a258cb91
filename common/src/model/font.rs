/// A font file accepted into the upload panel. Lives in memory for the
/// session only; nothing is written to disk or sent anywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFont {
    pub id: String, // UUID
    /// Original file name, including the `.ttf` suffix.
    pub name: String,
    /// Raw file content. Empty until the asynchronous read completes.
    pub bytes: Vec<u8>,
}

/// One in-progress row of the group form. Exists only inside the active
/// draft and is discarded on reset or submit.
#[derive(Debug, Clone, PartialEq)]
pub struct FontRow {
    pub id: String, // UUID
    pub font_name: String,
    pub selected_font: String,
    pub size: f64,
    pub price_change: f64,
}

impl FontRow {
    /// A fresh blank row: empty names, size 1.0, no price change.
    pub fn blank() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            font_name: String::new(),
            selected_font: String::new(),
            size: 1.0,
            price_change: 0.0,
        }
    }
}

/// A single editable field of a [`FontRow`], carrying its new value.
#[derive(Debug, Clone, PartialEq)]
pub enum RowField {
    FontName(String),
    SelectedFont(String),
    Size(f64),
    PriceChange(f64),
}

/// A committed, named collection of font names. Duplicate font names within
/// a group are permitted, as are duplicate group names across the list.
#[derive(Debug, Clone, PartialEq)]
pub struct FontGroup {
    pub id: String, // UUID
    pub name: String,
    pub fonts: Vec<String>,
}
