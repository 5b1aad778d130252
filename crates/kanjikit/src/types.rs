//! Response types returned by note actions.

use std::collections::HashMap;

use serde::Deserialize;

/// Information about an existing note.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteInfo {
    /// The note ID.
    pub note_id: i64,
    /// The note type (model) name.
    pub model_name: String,
    /// Tags on the note.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Field values and metadata, keyed by field name.
    pub fields: HashMap<String, NoteField>,
    /// Card IDs generated from this note.
    #[serde(default)]
    pub cards: Vec<i64>,
}

/// A field value with metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteField {
    /// The field value (HTML).
    pub value: String,
    /// The field's position in the note type.
    pub order: i32,
}
