//! Collaborator interfaces: the note-type schema and the card store.
//!
//! The coverage engine reads everything it needs through these two
//! traits, so the backing store can be a live AnkiConnect endpoint
//! ([`crate::AnkiSource`]) or an in-memory fake in tests. The engine
//! never writes through either interface.

use crate::Result;

/// Whether a scan covers the active deck or the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Restrict the scan to cards in the currently active deck.
    CurrentDeck,
    /// Scan every deck in the collection.
    WholeCollection,
}

/// A note type (model) reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteType {
    /// The note type ID.
    pub id: i64,
    /// The note type name.
    pub name: String,
}

/// Note-type introspection.
#[allow(async_fn_in_trait)]
pub trait Schema {
    /// All note types in the collection.
    async fn note_types(&self) -> Result<Vec<NoteType>>;

    /// Field names of a note type, in declared order.
    async fn field_names(&self, note_type: &NoteType) -> Result<Vec<String>>;

    /// Whether a lowercased note-type name indicates Japanese-language
    /// content.
    fn is_japanese_note_type(&self, name: &str) -> bool;
}

/// Read access to note field text.
#[allow(async_fn_in_trait)]
pub trait Collection {
    /// Text of the selected fields, one row per note of `note_type`
    /// that has at least one reviewed card (not new, not suspended,
    /// not buried), restricted to the active deck when `scope` is
    /// [`Scope::CurrentDeck`].
    async fn matching_field_text(
        &self,
        note_type: &NoteType,
        field_indices: &[usize],
        scope: Scope,
    ) -> Result<Vec<Vec<String>>>;
}
