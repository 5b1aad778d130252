//! Note search and inspection actions.

use serde::Serialize;

use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::NoteInfo;

/// Provides access to note-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::notes()`].
#[derive(Debug)]
pub struct NoteActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct FindNotesParams<'a> {
    query: &'a str,
}

#[derive(Serialize)]
struct NotesInfoParams<'a> {
    notes: &'a [i64],
}

impl<'a> NoteActions<'a> {
    /// Find note IDs matching an Anki search query.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use kanjikit::AnkiClient;
    /// # async fn example() -> kanjikit::Result<()> {
    /// let client = AnkiClient::new();
    /// let ids = client.notes().find("deck:current -is:new").await?;
    /// println!("{} reviewed notes", ids.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn find(&self, query: &str) -> Result<Vec<i64>> {
        self.client
            .invoke("findNotes", FindNotesParams { query })
            .await
    }

    /// Get full field information for the given notes.
    pub async fn info(&self, note_ids: &[i64]) -> Result<Vec<NoteInfo>> {
        self.client
            .invoke("notesInfo", NotesInfoParams { notes: note_ids })
            .await
    }
}
