//! AnkiConnect-backed collaborators.

use kanjikit::{AnkiClient, QueryBuilder};

use crate::Result;
use crate::source::{Collection, NoteType, Schema, Scope};

/// [`Schema`] and [`Collection`] over a live AnkiConnect endpoint.
///
/// # Example
///
/// ```no_run
/// use kanjikit_engine::{AnkiClient, AnkiSource, CoverageConfig, CoverageEngine, Scope};
///
/// # async fn example() -> kanjikit_engine::Result<()> {
/// let source = AnkiSource::new(AnkiClient::new());
/// let engine = CoverageEngine::new(source, Scope::CurrentDeck, CoverageConfig::default());
/// let sets = engine.scan().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AnkiSource {
    client: AnkiClient,
}

impl AnkiSource {
    /// Wrap an existing client.
    pub fn new(client: AnkiClient) -> Self {
        Self { client }
    }

    /// Get a reference to the underlying client.
    pub fn client(&self) -> &AnkiClient {
        &self.client
    }

    /// Search query selecting notes of one type with at least one
    /// reviewed card, deck-restricted per `scope`.
    fn scan_query(note_type: &NoteType, scope: Scope) -> String {
        let mut query = QueryBuilder::new()
            .note(&note_type.name)
            .not_new()
            .not_suspended()
            .not_buried();
        if scope == Scope::CurrentDeck {
            query = query.deck("current");
        }
        query.build()
    }
}

impl Schema for AnkiSource {
    async fn note_types(&self) -> Result<Vec<NoteType>> {
        let models = self.client.models().names_and_ids().await?;
        Ok(models
            .into_iter()
            .map(|(name, id)| NoteType { id, name })
            .collect())
    }

    async fn field_names(&self, note_type: &NoteType) -> Result<Vec<String>> {
        Ok(self.client.models().field_names(&note_type.name).await?)
    }

    fn is_japanese_note_type(&self, name: &str) -> bool {
        name.contains("japanese")
    }
}

impl Collection for AnkiSource {
    async fn matching_field_text(
        &self,
        note_type: &NoteType,
        field_indices: &[usize],
        scope: Scope,
    ) -> Result<Vec<Vec<String>>> {
        let query = Self::scan_query(note_type, scope);
        let note_ids = self.client.notes().find(&query).await?;
        if note_ids.is_empty() {
            return Ok(Vec::new());
        }

        let notes = self.client.notes().info(&note_ids).await?;
        let rows = notes
            .into_iter()
            .map(|note| {
                // AnkiConnect keys fields by name; recover declared order.
                let mut fields: Vec<_> = note.fields.into_values().collect();
                fields.sort_by_key(|f| f.order);
                field_indices
                    .iter()
                    .filter_map(|&i| fields.get(i).map(|f| f.value.clone()))
                    .collect()
            })
            .collect();
        Ok(rows)
    }
}
