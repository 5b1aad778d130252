//! Model (note type) introspection actions.

use std::collections::HashMap;

use serde::Serialize;

use crate::client::AnkiClient;
use crate::error::Result;

/// Provides access to model-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::models()`].
#[derive(Debug)]
pub struct ModelActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModelNameParams<'a> {
    model_name: &'a str,
}

impl<'a> ModelActions<'a> {
    /// Get all model names with their IDs.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use kanjikit::AnkiClient;
    /// # async fn example() -> kanjikit::Result<()> {
    /// let client = AnkiClient::new();
    /// let models = client.models().names_and_ids().await?;
    /// println!("{} note types", models.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn names_and_ids(&self) -> Result<HashMap<String, i64>> {
        self.client.invoke_without_params("modelNamesAndIds").await
    }

    /// Get field names for a model, in declared order.
    pub async fn field_names(&self, model_name: &str) -> Result<Vec<String>> {
        self.client
            .invoke("modelFieldNames", ModelNameParams { model_name })
            .await
    }
}
