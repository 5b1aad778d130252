//! Type-safe builder for the slice of Anki search syntax a scan uses.
//!
//! Replaces error-prone string concatenation with checked methods for the
//! handful of search terms the coverage scan needs: note type, deck, and
//! review-queue restrictions.
//!
//! # Example
//!
//! ```
//! use kanjikit::QueryBuilder;
//!
//! // Notes of one type whose cards have been reviewed at least once
//! let query = QueryBuilder::new()
//!     .note("Japanese Vocabulary")
//!     .not_new()
//!     .not_suspended()
//!     .not_buried()
//!     .build();
//!
//! assert_eq!(
//!     query,
//!     "note:\"Japanese Vocabulary\" -is:new -is:suspended -is:buried"
//! );
//! ```

/// A builder for constructing Anki search queries.
#[derive(Debug, Clone, Default)]
#[must_use = "QueryBuilder does nothing until .build() is called"]
pub struct QueryBuilder {
    parts: Vec<String>,
}

impl QueryBuilder {
    /// Create a new empty query builder.
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Filter by deck name.
    ///
    /// The special name `current` matches the active deck.
    ///
    /// ```
    /// use kanjikit::QueryBuilder;
    ///
    /// let q = QueryBuilder::new().deck("current").build();
    /// assert_eq!(q, "deck:current");
    ///
    /// // Spaces are quoted automatically
    /// let q = QueryBuilder::new().deck("My Deck").build();
    /// assert_eq!(q, "deck:\"My Deck\"");
    /// ```
    pub fn deck(mut self, name: &str) -> Self {
        self.parts.push(format!("deck:{}", quote_if_needed(name)));
        self
    }

    /// Filter by note type (model) name.
    pub fn note(mut self, name: &str) -> Self {
        self.parts.push(format!("note:{}", quote_if_needed(name)));
        self
    }

    /// Exclude cards that have never been reviewed.
    pub fn not_new(mut self) -> Self {
        self.parts.push("-is:new".to_string());
        self
    }

    /// Exclude suspended cards.
    pub fn not_suspended(mut self) -> Self {
        self.parts.push("-is:suspended".to_string());
        self
    }

    /// Exclude buried cards.
    pub fn not_buried(mut self) -> Self {
        self.parts.push("-is:buried".to_string());
        self
    }

    /// Build the final query string.
    pub fn build(self) -> String {
        self.parts.join(" ")
    }
}

/// Quote a value if it contains characters that would break the query.
///
/// Anki's search syntax gives meaning to spaces, colons, parentheses,
/// wildcards, and more, so anything beyond plain alphanumerics (plus
/// `-` and `_`) is quoted, with embedded quotes escaped.
fn quote_if_needed(value: &str) -> String {
    if value
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        value.to_string()
    } else {
        format!("\"{}\"", value.replace('"', "\\\""))
    }
}
