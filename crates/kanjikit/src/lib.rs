//! An async AnkiConnect client covering the read path of a kanji
//! coverage scan.
//!
//! This is deliberately not a complete AnkiConnect binding: it exposes
//! exactly the actions needed to enumerate note types, introspect their
//! fields, and read note field text — plus a small type-safe builder for
//! the Anki search syntax used to restrict a scan to reviewed cards.
//!
//! # Quick Start
//!
//! ```no_run
//! use kanjikit::AnkiClient;
//!
//! # async fn example() -> kanjikit::Result<()> {
//! let client = AnkiClient::new();
//!
//! let models = client.models().names_and_ids().await?;
//! for (name, id) in &models {
//!     println!("{name} ({id})");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! - Anki must be running with the
//!   [AnkiConnect](https://ankiweb.net/shared/info/2055492159) add-on installed
//! - By default, the client connects to `http://127.0.0.1:8765`

pub mod actions;
pub mod client;
pub mod error;
pub mod query;
pub mod types;

pub use client::{AnkiClient, ClientBuilder};
pub use error::{Error, Result};
pub use query::QueryBuilder;
pub use types::{NoteField, NoteInfo};
