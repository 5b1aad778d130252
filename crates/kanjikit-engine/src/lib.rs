//! Kanji coverage statistics for Anki collections.
//!
//! This crate scans the text of seen flashcards, extracts CJK unified
//! ideographs, classifies each one into a six-tier JLPT-style grade
//! table, and renders HTML reports of which kanji have been seen, which
//! are still missing per grade, and which fall outside the standard
//! grade set.
//!
//! The scan reads card text through two narrow collaborator traits,
//! [`Schema`] and [`Collection`]. [`AnkiSource`] implements both over a
//! live AnkiConnect endpoint via the [`kanjikit`] client; tests can
//! substitute an in-memory fake.
//!
//! # Quick Start
//!
//! ```no_run
//! use kanjikit_engine::{AnkiSource, CoverageConfig, CoverageEngine, Scope};
//!
//! # async fn example() -> kanjikit_engine::Result<()> {
//! let source = AnkiSource::new(kanjikit_engine::AnkiClient::new());
//! let engine = CoverageEngine::new(source, Scope::WholeCollection, CoverageConfig::default());
//!
//! let html = engine.report().await?;
//! println!("{html}");
//! # Ok(())
//! # }
//! ```

mod error;

pub mod anki;
pub mod coverage;
pub mod grades;
pub mod ideograph;
pub mod report;
pub mod source;

pub use anki::AnkiSource;
pub use coverage::{CoverageConfig, CoverageEngine, CoverageSummary, GradeCoverage, KanjiSets};
pub use error::{Error, Result};
pub use grades::{GRADES, Grade, GradeIndex, NON_JOUYOU};
pub use ideograph::is_kanji;
pub use source::{Collection, NoteType, Schema, Scope};

// Re-export kanjikit types for convenience
pub use kanjikit::{AnkiClient, ClientBuilder};
