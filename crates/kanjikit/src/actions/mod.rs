//! Action groups, organized the way AnkiConnect groups its API.

mod models;
mod notes;

pub use models::ModelActions;
pub use notes::NoteActions;
