pub mod create;
pub mod delete;
pub mod list;
pub mod update;

pub use create::add_note;
pub use delete::delete_note;
pub use list::fetch_all_notes;
pub use update::update_note;

use serde::Serialize;

use crate::database::models::Note;

#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub success: bool,
    pub note: Note,
}
