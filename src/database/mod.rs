pub mod manager;
pub mod models;
pub mod notes;
pub mod users;

pub use manager::{connect, health_check, run_migrations, StoreError};
pub use notes::{NoteChanges, NoteRepository};
pub use users::UserRepository;
