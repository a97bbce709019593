use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::StoreError;
use crate::database::models::Note;

const NOTE_COLUMNS: &str = "id, owner_id, title, description, tag, created_at, updated_at";

/// Fields a caller may change on an existing note. Unset fields are left
/// untouched; a supplied tag replaces the stored one but an update can never
/// clear a tag back to null (matching the original backend's behavior).
#[derive(Debug, Default, Clone)]
pub struct NoteChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tag: Option<String>,
}

impl NoteChanges {
    fn apply(self, note: &mut Note) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(description) = self.description {
            note.description = description;
        }
        if let Some(tag) = self.tag {
            note.tag = Some(tag);
        }
    }
}

/// Persistence for note records, all operations scoped by owner. Input shape
/// validation (title/description lengths) happens at the request boundary;
/// this layer persists what it is given and enforces ownership.
#[derive(Clone)]
pub struct NoteRepository {
    pool: PgPool,
}

impl NoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All notes owned by `owner_id`. No ordering guarantee.
    pub async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Note>, StoreError> {
        let sql = format!("SELECT {} FROM notes WHERE owner_id = $1", NOTE_COLUMNS);
        let notes = sqlx::query_as::<_, Note>(&sql)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(notes)
    }

    pub async fn create(
        &self,
        owner_id: Uuid,
        title: &str,
        description: &str,
        tag: Option<&str>,
    ) -> Result<Note, StoreError> {
        let sql = format!(
            "INSERT INTO notes (owner_id, title, description, tag) VALUES ($1, $2, $3, $4) RETURNING {}",
            NOTE_COLUMNS
        );
        let note = sqlx::query_as::<_, Note>(&sql)
            .bind(owner_id)
            .bind(title)
            .bind(description)
            .bind(tag)
            .fetch_one(&self.pool)
            .await?;
        Ok(note)
    }

    /// Re-read, authorize, then apply only the supplied fields.
    pub async fn update(
        &self,
        note_id: Uuid,
        owner_id: Uuid,
        changes: NoteChanges,
    ) -> Result<Note, StoreError> {
        let mut note = authorize_owner(self.fetch(note_id).await?, owner_id)?;
        changes.apply(&mut note);

        let sql = format!(
            "UPDATE notes SET title = $1, description = $2, tag = $3, updated_at = now() WHERE id = $4 RETURNING {}",
            NOTE_COLUMNS
        );
        let note = sqlx::query_as::<_, Note>(&sql)
            .bind(&note.title)
            .bind(&note.description)
            .bind(&note.tag)
            .bind(note.id)
            .fetch_one(&self.pool)
            .await?;
        Ok(note)
    }

    /// Re-read, authorize, then remove permanently.
    pub async fn delete(&self, note_id: Uuid, owner_id: Uuid) -> Result<(), StoreError> {
        let note = authorize_owner(self.fetch(note_id).await?, owner_id)?;
        sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(note.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn fetch(&self, note_id: Uuid) -> Result<Option<Note>, StoreError> {
        let sql = format!("SELECT {} FROM notes WHERE id = $1", NOTE_COLUMNS);
        let note = sqlx::query_as::<_, Note>(&sql)
            .bind(note_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(note)
    }
}

/// Existence is checked before ownership, so a non-owner probing a
/// nonexistent id gets NotFound rather than AccessDenied.
fn authorize_owner(note: Option<Note>, owner_id: Uuid) -> Result<Note, StoreError> {
    let note = note.ok_or_else(|| StoreError::NotFound("Note Not Found".to_string()))?;
    if note.owner_id != owner_id {
        return Err(StoreError::AccessDenied);
    }
    Ok(note)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn note(owner_id: Uuid) -> Note {
        Note {
            id: Uuid::new_v4(),
            owner_id,
            title: "Shop".to_string(),
            description: "Buy milk".to_string(),
            tag: Some("errands".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn missing_note_is_not_found_regardless_of_caller() {
        let err = authorize_owner(None, Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn foreign_owner_is_denied_only_when_note_exists() {
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let err = authorize_owner(Some(note(owner)), stranger).unwrap_err();
        assert!(matches!(err, StoreError::AccessDenied));
    }

    #[test]
    fn owner_passes_authorization() {
        let owner = Uuid::new_v4();
        let note = authorize_owner(Some(note(owner)), owner).unwrap();
        assert_eq!(note.owner_id, owner);
    }

    #[test]
    fn changes_apply_only_supplied_fields() {
        let mut n = note(Uuid::new_v4());
        let changes = NoteChanges {
            title: Some("New".to_string()),
            ..Default::default()
        };
        changes.apply(&mut n);
        assert_eq!(n.title, "New");
        assert_eq!(n.description, "Buy milk");
        assert_eq!(n.tag.as_deref(), Some("errands"));
    }

    #[test]
    fn supplied_tag_replaces_stored_tag() {
        let mut n = note(Uuid::new_v4());
        let changes = NoteChanges {
            tag: Some("home".to_string()),
            ..Default::default()
        };
        changes.apply(&mut n);
        assert_eq!(n.tag.as_deref(), Some("home"));
        assert_eq!(n.title, "Shop");
    }

    #[test]
    fn empty_changes_leave_note_untouched() {
        let mut n = note(Uuid::new_v4());
        let before = n.clone();
        NoteChanges::default().apply(&mut n);
        assert_eq!(n.title, before.title);
        assert_eq!(n.description, before.description);
        assert_eq!(n.tag, before.tag);
    }
}
