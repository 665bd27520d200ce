//! Note routes:
//! - GET /api/notes - List every note
//! - GET /api/notes/{id} - Fetch one note
//! - POST /api/notes - Create a note
//! - PUT /api/notes/{id} - Replace a note's content and importance
//! - DELETE /api/notes/{id} - Delete a note

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;

use notes_core::{NewNote, Note, NoteUpdate};

use crate::error::{ApiError, ApiResult};
use crate::extract::{AppJson, MaybeTokenUser};
use crate::state::AppState;

// ============================================================================
// Request Types
// ============================================================================

/// Request body for POST /api/notes.
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub content: Option<String>,
    pub important: Option<bool>,
}

/// Request body for PUT /api/notes/{id}.
#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    pub content: Option<String>,
    pub important: Option<bool>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/notes
async fn list_notes(State(state): State<AppState>) -> ApiResult<Json<Vec<Note>>> {
    let notes = state.notes().find_all().await?;
    Ok(Json(notes))
}

/// GET /api/notes/{id}
async fn get_note(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Json<Note>> {
    state
        .notes()
        .find_by_id(&id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// POST /api/notes
///
/// An anonymous request without `content` is rejected here with
/// `content missing`. Empty content, and missing content on an authenticated
/// request, are left to the store's validation message.
async fn create_note(
    State(state): State<AppState>,
    MaybeTokenUser(token_user): MaybeTokenUser,
    AppJson(request): AppJson<CreateNoteRequest>,
) -> ApiResult<(StatusCode, Json<Note>)> {
    if token_user.is_none() && state.config().require_auth_for_notes {
        return Err(ApiError::Unauthorized("token missing".to_string()));
    }

    let content = match (request.content, &token_user) {
        (Some(content), _) => content,
        (None, Some(_)) => String::new(),
        (None, None) => return Err(ApiError::BadRequest("content missing".to_string())),
    };

    let new_note = NewNote::new(content)
        .important(request.important.unwrap_or(false))
        .user(token_user.as_ref().map(|u| u.user_id));

    let note = state.notes().create(new_note).await?;

    tracing::info!(
        note_id = %note.id,
        user = token_user.as_ref().map(|u| u.username.as_str()),
        "Note created"
    );

    Ok((StatusCode::CREATED, Json(note)))
}

/// PUT /api/notes/{id}
///
/// Updating a well-formed id with no note behind it is a 404.
async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(request): AppJson<UpdateNoteRequest>,
) -> ApiResult<Json<Note>> {
    let update = NoteUpdate::new(request.content, request.important.unwrap_or(false));

    let note = state
        .notes()
        .update_by_id(&id, update)
        .await?
        .ok_or(ApiError::NotFound)?;

    tracing::info!(note_id = %note.id, "Note updated");
    Ok(Json(note))
}

/// DELETE /api/notes/{id}
async fn delete_note(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<StatusCode> {
    state.notes().delete_by_id(&id).await?;
    tracing::info!(note_id = %id, "Note deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route(
            "/api/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_fields_are_optional() {
        let request: CreateNoteRequest = serde_json::from_str(r#"{"important":true}"#).unwrap();
        assert!(request.content.is_none());
        assert_eq!(request.important, Some(true));

        let request: CreateNoteRequest = serde_json::from_str(r#"{"content":""}"#).unwrap();
        assert_eq!(request.content.as_deref(), Some(""));
        assert!(request.important.is_none());
    }
}
