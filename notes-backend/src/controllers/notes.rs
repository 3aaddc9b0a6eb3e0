//! Notes REST API — list, create, fetch and delete notes.

use actix_web::{web, HttpResponse, Responder};

use crate::models::SaveNoteRequest;
use crate::AppState;

pub const BASE_PATH: &str = "/api/notes";

fn database_error(context: &str, e: rusqlite::Error) -> HttpResponse {
    log::error!("[NOTES] {}: {}", context, e);
    HttpResponse::InternalServerError().json(serde_json::json!({
        "error": format!("Database error: {}", e)
    }))
}

/// List all notes
async fn list_notes(state: web::Data<AppState>) -> impl Responder {
    match state.db.list_notes() {
        Ok(notes) => HttpResponse::Ok().json(notes),
        Err(e) => database_error("Failed to list notes", e),
    }
}

/// Create a note, or overwrite the one whose id is in the body
async fn create_note(
    state: web::Data<AppState>,
    body: web::Json<SaveNoteRequest>,
) -> impl Responder {
    let request = body.into_inner();

    match state.db.save_note(&request) {
        Ok(note) => {
            log::info!("[NOTES] Saved note {}", note.id);
            HttpResponse::Ok().json(note)
        }
        Err(e) => database_error("Failed to save note", e),
    }
}

async fn get_note(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let id = path.into_inner();

    match state.db.get_note(id) {
        Ok(Some(note)) => HttpResponse::Ok().json(note),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => database_error("Failed to get note", e),
    }
}

/// Delete a note. 404 if it does not exist; nothing is deleted in that case.
async fn delete_note(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let id = path.into_inner();

    match state.db.note_exists(id) {
        Ok(true) => {}
        Ok(false) => return HttpResponse::NotFound().finish(),
        Err(e) => return database_error("Failed to check note", e),
    }

    match state.db.delete_note(id) {
        Ok(_) => {
            log::info!("[NOTES] Deleted note {}", id);
            HttpResponse::Ok().finish()
        }
        Err(e) => database_error("Failed to delete note", e),
    }
}

/// Configure routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(BASE_PATH)
            .route("", web::get().to(list_notes))
            .route("", web::post().to(create_note))
            .route("/{id}", web::get().to(get_note))
            .route("/{id}", web::delete().to(delete_note)),
    );
}
