use crate::db::queries;
use crate::models::room::{CreateRoom, Room, UpdateRoomStatus};
use actix_web::{web, HttpResponse, Responder};
use sqlx::SqlitePool;
use validator::Validate;

// Helper error struct
#[derive(serde::Serialize)]
struct ErrorResponse {
    error: String,
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Room not found.".to_string(),
    })
}

fn server_error(message: &str) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: message.to_string(),
    })
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/rooms")
            .route("", web::post().to(create_room))
            .route("", web::get().to(get_rooms))
            .route("/{id}", web::put().to(update_room))
            .route("/{id}", web::delete().to(delete_room))
            .route("/{id}/status", web::patch().to(update_room_status)),
    );
}

pub async fn create_room(
    pool: web::Data<SqlitePool>,
    body: web::Json<CreateRoom>,
) -> impl Responder {
    if let Err(e) = body.validate() {
        return HttpResponse::BadRequest().json(e);
    }

    match sqlx::query_as::<_, Room>(queries::CREATE_ROOM)
        .bind(&body.room_number)
        .bind(&body.room_floor)
        .bind(&body.room_facility)
        .bind(body.status)
        .bind(body.room_type_id)
        .fetch_one(pool.get_ref())
        .await
    {
        Ok(room) => HttpResponse::Created().json(serde_json::json!({
            "message": "Room created successfully.",
            "room": room,
        })),
        Err(e) => {
            log::error!("Failed to create room: {e}");
            server_error("Server error while creating room.")
        }
    }
}

pub async fn get_rooms(pool: web::Data<SqlitePool>) -> impl Responder {
    match sqlx::query_as::<_, Room>(queries::GET_ROOMS)
        .fetch_all(pool.get_ref())
        .await
    {
        Ok(rooms) => HttpResponse::Ok().json(rooms),
        Err(e) => {
            log::error!("Failed to list rooms: {e}");
            server_error("Server error while listing rooms.")
        }
    }
}

pub async fn update_room(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    body: web::Json<CreateRoom>,
) -> impl Responder {
    if let Err(e) = body.validate() {
        return HttpResponse::BadRequest().json(e);
    }
    let room_id = path.into_inner();

    match sqlx::query_as::<_, Room>(queries::UPDATE_ROOM)
        .bind(&body.room_number)
        .bind(&body.room_floor)
        .bind(&body.room_facility)
        .bind(body.status)
        .bind(body.room_type_id)
        .bind(room_id)
        .fetch_optional(pool.get_ref())
        .await
    {
        Ok(Some(room)) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Room updated successfully.",
            "room": room,
        })),
        Ok(None) => not_found(),
        Err(e) => {
            log::error!("Failed to update room {room_id}: {e}");
            server_error("Server error while updating room.")
        }
    }
}

pub async fn update_room_status(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    body: web::Json<UpdateRoomStatus>,
) -> impl Responder {
    let room_id = path.into_inner();

    match sqlx::query_as::<_, Room>(queries::UPDATE_ROOM_STATUS)
        .bind(body.status)
        .bind(room_id)
        .fetch_optional(pool.get_ref())
        .await
    {
        Ok(Some(room)) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Room status updated successfully.",
            "room": room,
        })),
        Ok(None) => not_found(),
        Err(e) => {
            log::error!("Failed to update status of room {room_id}: {e}");
            server_error("Server error while updating room status.")
        }
    }
}

pub async fn delete_room(pool: web::Data<SqlitePool>, path: web::Path<i64>) -> impl Responder {
    let room_id = path.into_inner();

    match sqlx::query_as::<_, Room>(queries::DELETE_ROOM)
        .bind(room_id)
        .fetch_optional(pool.get_ref())
        .await
    {
        Ok(Some(_)) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Room deleted successfully.",
        })),
        Ok(None) => not_found(),
        Err(e) => {
            log::error!("Failed to delete room {room_id}: {e}");
            server_error("Server error while deleting room.")
        }
    }
}
