use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Room status is a closed set; anything else is rejected at the boundary
/// with a 400 instead of being persisted verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum RoomStatus {
    Available,
    Booked,
    Reserved,
    Waitlist,
    Blocked,
}

#[derive(Debug, Serialize, Deserialize, Clone, FromRow)]
pub struct Room {
    pub room_id: i64,
    pub room_number: String,
    pub room_floor: String,
    pub room_facility: String,
    pub status: RoomStatus,
    pub room_type_id: i64,
}

/// Request body for POST /api/rooms and PUT /api/rooms/{id}; the full
/// replace takes the same field set as create.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRoom {
    #[validate(length(min = 1))]
    pub room_number: String,
    #[validate(length(min = 1))]
    pub room_floor: String,
    #[validate(length(min = 1))]
    pub room_facility: String,
    pub status: RoomStatus,
    #[validate(range(min = 1))]
    pub room_type_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRoomStatus {
    pub status: RoomStatus,
}
