//! Parameterized SQL for the rooms table. Every mutating statement ends in
//! `RETURNING *` so handlers can tell "found and mutated" from "not found"
//! by row count alone.

pub const CREATE_ROOM: &str = "
    INSERT INTO rooms (room_number, room_floor, room_facility, status, room_type_id)
    VALUES (?, ?, ?, ?, ?)
    RETURNING *
";

pub const GET_ROOMS: &str = "
    SELECT *
    FROM rooms
    ORDER BY room_id ASC
";

pub const UPDATE_ROOM: &str = "
    UPDATE rooms
    SET room_number   = ?,
        room_floor    = ?,
        room_facility = ?,
        status        = ?,
        room_type_id  = ?
    WHERE room_id = ?
    RETURNING *
";

pub const UPDATE_ROOM_STATUS: &str = "
    UPDATE rooms
    SET status = ?
    WHERE room_id = ?
    RETURNING *
";

pub const DELETE_ROOM: &str = "
    DELETE FROM rooms
    WHERE room_id = ?
    RETURNING *
";
