//! Room registration commands

use praxis_domain::utils::form::non_empty;
use praxis_domain::{Result, Room, RoomType, ScheduleError};
use tracing::info;

use crate::context::AppContext;

/// Register a new room from the form inputs
pub fn add_room(ctx: &mut AppContext, name: Option<&str>, room_type: Option<&str>) -> Result<Room> {
    let (Some(name), Some(type_label)) = (non_empty(name), non_empty(room_type)) else {
        return Err(ScheduleError::MissingFields);
    };

    let Some(room_type) = RoomType::from_label(type_label) else {
        return Err(ScheduleError::MissingFields);
    };

    let room = Room::new(name, room_type);
    ctx.store.add_room(room.clone());

    info!(room = %room.name, room_type = %room.room_type, "room registered");
    Ok(room)
}

/// Rooms currently registered, in registration order
pub fn rooms(ctx: &AppContext) -> &[Room] {
    ctx.store.rooms()
}
