use std::collections::HashMap;

use thiserror::Error;

use super::model::World;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Checks the structural invariants of a freshly built world and reports
/// every violation found.
pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // Rooms must not be empty
    if world.rooms.is_empty() {
        errors.push(ValidationError::new("world has no rooms"));
    }

    if !world.contains_room(&world.start_room) {
        errors.push(ValidationError::new(format!(
            "start_room '{}' not found among rooms",
            world.start_room
        )));
    }

    if !world.contains_room(&world.terminal_room) {
        errors.push(ValidationError::new(format!(
            "terminal_room '{}' not found among rooms",
            world.terminal_room
        )));
    }

    if world.start_room == world.terminal_room {
        errors.push(ValidationError::new(format!(
            "start_room and terminal_room are both '{}'",
            world.start_room
        )));
    }

    // Graph closure
    for (room_name, room) in &world.rooms {
        for (direction, target) in room.exits() {
            if !world.contains_room(target) {
                errors.push(ValidationError::new(format!(
                    "room '{}' exit '{}' targets missing room '{}'",
                    room_name, direction, target
                )));
            }
        }
    }

    for special in [&world.start_room, &world.terminal_room] {
        if let Some(item) = world.item_in(special) {
            errors.push(ValidationError::new(format!(
                "room '{}' may not hold an item (found '{}')",
                special, item
            )));
        }
    }

    // Item names are matched case-insensitively, so they must be unique that way too.
    let mut seen: HashMap<String, &str> = HashMap::new();
    for (room_name, room) in &world.rooms {
        let Some(item) = room.item() else { continue };

        if item.trim().is_empty() {
            errors.push(ValidationError::new(format!(
                "room '{}' has an empty item name",
                room_name
            )));
            continue;
        }

        if let Some(first) = seen.insert(item.to_lowercase(), room_name.as_str()) {
            errors.push(ValidationError::new(format!(
                "item '{}' appears in both '{}' and '{}'",
                item, first, room_name
            )));
        }
    }

    if world.required_items == 0 {
        errors.push(ValidationError::new("required_items must be at least 1"));
    } else if world.required_items > world.total_items() {
        errors.push(ValidationError::new(format!(
            "required_items is {} but only {} item(s) are placed in rooms",
            world.required_items,
            world.total_items()
        )));
    }

    errors
}
