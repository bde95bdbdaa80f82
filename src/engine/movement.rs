use log::info;

use crate::engine::items::Inventory;
use crate::engine::output::Output;
use crate::engine::phase::Phase;
use crate::world;

/// Move the player one room. Stepping into the terminal room settles the
/// game on the spot: enough relics wins, anything less loses.
pub fn handle_move(
    out: &mut Output,
    world: &world::World,
    current_room_id: &mut String,
    inventory: &Inventory,
    direction: world::Direction,
) -> Phase {
    let Some(target) = world.neighbor(current_room_id, direction) else {
        out.say("You can't go that way.");
        return Phase::Playing;
    };

    info!("{} -> {} ({})", current_room_id, target, direction);
    *current_room_id = target.to_string();

    if !world.is_terminal(target) {
        return Phase::Playing;
    }

    let (phase, text) = if inventory.len() >= world.required_items() {
        (Phase::Won, world.win_text())
    } else {
        (Phase::Lost, world.lose_text())
    };

    info!(
        "entered terminal room with {}/{} relics: {}",
        inventory.len(),
        world.required_items(),
        phase
    );
    for line in text {
        out.event(line.clone());
    }
    phase
}
