use crate::engine::items::Inventory;
use crate::engine::output::Output;
use crate::world;

/// Start-of-game banner: goal plus the command summary.
pub fn render_instructions(out: &mut Output, world: &world::World) {
    out.title(format!("{} - Text Adventure", world.name()));
    for line in world.desc() {
        out.say(line.clone());
    }
    out.divider();
    out.say("Move commands: go North | go South | go East | go West");
    out.say("Shortcuts: N, S, E, W  (or just 'north', etc.)");
    out.say("Get item:   get <item name>");
    out.say("Quit:       exit");
    out.divider();
}

/// What the player sees before every prompt.
pub fn render_status(
    out: &mut Output,
    world: &world::World,
    current_room_id: &str,
    inventory: &Inventory,
) {
    out.title(format!("You are in the {}", current_room_id));
    out.say(format!("Inventory: [{}]", inventory.items().join(", ")));

    if let Some(item) = world.item_in(current_room_id) {
        if !inventory.contains(item) {
            out.say(format!("You see a {}", item));
        }
    }

    out.divider();
}
