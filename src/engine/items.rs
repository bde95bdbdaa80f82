use log::info;

use crate::engine::output::Output;
use crate::world;

/// Relics the player carries, in pickup order. Never holds the same name twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Returns false (and changes nothing) if the item is already carried.
    pub fn add(&mut self, item: impl Into<String>) -> bool {
        let item = item.into();
        if self.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }
}

/// `get <item>` in the current room. Returns true when something was picked up.
///
/// The typed name is compared case-insensitively; the inventory stores the
/// world's spelling.
pub fn handle_get(
    out: &mut Output,
    world: &mut world::World,
    current_room_id: &str,
    inventory: &mut Inventory,
    item_name: &str,
) -> bool {
    let Some(room_item) = world.item_in(current_room_id).map(str::to_string) else {
        out.say("There's nothing to get here.");
        return false;
    };

    let query = item_name.trim();
    if query.is_empty() {
        out.say(format!(
            "Specify the item to get (e.g., get {}).",
            room_item
        ));
        return false;
    }

    if query.to_lowercase() != room_item.to_lowercase() {
        out.say("That item isn't here.");
        return false;
    }

    // Only reachable if a room slot was left filled after a pickup.
    if inventory.contains(&room_item) {
        out.say("You already picked that up.");
        return false;
    }

    inventory.add(room_item.clone());
    world.remove_item(current_room_id);
    info!(
        "picked up '{}' in '{}' ({}/{})",
        room_item,
        current_room_id,
        inventory.len(),
        world.required_items()
    );
    out.say(format!("{} added to your inventory.", room_item));

    if inventory.len() == world.required_items() {
        for line in world.ready_text() {
            out.event(line.clone());
        }
    }

    true
}
