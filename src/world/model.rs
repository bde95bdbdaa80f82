use std::collections::BTreeMap;
use std::fmt;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// One of the four compass directions an exit can point in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Case-insensitive; accepts full names and the n/s/e/w shortcuts.
    /// The whole token must match, so "nort" is not a direction.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            _ => None,
        }
    }

    /// Canonical, title-cased name.
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub(crate) name: String,
    pub(crate) exits: BTreeMap<Direction, String>,
    pub(crate) item: Option<String>,
}

impl Room {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exit(&self, direction: Direction) -> Option<&str> {
        self.exits.get(&direction).map(String::as_str)
    }

    pub fn exits(&self) -> impl Iterator<Item = (Direction, &str)> {
        self.exits.iter().map(|(d, target)| (*d, target.as_str()))
    }

    /// The uncollected item in this room, if any.
    pub fn item(&self) -> Option<&str> {
        self.item.as_deref()
    }
}

/// Runtime world used by the game loop.
///
/// The room graph is fixed once loaded. The only mutation allowed afterwards
/// is clearing a room's item slot through [`World::remove_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) desc: Vec<String>,
    pub(crate) villain: String,
    pub(crate) start_room: String,
    pub(crate) terminal_room: String,
    pub(crate) required_items: usize,
    pub(crate) rooms: BTreeMap<String, Room>,
    pub(crate) win_text: Vec<String>,
    pub(crate) lose_text: Vec<String>,
    pub(crate) ready_text: Vec<String>,
}

impl World {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Intro lines shown under the title.
    pub fn desc(&self) -> &[String] {
        &self.desc
    }

    pub fn villain(&self) -> &str {
        &self.villain
    }

    pub fn start_room(&self) -> &str {
        &self.start_room
    }

    pub fn terminal_room(&self) -> &str {
        &self.terminal_room
    }

    pub fn is_terminal(&self, room: &str) -> bool {
        self.terminal_room == room
    }

    /// How many relics the player must carry when entering the terminal room.
    pub fn required_items(&self) -> usize {
        self.required_items
    }

    pub fn win_text(&self) -> &[String] {
        &self.win_text
    }

    pub fn lose_text(&self) -> &[String] {
        &self.lose_text
    }

    pub fn ready_text(&self) -> &[String] {
        &self.ready_text
    }

    pub fn contains_room(&self, name: &str) -> bool {
        self.rooms.contains_key(name)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Number of items still lying in rooms.
    pub fn total_items(&self) -> usize {
        self.rooms.values().filter(|r| r.item.is_some()).count()
    }

    pub fn neighbor(&self, room: &str, direction: Direction) -> Option<&str> {
        self.rooms.get(room)?.exit(direction)
    }

    pub fn item_in(&self, room: &str) -> Option<&str> {
        self.rooms.get(room)?.item()
    }

    /// Clears the item slot of `room` and hands back what was there.
    /// Clearing an empty slot (or an unknown room) does nothing.
    pub fn remove_item(&mut self, room: &str) -> Option<String> {
        self.rooms.get_mut(room)?.item.take()
    }
}
