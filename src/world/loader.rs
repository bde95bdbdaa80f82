use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;

use super::error::WorldError;
use super::model::{Direction, Room, World};
use super::validator::validate_world;

/// The carnival world shipped with the game.
const DEFAULT_WORLD: &str = include_str!("../../public/carnival.toml");

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
}

#[derive(Deserialize)]
struct WorldHeader {
    id: String,
    name: String,
    start_room: String,
    terminal_room: String,

    #[serde(default)]
    desc: String,

    #[serde(default = "default_villain")]
    villain: String,

    // Defaults to every item placed in the world.
    #[serde(default)]
    required_items: Option<usize>,

    #[serde(default)]
    win_text: Option<String>,

    #[serde(default)]
    lose_text: Option<String>,

    #[serde(default)]
    ready_text: Option<String>,
}

#[derive(Deserialize)]
struct RoomConfig {
    name: String,

    #[serde(default)]
    item: Option<String>,

    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: String,
    target: String,
}

fn default_villain() -> String {
    "the villain".to_string()
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Load a world from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> Result<World, WorldError> {
    let contents = fs::read_to_string(path).map_err(|source| WorldError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_world_from_str(&contents)
}

/// Load the built-in carnival world.
pub fn load_default_world() -> Result<World, WorldError> {
    load_world_from_str(DEFAULT_WORLD)
}

/// Parse, build and validate a world from TOML text.
pub fn load_world_from_str(contents: &str) -> Result<World, WorldError> {
    let world_file: WorldFile = toml::from_str(contents)?;
    let world = build_world(world_file)?;

    let errors = validate_world(&world);
    if !errors.is_empty() {
        return Err(WorldError::Invalid(errors));
    }

    debug!(
        "loaded world '{}' with {} rooms and {} items",
        world.id,
        world.rooms.len(),
        world.total_items()
    );
    Ok(world)
}

fn build_world(world_file: WorldFile) -> Result<World, WorldError> {
    let mut rooms_map: BTreeMap<String, Room> = BTreeMap::new();

    for room_cfg in world_file.room {
        if rooms_map.contains_key(&room_cfg.name) {
            return Err(WorldError::DuplicateRoom(room_cfg.name));
        }

        let mut exits: BTreeMap<Direction, String> = BTreeMap::new();
        for e in room_cfg.exit {
            let direction =
                Direction::parse(e.direction.trim()).ok_or_else(|| WorldError::UnknownDirection {
                    room: room_cfg.name.clone(),
                    direction: e.direction.clone(),
                })?;

            if exits.insert(direction, e.target).is_some() {
                return Err(WorldError::DuplicateExit {
                    room: room_cfg.name.clone(),
                    direction: direction.to_string(),
                });
            }
        }

        rooms_map.insert(
            room_cfg.name.clone(),
            Room {
                name: room_cfg.name,
                exits,
                // Typed names are trimmed before matching, so stored ones must be too.
                item: room_cfg.item.map(|item| item.trim().to_string()),
            },
        );
    }

    let header = world_file.world;
    let placed = rooms_map.values().filter(|r| r.item.is_some()).count();
    let villain = header.villain.trim().to_string();

    let win_text = match &header.win_text {
        Some(text) => text_lines(text),
        None => vec![
            format!("You confront {villain} armed with all relics!"),
            "Congratulations! You have won!".to_string(),
        ],
    };
    let lose_text = match &header.lose_text {
        Some(text) => text_lines(text),
        None => vec![
            "GAME OVER!".to_string(),
            format!("{villain} was waiting for you."),
        ],
    };
    let ready_text = match &header.ready_text {
        Some(text) => text_lines(text),
        None => vec![
            "You feel the relics resonate... A way out has opened!".to_string(),
            format!("Now you may face {villain} and win."),
        ],
    };

    Ok(World {
        id: header.id,
        name: header.name,
        desc: text_lines(&header.desc),
        villain,
        start_room: header.start_room,
        terminal_room: header.terminal_room,
        required_items: header.required_items.unwrap_or(placed),
        rooms: rooms_map,
        win_text,
        lose_text,
        ready_text,
    })
}

/// Split a TOML text block into display lines, dropping indentation and
/// blank lines.
fn text_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
