pub mod engine;
pub mod world;

use log::{debug, info, warn};

use engine::{
    Command, Inventory, Output, Phase, handle_get, handle_move, parse_command,
    render_instructions, render_status,
};
use world::World;

pub use world::{WorldError, load_default_world, load_world_from_file, load_world_from_str};

const FAREWELL: &str = "Thanks for playing. Goodbye!";
const INVALID_HINT: &str = "Invalid command. Try 'go North', 'get <item>', or 'exit'.";

/// One running game: the world plus the player's position, relics and phase.
pub struct GameState {
    world: World,
    current_room_id: String,
    inventory: Inventory,
    phase: Phase,
}

#[cfg(feature = "wasm")]
mod wasm_bindings {
    use super::*;
    use serde::Serialize;
    use serde_wasm_bindgen::to_value;
    use wasm_bindgen::prelude::*;

    #[derive(Serialize)]
    struct WasmStepResult {
        blocks: Vec<engine::OutputBlock>,
        phase: Phase,
        done: bool,
    }

    #[wasm_bindgen]
    pub struct WasmGame {
        state: GameState,
    }

    #[wasm_bindgen]
    impl WasmGame {
        /// Create a new game from a TOML world string. Call `init()` to get the intro.
        #[wasm_bindgen(constructor)]
        pub fn new(world_toml: &str) -> Result<WasmGame, JsValue> {
            let world =
                load_world_from_str(world_toml).map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(WasmGame {
                state: GameState::new(world),
            })
        }

        /// Instructions banner followed by the first status.
        #[wasm_bindgen]
        pub fn init(&self) -> JsValue {
            let mut out = self.state.intro();
            out.append(self.state.status());
            self.result(out)
        }

        /// Apply one line of input. While the game is running the result also
        /// carries the status for the next prompt.
        #[wasm_bindgen]
        pub fn step(&mut self, input: &str) -> JsValue {
            let (mut out, done) = self.state.step(input);
            if !done {
                out.append(self.state.status());
            }
            self.result(out)
        }
    }

    impl WasmGame {
        fn result(&self, out: Output) -> JsValue {
            to_value(&WasmStepResult {
                blocks: out.blocks,
                phase: self.state.phase(),
                done: self.state.is_over(),
            })
            .unwrap_or(JsValue::NULL)
        }
    }
}

impl GameState {
    pub fn new(world: World) -> Self {
        let current_room_id = world.start_room().to_string();
        GameState {
            world,
            current_room_id,
            inventory: Inventory::new(),
            phase: Phase::Playing,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn current_room(&self) -> &str {
        &self.current_room_id
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Instructions shown once, before the first turn.
    pub fn intro(&self) -> Output {
        let mut out = Output::new();
        render_instructions(&mut out, &self.world);
        out
    }

    /// Room, inventory and visible item; shown before every prompt.
    pub fn status(&self) -> Output {
        let mut out = Output::new();
        render_status(&mut out, &self.world, &self.current_room_id, &self.inventory);
        out
    }

    /// Process a single player input; returns (output, game over?)
    pub fn step(&mut self, input: &str) -> (Output, bool) {
        let command = parse_command(input);
        debug!("input {:?} parsed as {}", input, command);
        let out = self.apply(command);
        (out, self.is_over())
    }

    /// Apply an already parsed command. Once the game is over, nothing
    /// changes and nothing is said.
    pub fn apply(&mut self, command: Command) -> Output {
        let mut out = Output::new();

        if self.is_over() {
            warn!("ignoring {} after the game ended ({})", command, self.phase);
            return out;
        }

        match command {
            Command::Exit => {
                out.event(FAREWELL);
                self.phase = Phase::Quit;
            }
            Command::Move(direction) => {
                self.phase = handle_move(
                    &mut out,
                    &self.world,
                    &mut self.current_room_id,
                    &self.inventory,
                    direction,
                );
            }
            Command::Get(item) => {
                handle_get(
                    &mut out,
                    &mut self.world,
                    &self.current_room_id,
                    &mut self.inventory,
                    &item,
                );
            }
            Command::Invalid => out.say(INVALID_HINT),
        }

        if self.is_over() {
            info!("game over in world '{}': {}", self.world.id(), self.phase);
        }
        out
    }
}
