mod command;
mod items;
mod movement;
mod output;
mod phase;
mod render;

pub use command::{Command, parse_command};
pub use items::{Inventory, handle_get};
pub use movement::handle_move;
pub use output::{Output, OutputBlock};
pub use phase::Phase;
pub use render::{render_instructions, render_status};
