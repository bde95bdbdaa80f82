use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use relic_hunt::engine::{Command, Output, OutputBlock};
use relic_hunt::world::{World, WorldError};
use relic_hunt::{GameState, load_default_world, load_world_from_file};

#[derive(Parser, Debug)]
#[command(version, about = "Collect every relic, then face the villain")]
struct Args {
    /// World file to play; the built-in carnival when omitted
    world: Option<PathBuf>,

    /// Skip the instructions banner
    #[arg(long)]
    no_intro: bool,
}

fn flush_output(out: Output) {
    let mut printed_anything = false;
    let mut started_events = false;

    for block in out.blocks {
        match block {
            OutputBlock::Title(t) => {
                println!("\n{}", t);
                printed_anything = true;
            }
            OutputBlock::Text(line) => {
                println!("{}", line);
                printed_anything = true;
            }
            OutputBlock::Event(ev) => {
                if !started_events {
                    if printed_anything {
                        println!(); // visual separation before first event
                    }
                    started_events = true;
                }
                println!("{}", ev);
                printed_anything = true;
            }
            OutputBlock::Divider => {
                println!("{}", "-".repeat(30));
                printed_anything = true;
            }
        }
    }
}

fn load(args: &Args) -> Result<World, WorldError> {
    match &args.world {
        Some(path) => load_world_from_file(path),
        None => load_default_world(),
    }
}

fn report_load_failure(args: &Args, err: &WorldError) {
    let source = args
        .world
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in world".to_string());

    eprintln!("Failed to load world '{source}': {err}");
    if let WorldError::Invalid(problems) = err {
        for problem in problems {
            eprintln!("  - {problem}");
        }
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    env_logger::init();

    let world = match load(&args) {
        Ok(w) => w,
        Err(e) => {
            report_load_failure(&args, &e);
            std::process::exit(1);
        }
    };

    let mut game = GameState::new(world);

    if !args.no_intro {
        flush_output(game.intro());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock();

    while !game.is_over() {
        flush_output(game.status());
        print!("Enter your move: ");
        io::stdout().flush()?;

        // Raw bytes: a line that is not UTF-8 is still a turn, just an invalid one.
        let mut input = Vec::new();
        let bytes_read = lines.read_until(b'\n', &mut input)?;

        let out = if bytes_read == 0 {
            // Input closed: leave the same way "exit" does.
            println!();
            game.apply(Command::Exit)
        } else {
            game.step(&String::from_utf8_lossy(&input)).0
        };

        flush_output(out);
    }

    Ok(())
}
