#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn relic_hunt() -> Command {
    Command::cargo_bin("relic_hunt").unwrap()
}

const WIN_SCRIPT: &str = "\
go north
get Fractured Mirror Shard
s
w
get enchanted locket
s
get silver pocket watch
s
get jester's bell
n
n
e
e
get crystal apple
s
get magic deck
s
";

#[test]
fn shows_instructions_and_status() {
    relic_hunt()
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Whispers of the Carnival - Text Adventure")
                .and(predicate::str::contains("You are in the Entrance Gate"))
                .and(predicate::str::contains("Inventory: []"))
                .and(predicate::str::contains("Thanks for playing. Goodbye!")),
        );
}

#[test]
fn no_intro_skips_the_banner() {
    relic_hunt()
        .arg("--no-intro")
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Text Adventure")
                .not()
                .and(predicate::str::contains("You are in the Entrance Gate")),
        );
}

#[test]
fn end_of_input_says_goodbye() {
    relic_hunt()
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You are in the Mirror Maze")
                .and(predicate::str::contains("Thanks for playing. Goodbye!")),
        );
}

#[test]
fn full_game_is_won() {
    relic_hunt()
        .write_stdin(WIN_SCRIPT)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You feel the relics resonate")
                .and(predicate::str::contains("defeated the Ringmaster"))
                .and(predicate::str::contains("Goodbye").not()),
        );
}

#[test]
fn rushing_in_is_lost() {
    relic_hunt()
        .write_stdin("e\ns\ns\nexit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("NOM NOM...GAME OVER!")
                .and(predicate::str::contains("Thanks for playing. Goodbye!").not()),
        );
}

#[test]
fn rejections_keep_the_game_going() {
    relic_hunt()
        .write_stdin("s\nget\nget apple\ndance\nexit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You can't go that way.")
                .and(predicate::str::contains("There's nothing to get here."))
                .and(predicate::str::contains("Invalid command.")),
        );
}

#[test]
fn non_utf8_line_is_an_invalid_command() {
    let mut script = b"n\n".to_vec();
    script.extend_from_slice(&[0xff, 0xfe, b'\n']);
    script.extend_from_slice(b"s\nexit\n");

    relic_hunt()
        .arg("--no-intro")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Invalid command.")
                .and(predicate::str::contains("You are in the Mirror Maze"))
                .and(predicate::str::contains("Thanks for playing. Goodbye!")),
        );
}

#[test]
fn custom_world_file_is_played() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tiny.toml");
    fs::write(
        &path,
        r#"[world]
id = "tiny"
name = "Tiny Keep"
start_room = "Gate"
terminal_room = "Throne"
villain = "the Tyrant"

[[room]]
name = "Gate"
[[room.exit]]
direction = "n"
target = "Armory"

[[room]]
name = "Armory"
item = "Sword"
[[room.exit]]
direction = "n"
target = "Throne"

[[room]]
name = "Throne"
"#,
    )
    .unwrap();

    relic_hunt()
        .arg(&path)
        .write_stdin("n\nget sword\nn\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Tiny Keep - Text Adventure")
                .and(predicate::str::contains("Sword added to your inventory."))
                .and(predicate::str::contains("You confront the Tyrant armed with all relics!")),
        );
}

#[test]
fn invalid_world_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(
        &path,
        r#"[world]
id = "broken"
name = "Broken"
start_room = "Gate"
terminal_room = "Throne"

[[room]]
name = "Gate"
item = "Key"
[[room.exit]]
direction = "n"
target = "Nowhere"

[[room]]
name = "Throne"
"#,
    )
    .unwrap();

    relic_hunt()
        .arg(&path)
        .write_stdin("exit\n")
        .assert()
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("targets missing room 'Nowhere'")
                .and(predicate::str::contains("may not hold an item")),
        );
}

#[test]
fn missing_world_file_fails() {
    relic_hunt()
        .arg("/no/such/world.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("/no/such/world.toml"));
}
