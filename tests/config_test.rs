//! Loading training configuration from disk.

use std::io::Write;
use tempfile::NamedTempFile;
use tictactoe_td::{Participant, TrainingConfig};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_from_file_reads_roster_and_settings() {
    let file = write_config(
        r#"
self_play_games = 500
evaluation_games = 50
exploration = 0.1
seed = 9

[[agents]]
name = "north"
alpha = 0.3

[[agents]]
name = "south"
alpha = 0.6

[[agents]]
name = "west"
alpha = 1.0
"#,
    );

    let config = TrainingConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.self_play_games(), 500);
    assert_eq!(*config.evaluation_games(), 50);
    assert_eq!(*config.exploration(), 0.1);
    assert_eq!(*config.seed(), Some(9));

    let agents = config.build_agents();
    let names: Vec<&str> = agents.iter().map(|a| a.name()).collect();
    assert_eq!(names, ["north", "south", "west"]);
    assert_eq!(agents[2].alpha(), 1.0);
}

#[test]
fn test_partial_file_falls_back_to_defaults() {
    let file = write_config("self_play_games = 42\n");
    let config = TrainingConfig::from_file(file.path()).expect("valid config");
    let defaults = TrainingConfig::default();
    assert_eq!(*config.self_play_games(), 42);
    assert_eq!(config.agents(), defaults.agents());
    assert_eq!(config.exploration(), defaults.exploration());
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = TrainingConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_toml_is_an_error() {
    let file = write_config("self_play_games = \"many\"\n");
    let err = TrainingConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_out_of_range_exploration_is_rejected() {
    let file = write_config("exploration = 1.5\n");
    let err = TrainingConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Exploration"));
}
