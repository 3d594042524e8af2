//! File store integration tests: a show survives a process restart.

use std::fs;
use std::path::PathBuf;

use placar::{Game, GameConfig, GameRng, JsonFileStore, Phase, PlayerId, StateStore};

fn temp_file(name: &str) -> PathBuf {
    let unique = format!("{}-{}-{}", name, std::process::id(), rand::random::<u32>());
    std::env::temp_dir().join(unique).join("show.json")
}

#[test]
fn test_show_resumes_from_file() {
    let path = temp_file("placar-resume");

    let expected = {
        let mut game = Game::with_store(
            GameConfig::default(),
            JsonFileStore::new(path.clone()),
            GameRng::new(21),
        );
        game.start_game(&["Ana", "Bia", "Caio"]).unwrap();
        game.draw_scene(2).unwrap();
        game.apply_score(4).unwrap();
        game.draw_scene(2).unwrap();
        game.state().clone()
    };

    let resumed = Game::resume(
        GameConfig::default(),
        JsonFileStore::new(path.clone()),
        GameRng::new(5),
    );
    assert_eq!(resumed.phase(), Phase::Playing);
    assert_eq!(resumed.state(), &expected);
    assert!(resumed.state().has_scene());

    let _ = fs::remove_file(&path);
}

#[test]
fn test_reset_removes_file() {
    let path = temp_file("placar-reset");
    let mut game = Game::with_store(
        GameConfig::default(),
        JsonFileStore::new(path.clone()),
        GameRng::new(1),
    );
    game.start_game(&["Ana", "Bia"]).unwrap();
    assert!(path.exists());

    game.reset();

    assert!(!path.exists());
    assert!(game.store().load().unwrap().is_none());
}

#[test]
fn test_saved_file_is_readable_json() {
    let path = temp_file("placar-json");
    let mut game = Game::with_store(
        GameConfig::default(),
        JsonFileStore::new(path.clone()),
        GameRng::new(1),
    );
    game.start_game(&["Ana", "Bia"]).unwrap();
    game.draw_scene(1).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["currentRound"], 1);
    assert_eq!(value["players"][0]["status"], "active");
    let on_stage = value["currentScene"][0].as_u64().unwrap() as u32;
    assert!(game.state().current_scene.contains(&PlayerId::new(on_stage)));

    let _ = fs::remove_file(&path);
}
