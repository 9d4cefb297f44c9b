use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;
use wrapsnake::game::{Cell, DirectionArbiter, GameConfig, GameEngine, Heading, TickOutcome};
use wrapsnake::persist::SnapshotStore;

fn engine_at(dir: &TempDir, width: usize, height: usize) -> (GameEngine, Arc<DirectionArbiter>, PathBuf) {
    let mut config = GameConfig::new(width, height);
    let save_path = dir.path().join("save.txt");
    config.save_path = save_path.clone();
    let arbiter = Arc::new(DirectionArbiter::new(Heading::Right));
    let store = SnapshotStore::new(save_path.clone());
    let engine = GameEngine::restore(config, Arc::clone(&arbiter), store).unwrap();
    (engine, arbiter, save_path)
}

#[test]
fn walk_to_the_food_and_grow() {
    let dir = TempDir::new().unwrap();
    let (mut engine, arbiter, _) = engine_at(&dir, 10, 10);

    // A fresh session starts at (0, 0) heading right with food at (5, 5)
    assert_eq!(engine.state().snake.head(), Cell::new(0, 0));
    assert_eq!(engine.state().food, Cell::new(5, 5));

    for _ in 0..5 {
        assert_eq!(engine.tick().unwrap(), TickOutcome::Advanced { ate: false });
    }
    assert_eq!(engine.state().snake.head(), Cell::new(0, 5));

    arbiter.propose(Heading::Down);
    for _ in 0..4 {
        assert_eq!(engine.tick().unwrap(), TickOutcome::Advanced { ate: false });
    }
    assert_eq!(engine.state().snake.head(), Cell::new(4, 5));

    assert_eq!(engine.tick().unwrap(), TickOutcome::Advanced { ate: true });
    assert_eq!(engine.state().snake.head(), Cell::new(5, 5));
    assert_eq!(engine.state().snake.len(), 2);
    assert_ne!(engine.state().food, Cell::new(5, 5));
}

#[test]
fn quitting_saves_and_a_new_session_resumes() {
    let dir = TempDir::new().unwrap();
    let (mut engine, _, save_path) = engine_at(&dir, 10, 10);

    for _ in 0..3 {
        engine.tick().unwrap();
    }
    engine.begin_exit().unwrap();
    assert!(save_path.exists());

    let saved_state = engine.state().clone();
    let (resumed, arbiter, _) = engine_at(&dir, 10, 10);

    assert_eq!(*resumed.state(), saved_state);
    assert_eq!(resumed.state().snake.head(), Cell::new(0, 3));
    assert_eq!(arbiter.current(), Heading::Right);
}

#[test]
fn crashing_wipes_the_save_and_restarts() {
    let dir = TempDir::new().unwrap();
    let save_path = dir.path().join("save.txt");
    // Head at (2, 2) heading left, about to bite its own neck
    fs::write(&save_path, "Direction: Left\nSnake:\n2 2\n2 1\n2 0\nApple: 5 5\n").unwrap();

    let mut config = GameConfig::new(10, 10);
    config.save_path = save_path.clone();
    let arbiter = Arc::new(DirectionArbiter::new(Heading::Right));
    let mut engine = GameEngine::restore(
        config,
        Arc::clone(&arbiter),
        SnapshotStore::new(save_path.clone()),
    )
    .unwrap();
    assert_eq!(engine.state().snake.len(), 3);

    assert_eq!(engine.tick().unwrap(), TickOutcome::Collision { length: 3 });

    assert!(!save_path.exists());
    assert_eq!(engine.state().snake.cells(), &[Cell::new(0, 0)]);
    assert_eq!(engine.state().heading, Heading::Right);
    assert_eq!(arbiter.current(), Heading::Right);
}

#[test]
fn reversal_and_chained_turns_cannot_flip_the_snake() {
    let dir = TempDir::new().unwrap();
    let (mut engine, arbiter, _) = engine_at(&dir, 10, 10);

    // A direct reversal never reaches the engine
    arbiter.propose(Heading::Left);
    engine.tick().unwrap();
    assert_eq!(engine.state().snake.head(), Cell::new(0, 1));
    assert_eq!(engine.state().heading, Heading::Right);

    // Two quick turns within one tick: up then left is a reversal in
    // disguise, the tick must not apply it
    arbiter.propose(Heading::Up);
    arbiter.propose(Heading::Left);
    engine.tick().unwrap();
    assert_eq!(engine.state().snake.head(), Cell::new(0, 2));
    assert_eq!(engine.state().heading, Heading::Right);

    // A later downward turn takes effect normally
    arbiter.propose(Heading::Down);
    engine.tick().unwrap();
    assert_eq!(engine.state().snake.head(), Cell::new(1, 2));
    assert_eq!(engine.state().heading, Heading::Down);
}

#[test]
fn filling_the_grid_ends_the_session() {
    let dir = TempDir::new().unwrap();
    let save_path = dir.path().join("save.txt");
    // Three cells on a 2x2 grid with the last free cell holding the food
    fs::write(
        &save_path,
        "Direction: Down\nSnake:\n0 0\n0 1\n1 1\nApple: 1 0\n",
    )
    .unwrap();

    let mut config = GameConfig::new(2, 2);
    config.save_path = save_path.clone();
    let arbiter = Arc::new(DirectionArbiter::new(Heading::Right));
    let mut engine = GameEngine::restore(
        config,
        arbiter,
        SnapshotStore::new(save_path.clone()),
    )
    .unwrap();

    assert_eq!(engine.tick().unwrap(), TickOutcome::Won);
    assert_eq!(engine.state().snake.len(), 4);
    assert!(!save_path.exists());
    assert_eq!(engine.tick().unwrap(), TickOutcome::Halted);
}
