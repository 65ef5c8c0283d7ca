//! Tests for hosting several matches side by side.

use std::thread;
use tictactoe::{GameConfig, MatchRegistry, MoveOutcome, Phase, RegistryError};

#[test]
fn test_create_and_list() {
    let registry = MatchRegistry::new();
    let config = GameConfig::default();

    registry.create("b".to_string(), &config).unwrap();
    registry.create("a".to_string(), &config).unwrap();

    assert_eq!(registry.ids().unwrap(), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_duplicate_rejected() {
    let registry = MatchRegistry::new();
    let config = GameConfig::default();
    registry.create("m1".to_string(), &config).unwrap();

    assert_eq!(
        registry.create("m1".to_string(), &config),
        Err(RegistryError::DuplicateMatch {
            id: "m1".to_string()
        })
    );
}

#[test]
fn test_unknown_match() {
    let registry = MatchRegistry::new();
    let result = registry.with_match("ghost", |game| game.phase());
    assert_eq!(
        result,
        Err(RegistryError::UnknownMatch {
            id: "ghost".to_string()
        })
    );
    assert!(registry.remove("ghost").is_err());
}

#[test]
fn test_matches_are_isolated() {
    let registry = MatchRegistry::new();
    let config = GameConfig::default();
    registry.create("one".to_string(), &config).unwrap();
    registry.create("two".to_string(), &config).unwrap();

    registry
        .with_match("one", |game| {
            game.start().unwrap();
            game.play_all(&[0, 3, 1, 4, 2]).unwrap()
        })
        .unwrap();

    let one = registry.with_match("one", |game| game.phase()).unwrap();
    let two = registry
        .with_match("two", |game| (game.phase(), game.board().open_cell_count()))
        .unwrap();
    assert!(matches!(one, Phase::Won(_)));
    assert_eq!(two, (Phase::NotStarted, 9));
}

#[test]
fn test_concurrent_matches() {
    let registry = MatchRegistry::new();
    let config = GameConfig::default();
    let ids: Vec<String> = (0..8).map(|i| format!("match-{}", i)).collect();
    for id in &ids {
        registry.create(id.clone(), &config).unwrap();
    }

    let handles: Vec<_> = ids
        .iter()
        .cloned()
        .map(|id| {
            let registry = registry.clone();
            thread::spawn(move || {
                registry
                    .with_match(&id, |game| game.start())
                    .unwrap()
                    .unwrap();
                let mut last = None;
                for index in [0, 3, 1, 4, 2] {
                    last = Some(
                        registry
                            .with_match(&id, |game| game.select_cell(index))
                            .unwrap()
                            .unwrap(),
                    );
                }
                last
            })
        })
        .collect();

    for handle in handles {
        let last = handle.join().expect("Thread panicked");
        assert!(matches!(last, Some(MoveOutcome::Won { .. })));
    }
}

#[test]
fn test_remove() {
    let registry = MatchRegistry::new();
    registry
        .create("gone".to_string(), &GameConfig::default())
        .unwrap();
    registry.remove("gone").unwrap();
    assert!(registry.ids().unwrap().is_empty());
}
