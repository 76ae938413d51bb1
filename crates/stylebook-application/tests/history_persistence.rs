use std::sync::Arc;

use serde_json::json;
use stylebook_application::{BrowsingHistoryService, RecommendationService, StyleUseCase};
use stylebook_core::config::HistorySettings;
use stylebook_core::style::Style;
use stylebook_infrastructure::{InMemoryStyleRepository, JsonFileKeyValueStore};
use tempfile::TempDir;

fn history_in(dir: &TempDir) -> BrowsingHistoryService {
    let store = JsonFileKeyValueStore::with_base_dir(dir.path().to_path_buf());
    BrowsingHistoryService::new(Arc::new(store), &HistorySettings::default())
}

fn style(id: &str, description: &str, color: &str) -> Style {
    let tokens = serde_json::from_value(json!({
        "color": { "primary": { "$type": "color", "$value": color } }
    }))
    .unwrap();
    Style::new(id, description, tokens).with_id(id)
}

#[test]
fn test_history_survives_restart() {
    let dir = TempDir::new().unwrap();

    let first = history_in(&dir);
    first.track_view("clay");
    first.track_view("chrome");

    let second = history_in(&dir);
    let ids: Vec<_> = second
        .get_history()
        .into_iter()
        .map(|item| item.style_id)
        .collect();
    assert_eq!(ids, vec!["chrome", "clay"]);
}

#[test]
fn test_history_keeps_twenty_most_recent_distinct() {
    let dir = TempDir::new().unwrap();
    let history = history_in(&dir);

    for i in 0..22 {
        history.track_view(&format!("style-{i}"));
    }
    history.track_view("style-5");

    let ids: Vec<_> = history
        .get_history()
        .into_iter()
        .map(|item| item.style_id)
        .collect();
    assert_eq!(ids.len(), 20);
    assert_eq!(ids[0], "style-5");
    assert_eq!(ids[1], "style-21");
    // re-viewing an existing entry evicts nothing
    assert!(ids.contains(&"style-2".to_string()));
    assert!(!ids.contains(&"style-1".to_string()));
}

#[test]
fn test_concurrent_views_from_separate_services_are_kept() {
    let dir = TempDir::new().unwrap();

    for round in 0..5 {
        let key = format!("round-{round}");
        std::thread::scope(|scope| {
            for i in 0..16 {
                let dir = &dir;
                let key = &key;
                scope.spawn(move || {
                    let store = JsonFileKeyValueStore::with_base_dir(dir.path().to_path_buf());
                    let settings = HistorySettings {
                        scope: Some(key.clone()),
                        ..HistorySettings::default()
                    };
                    BrowsingHistoryService::new(Arc::new(store), &settings)
                        .track_view(&format!("style-{i}"));
                });
            }
        });

        let settings = HistorySettings {
            scope: Some(key),
            ..HistorySettings::default()
        };
        let store = JsonFileKeyValueStore::with_base_dir(dir.path().to_path_buf());
        let history = BrowsingHistoryService::new(Arc::new(store), &settings).get_history();
        assert_eq!(history.len(), 16, "round {round} lost views");
    }
}

#[test]
fn test_concurrent_views_on_shared_service_are_kept() {
    let dir = TempDir::new().unwrap();
    let history = history_in(&dir);

    std::thread::scope(|scope| {
        for i in 0..16 {
            let history = &history;
            scope.spawn(move || history.track_view(&format!("style-{i}")));
        }
    });

    assert_eq!(history.get_history().len(), 16);
}

#[test]
fn test_viewing_drives_recommendations() {
    let dir = TempDir::new().unwrap();
    let repository = Arc::new(InMemoryStyleRepository::with_styles(vec![
        style("clay", "soft clay render", "#f5d0c5"),
        style("neon", "neon night glow", "#ff00ff"),
        style("claymation", "stop motion clay render", "#f5d0c5"),
        style("ink", "black ink wash", "#111111"),
    ]));
    let history = history_in(&dir);

    let usecase = StyleUseCase::new(repository.clone(), history.clone());
    let recommendations = RecommendationService::new(repository, history, 3);

    let cold: Vec<_> = recommendations
        .recommend(None)
        .unwrap()
        .into_iter()
        .map(|r| r.style.id)
        .collect();
    assert_eq!(cold, vec!["clay", "neon", "claymation"]);

    usecase.view_style("clay").unwrap();
    let warm = recommendations.recommend(None).unwrap();
    assert_eq!(warm[0].style.id, "claymation");
    assert!(warm.iter().all(|r| r.style.id != "clay"));
}
