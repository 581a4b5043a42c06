use robokit::catalog::Category;
use robokit::{DemoConfig, RoboError};
use std::path::Path;

#[test]
fn test_empty_json_yields_defaults() {
    let config = DemoConfig::from_json("{}").unwrap();
    let defaults = DemoConfig::default();
    assert_eq!(config.arm, defaults.arm);
    assert_eq!(config.avoidance, defaults.avoidance);
    assert_eq!(config.robots, defaults.robots);
    assert_eq!(config.resources, defaults.resources);
    assert_eq!(config.tasks.len(), 3);
    assert_eq!(config.topics.len(), 5);
}

#[test]
fn test_missing_file_yields_defaults() {
    let config = DemoConfig::load(Path::new("/nonexistent/robokit.json")).unwrap();
    assert_eq!(config.arm.link1_length, 1.0);
    assert_eq!(config.arm.link2_length, 0.8);
}

#[test]
fn test_load_reads_file() {
    let path = std::env::temp_dir().join(format!("robokit-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"avoidance": {"safe_distance": 1.0}}"#).unwrap();

    let config = DemoConfig::load(&path).unwrap();
    assert_eq!(config.avoidance.safe_distance, 1.0);
    assert_eq!(config.avoidance.max_speed, 1.0, "Missing fields fall back to defaults");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_partial_sections() {
    let json = r#"{
        "arm": {"link1_length": 2.0, "link2_length": 1.0},
        "tasks": [{"name": "Wave"}, {"name": "Bow", "duration_ms": 250}],
        "resources": [{"name": "Webots", "category": "simulator", "url": "https://cyberbotics.com",
                       "difficulty": "beginner", "cost": "free"}]
    }"#;
    let config = DemoConfig::from_json(json).unwrap();
    assert_eq!(config.arm.link1_length, 2.0);
    assert_eq!(config.tasks[0].duration_ms, 1000);
    assert_eq!(config.tasks[1].duration_ms, 250);
    assert_ne!(config.tasks[0].id, config.tasks[1].id);
    assert_eq!(config.resources.len(), 1);
    assert_eq!(config.resources[0].category, Category::Simulator);
    assert_eq!(config.robots.len(), 4);
}

#[test]
fn test_non_positive_speed_rejected() {
    let err = DemoConfig::from_json(r#"{"avoidance": {"safe_distance": 0.5, "max_speed": 0.0}}"#).unwrap_err();
    assert!(matches!(err, RoboError::NonPositiveConfig { field: "max_speed", .. }));

    let err = DemoConfig::from_json(r#"{"arm": {"link1_length": -1.0, "link2_length": 0.8}}"#).unwrap_err();
    assert!(matches!(err, RoboError::NonPositiveConfig { field: "link1_length", .. }));
}

#[test]
fn test_invalid_enum_rejected() {
    let json = r#"{"resources": [{"name": "Toy", "category": "toy", "url": "u",
                                  "difficulty": "beginner", "cost": "free"}]}"#;
    let err = DemoConfig::from_json(json).unwrap_err();
    assert!(matches!(err, RoboError::ConfigParse(_)));
}
