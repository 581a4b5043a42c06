use robokit::avoidance::{
    example_scenarios, Action, AvoidanceConfig, AvoidancePolicy, ObstacleAvoidanceController, VelocityCommand,
};
use robokit::RoboError;

fn policy() -> AvoidancePolicy {
    AvoidancePolicy::new(AvoidanceConfig::new(0.5, 1.0).unwrap()).unwrap()
}

#[test]
fn test_clear_path_full_speed() {
    let cmd = policy().compute_velocity(5.0, 3.0, 3.0);
    assert_eq!(cmd, VelocityCommand { linear: 1.0, angular: 0.0 });
}

#[test]
fn test_obstacle_turns_toward_open_left() {
    let cmd = policy().compute_velocity(0.3, 2.0, 0.8);
    assert_eq!(cmd, VelocityCommand { linear: 0.3, angular: 0.5 });
}

#[test]
fn test_obstacle_turns_toward_open_right() {
    let cmd = policy().compute_velocity(0.2, 0.5, 2.5);
    assert_eq!(cmd, VelocityCommand { linear: 0.3, angular: -0.5 });
}

#[test]
fn test_tie_turns_right() {
    let cmd = policy().compute_velocity(0.1, 0.4, 0.4);
    assert_eq!(cmd, VelocityCommand { linear: 0.3, angular: -0.5 });
}

#[test]
fn test_front_at_safe_distance_is_not_clear() {
    // Strictly greater than safe distance is required.
    let cmd = policy().compute_velocity(0.5, 1.0, 0.2);
    assert_eq!(cmd.angular, 0.5);
}

#[test]
fn test_infinite_readings_mean_no_obstacle() {
    let controller = ObstacleAvoidanceController::new(AvoidanceConfig::default()).unwrap();
    assert_eq!(controller.sensors().front, f64::INFINITY);
    assert_eq!(controller.compute_velocity(), VelocityCommand { linear: 1.0, angular: 0.0 });

    let cmd = policy().compute_velocity(0.1, f64::INFINITY, 3.0);
    assert_eq!(cmd.angular, 0.5);
}

#[test]
fn test_update_sensors_overwrites_snapshot() {
    let mut controller = ObstacleAvoidanceController::new(AvoidanceConfig::default()).unwrap();
    controller.update_sensors(0.3, 2.0, 0.8);
    assert_eq!(controller.compute_velocity().angular, 0.5);

    controller.update_sensors(0.3, 0.8, 2.0);
    assert_eq!(controller.sensors().left, 0.8);
    assert_eq!(controller.compute_velocity().angular, -0.5);
}

#[test]
fn test_describe_action() {
    let p = policy();
    assert_eq!(p.describe_action(VelocityCommand { linear: 1.0, angular: 0.0 }), Action::FullSpeedForward);
    assert_eq!(p.describe_action(VelocityCommand { linear: 0.3, angular: 0.5 }), Action::TurningLeft);
    assert_eq!(p.describe_action(VelocityCommand { linear: 0.3, angular: -0.5 }), Action::TurningRight);
    // Synthetic: slow and straight is not "full speed".
    assert_eq!(p.describe_action(VelocityCommand { linear: 0.3, angular: 0.0 }), Action::Stopped);
    assert_eq!(p.describe_action(VelocityCommand { linear: 0.0, angular: 0.0 }), Action::Stopped);

    assert_eq!(Action::FullSpeedForward.label(), "full-speed forward");
    assert_eq!(Action::TurningRight.to_string(), "turning right");
    assert_eq!(Action::TurningLeft.description(), "Turning left to avoid obstacle");
}

#[test]
fn test_example_scenarios() {
    let p = policy();
    let actions: Vec<Action> = example_scenarios()
        .iter()
        .map(|s| p.describe_action(p.command_for(s.readings)))
        .collect();
    assert_eq!(
        actions,
        vec![Action::FullSpeedForward, Action::TurningLeft, Action::TurningRight, Action::TurningRight]
    );
}

#[test]
fn test_rejects_non_positive_config() {
    let err = AvoidanceConfig::new(0.5, 0.0).unwrap_err();
    assert!(matches!(err, RoboError::NonPositiveConfig { field: "max_speed", .. }));

    let err = AvoidanceConfig::new(-1.0, 1.0).unwrap_err();
    assert!(matches!(err, RoboError::NonPositiveConfig { field: "safe_distance", .. }));

    let bad = AvoidanceConfig { safe_distance: 0.5, max_speed: f64::INFINITY };
    assert!(ObstacleAvoidanceController::new(bad).is_err());
}
