//! Text rendering of structured results. Pure functions, no I/O.

use crate::avoidance::{Action, Scenario, VelocityCommand};
use crate::catalog::{format_ratio, ResourceRecord, RobotSpec, RobotSpecCatalog};
use crate::error::Result;
use crate::kinematics::{EndEffectorPosition, JointAngles};
use crate::knowledge::{QueryRequest, QueryResponse};
use crate::telemetry::RunnerEvent;

pub fn banner(title: &str) -> String {
    format!("{}\n{}", title, "=".repeat(title.chars().count()))
}

pub fn runner_event(event: &RunnerEvent) -> String {
    match event {
        RunnerEvent::TaskAdded { name, .. } => format!("Task added: {}", name),
        RunnerEvent::TaskStarted { name, .. } => format!("Executing task: {}", name),
        RunnerEvent::TaskCompleted { name, .. } => format!("Task completed: {}", name),
        RunnerEvent::Idle => "No tasks remaining. Robot idle.".to_string(),
    }
}

pub fn arm_configuration(index: usize, angles: &JointAngles, pos: &EndEffectorPosition) -> String {
    let (deg1, deg2) = angles.degrees();
    [
        format!("Configuration {}:", index),
        format!("  Joint 1: {:.1}°", deg1),
        format!("  Joint 2: {:.1}°", deg2),
        format!("  End Effector: ({:.2}, {:.2})", pos.x, pos.y),
    ]
    .join("\n")
}

pub fn avoidance_scenario(index: usize, scenario: &Scenario, cmd: &VelocityCommand, action: Action) -> String {
    let r = &scenario.readings;
    [
        format!("Scenario {}: {}", index, scenario.name),
        format!("  Sensors: F={}m L={}m R={}m", r.front, r.left, r.right),
        format!("  Command: Linear={:.2}m/s Angular={:.2}rad/s", cmd.linear, cmd.angular),
        format!("  Action: {}", action.description()),
    ]
    .join("\n")
}

pub fn robot_spec(spec: &RobotSpec) -> String {
    [
        banner(&spec.name),
        format!("Height: {}m | Weight: {}kg", spec.height, spec.weight),
        format!("DOF: {} | Max Speed: {}m/s", spec.dof, spec.max_speed),
        format!("Battery Life: {}h | Payload: {}kg", spec.battery_life, spec.payload),
        format!("Power-to-Weight Ratio: {}", format_ratio(spec.power_to_weight_ratio())),
    ]
    .join("\n")
}

/// Fails on an empty catalog rather than printing placeholders.
pub fn best_in_class(catalog: &RobotSpecCatalog) -> Result<String> {
    let fastest = catalog.fastest()?;
    let battery = catalog.longest_battery()?;
    let dof = catalog.most_articulated()?;
    Ok([
        format!("Fastest: {} ({}m/s)", fastest.name, fastest.max_speed),
        format!("Longest Battery: {} ({}h)", battery.name, battery.battery_life),
        format!("Most Articulated: {} ({} DOF)", dof.name, dof.dof),
    ]
    .join("\n"))
}

pub fn resource_results(results: &[ResourceRecord]) -> String {
    if results.is_empty() {
        return "No resources found matching criteria.".to_string();
    }

    let mut lines = vec![format!("Found {} resource(s):", results.len())];
    for (i, r) in results.iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("{}. {}", i + 1, r.name));
        lines.push(format!(
            "   Category: {} | Difficulty: {} | Cost: {}",
            r.category, r.difficulty, r.cost
        ));
        lines.push(format!("   URL: {}", r.url));
    }
    lines.join("\n")
}

pub fn query_response(request: &QueryRequest, response: &QueryResponse) -> String {
    [
        format!("Q: {}", request.query),
        format!("A [{}]: {}", response.source.as_str(), response.answer),
    ]
    .join("\n")
}
