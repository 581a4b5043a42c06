use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use robokit::avoidance::{example_scenarios, ObstacleAvoidanceController};
use robokit::catalog::{example_searches, ResourceCatalog, ResourceStore, RobotSpecCatalog};
use robokit::kinematics::{example_configurations, TwoLinkArm};
use robokit::knowledge::{example_queries, KnowledgeBase};
use robokit::outputs::text;
use robokit::telemetry::{EventRecorder, RunnerEvent};
use robokit::{DemoConfig, TaskRunner};

// Demo output on stdout, logs on stderr.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("installing tracing subscriber")?;

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            DemoConfig::load(&path).with_context(|| format!("loading config from {}", path.display()))?
        }
        None => DemoConfig::default(),
    };
    tracing::info!("robokit demos starting");

    run_task_queue(&config).await?;
    run_kinematics(&config)?;
    run_avoidance(&config)?;
    run_robot_comparison(&config)?;
    run_knowledge_base(&config);
    run_resource_discovery(&config);

    Ok(())
}

async fn run_task_queue(config: &DemoConfig) -> Result<()> {
    println!("{}\n", text::banner("Robot Task Queue"));

    let (runner, mut events) = TaskRunner::new();
    for task in &config.tasks {
        runner.add_task(task.clone());
    }
    runner.execute_next()?;

    let mut recorder = EventRecorder::new();
    while let Some(event) = events.recv().await {
        println!("{}", text::runner_event(&event));
        let done = event == RunnerEvent::Idle;
        recorder.record(event);
        if done {
            break;
        }
    }

    let metrics = recorder.snapshot();
    tracing::info!(added = metrics.added, completed = metrics.completed, "task queue drained");
    Ok(())
}

fn run_kinematics(config: &DemoConfig) -> Result<()> {
    println!("\n{}", text::banner("Two-Link Arm Forward Kinematics Demo"));

    let arm = TwoLinkArm::new(config.arm)?;
    for (i, angles) in example_configurations().iter().enumerate() {
        let pos = arm.solve(*angles);
        println!("\n{}", text::arm_configuration(i + 1, angles, &pos));
    }
    Ok(())
}

fn run_avoidance(config: &DemoConfig) -> Result<()> {
    println!("\n{}\n", text::banner("Obstacle Avoidance Simulation"));

    let mut controller = ObstacleAvoidanceController::new(config.avoidance)?;
    for (i, scenario) in example_scenarios().iter().enumerate() {
        let r = scenario.readings;
        controller.update_sensors(r.front, r.left, r.right);
        let cmd = controller.compute_velocity();
        let action = controller.describe_action(cmd);
        println!("{}\n", text::avoidance_scenario(i + 1, scenario, &cmd, action));
    }
    Ok(())
}

fn run_robot_comparison(config: &DemoConfig) -> Result<()> {
    println!("{}", text::banner("Humanoid Robot Comparison"));

    let catalog = RobotSpecCatalog::new(config.robots.clone());
    for spec in catalog.specs() {
        println!("\n{}", text::robot_spec(spec));
    }

    println!("\n\n{}", text::banner("Best in Class:"));
    println!("{}", text::best_in_class(&catalog)?);
    Ok(())
}

fn run_knowledge_base(config: &DemoConfig) {
    let kb = KnowledgeBase::new(config.topics.clone());
    let status = kb.status();
    println!("\n{}", text::banner(&status.name));

    for request in example_queries() {
        let response = kb.answer(&request);
        println!("\n{}", text::query_response(&request, &response));
    }
}

fn run_resource_discovery(config: &DemoConfig) {
    println!("\n=== Robotics Resource Discovery Tool ===");

    let mut library = ResourceCatalog::new();
    for record in &config.resources {
        library.add_resource(record.clone());
    }

    for (i, (title, criteria)) in example_searches().iter().enumerate() {
        println!("\nSearch {}: {}", i + 1, title);
        let results = library.search(criteria);
        println!("{}", text::resource_results(&results));
    }
}
