//! Path Planning Around Obstacles
//!
//! This example plans a 10-waypoint path through the default obstacle field
//! (three obstacles with a safety radius of 1.0) and prints the result as
//! plot-ready JSON.
//!
//! Set `RUST_LOG=debug` to see per-generation progress.

use evo_path::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging to see generation reports
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== 3D Path Planning ===\n");

    // Create a seeded RNG for reproducibility
    let mut rng = StdRng::seed_from_u64(42);

    let config = PathPlannerConfig::default();
    let field = config.obstacle_field();

    let result = PathPlanner::new(config)?.run(&mut rng)?;

    println!("Planning complete!");
    println!("  Best score:   {}", result.best_score);
    println!("  Generations:  {}", result.generations);
    println!("  Evaluations:  {}", result.evaluations);
    println!("\nBest path:");
    for (i, point) in result.best_path.points().iter().enumerate() {
        println!("  p[{}] = {}", i, point);
    }

    if let Some(clearance) = field.path_clearance(&result.best_path) {
        println!("\nMinimum clearance: {:.4}", clearance);
    }

    println!("\n{}", result.stats.summary());

    println!("\n{}", TrajectoryExport::new(&result, &field).to_json()?);

    Ok(())
}
