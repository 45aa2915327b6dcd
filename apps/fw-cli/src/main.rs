use clap::{Parser, Subcommand};
use std::path::PathBuf;

use fw_app::{get_school, list_schools, load_scenario, mock_history, AppResult, FloodMonitor};
use fw_route::{find_safe_route, RouteRequest};
use fw_sim::{ScenarioScript, DEFAULT_TICK_INTERVAL_S};

#[derive(Parser)]
#[command(name = "fw-cli")]
#[command(about = "FloodWatch CLI - School flood-monitoring dashboard core", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a scenario YAML file
    Validate {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
    },
    /// List registered schools
    Schools,
    /// Run the zone simulator and print snapshots and alerts
    Run {
        /// Number of ticks to simulate
        ticks: usize,
        /// Scenario YAML file (defaults to the built-in demo script)
        #[arg(long)]
        scenario: Option<PathBuf>,
        /// School ID (defaults to cmc-elem)
        #[arg(long, default_value = "cmc-elem")]
        school: String,
    },
    /// Resolve the safest exit for a set of flooded zones
    Route {
        /// Flooded zone labels (e.g. "Zone A" or just "B")
        #[arg(long = "zone", num_args = 0..)]
        zones: Vec<String>,
        /// Current location hint (display only)
        #[arg(long, default_value = "")]
        location: String,
        /// School ID supplying the map description
        #[arg(long, default_value = "cmc-elem")]
        school: String,
    },
    /// Print the sample flood history
    History,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Schools => cmd_schools(),
        Commands::Run {
            ticks,
            scenario,
            school,
        } => cmd_run(ticks, scenario.as_deref(), &school),
        Commands::Route {
            zones,
            location,
            school,
        } => cmd_route(zones, &location, &school),
        Commands::History => cmd_history(),
    }
}

fn cmd_validate(path: &std::path::Path) -> AppResult<()> {
    let script = load_scenario(path)?;
    println!("Scenario OK: {} steps", script.len());
    for (i, step) in script.steps().iter().enumerate() {
        println!("  step {:>2}: {}", i + 1, step.snapshot());
    }
    Ok(())
}

fn cmd_schools() -> AppResult<()> {
    for school in list_schools() {
        println!("{:<14} {}", school.id, school.name);
    }
    Ok(())
}

fn cmd_run(ticks: usize, scenario: Option<&std::path::Path>, school_id: &str) -> AppResult<()> {
    let school = get_school(school_id)?;
    let script = match scenario {
        Some(path) => load_scenario(path)?,
        None => ScenarioScript::demo(),
    };

    println!("Monitoring {} ({} ticks)", school.name, ticks);
    let mut monitor = FloodMonitor::new(school, script, DEFAULT_TICK_INTERVAL_S, 0.0)?;
    for tick in 1..=ticks {
        let alerts = monitor.tick_now()?;
        println!("tick {:>3}: {}", tick, monitor.snapshot());
        for alert in alerts {
            println!(
                "  ALERT {} flooded -> {}: {}",
                alert.zone,
                alert.recommendation.nearest_safe_exit,
                alert.recommendation.route_description
            );
        }
    }
    Ok(())
}

fn cmd_route(zones: Vec<String>, location: &str, school_id: &str) -> AppResult<()> {
    let school = get_school(school_id)?;
    let request = RouteRequest::new(location, zones, school.map_layout_description);
    let recommendation = find_safe_route(&request)?;
    println!("Nearest safe exit: {}", recommendation.nearest_safe_exit);
    println!("{}", recommendation.route_description);
    Ok(())
}

fn cmd_history() -> AppResult<()> {
    for entry in mock_history() {
        println!(
            "{}  {:<7} {:>4} min",
            entry.timestamp.format("%Y-%m-%d %H:%M"),
            entry.zone.label(),
            entry.duration_minutes
        );
    }
    Ok(())
}
