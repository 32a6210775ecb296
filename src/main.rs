mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Args, Method};
use inventory_dp::io::reporting;
use inventory_dp::logging;
use inventory_dp::model::params::ModelParameters;
use inventory_dp::simulation::config::load_config;
use inventory_dp::simulation::engine::{self, Trajectory};
use inventory_dp::solver::{bottom_up, cross_validate, top_down};
use inventory_dp::strategy::implementations::{BaseStockPolicy, NaivePolicy, TablePolicy};
use tracing::{error, info};

fn main() {
    logging::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        error!("{e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    println!("=== Inventory Ordering Planner ===");

    // 1. LOAD AND VALIDATE CONFIGURATION
    let config = load_config(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    let params = config.to_parameters().context("validating configuration")?;
    let depth_limit = config.solver.depth_limit;
    info!(
        horizon = params.horizon(),
        capacity = params.capacity(),
        initial_stock = params.initial_stock(),
        "configuration loaded"
    );
    println!("Demand schedule: {:?}", params.demand());

    // 2. SOLVE
    let optimal = match args.method {
        Method::Both => {
            let result = cross_validate(&params, depth_limit)?;
            println!("Minimum total cost (bottom-up): {:.2}", result.bottom_up.min_cost());
            println!("Minimum total cost (top-down):  {:.2}", result.top_down.min_cost);
            println!(
                "Cross-validation passed ({} of {} states searched top-down)",
                result.top_down.states_evaluated,
                params.horizon() * (params.capacity() as usize + 1)
            );

            let bu = &result.bottom_up;
            let bu_path =
                engine::trace_with_table("Bottom-up", &params, &bu.policy, &bu.costs)?;
            let td_path = engine::trace_with_table(
                "Top-down, priced with the bottom-up table",
                &params,
                &result.top_down.policy,
                &bu.costs,
            )?;
            print!("{}", reporting::render_trajectory(&bu_path));
            print!("{}", reporting::render_trajectory(&td_path));
            bu_path
        }
        Method::BottomUp => {
            let solution = bottom_up::solve(&params);
            println!("Minimum total cost (bottom-up): {:.2}", solution.min_cost());
            let path =
                engine::trace_with_table("Bottom-up", &params, &solution.policy, &solution.costs)?;
            print!("{}", reporting::render_trajectory(&path));
            path
        }
        Method::TopDown => {
            let solution = top_down::solve(&params, depth_limit)?;
            println!("Minimum total cost (top-down): {:.2}", solution.min_cost);
            let path = engine::simulate_policy(
                "Top-down",
                &params,
                &mut TablePolicy::new(&solution.policy),
            )?;
            print!("{}", reporting::render_trajectory(&path));
            path
        }
    };

    // 3. BENCHMARK HEURISTICS
    if args.compare_heuristics {
        print_heuristics(&params, &optimal, args.base_stock)?;
    }

    // 4. EXPORT RESULTS
    if let Some(path) = &args.csv {
        reporting::write_trajectory_csv(path, &optimal)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Success! Trajectory written to {}", path.display());
    }

    Ok(())
}

fn print_heuristics(
    params: &ModelParameters,
    optimal: &Trajectory,
    base_stock: Option<u32>,
) -> Result<()> {
    let target = base_stock
        .unwrap_or_else(|| params.demand().iter().copied().max().unwrap_or(0))
        .min(params.capacity());

    let naive = engine::simulate_policy("Naive (lot-for-lot)", params, &mut NaivePolicy::new())?;
    let base = engine::simulate_policy(
        format!("Base stock (target {target})"),
        params,
        &mut BaseStockPolicy::new(target),
    )?;

    println!("\n=== Cost Comparison ===");
    for trajectory in [optimal, &naive, &base] {
        println!(
            "{:<32} ${:>10.2}  ({} orders)",
            trajectory.label,
            trajectory.total_cost(),
            trajectory.order_count()
        );
    }
    Ok(())
}
