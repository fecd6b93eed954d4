//! Pathbench: benchmark A* against Dijkstra on a text or generated map.

use std::io::{self, IsTerminal, Write};

use gridpath_map::{CaveGen, TileMap};
use log::info;

use pathbench_lib::bench::write_report;
use pathbench_lib::prompt::{resolve_endpoints, resolve_runs};
use pathbench_lib::render::{Overlay, write_map};
use pathbench_lib::{BenchConfig, BenchError, run_benchmarks};

fn load_map(config: &BenchConfig) -> Result<TileMap, BenchError> {
    match &config.cave {
        Some(cave) => {
            info!(
                "generating {}x{} cave with seed {}",
                cave.width, cave.height, cave.seed
            );
            let cavegen = CaveGen {
                wall_fraction: cave.wall_fraction,
                ..CaveGen::with_seed(cave.seed)
            };
            Ok(cavegen.generate(cave.width, cave.height)?)
        }
        None => {
            info!("loading map from {}", config.map_path.display());
            Ok(TileMap::from_file(&config.map_path)?)
        }
    }
}

fn run(config: &BenchConfig) -> Result<(), BenchError> {
    let stdout = io::stdout();
    let color = config.color && stdout.is_terminal();
    let mut out = stdout.lock();
    let mut input = io::stdin().lock();

    let map = load_map(config)?;
    info!(
        "map is {}x{} with {} walkable tiles",
        map.width(),
        map.height(),
        map.walkable_count()
    );
    write_map(&mut out, &map, &Overlay::default(), color)?;

    let (origin, destination) = resolve_endpoints(config, &map, &mut input, &mut out)?;
    write_map(&mut out, &map, &Overlay::targets(origin, destination), color)?;

    let runs = resolve_runs(config, &mut input, &mut out)?;
    let report = run_benchmarks(&map, origin, destination, runs)?;
    write_report(&mut out, &map, &report, color)?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = BenchConfig::from_args(std::env::args().skip(1))?;
    match run(&config) {
        Err(e) if e.is_rejected_input() => {
            // Shown on stdout next to the prompts.
            println!("{e}");
            std::process::exit(1);
        }
        result => Ok(result?),
    }
}
