use clap::Parser;
use lazyquest::{
    quest::{
        render_solution, validate, ConfigError, GridConfig, GridGenerator, QuestCosts, QuestProblem,
    },
    search::{SearchOptions, Strategy, Verbosity},
};
use std::{path::PathBuf, process::ExitCode};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Clear every enemy from a grid, using one of the search strategies.
struct Cli {
    #[arg(
        value_enum,
        help = "The search strategy to use",
        short = 's',
        long = "strategy",
        id = "STRATEGY",
        default_value_t = Strategy::AStar1
    )]
    strategy: Strategy,
    #[arg(
        help = "Number of rows of a generated map, random if not given",
        long = "rows",
        id = "ROWS"
    )]
    rows: Option<usize>,
    #[arg(
        help = "Number of columns of a generated map, random if not given",
        long = "cols",
        id = "COLS"
    )]
    cols: Option<usize>,
    #[arg(
        help = "Seed for the map generator, random if not given",
        long = "seed",
        id = "SEED"
    )]
    seed: Option<u64>,
    #[arg(
        help = "A TOML map file to solve instead of generating a map",
        short = 'm',
        long = "map",
        id = "MAP",
        conflicts_with_all = ["ROWS", "COLS", "SEED"]
    )]
    map: Option<PathBuf>,
    #[arg(
        help = "Largest depth bound tried by iterative deepening",
        long = "max-depth",
        id = "MAX_DEPTH"
    )]
    max_depth: Option<usize>,
    #[arg(help = "Print the grid after every step", long = "visualise")]
    visualise: bool,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let loaded = match &cli.map {
        Some(path) => GridConfig::load(path).and_then(|config| config.build()),
        None => {
            let seed = cli.seed.unwrap_or_else(rand::random);
            info!(seed);
            let mut generator = GridGenerator::new(seed);
            let grid = match (cli.rows, cli.cols) {
                (None, None) => generator.generate(),
                (rows, cols) => {
                    // A missing dimension copies the given one.
                    let rows = rows.or(cols).unwrap_or_default();
                    let cols = cols.unwrap_or(rows);
                    generator.generate_with_dimensions(rows, cols)
                }
            };
            grid.map(|grid| (grid, QuestCosts::default()))
                .map_err(ConfigError::from)
        }
    };
    let (grid, costs) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    grid.log_info();

    let options = SearchOptions {
        max_depth: cli.max_depth.unwrap_or(SearchOptions::default().max_depth),
    };
    let problem = QuestProblem::new(&grid, costs);
    let Some(solution) = problem.solve(cli.strategy, &options) else {
        println!("No solution found");
        return ExitCode::SUCCESS;
    };

    info!("validating solution");
    if let Err(e) = validate(&problem, &solution.operators()) {
        error!("solution is invalid: {}", e);
        return ExitCode::FAILURE;
    }
    info!("solution is valid");

    if cli.visualise {
        println!("{}", render_solution(&grid, &solution));
        println!();
    }
    println!("Sequence of Moves: {}", solution.sequence());
    println!("Solution Cost: {}", solution.cost());
    println!("No. of Expanded Nodes: {}", solution.expanded_nodes());

    ExitCode::SUCCESS
}
