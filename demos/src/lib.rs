//! Shared code for the `plan` demo: command line, board loading and logger
//! setup.

use std::fmt;
use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};
use gridpath_core::{Board, BoardError, Coord, ObstacleGen, TileState, parse_board};
use gridpath_search::{Outcome, PathMarking, Planner, SearchConfig, SearchError};
use rand::SeedableRng;
use rand::rngs::{StdRng, SysRng};

const DEFAULT_DENSITY: f64 = 0.3;

/// How the route is drawn on the printed board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Marking {
    /// Only the cells of the final route.
    Route,
    /// Every cell the search selected.
    Expanded,
}

impl From<Marking> for PathMarking {
    fn from(m: Marking) -> Self {
        match m {
            Marking::Route => PathMarking::Route,
            Marking::Expanded => PathMarking::Expanded,
        }
    }
}

/// A generated board: `ROWSxCOLS[:DENSITY[:SEED]]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomSpec {
    pub rows: i32,
    pub cols: i32,
    pub density: f64,
    pub seed: Option<u64>,
}

/// Plan a route across a grid board and print it.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "plan", version, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["board", "random"])))]
pub struct Options {
    /// Log every admitted and selected node
    #[arg(short, long)]
    pub verbose: bool,

    /// Which cells to mark as path
    #[arg(long, value_enum, default_value_t = Marking::Route)]
    pub marking: Marking,

    /// Leave the start and goal tiles unstamped
    #[arg(long)]
    pub no_stamp: bool,

    /// Board text file
    #[arg(long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Random board, e.g. 20x40:0.3:7
    #[arg(long, value_name = "ROWSxCOLS[:DENSITY[:SEED]]", value_parser = parse_random)]
    pub random: Option<RandomSpec>,

    /// Start cell as row,col
    #[arg(value_parser = parse_coord)]
    pub start: Coord,

    /// Goal cell as row,col
    #[arg(value_parser = parse_coord)]
    pub goal: Coord,
}

/// Errors reported by the demo.
#[derive(Debug)]
pub enum DemoError {
    /// Neither `--board` nor `--random` was set.
    NoBoard,
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Board(BoardError),
    Search(SearchError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBoard => f.write_str("one of --board or --random is required"),
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Board(e) => write!(f, "{e}"),
            Self::Search(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoBoard => None,
            Self::Io { source, .. } => Some(source),
            Self::Board(e) => Some(e),
            Self::Search(e) => Some(e),
        }
    }
}

impl From<BoardError> for DemoError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}

impl From<SearchError> for DemoError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// Parse `row,col`.
pub fn parse_coord(s: &str) -> Result<Coord, String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected row,col, got \u{201c}{s}\u{201d}"))?;
    let num = |t: &str| {
        t.trim()
            .parse::<i32>()
            .map_err(|_| format!("bad coordinate \u{201c}{s}\u{201d}"))
    };
    Ok(Coord::new(num(r)?, num(c)?))
}

/// Parse `ROWSxCOLS[:DENSITY[:SEED]]`.
pub fn parse_random(s: &str) -> Result<RandomSpec, String> {
    let bad = || format!("expected ROWSxCOLS[:DENSITY[:SEED]], got \u{201c}{s}\u{201d}");
    let mut parts = s.split(':');
    let dims = parts.next().ok_or_else(bad)?;
    let (rows, cols) = dims.split_once(['x', 'X']).ok_or_else(bad)?;
    let rows: i32 = rows.parse().map_err(|_| bad())?;
    let cols: i32 = cols.parse().map_err(|_| bad())?;
    if rows <= 0 || cols <= 0 {
        return Err(bad());
    }
    let density = match parts.next() {
        Some(d) => d.parse().map_err(|_| bad())?,
        None => DEFAULT_DENSITY,
    };
    let seed = match parts.next() {
        Some(v) => Some(v.parse().map_err(|_| bad())?),
        None => None,
    };
    if parts.next().is_some() {
        return Err(bad());
    }
    Ok(RandomSpec {
        rows,
        cols,
        density,
        seed,
    })
}

impl Options {
    /// Planner settings selected on the command line.
    pub fn config(&self) -> SearchConfig {
        SearchConfig::default()
            .with_marking(self.marking.into())
            .with_stamp_endpoints(!self.no_stamp)
    }

    /// Load the board file or generate the random board.
    pub fn load_board(&self) -> Result<Board, DemoError> {
        match (&self.board, self.random) {
            (Some(path), _) => {
                let text = std::fs::read_to_string(path).map_err(|source| DemoError::Io {
                    path: path.clone(),
                    source,
                })?;
                Ok(parse_board(&text)?)
            }
            (None, Some(spec)) => {
                let rng = match spec.seed {
                    Some(s) => StdRng::seed_from_u64(s),
                    None => StdRng::try_from_rng(&mut SysRng).expect("failed to seed RNG from the OS"),
                };
                let mut obstacles = ObstacleGen::new(rng);
                Ok(obstacles.board(spec.rows, spec.cols, spec.density, &[self.start, self.goal]))
            }
            (None, None) => Err(DemoError::NoBoard),
        }
    }
}

/// Run one search and return the marked board with its outcome.
pub fn run(opts: &Options) -> Result<(Board, Outcome), DemoError> {
    let mut board = opts.load_board()?;
    log::info!(
        "loaded {}x{} board with {} blocked tiles",
        board.rows(),
        board.cols(),
        board.count(TileState::Blocked)
    );
    let outcome = Planner::new(opts.config()).search(&mut board, opts.start, opts.goal)?;
    Ok((board, outcome))
}

/// One-line summary of an outcome.
pub fn summary(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Found(route) => format!(
            "path found: {} steps, {} nodes admitted, {} expanded",
            route.cost, route.stats.admitted, route.stats.expanded
        ),
        Outcome::NoPath(stats) => format!(
            "no path found: {} nodes admitted, {} expanded",
            stats.admitted, stats.expanded
        ),
    }
}

/// Install the stderr logger: `Info` by default, `Trace` when verbose.
/// `RUST_LOG` still overrides either.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };
    let res = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
    if let Err(e) = res {
        eprintln!("warning: {e}");
    }
}
