mod result;

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use crayon_solver::core::branching::ValueSelectionStrategy;
use crayon_solver::core::branching::VariableSelectionStrategy;
use crayon_solver::core::checking::check_coloring;
use crayon_solver::core::convert_case::Case;
use crayon_solver::core::engine::domains::RestorationStrategy;
use crayon_solver::core::statistics::configure_statistic_logging;
use crayon_solver::core::ColoringResult;
use crayon_solver::core::ColoringSolver;
use crayon_solver::core::SolverOptions;
use crayon_solver::parsers::edge_list::parse_edge_list;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use result::CrayonError;
use result::CrayonResult;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The instances to solve, in the edge-list format. The instances are solved one after the
    /// other, and the solver stops at the first instance which cannot be read.
    ///
    /// An edge-list file contains one edge 'u, v' per line, a line 'colors = k' declaring the
    /// number of colors, and optionally lines with a single vertex name. Blank lines and lines
    /// starting with '#' are ignored.
    #[clap(verbatim_doc_comment, required = true)]
    instance_paths: Vec<PathBuf>,

    /// The number of colors which can be used; overrides the number of colors declared by the
    /// instances.
    ///
    /// Possible values: u32 (at least 1)
    #[arg(
        short = 'k',
        long = "colors",
        value_parser = clap::value_parser!(u32).range(1..),
        verbatim_doc_comment
    )]
    num_colors: Option<u32>,

    /// Determines which unassigned vertex is colored next.
    ///
    /// - The "minimum-remaining-values" strategy selects the vertex with the fewest colors left
    ///   in its domain, preferring the vertex with the most neighbors on ties
    /// - The "input-order" strategy selects the first unassigned vertex in the order of the
    ///   instance
    #[arg(long, value_enum, default_value_t, verbatim_doc_comment)]
    variable_selection: VariableSelectionStrategy,

    /// Determines the order in which the colors of the selected vertex are tried.
    ///
    /// - The "least-constraining-value" strategy first tries the colors which remain possible
    ///   for the most unassigned neighbors
    /// - The "in-domain-min" strategy tries the colors in ascending order
    #[arg(long, value_enum, default_value_t, verbatim_doc_comment)]
    value_selection: ValueSelectionStrategy,

    /// Determines how the domains are restored when a decision is undone.
    ///
    /// - The "snapshot" strategy copies all domains before every decision
    /// - The "trail" strategy records every removed color and reinserts them on backtrack
    #[arg(long, value_enum, default_value_t, verbatim_doc_comment)]
    restoration: RestorationStrategy,

    /// Disables establishing arc consistency over the whole graph before the search starts.
    ///
    /// Possible values: bool
    #[arg(long = "no-initial-propagation", verbatim_doc_comment)]
    no_initial_propagation: bool,

    /// Enables log message output from the solver.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,

    /// Enables logging of statistics from the solver.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", verbatim_doc_comment)]
    log_statistics: bool,
}

fn configure_logging(verbose: bool, log_statistics: bool) -> std::io::Result<()> {
    if log_statistics {
        configure_statistic_logging(
            "%%%crayon-stat:",
            Some("%%%crayon-stat-end"),
            Some(Case::Camel),
            None,
        );
    }
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> CrayonResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics)?;

    if crayon_solver::core::asserts::CRAYON_ASSERT_LEVEL_DEFINITION
        >= crayon_solver::core::asserts::CRAYON_ASSERT_MODERATE
    {
        warn!(
            "Potential performance degradation: the Crayon assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.",
            crayon_solver::core::asserts::CRAYON_ASSERT_LEVEL_DEFINITION
        );
    };

    let mut solver = ColoringSolver::with_options(SolverOptions {
        variable_selection: args.variable_selection,
        value_selection: args.value_selection,
        restoration: args.restoration,
        initial_propagation: !args.no_initial_propagation,
    });

    for instance_path in &args.instance_paths {
        solve_instance(&mut solver, instance_path, args.num_colors)?;
    }

    Ok(())
}

fn solve_instance(
    solver: &mut ColoringSolver,
    instance_path: &Path,
    num_colors_override: Option<u32>,
) -> CrayonResult<()> {
    let instance = parse_edge_list(File::open(instance_path)?)
        .map_err(|error| CrayonError::invalid_instance(instance_path, error))?;

    let num_colors = match (num_colors_override, instance.num_colors) {
        (Some(num_colors), Some(declared)) => {
            info!("Overriding the {declared} colors declared by the instance with {num_colors}");
            num_colors
        }
        (Some(num_colors), None) | (None, Some(num_colors)) => num_colors,
        (None, None) => return Err(CrayonError::missing_color_count(instance_path)),
    };

    let graph = &instance.graph;
    if graph.num_vertices() == 0 {
        warn!("The instance {} has no vertices", instance_path.display());
    }

    println!("Instance: {}", instance_path.display());
    println!("Number of colors: {num_colors}");
    println!("Number of vertices: {}", graph.num_vertices());
    println!("Number of edges: {}", graph.num_edges());

    let result = solver.solve(graph, num_colors);
    solver.log_statistics();

    match result {
        ColoringResult::Colorable(coloring) => {
            check_coloring(&coloring, graph, num_colors)
                .map_err(|violation| CrayonError::invalid_coloring(instance_path, violation))?;

            for (vertex, color) in coloring.iter() {
                println!("{} = {color}", graph.name(vertex));
            }
            println!("Valid coloring: true");
            println!("----------");
        }
        ColoringResult::Uncolorable => println!("=====UNSATISFIABLE====="),
    }

    Ok(())
}
