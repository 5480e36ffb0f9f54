//! Helpers to run the solver executable in integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::fs::File;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;
use std::time::Duration;

use crayon_solver::core::graph::ConstraintGraph;
use crayon_solver::core::Assignment;
use crayon_solver::parsers::edge_list::parse_edge_list;
use crayon_solver::parsers::edge_list::EdgeListInstance;
use wait_timeout::ChildExt;

const TEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug)]
pub(crate) struct SolverOutput {
    pub(crate) success: bool,
    /// The lines written to standard out, without the lines of the log.
    pub(crate) lines: Vec<String>,
    /// The log lines, without their `% ` prefix.
    pub(crate) log_lines: Vec<String>,
}

pub(crate) fn instance_path(instance_name: &str) -> PathBuf {
    PathBuf::from(format!(
        "{}/tests/instances/{instance_name}.txt",
        env!("CARGO_MANIFEST_DIR")
    ))
}

pub(crate) fn read_instance(instance_name: &str) -> EdgeListInstance {
    let file = File::open(instance_path(instance_name)).expect("instance exists");
    parse_edge_list(file).expect("instance is valid")
}

/// Runs the solver on the provided instances; `run_name` distinguishes the output files of
/// concurrently running tests.
pub(crate) fn run_solver(
    instance_names: &[&str],
    args: &[&str],
    run_name: &str,
) -> SolverOutput {
    let solver = PathBuf::from(env!("CARGO_BIN_EXE_crayon-solver"));

    let log_file_path = std::env::temp_dir().join(format!("crayon-{run_name}.log"));
    let err_file_path = std::env::temp_dir().join(format!("crayon-{run_name}.err"));

    let mut command = Command::new(solver);
    let _ = command.args(args);
    for instance_name in instance_names {
        let _ = command.arg(instance_path(instance_name));
    }

    let mut child = command
        .stdout(File::create(&log_file_path).expect("Failed to create log file."))
        .stderr(File::create(&err_file_path).expect("Failed to create error file."))
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run solver.");

    let success = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => {
            let _ = child.kill();
            panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs())
        }
        Ok(Some(status)) => status.success(),
        Err(e) => panic!("error starting solver: {e}"),
    };

    let output = std::fs::read_to_string(&log_file_path).expect("Failed to read log file.");
    std::fs::remove_file(log_file_path).expect("Failed to remove log file.");
    std::fs::remove_file(err_file_path).expect("Failed to remove error file.");

    let (log_lines, lines): (Vec<_>, Vec<_>) =
        output.lines().partition(|line| line.starts_with('%'));

    SolverOutput {
        success,
        lines: lines.into_iter().map(str::to_owned).collect(),
        log_lines: log_lines
            .into_iter()
            .map(|line| line.trim_start_matches('%').trim().to_owned())
            .collect(),
    }
}

/// Reads the colorings from the solver output; every coloring is a block of `name = color` lines
/// which is terminated by `----------`.
pub(crate) fn parse_colorings(output: &SolverOutput, graph: &ConstraintGraph) -> Vec<Assignment> {
    let mut colorings = Vec::new();
    let mut current = Assignment::new(graph.num_vertices());

    for line in &output.lines {
        if line == "----------" {
            colorings.push(std::mem::replace(
                &mut current,
                Assignment::new(graph.num_vertices()),
            ));
            continue;
        }

        let Some((name, color)) = line.split_once(" = ") else {
            continue;
        };
        let vertex = graph
            .vertex_id(name)
            .unwrap_or_else(|| panic!("'{name}' is not a vertex of the instance"));
        current.assign(vertex, color.parse().expect("color is a number"));
    }

    colorings
}
