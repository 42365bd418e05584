//! Batch processing of a directory of graph files into one answers file.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use chrono::{Local, NaiveDateTime};
use tracing::{info, warn};
use crate::cust_error::BatchError;
use crate::ds_instance::{DSInstance, DominatingPair};
use crate::graph::DyUGraph;
use crate::multi_start::SolverConfig;

/// Returns `answers_<DDMonYYYY_HHMMSS>.txt` for `timestamp`.
pub fn answers_file_name(timestamp: &NaiveDateTime) -> String {
    format!("answers_{}.txt", timestamp.format("%d%b%Y_%H%M%S"))
}

/// Returns the `BatchError::InvalidDirectory` error if `path` is not an existing directory.
pub fn check_directory(path: &Path) -> Result<(), BatchError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(BatchError::InvalidDirectory(path.to_path_buf()))
    }
}

/// Returns the files in `input_dir` sorted by name. Other entries are skipped.
pub fn graph_files(input_dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        } else {
            warn!(path = %path.display(), "skipping entry that is not a file");
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Loads the graph in `path` and solves it.
/// Returns the answer and the number of nodes of the graph.
pub fn solve_file(path: &Path, config: &SolverConfig) -> Result<(DominatingPair, usize), BatchError> {
    let file = File::open(path)?;
    let graph = DyUGraph::read_graph(BufReader::new(file))
        .map_err(|source| BatchError::Import { file: path.to_path_buf(), source })?;
    let n = graph.num_nodes();
    let mut instance = DSInstance::new(graph);
    let pair = instance.solve(config)
        .map_err(|source| BatchError::Processing { file: path.to_path_buf(), source })?;
    Ok((pair, n))
}

/// Solves every file of `input_dir` and writes one answer line per file into a new timestamped
/// answers file in `output_dir`.
///
/// Returns the path of the answers file.
pub fn run_batch(input_dir: &Path, output_dir: &Path, config: &SolverConfig) -> Result<PathBuf, BatchError> {
    check_directory(input_dir)?;
    check_directory(output_dir)?;
    let files = graph_files(input_dir)?;
    let out_path = output_dir.join(answers_file_name(&Local::now().naive_local()));
    let mut out = BufWriter::new(File::create(&out_path)?);
    let mut score_sum = 0.0;
    for path in &files {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let (pair, n) = solve_file(path, config)?;
        let score = pair.score(n);
        info!(file = %name, score, "solved");
        score_sum += score;
        DSInstance::write_solution(&name, &pair, &mut out)?;
        out.flush()?;
    }
    if !files.is_empty() {
        info!(graphs = files.len(), mean_score = score_sum / files.len() as f64, answers = %out_path.display(), "batch done");
    }
    Ok(out_path)
}
