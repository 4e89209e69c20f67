//! Validate, build and release stages shared by the commands.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use brew_merge::{MergeOptions, Merger, SortStrategy, list_source_files};
use brew_model::Category;
use brew_validate::{ValidationSummary, validate_file};

/// Outcome of one merged artifact.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub root: PathBuf,
    pub output: PathBuf,
    pub records: usize,
    pub strategy: SortStrategy,
    /// Source files that contributed records, in processing order.
    pub inputs: Vec<PathBuf>,
}

/// Outcome of a full release run.
#[derive(Debug, Clone, Default)]
pub struct ReleaseSummary {
    pub validated: Vec<ValidationSummary>,
    /// One artifact per category directory, in directory name order.
    pub artifacts: Vec<(Category, BuildSummary)>,
}

/// Expands files and directories into the CSV files they name.
///
/// Directories are searched recursively in path order. Explicit file paths
/// are kept as given, whatever their extension.
pub fn collect_csv_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let listed = list_source_files(path)
                .with_context(|| format!("list files under {}", path.display()))?;
            files.extend(listed.into_iter().filter(|file| is_csv(file)));
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            bail!("{} does not exist", path.display());
        }
    }
    Ok(files)
}

/// Validates each file against the category of its parent directory.
///
/// Stops at the first failing file.
pub fn validate_files(files: &[PathBuf]) -> Result<Vec<ValidationSummary>> {
    let start = Instant::now();
    let mut summaries = Vec::with_capacity(files.len());
    for path in files {
        let category = Category::from_csv_path(path)
            .with_context(|| format!("resolve category of {}", path.display()))?;
        summaries.push(validate_file(path, category)?);
    }
    info!(
        files = summaries.len(),
        duration_ms = start.elapsed().as_millis(),
        "validation complete"
    );
    Ok(summaries)
}

/// Merges `root` into `output`.
pub fn build_artifact(root: &Path, output: &Path, options: MergeOptions) -> Result<BuildSummary> {
    let merger = merge_directory(root, options)?;
    write_artifact(&merger, output)
}

fn merge_directory(root: &Path, options: MergeOptions) -> Result<Merger> {
    Merger::with_options(root, options).with_context(|| format!("merge {}", root.display()))
}

fn write_artifact(merger: &Merger, output: &Path) -> Result<BuildSummary> {
    merger
        .build(output)
        .with_context(|| format!("write {}", output.display()))?;
    Ok(BuildSummary {
        root: merger.root().to_path_buf(),
        output: output.to_path_buf(),
        records: merger.records().len(),
        strategy: merger.strategy(),
        inputs: merger.inputs().to_vec(),
    })
}

/// Immediate subdirectories of `data_root` that name a category, sorted.
pub fn category_directories(data_root: &Path) -> Result<Vec<(Category, PathBuf)>> {
    let entries =
        fs::read_dir(data_root).with_context(|| format!("read {}", data_root.display()))?;

    let mut directories = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read {}", data_root.display()))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if let Ok(category) = Category::from_directory_name(name) {
            directories.push((category, path));
        }
    }
    directories.sort_by(|a, b| a.1.cmp(&b.1));
    Ok(directories)
}

/// Validates every CSV under each category directory, then builds one
/// `<output_dir>/<directory>.json` artifact per category directory.
///
/// Every directory is validated and merged in memory before the first
/// artifact is written, so a bad source leaves the output directory alone.
pub fn release(data_root: &Path, output_dir: &Path, options: &MergeOptions) -> Result<ReleaseSummary> {
    let span = info_span!("release", data_root = %data_root.display());
    let _guard = span.enter();

    let directories = category_directories(data_root)?;
    if directories.is_empty() {
        bail!("no category directories under {}", data_root.display());
    }

    let mut summary = ReleaseSummary::default();
    for (category, directory) in &directories {
        let files = collect_csv_files(std::slice::from_ref(directory))?;
        for path in files {
            summary.validated.push(validate_file(&path, *category)?);
        }
    }

    let mut merged = Vec::with_capacity(directories.len());
    for (category, directory) in directories {
        let Some(name) = directory.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let output = output_dir.join(format!("{name}.json"));
        let merger = merge_directory(&directory, options.clone())?;
        merged.push((category, merger, output));
    }

    for (category, merger, output) in &merged {
        summary.artifacts.push((*category, write_artifact(merger, output)?));
    }

    info!(
        files = summary.validated.len(),
        artifacts = summary.artifacts.len(),
        "release complete"
    );
    Ok(summary)
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}
