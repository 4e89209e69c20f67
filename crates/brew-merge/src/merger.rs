//! The merge pipeline: discover, read, concatenate, sort.

use std::path::{Path, PathBuf};

use tracing::{debug, info, info_span};

use brew_model::Record;

use crate::csv_source::read_csv_records;
use crate::discovery::{SourceKind, discover_sources};
use crate::error::Result;
use crate::json_source::read_json_records;
use crate::options::MergeOptions;
use crate::sort::SortStrategy;
use crate::writer::{render_artifact, write_artifact};

/// A completed in-memory merge of one source tree.
///
/// Construction does all the reading and sorting; [`Merger::build`] only
/// writes. A failed construction leaves nothing behind.
#[derive(Debug, Clone)]
pub struct Merger {
    root: PathBuf,
    options: MergeOptions,
    inputs: Vec<PathBuf>,
    records: Vec<Record>,
    strategy: SortStrategy,
}

impl Merger {
    /// Merges `root` with default options.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        Self::with_options(root, MergeOptions::default())
    }

    /// Merges `root` with the given options.
    pub fn with_options(root: impl AsRef<Path>, options: MergeOptions) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let span = info_span!("merge", root = %root.display());
        let _guard = span.enter();

        let sources = discover_sources(&root, &options)?;

        let mut inputs = Vec::new();
        let mut records = Vec::new();
        for source in sources {
            let batch = match source.kind {
                SourceKind::Json => read_json_records(&source.path)?,
                SourceKind::Csv => read_csv_records(&source.path)?,
                SourceKind::Ignored => {
                    debug!(path = %source.path.display(), "skipping");
                    continue;
                }
            };
            debug!(path = %source.path.display(), records = batch.len(), "read source");
            records.extend(batch);
            inputs.push(source.path);
        }

        let strategy = SortStrategy::for_first(records.first());
        strategy.apply(&mut records);

        info!(
            inputs = inputs.len(),
            records = records.len(),
            strategy = %strategy,
            "merged sources"
        );

        Ok(Self {
            root,
            options,
            inputs,
            records,
            strategy,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Source files that contributed records, in processing order.
    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    /// Merged records in final order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn strategy(&self) -> SortStrategy {
        self.strategy
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Renders the artifact bytes without touching the file system.
    pub fn render(&self) -> serde_json::Result<Vec<u8>> {
        render_artifact(&self.records, self.options.pretty)
    }

    /// Writes the artifact to `path`.
    pub fn build(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        write_artifact(path, &self.records, self.options.pretty)?;
        info!(path = %path.display(), records = self.records.len(), "artifact built");
        Ok(())
    }
}

/// Merges `root` and writes the artifact to `output` in one call.
pub fn merge_tree(root: &Path, output: &Path, options: MergeOptions) -> Result<Merger> {
    let merger = Merger::with_options(root, options)?;
    merger.build(output)?;
    Ok(merger)
}
