use anyhow::Result;
use comfy_table::{CellAlignment, Table};

use brew_cli::pipeline::{
    BuildSummary, ReleaseSummary, build_artifact, collect_csv_files, release, validate_files,
};
use brew_merge::MergeOptions;
use brew_model::Category;
use brew_validate::{ValidationSummary, rules_for};

use crate::cli::{BuildArgs, MergeArgs, ReleaseArgs, ValidateArgs};
use crate::summary::{align_column, apply_table_style, header_cell};

pub fn run_categories() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Directory"),
        header_cell("Rules"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for category in Category::ALL {
        table.add_row(vec![
            category.as_str().to_string(),
            category.directory_name().to_string(),
            rules_for(category).len().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_validate(args: &ValidateArgs) -> Result<Vec<ValidationSummary>> {
    let files = collect_csv_files(&args.paths)?;
    validate_files(&files)
}

pub fn run_build(args: &BuildArgs) -> Result<BuildSummary> {
    build_artifact(&args.root, &args.output, merge_options(&args.merge))
}

pub fn run_release(args: &ReleaseArgs) -> Result<ReleaseSummary> {
    release(&args.data_root, &args.output_dir, &merge_options(&args.merge))
}

fn merge_options(args: &MergeArgs) -> MergeOptions {
    args.ignore_ext
        .iter()
        .fold(MergeOptions::default(), |options, ext| {
            options.ignore_extension(ext.trim_start_matches('.'))
        })
        .with_pretty(args.pretty)
}
