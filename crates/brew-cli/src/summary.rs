use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use brew_cli::pipeline::{BuildSummary, ReleaseSummary};
use brew_validate::ValidationSummary;

pub fn print_validation_summary(summaries: &[ValidationSummary]) {
    if summaries.is_empty() {
        println!("No CSV files found.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Category"),
        header_cell("Rows"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut total_rows = 0usize;
    for summary in summaries {
        total_rows += summary.rows;
        table.add_row(vec![
            path_cell(&summary.path),
            Cell::new(summary.category).fg(Color::Blue),
            Cell::new(summary.rows),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!("{} file(s) valid", summaries.len());
}

pub fn print_build_summary(summary: &BuildSummary) {
    println!("Output: {}", summary.output.display());
    println!("Records: {}", summary.records);
    println!("Sorted by: {}", summary.strategy);
    if summary.inputs.is_empty() {
        println!("Inputs: none");
        return;
    }
    println!("Inputs:");
    for input in &summary.inputs {
        let shown = input.strip_prefix(&summary.root).unwrap_or(input);
        println!("- {}", shown.display());
    }
}

pub fn print_release_summary(summary: &ReleaseSummary) {
    println!("Validated {} file(s)", summary.validated.len());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Artifact"),
        header_cell("Inputs"),
        header_cell("Records"),
        header_cell("Sorted by"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    let mut total_records = 0usize;
    for (category, built) in &summary.artifacts {
        total_records += built.records;
        table.add_row(vec![
            Cell::new(category)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            path_cell(&built.output),
            Cell::new(built.inputs.len()),
            count_cell(built.records),
            Cell::new(built.strategy),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(total_records).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn path_cell(path: &Path) -> Cell {
    Cell::new(path.display())
}

// Empty artifacts are legal but usually a mistake.
fn count_cell(count: usize) -> Cell {
    if count == 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
