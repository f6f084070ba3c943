use std::path::PathBuf;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tabclean_cli::types::CleanResult;
use tabclean_model::ColumnKind;

pub fn print_summary(result: &CleanResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output_dir.display());
    let (original_rows, original_columns) = result.report.original_shape;
    let (clean_rows, clean_columns) = result.report.cleaned_shape;
    println!("Shape: {original_rows} x {original_columns} -> {clean_rows} x {clean_columns}");

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Missing"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut total_missing = 0usize;
    for column in &result.columns {
        total_missing += column.missing_after;
        table.add_row(vec![
            Cell::new(&column.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            kind_cell(column.kind),
            count_cell(column.missing_after),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        count_cell(total_missing).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    println!("Artifacts:");
    print_artifact("csv", result.outputs.csv.as_ref());
    print_artifact("xlsx", result.outputs.excel.as_ref());
    print_artifact("parquet", result.outputs.parquet.as_ref());
    println!("Report: {}", result.report_path.display());
}

fn print_artifact(label: &str, path: Option<&PathBuf>) {
    match path {
        Some(path) => println!("- {label}: {}", path.display()),
        None => println!("- {label}: skipped"),
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn kind_cell(kind: ColumnKind) -> Cell {
    match kind {
        ColumnKind::Text => Cell::new(kind.label()),
        ColumnKind::Numeric => Cell::new(kind.label()).fg(Color::Green),
        ColumnKind::Date => Cell::new(kind.label()).fg(Color::Magenta),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
