use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use erc_cli::pipeline::RunResult;
use erc_model::HeaderMapping;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input_file.display());
    match &result.output_file {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    println!("{}", summary_table(result));
    println!("Records written: {}", result.records_written);
}

pub fn print_mapping(mapping: &HeaderMapping) {
    println!("{}", mapping_table(mapping));
}

fn summary_table(result: &RunResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("In"),
        header_cell("Out"),
        header_cell("Modified"),
        header_cell("Nulled"),
        header_cell("Dropped"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for stage in &result.report.stages {
        table.add_row(vec![
            Cell::new(stage.name),
            Cell::new(stage.records_in),
            Cell::new(stage.records_out),
            count_cell(stage.modified, Color::Yellow),
            count_cell(stage.nulled, Color::Yellow),
            count_cell(stage.dropped(), Color::Red),
        ]);
    }
    table
}

fn mapping_table(mapping: &HeaderMapping) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Title"), header_cell("Source")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, column) in mapping.columns().iter().enumerate() {
        let source = if column.is_blank() {
            dim_cell("(blank)")
        } else {
            Cell::new(&column.source)
        };
        table.add_row(vec![Cell::new(index + 1), Cell::new(&column.title), source]);
    }
    table
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell("0")
    } else {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
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

#[cfg(test)]
mod tests {
    use super::*;
    use erc_model::OutputColumn;

    #[test]
    fn mapping_table_marks_blank_columns() {
        let mapping = HeaderMapping::new(vec![
            OutputColumn::new("Ship To Phone", "Phone"),
            OutputColumn::blank("Email"),
        ]);
        let rendered = mapping_table(&mapping).to_string();
        assert!(rendered.contains("Ship To Phone"));
        assert!(rendered.contains("(blank)"));
    }
}
