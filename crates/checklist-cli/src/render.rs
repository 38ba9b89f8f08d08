//! Terminal tables for command results.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use checklist_cli::script::StepOutcome;
use checklist_model::Checklist;
use checklist_output::cell_text;

use crate::types::{EditSummary, ValidationResult};

pub fn print_checklist(checklist: &Checklist) {
    println!("Checklist: {}", checklist.title);
    println!(
        "Updated: {}",
        checklist.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let mut table = Table::new();
    let mut header = vec![header_cell("#")];
    header.extend(
        checklist
            .columns
            .iter()
            .map(|column| header_cell(&column.label)),
    );
    table.set_header(header);
    apply_checklist_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);

    for row in &checklist.rows {
        let mut cells = vec![dim_cell(row.row_number)];
        cells.extend(checklist.columns.iter().map(|column| {
            match row.cell(&column.id) {
                Some(cell) if cell.style.bold => {
                    Cell::new(cell_text(cell)).add_attribute(Attribute::Bold)
                }
                Some(cell) => Cell::new(cell_text(cell)),
                None => dim_cell("-"),
            }
        }));
        table.add_row(cells);
    }
    println!("{table}");
    if checklist.rows.is_empty() {
        println!("(no rows)");
    }
}

pub fn print_validation(result: &ValidationResult) {
    println!("File: {}", result.file.display());
    println!(
        "Checklist: {} ({} columns, {} rows)",
        result.title, result.columns, result.rows
    );
    let mut table = Table::new();
    table.set_header(vec![header_cell("Check"), header_cell("Result")]);
    apply_table_style(&mut table);

    let labels = if result.schema.valid {
        ok_cell()
    } else {
        error_cell(result.schema.errors.join("; "))
    };
    table.add_row(vec![Cell::new("Column labels"), labels]);

    let structure = match &result.structure {
        None => ok_cell(),
        Some(error) => error_cell(error),
    };
    table.add_row(vec![Cell::new("Rows match columns"), structure]);
    println!("{table}");
}

pub fn print_edit_summary(summary: &EditSummary) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Step"),
        header_cell("Command"),
        header_cell("Outcome"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for step in &summary.report.steps {
        let outcome = match &step.outcome {
            StepOutcome::Applied => Cell::new("applied").fg(Color::Green),
            StepOutcome::Rejected(_) => Cell::new(&step.outcome).fg(Color::Red),
            StepOutcome::Skipped(_) => Cell::new(&step.outcome).fg(Color::Yellow),
        };
        table.add_row(vec![dim_cell(step.step), Cell::new(step.op), outcome]);
    }
    println!("{table}");
    println!(
        "Applied {} of {} commands; checklist now has {} columns and {} rows.",
        summary.report.applied_count(),
        summary.report.steps.len(),
        summary.columns,
        summary.rows
    );
    if !summary.can_undo {
        println!("No edits recorded in this session.");
    }
    match &summary.saved_to {
        Some(path) => println!("Saved: {}", path.display()),
        None => println!("Dry run: nothing saved."),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_checklist_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth);
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

fn ok_cell() -> Cell {
    Cell::new("✓")
        .fg(Color::Green)
        .add_attribute(Attribute::Bold)
}

fn error_cell<T: ToString>(message: T) -> Cell {
    Cell::new(message).fg(Color::Red)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
