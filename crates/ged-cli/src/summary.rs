//! Human-facing tables for batch reports and calendar listings.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ged_cli::batch::BatchReport;
use ged_model::CalendarSystem;
use ged_standards::CalendarRegistry;

pub fn print_batch_summary(report: &BatchReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Normalized"),
        header_cell("Changed"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for record in &report.records {
        table.add_row(vec![
            Cell::new(&record.input),
            Cell::new(&record.output),
            changed_cell(record.changed),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{} values, {} rewritten",
            report.total(),
            report.changed_count()
        ))
        .add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
}

pub fn print_calendars() {
    let registry = CalendarRegistry::new();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Calendar"),
        header_cell("Escape tag"),
        header_cell("Months"),
        header_cell("Tokens"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for calendar in CalendarSystem::all() {
        let months = registry.table_for(calendar);
        table.add_row(vec![
            Cell::new(calendar.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            if calendar.is_default() {
                dim_cell("(default)")
            } else {
                Cell::new(calendar.escape_tag())
            },
            Cell::new(months.month_count()),
            Cell::new(months.abbreviations().join(" ")),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn changed_cell(changed: bool) -> Cell {
    if changed {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
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
