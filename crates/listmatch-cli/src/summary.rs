use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use listmatch_core::RunStats;

/// Per-stage counts as a table.
pub fn summary_table(stats: &RunStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Listings"),
        header_cell("Share"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);

    let rows = [
        ("Input", stats.listings),
        ("Title match", stats.classified),
        ("Manufacturer match", stats.retained),
        ("Cache hits", stats.cache_hits),
    ];
    for (label, count) in rows {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(count),
            dim_cell(percent(count, stats.listings)),
        ]);
    }
    table.add_row(vec![
        Cell::new("Products matched")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.products_matched).add_attribute(Attribute::Bold),
        dim_cell(format!("of {}", stats.catalog_size)),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table
}

/// Print the summary table to stderr; stdout may carry results.
pub fn print_summary(stats: &RunStats) {
    eprintln!("{}", summary_table(stats));
}

fn percent(part: usize, whole: usize) -> String {
    if whole == 0 {
        "-".to_string()
    } else {
        format!("{:.1}%", part as f64 * 100.0 / whole as f64)
    }
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
