//! Terminal and JSON rendering of store queries.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde_json::json;

use pyq_core::{ChapterStore, DisplayRow, FilterSummary, SortDirection, SortKey, Trend};
use pyq_model::{LATEST_YEAR, PREVIOUS_YEAR, Subject};

/// Cell colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub header: Color,
    pub title: Color,
    pub icon: Color,
    pub up: Color,
    pub down: Color,
    pub dim: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        header: Color::DarkBlue,
        title: Color::Black,
        icon: Color::DarkMagenta,
        up: Color::DarkGreen,
        down: Color::DarkRed,
        dim: Color::DarkGrey,
    };

    pub const DARK: Palette = Palette {
        header: Color::Cyan,
        title: Color::White,
        icon: Color::Magenta,
        up: Color::Green,
        down: Color::Red,
        dim: Color::Grey,
    };

    pub fn for_mode(dark_mode: bool) -> Palette {
        if dark_mode { Palette::DARK } else { Palette::LIGHT }
    }

    fn trend(&self, trend: Trend) -> Color {
        match trend {
            Trend::Up => self.up,
            Trend::Down => self.down,
            Trend::Neutral => self.dim,
        }
    }
}

/// How tables are drawn.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub palette: Palette,
    /// Emit ANSI styling even when stdout is not a terminal; `false`
    /// strips it.
    pub styled: bool,
}

// ============================================================================
// Chapters
// ============================================================================

/// The chapter list followed by the active filters and row count.
pub fn chapters_text(store: &ChapterStore, theme: Theme) -> String {
    let rows = store.rows();
    let summary = store.summary();
    let table = rows_table(&rows, store.sort_key(), store.sort_direction(), theme);
    let mut text = format!("{}\n{}\n", filter_line(&summary), table);
    if rows.is_empty() {
        text.push_str("No chapters match the current filters.\n");
    }
    text.push_str(&summary.showing_label());
    text.push('\n');
    text
}

/// Rows and filter summary as pretty JSON.
pub fn chapters_json(store: &ChapterStore) -> Result<String> {
    let value = json!({
        "summary": store.summary(),
        "sort": store.sort_key().map(|key| json!({
            "key": key,
            "direction": store.sort_direction(),
        })),
        "rows": store.rows(),
    });
    serde_json::to_string_pretty(&value).context("serialize chapter rows")
}

pub fn rows_table(
    rows: &[DisplayRow],
    sort_key: Option<SortKey>,
    direction: SortDirection,
    theme: Theme,
) -> Table {
    let palette = theme.palette;
    let header = |label: String, key: Option<SortKey>| {
        let label = match (key, sort_key) {
            (Some(key), Some(active)) if key == active => format!("{label} {}", direction.arrow()),
            _ => label,
        };
        header_cell(&label, palette)
    };

    let mut table = new_table(theme);
    table.set_header(vec![
        header(String::new(), None),
        header("Chapter".to_string(), Some(SortKey::Title)),
        header(LATEST_YEAR.to_string(), Some(SortKey::LatestYear)),
        header(PREVIOUS_YEAR.to_string(), Some(SortKey::PreviousYear)),
        header("Solved".to_string(), Some(SortKey::QuestionsTotal)),
        header(String::new(), None),
    ]);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);

    for row in rows {
        table.add_row(vec![
            Cell::new(row.icon.glyph()).fg(palette.icon),
            Cell::new(&row.title)
                .fg(palette.title)
                .add_attribute(Attribute::Bold),
            Cell::new(&row.latest_year_label),
            Cell::new(&row.previous_year_label).fg(palette.dim),
            Cell::new(&row.total_label),
            Cell::new(row.trend.arrow()).fg(palette.trend(row.trend)),
        ]);
    }
    table
}

/// `Physics | All Classes | All Units | Any status`, with the weak flag
/// when set.
pub fn filter_line(summary: &FilterSummary) -> String {
    let status = match summary.statuses {
        0 => "Any status".to_string(),
        1 => "1 Status".to_string(),
        n => format!("{n} Statuses"),
    };
    let mut parts = vec![
        summary.subject.to_string(),
        summary.class_label(),
        summary.unit_label(),
        status,
    ];
    if summary.weak_only {
        parts.push("Weak chapters".to_string());
    }
    parts.join(" | ")
}

// ============================================================================
// Catalogue overviews
// ============================================================================

pub fn subjects_table(
    counts: &BTreeMap<Subject, usize>,
    selected: Subject,
    theme: Theme,
) -> Table {
    let mut table = new_table(theme);
    table.set_header(vec![
        header_cell("Subject", theme.palette),
        header_cell("Chapters", theme.palette),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    for (subject, count) in counts {
        let name = Cell::new(subject);
        let name = if *subject == selected {
            name.add_attribute(Attribute::Bold)
        } else {
            name
        };
        table.add_row(vec![name, Cell::new(count)]);
    }
    table
}

/// Available classes and units of the store's subject, side by side.
pub fn filters_table(store: &ChapterStore, theme: Theme) -> Table {
    let mut table = new_table(theme);
    table.set_header(vec![
        header_cell("Classes", theme.palette),
        header_cell("Units", theme.palette),
    ]);
    let classes: Vec<&str> = store.available_classes().collect();
    let units: Vec<&str> = store.available_units().collect();
    for index in 0..classes.len().max(units.len()) {
        table.add_row(vec![
            Cell::new(classes.get(index).copied().unwrap_or_default()),
            Cell::new(units.get(index).copied().unwrap_or_default()),
        ]);
    }
    table
}

// ============================================================================
// Helpers
// ============================================================================

fn new_table(theme: Theme) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if theme.styled {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    table
}

fn header_cell(label: &str, palette: Palette) -> Cell {
    Cell::new(label)
        .fg(palette.header)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
