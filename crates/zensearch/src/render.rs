//! Text rendering for results and field listings.
//!
//! Renderers return strings; the session decides where they are written.

use console::Style;
use zensearch_seeker::Record;

use crate::catalog::{Catalog, Dataset};

/// Width of the separator line.
pub const SEPARATOR_WIDTH: usize = 100;

/// Column width of field names in result blocks.
pub const FIELD_WIDTH: usize = 30;

/// Styles applied to rendered output.
#[derive(Debug, Clone)]
pub struct Theme {
    heading: Style,
    separator: Style,
    field: Style,
}

impl Theme {
    /// No styling at all; output is plain text.
    pub fn plain() -> Self {
        let plain = Style::new().force_styling(false);
        Theme {
            heading: plain.clone(),
            separator: plain.clone(),
            field: plain,
        }
    }

    /// Terminal styling, always applied.
    pub fn colored() -> Self {
        Theme {
            heading: Style::new().bold().force_styling(true),
            separator: Style::new().dim().force_styling(true),
            field: Style::new().cyan().force_styling(true),
        }
    }

    /// Picks [`colored`](Self::colored) or [`plain`](Self::plain).
    pub fn for_color(enabled: bool) -> Self {
        if enabled {
            Theme::colored()
        } else {
            Theme::plain()
        }
    }

    /// Applies the heading style.
    pub fn heading(&self, text: &str) -> String {
        self.heading.apply_to(text).to_string()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::plain()
    }
}

/// The separator line, without a newline.
pub fn separator(theme: &Theme) -> String {
    theme
        .separator
        .apply_to("_".repeat(SEPARATOR_WIDTH))
        .to_string()
}

/// Renders matching records.
///
/// A separator opens the block; each record lists its fields as
/// `name value` lines in source order and is closed by a separator and two
/// blank lines.
pub fn results(records: &[&Record], theme: &Theme) -> String {
    let mut out = String::new();
    out.push_str(&separator(theme));
    out.push('\n');
    for record in records {
        for (name, value) in record.iter() {
            let padded = format!("{name:<width$}", width = FIELD_WIDTH);
            out.push_str(&format!("{} {value}\n", theme.field.apply_to(padded)));
        }
        out.push_str(&separator(theme));
        out.push_str("\n\n\n");
    }
    out
}

/// Renders the searchable fields of every dataset.
pub fn searchable_fields(catalog: &Catalog, theme: &Theme) -> String {
    let mut out = String::new();
    for dataset in Dataset::ALL {
        out.push_str(&separator(theme));
        out.push('\n');
        out.push_str(&theme.heading(&format!("Search {} with", dataset.title())));
        out.push('\n');
        for field in catalog.searchable_fields(dataset) {
            out.push_str(field);
            out.push('\n');
        }
    }
    out.push_str(&separator(theme));
    out.push_str("\n\n\n");
    out
}
