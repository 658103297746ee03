use std::fmt::Display;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::*;

pub fn as_ascii_table<T, U, V, W>(headers: T, rows: U) -> String
where
    T: IntoIterator,
    T::Item: Into<Cell>,
    U: IntoIterator<Item = V>,
    V: IntoIterator<Item = W>,
    W: AsRef<str> + Display,
{
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);
    for row in rows {
        table.add_row(row.into_iter().map(|cell| cell.to_string()).collect::<Vec<_>>());
    }
    table.to_string()
}

/// Two-column field / value table.
pub fn as_key_value_table<'a, I>(rows: I) -> String
where
    I: IntoIterator<Item = (&'a str, String)>,
{
    as_ascii_table(
        ["Field", "Value"],
        rows.into_iter().map(|(key, value)| [key.to_string(), value]),
    )
}
