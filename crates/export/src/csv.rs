//! CSV rendering with the calendar-import contract.

use lunisol_resolve::ConversionResult;

/// Header row expected by calendar import tools.
pub const CSV_HEADER: &str = "Subject,Start Date,All Day Event";

/// UTF-8 byte-order mark; some calendar importers require it to detect
/// the encoding.
const BOM: char = '\u{feff}';

/// Renders the conversion result as calendar-importable CSV text.
///
/// Layout: BOM, header row, then one `{title},{YYYY-MM-DD},TRUE` row per
/// occurrence, newline-joined. The title field is quoted per RFC 4180
/// only when it contains a comma, quote, or newline, so for ordinary
/// titles the output splits into exactly `1 + n` lines after stripping
/// the BOM.
pub fn csv_content(result: &ConversionResult) -> String {
    let title = quote_field(result.anniversary().title());
    let mut out = String::new();
    out.push(BOM);
    out.push_str(CSV_HEADER);
    for occ in result.occurrences() {
        out.push('\n');
        out.push_str(&title);
        out.push(',');
        out.push_str(&occ.solar_date().to_string());
        out.push_str(",TRUE");
    }
    out
}

/// Quotes a CSV field when it contains a delimiter, quote, or newline.
fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
