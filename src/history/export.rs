//! CSV export of the assignment history.
//!
//! Pure string production; writing the result to a file or download is
//! the caller's concern.

use super::types::AssignmentEvent;

const HEADER: &str = "Date,Kind,Area,Initiator,Selected";

/// Renders events as CSV, newest ordering preserved from the input.
///
/// `area` of `Some` keeps only matching events. The output starts with a
/// UTF-8 BOM so spreadsheet applications detect the encoding.
pub fn export_csv(events: &[AssignmentEvent], area: Option<&str>) -> String {
    let mut out = String::from("\u{feff}");
    out.push_str(HEADER);

    for event in events {
        if let Some(a) = area {
            if event.area != a {
                continue;
            }
        }
        out.push('\n');
        out.push_str(&csv_field(
            &event.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ));
        out.push(',');
        out.push_str(&csv_field(&event.kind.to_string()));
        out.push(',');
        out.push_str(&csv_field(&event.area));
        out.push(',');
        out.push_str(&csv_field(event.initiator.name()));
        out.push(',');
        out.push_str(&csv_field(&event.selected_doctor_name));
    }
    out
}

/// RFC 4180 quoting: wrap when the field contains a delimiter, quote,
/// or newline; double embedded quotes.
fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_owned()
    }
}
