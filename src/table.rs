//! Console Table Rendering
//!
//! Fixed-width rendering of result rows, one line per row with a dashed
//! rule under the header. Columns are left-aligned and sized to the widest
//! cell. NULL-ish cells render empty.

/// Render headers and rows as an aligned text table
///
/// Rows shorter than the header list are padded with empty cells; longer
/// rows are truncated to the header count.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().take(headers.len()).enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    render_line(&mut out, &widths, headers.iter().map(|h| (*h).to_string()));

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    render_line(&mut out, &widths, rule.into_iter());

    for row in rows {
        let padded = (0..headers.len()).map(|i| row.get(i).cloned().unwrap_or_default());
        render_line(&mut out, &widths, padded);
    }

    out
}

fn render_line(out: &mut String, widths: &[usize], cells: impl Iterator<Item = String>) {
    let mut line = String::new();
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(&cell);
        let pad = widths[i].saturating_sub(cell.chars().count());
        line.push_str(&" ".repeat(pad));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
