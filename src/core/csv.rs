// src/core/csv.rs
use std::io::{self, Write};
use std::mem::take;

use super::record::Record;

const SEP: char = ',';

/* ---------------- Parsing ---------------- */

/// Header names from the first line, trimmed. Empty input → no headers.
pub fn headers(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    let first = text.split('\n').next().unwrap_or("");
    first.split(SEP).map(|h| h.trim().to_string()).collect()
}

/// Split one data line into raw fields.
///
/// A `"` flips the in-quotes flag and is dropped; a comma only separates
/// fields outside quotes. Doubled quotes are *not* an escape: `""` just
/// flips twice.
pub fn split_line(line: &str) -> Vec<String> {
    let mut cols = Vec::new();
    let mut field = s!();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == SEP && !in_quotes => cols.push(take(&mut field)),
            _ => field.push(ch),
        }
    }
    cols.push(field);
    cols
}

/// Parse published-sheet CSV into records, one per non-blank data line,
/// in source order. Missing trailing fields read as `""`; extra fields
/// past the header count are dropped.
pub fn parse_records(text: &str) -> Vec<Record> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = text.split('\n');
    let hdrs = headers(lines.next().unwrap_or(""));

    lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let mut cols = split_line(line).into_iter();
            let fields = hdrs
                .iter()
                .map(|h| {
                    let v = cols.next().map(|c| c.trim().to_string()).unwrap_or_default();
                    (h.clone(), v)
                })
                .collect();
            Record::new(fields)
        })
        .collect()
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('\n') || field.contains('\r')
}

/// Write one row. Fields with a separator or line break are wrapped in
/// quotes; embedded quotes cannot round-trip through `split_line` and are
/// written as-is.
pub fn write_row<W: Write>(mut w: W, row: &[&str]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", SEP)?; } else { first = false; }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Re-serialize records under a header line. Column set comes from the
/// first record; an empty slice writes nothing.
pub fn write_records<W: Write>(mut w: W, records: &[Record]) -> io::Result<()> {
    let Some(first) = records.first() else { return Ok(()) };
    let hdrs: Vec<&str> = first.fields().map(|(k, _)| k).collect();
    write_row(&mut w, &hdrs)?;
    for r in records {
        let vals: Vec<&str> = r.fields().map(|(_, v)| v).collect();
        write_row(&mut w, &vals)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_line_keeps_quoted_commas() {
        assert_eq!(split_line(r#"Honda,"Civic, LX",2010"#), vec!["Honda", "Civic, LX", "2010"]);
    }

    #[test]
    fn split_line_doubled_quote_is_not_an_escape() {
        // "a""b" → flag flips four times, quotes dropped
        assert_eq!(split_line(r#""a""b",c"#), vec!["ab", "c"]);
    }

    #[test]
    fn split_line_trailing_comma_gives_empty_field() {
        assert_eq!(split_line("a,b,"), vec!["a", "b", ""]);
    }

    #[test]
    fn headers_are_trimmed() {
        assert_eq!(headers(" Make , Model ,Fuel type\nx,y,z"), vec!["Make", "Model", "Fuel type"]);
        assert!(headers("   ").is_empty());
    }

    #[test]
    fn crlf_input_is_trimmed_per_value() {
        let recs = parse_records("Make,Model\r\nHonda,Civic\r\nFord,Focus\r\n");
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].get("Model"), "Civic");
        assert_eq!(recs[1].get("Make"), "Ford");
    }
}
