// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use crate::aggregate::PlayerSeasonAggregate;

/* ---------------- Parsing ---------------- */

/// Minimal CSV parser (quotes + CRLF tolerant). std-only.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                // move the field without cloning
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !row.is_empty() && !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer. Fields are quoted only when needed.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/* ---------------- SuperCoach season export ---------------- */

pub const SUPERCOACH_HEADER: &str =
    "Player Name,Games Played,Total Score,Average SuperCoach Score";

/// Serialize season aggregates to CSV text.
///
/// Empty input yields the empty string — no header line. Downstream file
/// writers treat "" as "nothing to write", so this is part of the contract.
/// Names are always quoted, with internal quotes doubled (RFC 4180);
/// numeric fields go out bare, averages with exactly one decimal digit.
/// Every row, including the last, ends in '\n'.
pub fn supercoach_csv(players: &[PlayerSeasonAggregate]) -> String {
    if players.is_empty() {
        return s!();
    }

    let mut out = s!(SUPERCOACH_HEADER);
    out.push('\n');
    for p in players {
        let escaped = p.name.replace('"', "\"\"");
        out.push_str(&format!(
            "\"{}\",{},{},{}\n",
            escaped, p.games_played, p.total_score, p.average_score
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tenths::Tenths;

    fn player(name: &str, games: u32, total: i64) -> PlayerSeasonAggregate {
        PlayerSeasonAggregate {
            name: s!(name),
            games_played: games,
            total_score: total,
            average_score: Tenths::ratio(total, games as i64),
        }
    }

    #[test]
    fn empty_input_means_empty_string_not_header() {
        assert_eq!(supercoach_csv(&[]), "");
    }

    #[test]
    fn header_then_quoted_rows_with_trailing_newline() {
        let csv = supercoach_csv(&[player("Sam Walsh", 23, 2530)]);
        assert_eq!(
            csv,
            "Player Name,Games Played,Total Score,Average SuperCoach Score\n\
             \"Sam Walsh\",23,2530,110.0\n"
        );
    }

    #[test]
    fn quotes_in_names_are_doubled() {
        let csv = supercoach_csv(&[player(r#"O"Brien"#, 2, 180)]);
        assert!(csv.contains(r#""O""Brien",2,180,90.0"#));
    }

    #[test]
    fn parse_rows_unescapes_doubled_quotes() {
        let rows = parse_rows("\"O\"\"Brien\",2,180,90.0\n", ',');
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], r#"O"Brien"#);
        assert_eq!(rows[0][3], "90.0");
    }

    #[test]
    fn write_row_quotes_only_when_needed() {
        let mut buf: Vec<u8> = Vec::new();
        let row = vec![s!("plain"), s!("with,comma"), s!("with\"quote")];
        write_row(&mut buf, &row, ',').unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "plain,\"with,comma\",\"with\"\"quote\"\n"
        );
    }
}
