// src/specs/supercoach.rs
//
// Extraction spec for FootyWire's supercoach_round page.
//
// The page lays out one or more <table> blocks of player rows. In each
// table, row 0 is a header; data rows carry the player name in the second
// cell and the round's SuperCoach score in the last cell. Anything that
// fails those expectations (empty name, non-numeric score, too few cells)
// is skipped silently — data-quality filtering, not an error path.

use crate::core::html::{next_tag_block_ci, visible_text};

/// One (player, round, score) observation from a results page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundScore {
    /// Display name exactly as scraped (trimmed). Names are identity:
    /// two spellings of one player are two players.
    pub name: String,
    pub round: u32,
    pub score: i64,
}

/// Pull every valid score row out of `doc`. All qualifying tables on the
/// page contribute; results keep document order.
pub fn extract_round_scores(doc: &str, round: u32) -> Vec<RoundScore> {
    let mut out = Vec::new();

    let mut pos = 0usize;
    while let Some((tb_s, tb_e)) = next_tag_block_ci(doc, "<table", "</table>", pos) {
        let table = &doc[tb_s..tb_e];
        pos = tb_e;

        let mut row_ix = 0usize;
        let mut tr_pos = 0usize;
        while let Some((tr_s, tr_e)) = next_tag_block_ci(table, "<tr", "</tr>", tr_pos) {
            let tr = &table[tr_s..tr_e];
            tr_pos = tr_e;

            let ix = row_ix;
            row_ix += 1;
            if ix == 0 {
                continue; // header row
            }

            let mut cells: Vec<&str> = Vec::new();
            let mut td_pos = 0usize;
            while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", td_pos) {
                cells.push(&tr[td_s..td_e]);
                td_pos = td_e;
            }
            if cells.len() < 2 {
                continue;
            }

            let name = visible_text(cells[1]);
            if name.is_empty() {
                continue;
            }
            let score_text = visible_text(cells[cells.len() - 1]);
            let Some(score) = parse_leading_int(&score_text) else {
                continue; // "N/A", "-", blank…
            };

            out.push(RoundScore { name, round, score });
        }
    }

    out
}

/// Base-10 integer from the front of the string: optional sign, then
/// digits; trailing junk is ignored ("112 (avg)" -> 112). None when no
/// digit is found.
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim();
    let (neg, rest) = match s.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let v: i64 = rest[..end].parse().ok()?;
    Some(if neg { -v } else { v })
}
