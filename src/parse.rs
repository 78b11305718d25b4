//! Whitespace-tokenizing readers for the three input file formats (spec §6),
//! reworked from `create_DVGraph`/`create_LSGraph`
//! (`original_source/src/{dv_graph,ls_graph}.py`).

use std::io::BufRead;

use crate::error::{SimError, SimResult};
use crate::graph::{Cost, NodeId};

/// One `id1 id2 cost` line from a topology or changes file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeLine {
    pub a: NodeId,
    pub b: NodeId,
    pub cost: Cost,
}

/// One `src dst <message text>` line from a message file. `text` is `None`
/// when the line had fewer than 4 fields (spec §6's malformed-line case);
/// the caller emits the literal placeholder `<message>` for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageLine {
    pub src: String,
    pub dst: String,
    pub text: Option<String>,
}

/// Parses every non-blank line of a topology or changes file. A malformed
/// line (not exactly 3 whitespace-separated integer fields) is fatal, per
/// spec §4.5 / §7 — the caller aborts the whole simulation.
pub fn parse_edge_lines(file_name: &'static str, reader: impl BufRead) -> SimResult<Vec<EdgeLine>> {
    let mut lines = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let malformed = || SimError::ParseLine {
            file: file_name,
            line: i + 1,
            text: line.to_string(),
        };
        if fields.len() != 3 {
            return Err(malformed());
        }
        let a: NodeId = fields[0].parse().map_err(|_| malformed())?;
        let b: NodeId = fields[1].parse().map_err(|_| malformed())?;
        let cost: Cost = fields[2].parse().map_err(|_| malformed())?;
        lines.push(EdgeLine { a, b, cost });
    }
    Ok(lines)
}

/// Parses every non-blank line of a message file, in original order.
/// Blank lines are skipped per spec §4.4 step 5; lines with fewer than 2
/// fields (not even a `src`/`dst`) are skipped with a warning, since there
/// is nothing meaningful to route or report for them.
pub fn parse_message_lines(reader: impl BufRead) -> SimResult<Vec<MessageLine>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() < 2 {
            log::warn!("skipping message line with no src/dst fields: {trimmed:?}");
            continue;
        }
        let src = fields[0].to_string();
        let dst = fields[1].to_string();
        let text = if fields.len() >= 4 {
            Some(fields[2..].join(" "))
        } else {
            None
        };
        lines.push(MessageLine { src, dst, text });
    }
    Ok(lines)
}
