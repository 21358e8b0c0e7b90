//! Debug dumps of solver tables.
//!
//! One table row per line, rows `0..=n+1`, cells separated by a space. Cells
//! outside the triangular region, and root cells of empty ranges, print as
//! `-`.

use std::io::{self, Write};

use crate::solver::{ObstSolution, Table};

/// Write the cost table with six decimals per cell.
pub fn write_cost_table<W: Write>(writer: &mut W, cost: &Table<f64>) -> io::Result<()> {
    for i in 0..cost.num_rows() {
        let cells: Vec<String> = cost
            .row(i)
            .into_iter()
            .map(|cell| cell.map_or_else(|| "-".to_string(), |v| format!("{v:.6}")))
            .collect();
        writeln!(writer, "{}", cells.join(" "))?;
    }
    writer.flush()
}

/// Write the root table; empty ranges have no root.
pub fn write_root_table<W: Write>(writer: &mut W, roots: &Table<usize>) -> io::Result<()> {
    for i in 0..roots.num_rows() {
        let cells: Vec<String> = roots
            .row(i)
            .into_iter()
            .enumerate()
            .map(|(j, cell)| match cell {
                Some(r) if j >= i => r.to_string(),
                _ => "-".to_string(),
            })
            .collect();
        writeln!(writer, "{}", cells.join(" "))?;
    }
    writer.flush()
}

/// Render the cost table into a string (useful for tests and snapshots).
pub fn render_cost_table(cost: &Table<f64>) -> io::Result<String> {
    let mut buffer = Vec::new();
    write_cost_table(&mut buffer, cost)?;
    into_string(buffer)
}

/// Render the root table into a string.
pub fn render_root_table(roots: &Table<usize>) -> io::Result<String> {
    let mut buffer = Vec::new();
    write_root_table(&mut buffer, roots)?;
    into_string(buffer)
}

fn into_string(buffer: Vec<u8>) -> io::Result<String> {
    String::from_utf8(buffer).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

/// Stable digest of both tables, streamed through the dump writers.
pub fn fingerprint(solution: &ObstSolution) -> io::Result<blake3::Hash> {
    let mut hasher = blake3::Hasher::new();
    write_cost_table(&mut hasher, solution.cost())?;
    write_root_table(&mut hasher, solution.roots())?;
    Ok(hasher.finalize())
}
