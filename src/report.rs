//! Render the result of an inspection for a person (text) or a program (JSON).
use itertools::Itertools;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{InspectError, Result};
use crate::structure::{Node, Structure};

pub const SEPARATOR: &str = "------------------------------";
pub const REMINDER: &str =
    "Remember which of the keys above hold the sensor data (X) and the labels (Y).";

/// Format a shape as a tuple: `()`, `(5,)`, `(100, 5)`.
pub fn shape_tuple(shape: &[u64]) -> String {
    match shape {
        [d] => format!("({d},)"),
        _ => format!("({})", shape.iter().join(", ")),
    }
}

/// Format names as a quoted list: `['a', 'b']`.
pub fn name_list(names: &[String]) -> String {
    format!("[{}]", names.iter().map(|n| format!("'{n}'")).join(", "))
}

/// Single line diagnostic for a failed inspection.
pub fn diagnostic(e: &InspectError) -> String {
    match e {
        InspectError::FileNotFound(p) => {
            format!("Error: file not found, check the path: {}", p.display())
        }
        InspectError::OpenOrRead(e) => format!("Error: {e}"),
    }
}

/// Write the text report. A failed inspection is reported as a single line.
pub fn write_text<W: Write>(w: &mut W, path: &Path, result: &Result<Structure>) -> io::Result<()> {
    let s = match result {
        Ok(s) => s,
        Err(e) => return writeln!(w, "{}", diagnostic(e)),
    };

    writeln!(w, "File: {}", path.display())?;
    writeln!(w, "{SEPARATOR}")?;
    writeln!(w, "Keys:")?;

    for e in s.entries() {
        writeln!(w, "  - {}", e.name)?;

        match &e.node {
            Node::Dataset { shape, dtype } => {
                writeln!(w, "    Shape: {}, Type: {}", shape_tuple(shape), dtype)?
            }
            Node::Group { members } => {
                writeln!(w, "    Group (inner keys: {})", name_list(members))?
            }
        }
    }

    writeln!(w, "{SEPARATOR}")?;
    writeln!(w, "{REMINDER}")
}

#[derive(Serialize)]
struct Failure<'a> {
    error: FailureBody<'a>,
}

#[derive(Serialize)]
struct FailureBody<'a> {
    kind: &'a str,
    message: String,
}

/// Write the JSON report: the structure, or `{"error": {"kind": .., "message": ..}}`.
pub fn write_json<W: Write>(mut w: W, result: &Result<Structure>) -> io::Result<()> {
    match result {
        Ok(s) => serde_json::to_writer_pretty(&mut w, s)?,
        Err(e) => serde_json::to_writer_pretty(
            &mut w,
            &Failure {
                error: FailureBody {
                    kind: e.kind(),
                    message: e.to_string(),
                },
            },
        )?,
    }

    writeln!(w)
}
