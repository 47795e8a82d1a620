use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;

use crate::presentation::view_models::{ItemRowViewModel, LIST_HEADER};

/// Prints command results to a writer, as plain text or JSON.
pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool, color: bool) -> Self {
        Self { json_mode, color }
    }

    /// Header plus one fixed-width line per row; JSON prints `items` instead.
    pub fn render_list<T: Serialize + ?Sized>(
        &self,
        out: &mut impl Write,
        rows: &[ItemRowViewModel],
        items: &T,
    ) -> Result<()> {
        if self.json_mode {
            writeln!(out, "{}", serde_json::to_string_pretty(items)?)?;
            return Ok(());
        }

        if self.color {
            writeln!(out, "{}", LIST_HEADER.bold())?;
        } else {
            writeln!(out, "{}", LIST_HEADER)?;
        }

        for row in rows {
            if self.color {
                let status = if row.to_purchase {
                    row.status().green().to_string()
                } else {
                    row.status().dimmed().to_string()
                };
                writeln!(out, "{} | {}", row.columns(), status)?;
            } else {
                writeln!(out, "{}", row.line())?;
            }
        }

        Ok(())
    }

    /// Confirmation for a single-item command.
    pub fn render_outcome<T: Serialize + ?Sized>(
        &self,
        out: &mut impl Write,
        message: &str,
        payload: &T,
    ) -> Result<()> {
        if self.json_mode {
            writeln!(out, "{}", serde_json::to_string_pretty(payload)?)?;
        } else {
            writeln!(out, "{}", message)?;
        }
        Ok(())
    }
}
