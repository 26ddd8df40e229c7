//! Terminal view
//!
//! Writes a full rendering of every published snapshot to a writer.

use std::io::Write;

use crate::config::ViewFormat;
use crate::domain::entities::Order;
use crate::domain::ports::View;
use crate::error::AppError;

use super::renderer::{render_html, render_json, render_markdown};

pub struct TerminalView<W: Write> {
    format: ViewFormat,
    out: W,
}

impl<W: Write> TerminalView<W> {
    pub fn new(format: ViewFormat, out: W) -> Self {
        Self { format, out }
    }

    pub fn format(&self) -> ViewFormat {
        self.format
    }

    #[cfg(test)]
    pub fn writer(&self) -> &W {
        &self.out
    }

    fn render(&self, snapshot: &[Order]) -> Result<String, AppError> {
        match self.format {
            ViewFormat::Html => Ok(render_html(snapshot)),
            ViewFormat::Markdown => Ok(render_markdown(snapshot)),
            ViewFormat::Json => render_json(snapshot),
        }
    }

    fn write_snapshot(&mut self, snapshot: &[Order]) -> Result<(), AppError> {
        let rendered = self.render(snapshot)?;
        self.out.write_all(rendered.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> View for TerminalView<W> {
    fn refresh(&mut self, snapshot: &[Order]) {
        if let Err(e) = self.write_snapshot(snapshot) {
            tracing::error!("Failed to render {} view: {}", self.format, e);
        }
    }
}
