//! Headless driver session.
//!
//! Reads editor commands one per line and writes JSON for the `scene` and
//! `layout` queries. Blank lines and `#` comments are skipped; malformed
//! lines are logged with their line number and skipped.

use std::io::{BufRead, Write};

use anyhow::{anyhow, bail, Context};
use floorplan_core::LayoutConfig;
use floorplan_designer::{FloorPlanEditor, Point, Tool};
use tracing::{debug, warn};

/// One driver command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Tool(Tool),
    Down(Point),
    Move(Point),
    Up,
    Leave,
    Click(Point),
    Scene,
    Layout,
    Clear,
}

fn parse_point<'a>(mut args: impl Iterator<Item = &'a str>) -> anyhow::Result<Point> {
    let mut coord = |name: &str| -> anyhow::Result<f64> {
        let raw = args.next().ok_or_else(|| anyhow!("missing {name} coordinate"))?;
        let value: f64 = raw
            .parse()
            .with_context(|| format!("invalid {name} coordinate '{raw}'"))?;
        if !value.is_finite() {
            bail!("{name} coordinate must be finite, got {raw}");
        }
        Ok(value)
    };

    let x = coord("x")?;
    let y = coord("y")?;
    if let Some(extra) = args.next() {
        bail!("unexpected argument '{extra}'");
    }
    Ok(Point::new(x, y))
}

fn no_args<'a>(command: Command, mut args: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    match args.next() {
        Some(extra) => bail!("unexpected argument '{extra}'"),
        None => Ok(command),
    }
}

impl Command {
    /// Parses one input line. Blank lines and comments yield `None`.
    pub fn parse(line: &str) -> anyhow::Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let Some(keyword) = words.next() else {
            return Ok(None);
        };

        let command = match keyword.to_lowercase().as_str() {
            "tool" => {
                let name = words.next().ok_or_else(|| anyhow!("missing tool name"))?;
                let tool = name.parse::<Tool>().map_err(|e| anyhow!(e))?;
                no_args(Self::Tool(tool), words)?
            }
            "down" => Self::Down(parse_point(words)?),
            "move" => Self::Move(parse_point(words)?),
            "click" => Self::Click(parse_point(words)?),
            "up" => no_args(Self::Up, words)?,
            "leave" => no_args(Self::Leave, words)?,
            "scene" => no_args(Self::Scene, words)?,
            "layout" => no_args(Self::Layout, words)?,
            "clear" => no_args(Self::Clear, words)?,
            other => bail!("unknown command '{other}'"),
        };

        Ok(Some(command))
    }
}

/// A driver session over one editor.
#[derive(Debug, Default)]
pub struct Session {
    editor: FloorPlanEditor,
}

impl Session {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            editor: FloorPlanEditor::with_config(config),
        }
    }

    pub fn editor(&self) -> &FloorPlanEditor {
        &self.editor
    }

    /// Applies one command, writing query output to `out`.
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> anyhow::Result<()> {
        match command {
            Command::Tool(tool) => self.editor.set_tool(tool),
            Command::Down(point) => self.editor.pointer_down(point),
            Command::Move(point) => self.editor.pointer_move(point),
            Command::Up => {
                if let Some(room) = self.editor.pointer_up() {
                    debug!(?room, "Room committed");
                }
            }
            Command::Leave => {
                if let Some(room) = self.editor.pointer_leave() {
                    debug!(?room, "Room committed on leave");
                }
            }
            Command::Click(point) => {
                if let Some(door) = self.editor.click(point) {
                    debug!(?door, "Door placed");
                }
            }
            Command::Scene => {
                serde_json::to_writer(&mut *out, &self.editor.scene())
                    .context("failed to write scene")?;
                writeln!(out)?;
            }
            Command::Layout => {
                serde_json::to_writer(&mut *out, self.editor.layout())
                    .context("failed to write layout")?;
                writeln!(out)?;
            }
            Command::Clear => self.editor.clear(),
        }
        Ok(())
    }

    /// Runs every command from `input`. Returns the number of skipped lines.
    ///
    /// Read and write failures abort the run.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> anyhow::Result<usize> {
        let mut skipped = 0;

        for (index, line) in input.lines().enumerate() {
            let line_number = index + 1;
            let line = line.with_context(|| format!("failed to read line {line_number}"))?;

            let command = match Command::parse(&line)
                .with_context(|| format!("line {line_number}: '{}'", line.trim()))
            {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    warn!("Skipping {:#}", e);
                    skipped += 1;
                    continue;
                }
            };

            self.execute(command, &mut out)?;
        }

        out.flush()?;
        Ok(skipped)
    }
}
