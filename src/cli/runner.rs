//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::controls::{build_controls, render_text, ControlOptions};
use crate::diagnostics::TracingSink;
use crate::error::{Error, Result};
use crate::loader::{collection_from_str, load_collection, load_settings, Settings};
use crate::pagination::Paginator;
use crate::range::{self, DisplayEntry};
use serde_json::{json, Value};
use std::io::{self, Read, Write};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, writing to stdout
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Run the CLI command, writing to `out`
    pub fn run_to(&self, out: &mut dyn Write) -> Result<()> {
        match &self.cli.command {
            Commands::Show => self.show(out),
            Commands::Sequence {
                total_pages,
                max_buttons,
            } => self.sequence(out, *total_pages, *max_buttons),
            Commands::Walk { steps } => self.walk(out, steps),
        }
    }

    /// Load settings and apply command-line overrides
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.cli.options {
            Some(path) => load_settings(path)?,
            None => Settings::default(),
        };

        if let Some(page_size) = self.cli.page_size {
            settings.pagination.page_size = page_size;
        }
        if let Some(page) = self.cli.page {
            settings.pagination.initial_page = Some(page);
        }
        // the CLI always owns its position
        settings.pagination.current_page = None;

        Ok(settings)
    }

    /// Load the collection named by `--data`
    fn load_data(&self) -> Result<Vec<Value>> {
        let path = self
            .cli
            .data
            .as_ref()
            .ok_or_else(|| Error::config("Data file not specified (use --data)"))?;

        if path.as_os_str() == "-" {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            return collection_from_str(&content, &TracingSink);
        }

        load_collection(path, &TracingSink)
    }

    fn show(&self, out: &mut dyn Write) -> Result<()> {
        let settings = self.settings()?;
        let data = self.load_data()?;
        let paginator = Paginator::new(&data, settings.pagination);

        let window = paginator.read();
        let controls = build_controls(&window, &settings.controls);
        let strip = render_text(&controls);

        match self.cli.format {
            OutputFormat::Json => {
                let doc = json!({
                    "window": window,
                    "display_sequence": paginator.display_sequence(settings.controls.max_buttons),
                    "controls": strip,
                });
                writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
            }
            OutputFormat::Pretty => {
                if window.total_items == 0 {
                    writeln!(out, "No items")?;
                    return Ok(());
                }

                writeln!(
                    out,
                    "Page {} of {} (items {}-{} of {})",
                    window.position,
                    window.total_pages,
                    window.start_index,
                    window.end_index,
                    window.total_items
                )?;
                for item in window.items {
                    writeln!(out, "  {item}")?;
                }
                if !strip.is_empty() {
                    writeln!(out, "{strip}")?;
                }
            }
        }

        Ok(())
    }

    fn sequence(
        &self,
        out: &mut dyn Write,
        total_pages: usize,
        max_buttons: Option<usize>,
    ) -> Result<()> {
        if total_pages == 0 {
            return Err(Error::invalid_value(
                "total_pages",
                "must be at least 1",
            ));
        }

        let settings = self.settings()?;
        let max_buttons = max_buttons.unwrap_or(settings.controls.max_buttons);
        let requested = settings.pagination.initial_page.unwrap_or(1);
        let position = range::clamp_position(requested, total_pages);
        let sequence = range::display_sequence(position, total_pages, max_buttons);

        match self.cli.format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string(&sequence)?)?;
            }
            OutputFormat::Pretty => {
                writeln!(
                    out,
                    "{}",
                    format_sequence(&sequence, position, &settings.controls)
                )?;
            }
        }

        Ok(())
    }

    fn walk(&self, out: &mut dyn Write, steps: &[String]) -> Result<()> {
        let settings = self.settings()?;
        let data = self.load_data()?;
        let mut paginator = Paginator::new(&data, settings.pagination);

        let mut trace = Vec::with_capacity(steps.len());
        for step in steps {
            let step = step.trim();
            apply_step(&mut paginator, step)?;
            trace.push(json!({
                "step": step,
                "position": paginator.position(),
                "total_pages": paginator.total_pages(),
                "page_size": paginator.page_size(),
            }));
        }

        match self.cli.format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(&trace)?)?;
            }
            OutputFormat::Pretty => {
                for entry in &trace {
                    writeln!(
                        out,
                        "{:<8} -> page {}/{}",
                        entry["step"].as_str().unwrap_or_default(),
                        entry["position"],
                        entry["total_pages"]
                    )?;
                }
            }
        }

        Ok(())
    }
}

/// Apply one walk step to the paginator
fn apply_step<T>(paginator: &mut Paginator<'_, T>, step: &str) -> Result<()> {
    match step {
        "next" => paginator.go_to_next(),
        "prev" => paginator.go_to_prev(),
        "first" => paginator.go_to_first(),
        "last" => paginator.go_to_last(),
        _ => {
            if let Some(size) = step.strip_prefix("size=") {
                let size = size.parse::<i64>().map_err(|_| {
                    Error::invalid_value("steps", format!("invalid page size in '{step}'"))
                })?;
                paginator.set_page_size(size);
            } else if step.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+') {
                paginator.go_to_page(step);
            } else {
                return Err(Error::invalid_value(
                    "steps",
                    format!("unknown step '{step}'"),
                ));
            }
        }
    }
    Ok(())
}

/// Render a display sequence as text, bracketing the current page
fn format_sequence(sequence: &[DisplayEntry], position: usize, options: &ControlOptions) -> String {
    sequence
        .iter()
        .map(|entry| match entry {
            DisplayEntry::Page(page) if *page == position => format!("[{page}]"),
            DisplayEntry::Page(page) => page.to_string(),
            DisplayEntry::Gap(_) => options.labels.ellipsis.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
