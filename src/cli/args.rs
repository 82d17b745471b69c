//! CLI argument definitions
//!
//! Command-line options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Config;
use crate::consts::{DEFAULT_INPUT, DEFAULT_OUTPUT};

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "ki-table")]
#[command(
    about = "Render the AI tool usage spreadsheet as LaTeX table rows for the thesis appendix",
    version
)]
pub(crate) struct Cli {
    /// Workbook to read (first worksheet, first row is the header)
    #[arg(short, long, value_name = "PATH")]
    pub(crate) input: Option<PathBuf>,

    /// LaTeX file to write; its directory must exist
    #[arg(short, long, value_name = "PATH")]
    pub(crate) output: Option<PathBuf>,

    /// Config file (default: ./ki-table.toml, then ~/.config/ki-table/config.toml)
    #[arg(long, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Print the rows that would be written instead of writing them
    #[arg(short = 'n', long)]
    pub(crate) dry_run: bool,

    /// Enable debug logging (excluded rows, skipped rows)
    #[arg(long)]
    pub(crate) debug: bool,

    /// Color mode for the dry-run preview
    #[arg(long, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long)]
    pub(crate) no_color: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if self.input.is_none() {
            self.input = config.input.clone();
        }
        if self.output.is_none() {
            self.output = config.output.clone();
        }
        self
    }

    pub(crate) fn input_path(&self) -> PathBuf {
        self.input.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
    }

    pub(crate) fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}
