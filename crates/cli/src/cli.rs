//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use font_library::{FontLibrary, default_font_dirs};
use font_variations::{Config, VariationCatalog, decode_tag, encode_tag};
use log::info;

use crate::report::{axes_report, instances_report};

#[derive(Parser)]
#[command(name = "fontvar", version)]
#[command(about = "Inspect variation axes and named instances of variable fonts")]
pub struct Cli {
    /// Extra directory to search for fonts (repeatable)
    #[arg(short = 'd', long = "font-dir", global = true)]
    pub font_dirs: Vec<PathBuf>,

    /// Skip the platform's font directories
    #[arg(long, global = true)]
    pub no_system_fonts: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the variation axes of a font
    Axes { font: String },
    /// Show the named instances of a font
    Instances {
        font: String,
        /// Ignore instance axes the font does not advertise instead of failing
        #[arg(long)]
        skip_unmatched_axes: bool,
    },
    /// List the names fonts can be looked up by
    Fonts,
    /// Convert between packed integers and 4-character tags
    #[command(subcommand)]
    Tag(TagCommand),
}

#[derive(Subcommand)]
pub enum TagCommand {
    /// Packed integer (decimal or 0x-prefixed hex) to tag
    Decode { value: String },
    /// Tag to packed integer
    Encode { tag: String },
}

impl TagCommand {
    pub fn run(&self) -> Result<String> {
        match self {
            TagCommand::Decode { value } => Ok(decode_tag(parse_packed(value)?)),
            TagCommand::Encode { tag } => {
                let value = encode_tag(tag)?;
                Ok(format!("{value} (0x{value:08X})"))
            }
        }
    }
}

/// Parse a decimal or `0x`-prefixed hexadecimal `u32`.
pub fn parse_packed(value: &str) -> Result<u32> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.with_context(|| format!("Invalid packed tag '{value}'"))
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match &self.command {
            Commands::Tag(tag) => println!("{}", tag.run()?),
            Commands::Fonts => {
                for name in self.library()?.font_names() {
                    println!("{name}");
                }
            }
            Commands::Axes { font } => {
                let catalog = VariationCatalog::new(self.library()?);
                let axes = catalog.axis_catalog(font)?;
                print!("{}", axes_report(&axes));
            }
            Commands::Instances { font, skip_unmatched_axes } => {
                let mut config = Config::default();
                if *skip_unmatched_axes {
                    config = config.skip_unmatched_axes();
                }
                let catalog = VariationCatalog::new(self.library()?).with_config(config);
                let instances = catalog.named_instances(font)?;
                print!("{}", instances_report(&instances));
            }
        }
        Ok(())
    }

    fn library(&self) -> Result<FontLibrary> {
        let mut dirs = self.font_dirs.clone();
        if !self.no_system_fonts {
            dirs.extend(default_font_dirs());
        }
        let library = FontLibrary::with_dirs(&dirs).context("Failed to index fonts")?;
        info!("Indexed {} faces from {} directories", library.len(), dirs.len());
        Ok(library)
    }
}
