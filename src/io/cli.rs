//! Command-line interface for extracting grids from world-state files
//!
//! The surface is a verb/noun/target tree: the `extract` verb selects a
//! gamefile, the noun selects which derived grid to act on, and the target
//! selects where it goes. Parsed arguments are threaded through explicit
//! structs; the noun and target sets are closed enums so dispatch is an
//! exhaustive match.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use log::info;

use crate::grid::Grid;
use crate::io::configuration::LAYOUT_EXTENSION;
use crate::io::error::{ExtractError, Result, fs_error};
use crate::io::{gamefile, screen};
use crate::layout::encode_layout;

/// Command-line arguments for the island grid extraction tool
#[derive(Parser)]
#[command(name = "islegrid")]
#[command(
    author,
    version,
    about = "Extract island terrain grids from Anno 1800 world-state files"
)]
pub struct Cli {
    /// The verb to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level verbs
#[derive(Subcommand)]
pub enum Command {
    /// Extract a derived grid from a world-state file
    Extract(ExtractArgs),
}

/// Arguments of the `extract` verb
#[derive(Args)]
pub struct ExtractArgs {
    /// XML interpreted from the game's gamedata.data file
    #[arg(value_name = "GAMEFILE")]
    pub gamefile: PathBuf,

    /// Which derived grid to act on
    #[command(subcommand)]
    pub noun: Noun,
}

/// The derived grid a target acts on
#[derive(Subcommand)]
pub enum Noun {
    /// Land, rivers and harbour areas
    IslandGrid {
        /// Where the grid goes
        #[command(subcommand)]
        target: ScreenTarget,
    },
    /// Land areas
    LandGrid {
        /// Where the grid goes
        #[command(subcommand)]
        target: ScreenTarget,
    },
    /// River areas
    RiverGrid {
        /// Where the grid goes
        #[command(subcommand)]
        target: ScreenTarget,
    },
    /// Harbour areas
    HarbourGrid {
        /// Where the grid goes
        #[command(subcommand)]
        target: ScreenTarget,
    },
    /// Classified island boundary outline
    IslandOutline {
        /// Where the grid goes
        #[command(subcommand)]
        target: OutlineTarget,
    },
}

/// Targets available for the plain grid nouns
#[derive(Subcommand)]
pub enum ScreenTarget {
    /// Render the grid to the terminal
    ToScreen(ScreenOptions),
}

/// Targets available for the classified outline
#[derive(Subcommand)]
pub enum OutlineTarget {
    /// Render the grid to the terminal
    ToScreen(ScreenOptions),
    /// Write the grid as an AnnoDesigner layout file
    ToAdLayout(LayoutOptions),
}

/// Options of the `to-screen` target
#[derive(Args)]
pub struct ScreenOptions {
    /// Maximum columns to render (defaults to the terminal width)
    #[arg(long)]
    pub max_width: Option<usize>,
}

/// Options of the `to-ad-layout` target
#[derive(Args)]
pub struct LayoutOptions {
    /// Path to output AnnoDesigner layout file
    #[arg(short = 'o', long = "outputFile")]
    pub output_file: Option<PathBuf>,

    /// Overwrite the output file if it exists
    #[arg(short = 'y', long)]
    pub overwrite: bool,
}

/// Executes one `extract` invocation
pub struct Extractor {
    args: ExtractArgs,
}

impl Extractor {
    /// Create an extractor for the given arguments
    pub const fn new(args: ExtractArgs) -> Self {
        Self { args }
    }

    /// Load the gamefile and dispatch the selected noun and target
    ///
    /// # Errors
    ///
    /// Returns any error of the load, decode, classification or output
    /// stages. An existing output file without `--overwrite` is not an
    /// error: a notice is printed and nothing is written.
    pub fn run(&self) -> Result<()> {
        let grids = gamefile::load_island_grids(&self.args.gamefile)?;
        match &self.args.noun {
            Noun::IslandGrid { target } => Self::to_screen_only(&grids.island(), target),
            Noun::LandGrid { target } => Self::to_screen_only(&grids.land()?, target),
            Noun::RiverGrid { target } => Self::to_screen_only(&grids.river(), target),
            Noun::HarbourGrid { target } => Self::to_screen_only(&grids.harbour()?, target),
            Noun::IslandOutline { target } => {
                let outline = grids.classified_outline()?;
                match target {
                    OutlineTarget::ToScreen(options) => Self::render(&outline, options),
                    OutlineTarget::ToAdLayout(options) => self.to_ad_layout(&outline, options),
                }
            }
        }
    }

    fn to_screen_only(grid: &Grid, target: &ScreenTarget) -> Result<()> {
        let ScreenTarget::ToScreen(options) = target;
        Self::render(grid, options)
    }

    fn render(grid: &Grid, options: &ScreenOptions) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        screen::render_grid(grid, &mut stdout, options.max_width)
            .map_err(|err| fs_error(Path::new("stdout"), "render", err))
    }

    // Allow print for the overwrite notice, matching the recoverable
    // OutputExists contract
    #[allow(clippy::print_stderr)]
    fn to_ad_layout(&self, grid: &Grid, options: &LayoutOptions) -> Result<()> {
        let path = options
            .output_file
            .clone()
            .unwrap_or_else(|| self.args.gamefile.with_extension(LAYOUT_EXTENSION));
        match write_layout_file(grid, &path, options.overwrite) {
            Err(ExtractError::OutputExists { path: existing }) => {
                eprintln!(
                    "Output file '{}' already exists, specify -y to overwrite it",
                    existing.display()
                );
                Ok(())
            }
            other => other,
        }
    }
}

/// Encode a grid and write it as a layout file
///
/// The document is fully constructed before the file is created, so a
/// failed run never leaves a partially written layout behind.
///
/// # Errors
///
/// Returns [`ExtractError::OutputExists`] if the path is present and
/// `overwrite` is false, and file system or serialization errors otherwise.
pub fn write_layout_file(grid: &Grid, path: &Path, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        return Err(ExtractError::OutputExists {
            path: path.to_path_buf(),
        });
    }
    let document = encode_layout(grid);
    let file = File::create(path).map_err(|err| fs_error(path, "create", err))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &document).map_err(|source| ExtractError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    writer
        .flush()
        .map_err(|err| fs_error(path, "flush", err))?;
    info!(
        "wrote {} placement records to '{}'",
        document.objects().len(),
        path.display()
    );
    Ok(())
}
