//! Command-line interface for batch processing ASCII templates into mazes

use crate::algorithm::executor::Maze;
use crate::io::configuration::{
    DEFAULT_PAD, DEFAULT_THICKNESS, MazeConfig, OUTPUT_SUFFIX, TEMPLATE_EXTENSION, VerticalBreak,
};
use crate::io::error::{Result, file_error, invalid_template};
use crate::io::progress::{ProgressManager, Stage};
use clap::Parser;
use log::{LevelFilter, info};
use rand::{SeedableRng, rngs::StdRng};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "asciimaze")]
#[command(
    version,
    about = "Turn ASCII line art into a maze by knocking down walls between rooms"
)]
/// Command-line arguments for the maze generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Template file or directory of .txt templates
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible mazes
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum wall thickness crossed when opening a passage
    #[arg(short, long, default_value_t = DEFAULT_THICKNESS)]
    pub thickness: usize,

    /// Maximum wall positions removed per opening
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Treat diagonal walls as 4-connected when removing them
    #[arg(long)]
    pub no_zigzag: bool,

    /// Expand every character into a 3x3 block before carving
    #[arg(short = 's', long)]
    pub microspace: bool,

    /// Do not continue walks from cells that used to be wall
    #[arg(long)]
    pub no_wall_scan: bool,

    /// Mark the open end of underscore runs with a dot
    #[arg(long)]
    pub dot_last_underscore: bool,

    /// Leave claimed cells above corners open in microspace
    #[arg(long)]
    pub no_close_implied_wall: bool,

    /// Break vertical walls next to an underscore into an underscore
    #[arg(long)]
    pub keep_underscore: bool,

    /// Remove whole macro glyphs when breaking walls in microspace
    #[arg(long)]
    pub atomic_walls: bool,

    /// Whitespace frame added around the template
    #[arg(long, default_value_t = DEFAULT_PAD)]
    pub pad: usize,

    /// Output the carved board with frame and markers intact
    #[arg(short, long)]
    pub raw: bool,

    /// Print mazes to stdout instead of writing files
    #[arg(short, long)]
    pub print: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip && !self.print
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && !self.print
    }

    /// Default log level when `RUST_LOG` is unset
    pub const fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }

    /// Parser configuration selected by the flags
    pub fn to_config(&self) -> MazeConfig {
        MazeConfig {
            thickness: self.thickness,
            length: self.length,
            scan_diagonal: !self.no_zigzag,
            use_microspace: self.microspace,
            pad: self.pad,
            scan_wall_space: !self.no_wall_scan,
            close_implied_wall: !self.no_close_implied_wall,
            vertical_break: if self.keep_underscore {
                VerticalBreak::KeepUnderscore
            } else {
                VerticalBreak::Open
            },
            atomic_macro_walls: self.atomic_walls,
            dot_last_underscore: self.dot_last_underscore,
            ..MazeConfig::default()
        }
    }
}

/// Orchestrates batch processing of template files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    config: MazeConfig,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let config = cli.to_config();

        Self {
            cli,
            config,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The target is neither a file nor a directory
    /// - The configuration is invalid
    /// - A template cannot be read or its maze cannot be written
    pub fn process(&mut self) -> Result<()> {
        self.config.validate()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            info!("nothing to process in {}", self.cli.target.display());
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if self.should_process_file(target) {
                Ok(vec![target.clone()])
            } else {
                Ok(vec![])
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            let entries = std::fs::read_dir(target).map_err(|e| file_error(target, "list", e))?;
            for entry in entries {
                let path = entry.map_err(|e| file_error(target, "list", e))?.path();
                if is_template(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_template("Target must be a template file or directory"))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let mut maze = Maze::from_file(input_path, self.config.clone())?;

        if let Some(ref pm) = self.progress_manager {
            pm.enter_stage(Stage::Carve);
        }
        let mut rng = self
            .cli
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let report = maze.carve(&mut rng);

        if let Some(ref pm) = self.progress_manager {
            pm.enter_stage(Stage::Render);
        }
        let text = if self.cli.raw {
            maze.render_raw()
        } else {
            maze.render()
        };

        if let Some(ref pm) = self.progress_manager {
            pm.enter_stage(Stage::Output);
        }
        if self.cli.print {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .map_err(|e| file_error("<stdout>", "write", e))?;
        } else {
            let output_path = Self::output_path(input_path);
            std::fs::write(&output_path, text).map_err(|e| file_error(&output_path, "write", e))?;
            info!("wrote {}", output_path.display());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(input_path, report.walls_opened, start_time.elapsed());
        }

        Ok(())
    }

    /// Where the maze for `input_path` is written: `<stem>_maze.<ext>` alongside it
    pub fn output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = input_path.extension().map_or_else(
            || format!("{}{OUTPUT_SUFFIX}", stem.to_string_lossy()),
            |extension| {
                format!(
                    "{}{OUTPUT_SUFFIX}.{}",
                    stem.to_string_lossy(),
                    extension.to_string_lossy()
                )
            },
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

/// Template files in a directory: `.txt`, excluding earlier outputs
fn is_template(path: &Path) -> bool {
    let is_text = path.extension().and_then(|s| s.to_str()) == Some(TEMPLATE_EXTENSION);
    let is_output = path
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX));
    is_text && !is_output
}
