//! Batch progress display: one bar over the files, one over the current file's stages

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Steps a template goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading and transforming the template
    Parse,
    /// Walking and knocking down walls
    Carve,
    /// Converting the board back to text
    Render,
    /// Writing or printing the result
    Output,
}

impl Stage {
    /// All stages in processing order
    pub const ALL: [Self; 4] = [Self::Parse, Self::Carve, Self::Render, Self::Output];

    /// Short label shown next to the stage bar
    pub const fn label(self) -> &'static str {
        match self {
            Self::Parse => "parsing",
            Self::Carve => "carving",
            Self::Render => "rendering",
            Self::Output => "writing",
        }
    }

    /// Position of this stage on the stage bar
    pub const fn position(self) -> u64 {
        match self {
            Self::Parse => 0,
            Self::Carve => 1,
            Self::Render => 2,
            Self::Output => 3,
        }
    }
}

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:20.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Files: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for a batch of templates
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    stage_bar: Option<ProgressBar>,
    completed: Vec<String>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    /// Create a progress manager that tracks state but draws nothing
    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(target),
            batch_bar: None,
            stage_bar: None,
            completed: Vec::new(),
        }
    }

    /// Create the batch and stage bars
    pub fn initialize(&mut self, file_count: usize) {
        let batch_bar = ProgressBar::new(file_count as u64);
        batch_bar.set_style(BATCH_STYLE.clone());
        self.batch_bar = Some(self.multi_progress.add(batch_bar));

        let stage_bar = ProgressBar::new(Stage::ALL.len() as u64);
        stage_bar.set_style(STAGE_STYLE.clone());
        self.stage_bar = Some(self.multi_progress.add(stage_bar));
    }

    /// Point the stage bar at a new file
    pub fn start_file(&self, path: &Path) {
        if let Some(ref bar) = self.stage_bar {
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            bar.set_prefix(name.to_string());
            bar.set_position(0);
            bar.set_message(Stage::Parse.label());
        }
    }

    /// Move the stage bar to `stage`
    pub fn enter_stage(&self, stage: Stage) {
        if let Some(ref bar) = self.stage_bar {
            bar.set_position(stage.position());
            bar.set_message(stage.label());
        }
    }

    /// Mark the current file done and advance the batch bar
    pub fn complete_file(&mut self, path: &Path, walls_opened: usize, elapsed: Duration) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        if let Some(ref bar) = self.stage_bar {
            bar.set_position(Stage::ALL.len() as u64);
            bar.set_message(format!(
                "✓ {walls_opened} wall(s) opened in {}ms",
                elapsed.as_millis()
            ));
        }
        if let Some(ref bar) = self.batch_bar {
            bar.inc(1);
            bar.set_message(name.clone());
        }
        self.completed.push(name);
    }

    /// File names completed so far, in order
    pub const fn completed(&self) -> &[String] {
        self.completed.as_slice()
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref bar) = self.stage_bar {
            bar.finish_and_clear();
        }
        if let Some(ref bar) = self.batch_bar {
            bar.finish_with_message("All templates processed");
        }
        let _ = self.multi_progress.clear();
    }
}
