//! Find/replace rule tables for microspace boards
//!
//! Hand-drawn templates join glyphs loosely: `_|`, `-|` and `/_` all leave
//! a gap of open microspace at the joint that the walk would slip through.
//! The pre-process rules plug those joints with corners before carving. The
//! post-process rule restores horizontal walls implied by a corner below a
//! claimed cell.

use log::{debug, warn};

use crate::algorithm::pattern::{Pattern, replace};
use crate::io::configuration::MazeConfig;
use crate::spatial::grid::Grid;

/// A find block and the block written over each match
pub type RuleSpec = (&'static [&'static str], &'static [&'static str]);

/// Joint-tightening rules applied to the expanded board before carving
pub const PRE_PROCESS_RULES: &[RuleSpec] = &[
    // _
    // |    _|_   |_   _|
    (&["_", "|"], &["+", "|"]),
    (&["_ | _"], &["_+++_"]),
    (&["| _"], &["++_"]),
    (&["_ |"], &["_++"]),
    // -|  |-
    (&["- |"], &["-++"]),
    (&["| -"], &["++-"]),
    // /_  _\
    (&["/  ___"], &["+++___"]),
    (&["___  \\"], &["___+++"]),
    // \/  /\ and their vertical forms
    (&["\\/"], &["++"]),
    (&["/\\"], &["++"]),
    (&["\\", "/"], &["+", "+"]),
    (&["/", "\\"], &["+", "+"]),
    // \|  |/  /|  |\
    (&["\\ |"], &["\\++"]),
    (&["| /"], &["++/"]),
    (&["/ |"], &["/++"]),
    (&["| \\"], &["++\\"]),
];

/// A compiled find/replace pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Block to look for
    pub find: Pattern,
    /// Block written at every match
    pub replace: Pattern,
}

impl Rule {
    /// Compile a rule from its row strings
    ///
    /// # Errors
    ///
    /// Returns an error if either block is not a valid pattern
    pub fn new<S: AsRef<str>>(find: &[S], replace: &[S]) -> crate::io::error::Result<Self> {
        Ok(Self {
            find: Pattern::new(find)?,
            replace: Pattern::new(replace)?,
        })
    }

    /// Compile a static rule table entry
    ///
    /// # Errors
    ///
    /// Returns an error if either block is not a valid pattern
    pub fn from_spec(spec: &RuleSpec) -> crate::io::error::Result<Self> {
        Self::new(spec.0, spec.1)
    }
}

/// Rules run after carving for the given configuration
///
/// The implied-wall rule rewrites a claimed cell directly above a corner as
/// an underscore. The visited marker is configurable, so the rule is built
/// per call.
pub fn post_process_rules(config: &MazeConfig) -> Vec<Rule> {
    let mut rules = Vec::new();
    if config.close_implied_wall {
        let visited = config.glyphs.visited.to_string();
        match Rule::new(&[visited.as_str(), "+"], &["_", "+"]) {
            Ok(rule) => rules.push(rule),
            Err(err) => warn!("implied wall rule unusable: {err}"),
        }
    }
    rules
}

/// Compile a static rule table, reporting and skipping bad entries
pub fn compile(specs: &[RuleSpec]) -> Vec<Rule> {
    specs
        .iter()
        .filter_map(|spec| match Rule::from_spec(spec) {
            Ok(rule) => Some(rule),
            Err(err) => {
                warn!("skipping rule {:?}: {err}", spec.0);
                None
            }
        })
        .collect()
}

/// Apply rules in order; returns the total number of blocks written
pub fn apply_rules(grid: &mut Grid, rules: &[Rule]) -> usize {
    let written: usize = rules
        .iter()
        .map(|rule| replace(grid, &rule.find, &rule.replace))
        .sum();
    debug!("{} rule(s) wrote {written} block(s)", rules.len());
    written
}
