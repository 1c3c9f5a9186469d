//! Diagnostics emitted while checking properties.

use std::fmt;

/// A human-readable message about a failing check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A generated or shrunk value made the predicate fail.
    Failed { counterexample: String },

    /// Emitted once per failed check with the seed of the failing trial.
    Reproduce { seed: u64 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Failed { counterexample } => write!(f, "Failed: {}", counterexample),
            Diagnostic::Reproduce { seed } => {
                write!(f, "Reproduce failure with --seed={}", seed)
            }
        }
    }
}

/// Receives diagnostics from the property runner.
///
/// The host owns rendering; the runner only hands over messages.
pub trait Reporter {
    fn diagnostic(&mut self, diagnostic: &Diagnostic);
}

impl<F> Reporter for F
where
    F: FnMut(&Diagnostic),
{
    fn diagnostic(&mut self, diagnostic: &Diagnostic) {
        self(diagnostic)
    }
}

/// Collects every diagnostic in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rendered messages, in the order they were reported.
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    /// The last failing value reported, which is the minimal counterexample.
    pub fn last_failure(&self) -> Option<&str> {
        self.entries.iter().rev().find_map(|entry| match entry {
            Diagnostic::Failed { counterexample } => Some(counterexample.as_str()),
            Diagnostic::Reproduce { .. } => None,
        })
    }

    /// The reproduction seed, if one was reported.
    pub fn reproduce_seed(&self) -> Option<u64> {
        self.entries.iter().find_map(|entry| match entry {
            Diagnostic::Reproduce { seed } => Some(*seed),
            Diagnostic::Failed { .. } => None,
        })
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Reporter for Diagnostics {
    fn diagnostic(&mut self, diagnostic: &Diagnostic) {
        self.entries.push(diagnostic.clone());
    }
}

/// Forwards diagnostics to `tracing` at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn diagnostic(&mut self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::Failed { counterexample } => {
                tracing::warn!(counterexample = %counterexample, "{diagnostic}");
            }
            Diagnostic::Reproduce { seed } => {
                tracing::warn!(seed = *seed, "{diagnostic}");
            }
        }
    }
}
