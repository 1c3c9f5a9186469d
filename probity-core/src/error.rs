//! Error and outcome types for Probity property-based testing.

use std::fmt;
use thiserror::Error;

/// Main error type for Probity.
///
/// Predicate failures are not errors: they come back as
/// [`CheckResult::Fail`]. Only a session that cannot run at all errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbityError {
    /// Run parameters a session cannot use.
    #[error("Invalid run parameters: {message}")]
    InvalidParams { message: String },
}

/// Result type for Probity operations.
pub type Result<T> = std::result::Result<T, ProbityError>;

/// One failing value visited by the shrink search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShrinkStep {
    /// The failing value at this step.
    pub counterexample: String,
    /// The depth in the search (0 = the generated value).
    pub step: usize,
}

/// Outcome of checking a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    /// Every trial held.
    Pass {
        trials_run: usize,
        property_name: Option<String>,
    },

    /// A trial failed; the counterexample is the minimal one found.
    Fail {
        counterexample: String,
        /// The seed the failing trial was generated from.
        seed: u64,
        trials_run: usize,
        shrinks_performed: usize,
        property_name: Option<String>,
        /// Every failing value from the generated one down to the minimum.
        shrink_steps: Vec<ShrinkStep>,
    },
}

impl CheckResult {
    /// Whether the property held for every trial.
    pub fn is_pass(&self) -> bool {
        matches!(self, CheckResult::Pass { .. })
    }

    /// The minimal counterexample, if the check failed.
    pub fn counterexample(&self) -> Option<&str> {
        match self {
            CheckResult::Pass { .. } => None,
            CheckResult::Fail { counterexample, .. } => Some(counterexample),
        }
    }

    /// The seed reproducing the failure, if the check failed.
    pub fn failing_seed(&self) -> Option<u64> {
        match self {
            CheckResult::Pass { .. } => None,
            CheckResult::Fail { seed, .. } => Some(*seed),
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckResult::Pass {
                trials_run,
                property_name,
            } => {
                let prop_name = property_name.as_deref().unwrap_or("property");
                write!(f, "  ✓ {} passed {} trials.", prop_name, trials_run)
            }
            CheckResult::Fail {
                counterexample,
                seed,
                trials_run,
                shrinks_performed,
                property_name,
                shrink_steps,
            } => {
                let prop_name = property_name.as_deref().unwrap_or("property");
                writeln!(
                    f,
                    "  ✗ {} failed after {} trials and {} shrinks.",
                    prop_name, trials_run, shrinks_performed
                )?;

                if !shrink_steps.is_empty() {
                    writeln!(f)?;
                    writeln!(f, "    Shrinking progression:")?;
                    for step in shrink_steps {
                        if step.step == 0 {
                            writeln!(f, "      │ Original: {}", step.counterexample)?;
                        } else {
                            writeln!(f, "      │ Step {}: {}", step.step, step.counterexample)?;
                        }
                    }
                    writeln!(f)?;
                }

                writeln!(f, "    Minimal counterexample: {}", counterexample)?;
                write!(f, "    Reproduce with seed={}", seed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_params_display() {
        let error = ProbityError::InvalidParams {
            message: "num_property_checks must be positive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid run parameters: num_property_checks must be positive"
        );
    }

    #[test]
    fn test_pass_rendering() {
        let result = CheckResult::Pass {
            trials_run: 100,
            property_name: Some("reverse_twice".to_string()),
        };
        assert!(result.is_pass());
        assert_eq!(result.counterexample(), None);
        assert_eq!(format!("{result}"), "  ✓ reverse_twice passed 100 trials.");
    }

    #[test]
    fn test_failure_rendering() {
        let result = CheckResult::Fail {
            counterexample: "[]".to_string(),
            seed: 7,
            trials_run: 1,
            shrinks_performed: 2,
            property_name: None,
            shrink_steps: vec![
                ShrinkStep {
                    counterexample: "[1, 2]".to_string(),
                    step: 0,
                },
                ShrinkStep {
                    counterexample: "[1]".to_string(),
                    step: 1,
                },
                ShrinkStep {
                    counterexample: "[]".to_string(),
                    step: 2,
                },
            ],
        };

        let expected = "  ✗ property failed after 1 trials and 2 shrinks.\n\
                        \n    Shrinking progression:\n\
                        \x20     │ Original: [1, 2]\n\
                        \x20     │ Step 1: [1]\n\
                        \x20     │ Step 2: []\n\
                        \n    Minimal counterexample: []\n\
                        \x20   Reproduce with seed=7";
        assert_eq!(format!("{result}"), expected);
        assert_eq!(result.failing_seed(), Some(7));
        assert_eq!(result.counterexample(), Some("[]"));
    }
}
