//! Properties and the check loop.

use crate::arbitrary::Arbitrary;
use crate::error::{CheckResult, ShrinkStep};
use crate::random::RandomSource;
use crate::report::{Diagnostic, Reporter};

/// A predicate over one argument type.
pub trait Predicate<T> {
    /// Whether the predicate holds for `value`.
    fn holds(&self, value: &T) -> bool;
}

impl<T, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn holds(&self, value: &T) -> bool {
        self(value)
    }
}

/// A predicate checked against generated values.
///
/// The property holds the seed its first trial is generated from. Later
/// trials draw their seeds from the [`RandomSource`] passed to
/// [`Property::run`].
pub struct Property<T> {
    predicate: Box<dyn Predicate<T>>,
    seed: u64,
    name: Option<String>,
}

impl<T> Property<T>
where
    T: Arbitrary + 'static,
{
    /// Create a property whose first trial uses `seed`.
    pub fn new<P>(predicate: P, seed: u64) -> Self
    where
        P: Predicate<T> + 'static,
    {
        Property {
            predicate: Box::new(predicate),
            seed,
            name: None,
        }
    }

    /// Name the property in rendered results.
    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The seed of the first trial.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Run up to `trials` trials, stopping at the first failure.
    ///
    /// Every trial is generated at level `trials`; only the seed changes
    /// between trials.
    pub fn check<R>(&self, trials: usize, reporter: &mut R, random: &mut RandomSource) -> bool
    where
        R: Reporter + ?Sized,
    {
        self.run(trials, reporter, random).is_pass()
    }

    /// Like [`Property::check`], returning the full outcome.
    pub fn run<R>(&self, trials: usize, reporter: &mut R, random: &mut RandomSource) -> CheckResult
    where
        R: Reporter + ?Sized,
    {
        let mut seed = self.seed;

        for trial in 0..trials {
            let value = T::generate(trials, seed);
            let mut shrink_steps = Vec::new();

            if !self.search(&value, reporter, &mut shrink_steps) {
                reporter.diagnostic(&Diagnostic::Reproduce { seed });

                let counterexample = shrink_steps
                    .last()
                    .map(|step| step.counterexample.clone())
                    .unwrap_or_default();
                tracing::debug!(
                    trial,
                    seed,
                    counterexample = %counterexample,
                    "property failed"
                );

                return CheckResult::Fail {
                    counterexample,
                    seed,
                    trials_run: trial + 1,
                    shrinks_performed: shrink_steps.len().saturating_sub(1),
                    property_name: self.name.clone(),
                    shrink_steps,
                };
            }

            seed = random.next_seed();
        }

        tracing::debug!(trials, "property passed");
        CheckResult::Pass {
            trials_run: trials,
            property_name: self.name.clone(),
        }
    }

    /// Check one value, shrinking it if the predicate fails.
    ///
    /// A failing value is reported, then every shrink candidate is checked
    /// the same way in order. The search stops at the first candidate that
    /// fails down to a value with no candidates left. A failing value with
    /// no candidates is a failure; one whose candidates all pass is not.
    pub fn check_single<R>(&self, value: &T, reporter: &mut R) -> bool
    where
        R: Reporter + ?Sized,
    {
        self.search(value, reporter, &mut Vec::new())
    }

    /// `check_single`, recording every reported value in `shrink_steps`.
    fn search<R>(&self, value: &T, reporter: &mut R, shrink_steps: &mut Vec<ShrinkStep>) -> bool
    where
        R: Reporter + ?Sized,
    {
        if self.predicate.holds(value) {
            return true;
        }

        let counterexample = format!("{value:?}");
        tracing::trace!(step = shrink_steps.len(), counterexample = %counterexample, "failing value");
        reporter.diagnostic(&Diagnostic::Failed {
            counterexample: counterexample.clone(),
        });
        shrink_steps.push(ShrinkStep {
            counterexample,
            step: shrink_steps.len(),
        });

        let candidates = value.shrink();
        if candidates.is_empty() {
            return false;
        }

        for candidate in &candidates {
            if !self.search(candidate, reporter, shrink_steps) {
                return false;
            }
        }
        true
    }
}
