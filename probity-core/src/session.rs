//! Check sessions: run parameters plus the random stream they seed.

use crate::arbitrary::Arbitrary;
use crate::data::RunParams;
use crate::error::{CheckResult, Result};
use crate::property::{Predicate, Property};
use crate::random::RandomSource;
use crate::report::{Reporter, TracingReporter};

/// One check session.
///
/// The session seeds its [`RandomSource`] exactly once, from the explicit
/// seed in [`RunParams`] or from system entropy when that seed is zero.
/// Properties created by the session start from that same seed.
#[derive(Debug, Clone)]
pub struct Session {
    params: RunParams,
    random: RandomSource,
}

impl Session {
    /// Start a session. Fails if the parameters are invalid.
    pub fn new(params: RunParams) -> Result<Self> {
        params.validate()?;
        let random = RandomSource::new(params.random_seed);
        tracing::debug!(
            seed = random.active_seed(),
            from_entropy = params.wants_entropy(),
            checks = params.num_property_checks,
            "session seeded"
        );
        Ok(Session { params, random })
    }

    pub fn params(&self) -> &RunParams {
        &self.params
    }

    /// The seed actually in use; never zero.
    pub fn seed(&self) -> u64 {
        self.random.active_seed()
    }

    /// Create a property starting from the session seed.
    pub fn property<T, P>(&self, predicate: P) -> Property<T>
    where
        T: Arbitrary + 'static,
        P: Predicate<T> + 'static,
    {
        Property::new(predicate, self.seed())
    }

    /// Check a property with the session's trial count.
    pub fn check<T, R>(&mut self, property: &Property<T>, reporter: &mut R) -> bool
    where
        T: Arbitrary + 'static,
        R: Reporter + ?Sized,
    {
        self.run(property, reporter).is_pass()
    }

    /// Like [`Session::check`], returning the full outcome.
    pub fn run<T, R>(&mut self, property: &Property<T>, reporter: &mut R) -> CheckResult
    where
        T: Arbitrary + 'static,
        R: Reporter + ?Sized,
    {
        property.run(self.params.num_property_checks, reporter, &mut self.random)
    }
}

/// Check a predicate in a fresh session, reporting through `tracing`.
pub fn for_all<T, P>(params: RunParams, predicate: P) -> Result<CheckResult>
where
    T: Arbitrary + 'static,
    P: Predicate<T> + 'static,
{
    let mut session = Session::new(params)?;
    let property = session.property(predicate);
    Ok(session.run(&property, &mut TracingReporter))
}
