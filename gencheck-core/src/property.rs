//! Check runner: draws samples, applies a predicate and aggregates outcomes.

use crate::{data::*, error::*, gen::*, registry::*};
use std::convert::Infallible;
use std::fmt::{self, Debug};
use std::io::{self, Write};

/// One generated value paired with the predicate's verdict on it.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleOutcome<T> {
    pub value: T,
    pub passed: bool,
}

impl<T: Debug> fmt::Display for SampleOutcome<T> {
    /// The per-sample trace line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = if self.passed { "OK" } else { "Failed" };
        write!(f, "[{tag:>9} ] value: {:?}", self.value)
    }
}

/// Aggregate of every sample outcome in one check run.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult<T> {
    /// Outcomes in generation order.
    pub outcomes: Vec<SampleOutcome<T>>,
    /// Seed of the source the run drew from; replay with [`Config::with_seed`].
    pub seed: u64,
    pub property_name: Option<String>,
}

impl<T> CheckResult<T> {
    /// True iff every sample passed (vacuously true for an empty run).
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.passed)
    }

    pub fn tests_run(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.passed).count()
    }

    pub fn failed_count(&self) -> usize {
        self.tests_run() - self.passed_count()
    }

    /// Failing outcomes, in generation order.
    pub fn failures(&self) -> impl Iterator<Item = &SampleOutcome<T>> {
        self.outcomes.iter().filter(|outcome| !outcome.passed)
    }
}

impl<T: Debug> fmt::Display for CheckResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prop_name = self.property_name.as_deref().unwrap_or("property");
        let mut failures = self.failures();
        let Some(first) = failures.next() else {
            return write!(f, "  ✓ {} passed {} tests.", prop_name, self.tests_run());
        };

        writeln!(
            f,
            "  ✗ {} failed {} of {} tests.",
            prop_name,
            self.failed_count(),
            self.tests_run()
        )?;
        writeln!(f, "    Replay with seed {}", self.seed)?;
        for outcome in failures {
            writeln!(f, "      │ {:?}", outcome.value)?;
        }
        write!(f, "    First counterexample: {:?}", first.value)
    }
}

type Predicate<T> = Box<dyn Fn(&T) -> bool>;

/// A predicate paired with the generator feeding it.
pub struct Property<T> {
    generator: Gen<T>,
    predicate: Predicate<T>,
    name: Option<String>,
}

impl<T> Property<T>
where
    T: Debug + 'static,
{
    /// Create a property that checks a boolean condition.
    pub fn for_all<G, F>(generator: G, predicate: F) -> Self
    where
        G: Generator<Value = T> + 'static,
        F: Fn(&T) -> bool + 'static,
    {
        Property {
            generator: generator.boxed(),
            predicate: Box::new(predicate),
            name: None,
        }
    }

    /// Name the property in the run summary.
    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Run against a fresh source, tracing each sample to stdout.
    ///
    /// Every configured sample is drawn and evaluated; a failing sample
    /// never stops the run. A panicking predicate is not caught.
    pub fn run(&self, config: &Config) -> CheckResult<T> {
        let mut source = config.source();
        self.run_with_source(config, &mut source)
    }

    /// Run against a caller-owned source.
    pub fn run_with_source(&self, config: &Config, source: &mut Source) -> CheckResult<T> {
        let seed = source.seed();
        let outcomes = drive(
            config.test_limit,
            || self.generator.generate(source),
            |value| Ok::<_, Infallible>((self.predicate)(value)),
            |outcome| {
                if config.trace {
                    println!("{outcome}");
                }
                Ok(())
            },
        );
        self.result(unwrap_infallible(outcomes), seed)
    }

    /// Run against a fresh source, tracing each sample to `out`.
    pub fn run_with_writer<W: Write>(
        &self,
        config: &Config,
        out: &mut W,
    ) -> io::Result<CheckResult<T>> {
        let mut source = config.source();
        let seed = source.seed();
        let outcomes = drive(
            config.test_limit,
            || self.generator.generate(&mut source),
            |value| Ok::<_, io::Error>((self.predicate)(value)),
            |outcome| {
                if config.trace {
                    writeln!(out, "{outcome}")?;
                }
                Ok(())
            },
        )?;
        Ok(self.result(outcomes, seed))
    }

    /// Run drawing from a source shared with other runs.
    ///
    /// The shared lock is held only while a sample is generated; the
    /// predicate runs without it. `config.seed` is ignored.
    pub fn run_shared(&self, config: &Config, shared: &SharedSource) -> CheckResult<T> {
        let outcomes = drive(
            config.test_limit,
            || shared.draw(&self.generator),
            |value| Ok::<_, Infallible>((self.predicate)(value)),
            |outcome| {
                if config.trace {
                    println!("{outcome}");
                }
                Ok(())
            },
        );
        self.result(unwrap_infallible(outcomes), shared.seed())
    }

    fn result(&self, outcomes: Vec<SampleOutcome<T>>, seed: u64) -> CheckResult<T> {
        CheckResult {
            outcomes,
            seed,
            property_name: self.name.clone(),
        }
    }
}

/// Create a property that checks a boolean condition.
pub fn for_all<G, F>(generator: G, predicate: F) -> Property<G::Value>
where
    G: Generator + 'static,
    G::Value: Debug + 'static,
    F: Fn(&G::Value) -> bool + 'static,
{
    Property::for_all(generator, predicate)
}

/// Draw `count` samples from `generator` and evaluate `predicate` on each.
pub fn check<G, F>(generator: G, predicate: F, count: usize) -> CheckResult<G::Value>
where
    G: Generator + 'static,
    G::Value: Debug + 'static,
    F: Fn(&G::Value) -> bool + 'static,
{
    for_all(generator, predicate).run(&Config::default().with_tests(count))
}

/// Like [`check`], for predicates that can fail.
///
/// The first error the predicate returns is handed back untouched and the
/// remaining samples are not drawn. Returning `Ok(false)` is an ordinary
/// failing sample.
pub fn try_check<G, F, E>(
    generator: G,
    predicate: F,
    count: usize,
) -> std::result::Result<CheckResult<G::Value>, E>
where
    G: Generator,
    G::Value: Debug,
    F: FnMut(&G::Value) -> std::result::Result<bool, E>,
{
    let mut source = Source::from_entropy();
    let seed = source.seed();
    let outcomes = drive(
        count,
        || generator.generate(&mut source),
        predicate,
        |outcome| {
            println!("{outcome}");
            Ok(())
        },
    )?;
    Ok(CheckResult {
        outcomes,
        seed,
        property_name: None,
    })
}

/// Check `predicate` against the registry's generator for `T`.
pub fn quick_check<T, F>(registry: &Registry, predicate: F, config: &Config) -> Result<CheckResult<T>>
where
    T: Debug + 'static,
    F: Fn(&T) -> bool + 'static,
{
    Ok(for_all(registry.resolve::<T>()?, predicate).run(config))
}

fn drive<T, X>(
    count: usize,
    mut draw: impl FnMut() -> T,
    mut evaluate: impl FnMut(&T) -> std::result::Result<bool, X>,
    mut emit: impl FnMut(&SampleOutcome<T>) -> std::result::Result<(), X>,
) -> std::result::Result<Vec<SampleOutcome<T>>, X> {
    let mut outcomes = Vec::with_capacity(count);
    for _ in 0..count {
        let value = draw();
        let passed = evaluate(&value)?;
        let outcome = SampleOutcome { value, passed };
        emit(&outcome)?;
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

fn unwrap_infallible<T>(result: std::result::Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
