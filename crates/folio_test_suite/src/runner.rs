//! Scenario runner
//!
//! Collects suites, filters them by name and reports a summary.

use crate::harness::{Setup, TestContext, TestHarness, TestResult};
use std::collections::HashMap;
use std::time::{Duration, Instant};

type ScenarioFn = Box<dyn FnOnce(&mut TestContext) + Send>;

/// A single scenario
pub struct TestCase {
    /// Scenario name
    pub name: String,
    /// Suite the scenario belongs to
    pub category: String,
    /// Page the scenario starts from
    pub setup: Setup,
    /// Scenario body
    pub test_fn: ScenarioFn,
}

impl TestCase {
    pub fn new<F>(name: &str, category: &str, setup: Setup, test_fn: F) -> Self
    where
        F: FnOnce(&mut TestContext) + Send + 'static,
    {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            setup,
            test_fn: Box::new(test_fn),
        }
    }
}

/// Result of running one scenario
pub struct TestRun {
    pub name: String,
    pub category: String,
    pub result: TestResult,
    pub duration: Duration,
}

impl TestRun {
    pub fn is_passed(&self) -> bool {
        self.result.is_passed()
    }
}

/// Named group of scenarios
pub struct TestSuite {
    pub name: String,
    pub cases: Vec<TestCase>,
}

impl TestSuite {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            cases: Vec::new(),
        }
    }

    /// Add a scenario on the default page
    pub fn add<F>(&mut self, name: &str, test_fn: F) -> &mut Self
    where
        F: FnOnce(&mut TestContext) + Send + 'static,
    {
        self.add_with(name, Setup::default(), test_fn)
    }

    /// Add a scenario on a custom page
    pub fn add_with<F>(&mut self, name: &str, setup: Setup, test_fn: F) -> &mut Self
    where
        F: FnOnce(&mut TestContext) + Send + 'static,
    {
        self.cases
            .push(TestCase::new(name, &self.name, setup, test_fn));
        self
    }
}

/// Runs suites through a [`TestHarness`]
#[derive(Default)]
pub struct TestRunner {
    harness: TestHarness,
    suites: Vec<TestSuite>,
    filter: Option<String>,
}

impl TestRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_suite(&mut self, suite: TestSuite) -> &mut Self {
        self.suites.push(suite);
        self
    }

    /// Only run scenarios whose name or suite contains `pattern`
    pub fn filter(&mut self, pattern: &str) -> &mut Self {
        self.filter = Some(pattern.to_string());
        self
    }

    /// Run every selected scenario
    pub fn run(&mut self) -> RunResult {
        let start = Instant::now();
        let mut results = Vec::new();

        for suite in self.suites.drain(..) {
            tracing::info!("Running suite: {}", suite.name);

            for case in suite.cases {
                if let Some(ref pattern) = self.filter {
                    if !case.name.contains(pattern) && !case.category.contains(pattern) {
                        continue;
                    }
                }

                let test_start = Instant::now();
                let full_name = format!("{}::{}", case.category, case.name);
                tracing::debug!("Running scenario: {}", full_name);

                let result = self.harness.run_test(&full_name, case.setup, case.test_fn);
                let duration = test_start.elapsed();

                match &result {
                    TestResult::Passed => tracing::info!("  ✓ {} ({:?})", case.name, duration),
                    TestResult::Skipped { reason } => {
                        tracing::info!("  - {} skipped: {}", case.name, reason)
                    }
                    TestResult::Failed { failures } => {
                        tracing::error!("  ✗ {} ({:?})", case.name, duration);
                        for failure in failures {
                            tracing::error!("      {}", failure);
                        }
                    }
                }

                results.push(TestRun {
                    name: case.name,
                    category: case.category,
                    result,
                    duration,
                });
            }
        }

        RunResult::new(results, start.elapsed())
    }

    pub fn harness(&self) -> &TestHarness {
        &self.harness
    }
}

/// Results of a run
pub struct RunResult {
    pub results: Vec<TestRun>,
    pub duration: Duration,
}

impl RunResult {
    pub fn new(results: Vec<TestRun>, duration: Duration) -> Self {
        Self { results, duration }
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.is_passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| !r.is_passed()).count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.is_passed())
    }

    /// Runs grouped by suite
    pub fn by_category(&self) -> HashMap<String, Vec<&TestRun>> {
        let mut map: HashMap<String, Vec<&TestRun>> = HashMap::new();
        for result in &self.results {
            map.entry(result.category.clone()).or_default().push(result);
        }
        map
    }

    pub fn print_summary(&self) {
        println!("\n╔══════════════════════════════════════════╗");
        println!("║         SCENARIO RESULTS SUMMARY         ║");
        println!("╠══════════════════════════════════════════╣");
        println!("║  Passed:  {:>5}                          ║", self.passed());
        println!("║  Failed:  {:>5}                          ║", self.failed());
        println!("║  Total:   {:>5}                          ║", self.total());
        println!("║  Time:    {:>8.2?}                      ║", self.duration);
        println!("╚══════════════════════════════════════════╝");

        if self.failed() > 0 {
            println!("\nFailed scenarios:");
            for run in &self.results {
                if let TestResult::Failed { failures } = &run.result {
                    println!("  ✗ {}::{}", run.category, run.name);
                    for failure in failures {
                        println!("      {failure}");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suite() -> TestSuite {
        let mut suite = TestSuite::new("sample");
        suite
            .add("passes", |ctx| ctx.check(true, "never"))
            .add("fails", |ctx| ctx.check(false, "always"))
            .add("panics", |_| panic!("boom"));
        suite
    }

    #[test]
    fn test_run_counts_results() {
        let mut runner = TestRunner::new();
        runner.add_suite(suite());
        let result = runner.run();

        assert_eq!(result.total(), 3);
        assert_eq!(result.passed(), 1);
        assert_eq!(result.failed(), 2);
        assert!(!result.all_passed());
        assert_eq!(result.by_category()["sample"].len(), 3);
        assert_eq!(runner.harness().runs(), 3);
    }

    #[test]
    fn test_filter_selects_by_name() {
        let mut runner = TestRunner::new();
        runner.add_suite(suite()).filter("pass");
        let result = runner.run();

        assert_eq!(result.total(), 1);
        assert!(result.all_passed());
    }

    #[test]
    fn test_panic_is_reported_as_failure() {
        let mut runner = TestRunner::new();
        runner.add_suite(suite()).filter("panics");
        let result = runner.run();

        match &result.results[0].result {
            TestResult::Failed { failures } => assert!(failures[0].contains("boom")),
            other => panic!("expected failure, got {other:?}"),
        }
    }
}
