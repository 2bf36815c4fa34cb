//! Every bundled scenario passes.

use folio_test_suite::{scenarios, TestResult, TestRunner};

#[test]
fn all_scenarios_pass() {
    let mut runner = TestRunner::new();
    for suite in scenarios::all_suites() {
        runner.add_suite(suite);
    }
    let result = runner.run();

    let failures: Vec<String> = result
        .results
        .iter()
        .filter_map(|run| match &run.result {
            TestResult::Failed { failures } => {
                Some(format!("{}::{}: {}", run.category, run.name, failures.join("; ")))
            }
            _ => None,
        })
        .collect();
    assert!(failures.is_empty(), "failed scenarios:\n{}", failures.join("\n"));
    assert!(result.total() >= 30);
}

#[test]
fn filter_by_suite_name() {
    let mut runner = TestRunner::new();
    for suite in scenarios::all_suites() {
        runner.add_suite(suite);
    }
    runner.filter("tooltip");
    let result = runner.run();

    assert_eq!(result.by_category().len(), 1);
    assert!(result.results.iter().all(|run| run.category == "tooltip"));
}
