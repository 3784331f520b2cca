//! Runs every demonstration suite through the harness and checks that
//! each one passes or fails exactly the way it is meant to

use std::path::Path;

use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;
use unit_harness::{DIR_NAME, FILE_NAME, LifecycleEvent, Outcome, Report, Runner};
use unittest_rs::demos::{Demo, bare};

fn run(demo: Demo, workdir: &Path) -> Report {
    let _ = env_logger::builder().is_test(true).try_init();
    Runner::new().run(&demo.module(workdir))
}

fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_bare_script_stops_at_wrong_expectation() {
    let halted = bare::script().run().unwrap_err();
    assert_eq!(halted.passed, 4);
    assert_eq!(halted.message, "2 != 1 : 4/2 should be 1!");
}

#[test]
fn test_basic_reports_only_the_failing_method() {
    let workdir = TempDir::new().unwrap();
    let report = run(Demo::Basic, workdir.path());

    assert_eq!(report.tests_run(), 5);
    assert_eq!(report.passed(), 4);
    assert_eq!(report.summary(), "Ran 5 tests: FAILED (failures=1)");
    assert_eq!(
        report.record("BasicTest", "test_failing").unwrap().outcome,
        Outcome::Failed("2 != 1".into())
    );
    for method in [
        "test_divide_integers",
        "test_divide_floats",
        "test_divide_by_zero",
        "test_divide_by_string",
    ] {
        assert_eq!(
            report.record("BasicTest", method).unwrap().outcome,
            Outcome::Passed,
            "{method}"
        );
    }
}

#[test]
fn test_data_driven_reports_failing_row_by_label() {
    let workdir = TempDir::new().unwrap();
    let report = run(Demo::DataDriven, workdir.path());

    assert_eq!(report.tests_run(), 2);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.errors(), 0);

    let with_data = report.record("DataDrivenTest", "test_with_data").unwrap();
    assert!(with_data.outcome.is_failed());
    assert_eq!(with_data.subtests.len(), 1);
    assert_eq!(with_data.subtests[0].label, "failing test");
    assert_eq!(with_data.subtests[0].outcome, Outcome::Failed("2 != 1".into()));

    assert_eq!(
        report.record("DataDrivenTest", "test_errors").unwrap().outcome,
        Outcome::Passed
    );
}

#[rstest]
#[case::trivial(Demo::Trivial, 1)]
#[case::multiple_cases(Demo::MultipleCases, 4)]
fn test_fixtures_without_teardown_leave_file_behind(#[case] demo: Demo, #[case] tests: usize) {
    let workdir = TempDir::new().unwrap();
    let report = run(demo, workdir.path());

    assert!(report.was_successful(), "{}", report.summary());
    assert_eq!(report.tests_run(), tests);
    assert_eq!(entries(workdir.path()), vec![FILE_NAME.to_string()]);
}

#[rstest]
#[case::test_setup(Demo::TestSetup, 4)]
#[case::class_setup(Demo::ClassSetup, 4)]
#[case::module_setup(Demo::ModuleSetup, 6)]
fn test_fixtures_with_teardown_leave_nothing_behind(#[case] demo: Demo, #[case] tests: usize) {
    let workdir = TempDir::new().unwrap();
    let report = run(demo, workdir.path());

    assert!(report.was_successful(), "{}", report.summary());
    assert_eq!(report.tests_run(), tests);
    assert!(entries(workdir.path()).is_empty());
}

#[test]
fn test_per_test_fixture_is_recreated_for_every_test() {
    let workdir = TempDir::new().unwrap();
    let report = run(Demo::TestSetup, workdir.path());

    let set_ups = report
        .events()
        .iter()
        .filter(|e| matches!(e, LifecycleEvent::SetUp { .. }))
        .count();
    let tear_downs = report
        .events()
        .iter()
        .filter(|e| matches!(e, LifecycleEvent::TearDown { .. }))
        .count();
    assert_eq!(set_ups, 4);
    assert_eq!(tear_downs, 4);
}

#[test]
fn test_module_setup_wraps_both_classes() {
    let workdir = TempDir::new().unwrap();
    let report = run(Demo::ModuleSetup, workdir.path());

    let scoped: Vec<String> = report
        .events()
        .iter()
        .filter_map(|e| match e {
            LifecycleEvent::SetUpModule { module, .. } => Some(format!("setUpModule {module}")),
            LifecycleEvent::SetUpClass { class } => Some(format!("setUpClass {class}")),
            LifecycleEvent::TearDownClass { class } => Some(format!("tearDownClass {class}")),
            LifecycleEvent::TearDownModule { module } => Some(format!("tearDownModule {module}")),
            _ => None,
        })
        .collect();

    assert_eq!(
        scoped,
        vec![
            "setUpModule test_06_module_setup",
            "setUpClass TestFileClassSetup",
            "tearDownClass TestFileClassSetup",
            "setUpClass TestDirectory",
            "tearDownClass TestDirectory",
            "tearDownModule test_06_module_setup",
        ]
    );
}

#[test]
fn test_module_setup_removes_its_directory() {
    let workdir = TempDir::new().unwrap();
    let report = run(Demo::ModuleSetup, workdir.path());
    assert!(report.was_successful(), "{}", report.summary());

    let Some(LifecycleEvent::SetUpModule { dir, .. }) = report.events().first() else {
        panic!("module setup did not run");
    };
    assert!(!dir.exists(), "{} left behind", dir.display());
    assert!(!dir.join(FILE_NAME).exists());
    assert!(!dir.join(DIR_NAME).exists());
}

#[test]
fn test_fail_fast_stops_basic_suite_at_first_failure() {
    let workdir = TempDir::new().unwrap();
    let report = Runner::new()
        .fail_fast(true)
        .run(&Demo::Basic.module(workdir.path()));

    // test_failing is the last method, so every method still runs
    assert_eq!(report.tests_run(), 5);
    assert_eq!(report.failed(), 1);
}
