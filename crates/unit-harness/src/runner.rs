//! Sequential test runner

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::class::TestClass;
use crate::fixtures::TempDirFixture;
use crate::module::{ModuleScope, TestModule};
use crate::report::{LifecycleEvent, Report, TestRecord};

/// Runs test modules one method at a time on the calling thread
#[derive(Debug, Clone, Default)]
pub struct Runner {
    fail_fast: bool,
}

impl Runner {
    /// Runner that executes every test
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop running further methods after the first failure or error.
    /// Teardown hooks of everything already set up still run.
    #[must_use]
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    fn should_stop(&self, report: &Report) -> bool {
        self.fail_fast && !report.was_successful()
    }

    /// Run every class of `module`
    pub fn run(&self, module: &TestModule) -> Report {
        let mut report = Report::new(module.name());
        log::debug!("running module {}", module.name());

        let temp_dir = if module.uses_temp_dir() {
            match TempDirFixture::create() {
                Ok(dir) => {
                    log::info!("setUpModule: Created dir {}", dir.path().display());
                    report.push_event(LifecycleEvent::SetUpModule {
                        module: module.name().to_string(),
                        dir: dir.path().to_path_buf(),
                    });
                    Some(dir)
                }
                Err(err) => {
                    report.push_scope_error(
                        format!("setUpModule ({})", module.name()),
                        &err.into(),
                    );
                    return report;
                }
            }
        } else {
            None
        };

        let scope = ModuleScope::new(
            module.workdir().to_path_buf(),
            temp_dir.as_ref().map(|d| d.path().to_path_buf()),
        );

        for class in module.classes() {
            if self.should_stop(&report) {
                log::debug!("fail fast: skipping class {}", class.name);
                break;
            }
            (class.run)(self, &scope, &mut report);
        }

        if let Some(dir) = temp_dir {
            report.push_event(LifecycleEvent::TearDownModule {
                module: module.name().to_string(),
            });
            log::info!("tearDownModule: Deleting dir {}", dir.path().display());
            if let Err(err) = dir.remove() {
                report.push_scope_error(
                    format!("tearDownModule ({})", module.name()),
                    &err.into(),
                );
            }
        }

        log::debug!("{}: {}", module.name(), report.summary());
        report
    }
}

/// Run a hook or test body, turning a panic into an error
fn guarded<T>(f: impl FnOnce() -> anyhow::Result<T>) -> anyhow::Result<T> {
    catch_unwind(AssertUnwindSafe(f))
        .unwrap_or_else(|payload| Err(anyhow::anyhow!("panicked: {}", panic_message(&*payload))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Run the methods of class `C` between its class-level hooks
pub(crate) fn run_class<C: TestClass>(runner: &Runner, scope: &ModuleScope, report: &mut Report) {
    let class = C::NAME;

    report.push_event(LifecycleEvent::SetUpClass {
        class: class.to_string(),
    });
    let mut instance = match guarded(|| C::set_up_class(scope)) {
        Ok(instance) => instance,
        Err(err) => {
            report.push_scope_error(format!("setUpClass ({class})"), &err);
            return;
        }
    };

    for method in C::methods() {
        if runner.should_stop(report) {
            log::debug!("fail fast: skipping {class}.{}", method.name);
            break;
        }

        report.push_event(LifecycleEvent::SetUp {
            class: class.to_string(),
            method: method.name.to_string(),
        });
        if let Err(err) = guarded(|| instance.set_up()) {
            report.push_record(TestRecord::errored(
                class,
                method.name,
                format!("setUp failed: {err:#}"),
            ));
            continue;
        }

        report.push_event(LifecycleEvent::Test {
            class: class.to_string(),
            method: method.name.to_string(),
        });
        let mut record = TestRecord::from_result(
            class,
            method.name,
            guarded(|| (method.body)(&mut instance)),
        );

        report.push_event(LifecycleEvent::TearDown {
            class: class.to_string(),
            method: method.name.to_string(),
        });
        if let Err(err) = guarded(|| instance.tear_down()) {
            record.tear_down_error = Some(format!("{err:#}"));
        }
        report.push_record(record);
    }

    report.push_event(LifecycleEvent::TearDownClass {
        class: class.to_string(),
    });
    if let Err(err) = guarded(|| instance.tear_down_class()) {
        report.push_scope_error(format!("tearDownClass ({class})"), &err);
    }
}
