//! Per-module fixture: a temporary directory created before the first
//! class and removed after the last. Each class creates its own fixture
//! inside it, and everything is torn down in reverse order.

use std::path::Path;

use unit_harness::{
    DIR_NAME, DirFixture, ModuleScope, TestClass, TestMethod, TestModule, test_methods,
};

use super::class_setup::TestFileClassSetup;
use super::{check_created_today, check_exists};

pub struct TestDirectory {
    dir: DirFixture,
}

impl TestDirectory {
    fn test_file_exists(&mut self) -> anyhow::Result<()> {
        check_exists(self.dir.path())
    }

    fn test_is_created_today(&mut self) -> anyhow::Result<()> {
        check_created_today(self.dir.path())
    }
}

impl TestClass for TestDirectory {
    const NAME: &'static str = "TestDirectory";

    fn set_up_class(scope: &ModuleScope) -> anyhow::Result<Self> {
        let dir_name = scope.root().join(DIR_NAME);
        log::info!("setUpClass: Creating dir {}", dir_name.display());
        Ok(Self {
            dir: DirFixture::create(dir_name)?,
        })
    }

    fn tear_down_class(self) -> anyhow::Result<()> {
        log::info!("tearDownClass: Deleting dir {}", self.dir.path().display());
        self.dir.remove()?;
        Ok(())
    }

    fn methods() -> Vec<TestMethod<Self>> {
        test_methods![Self => test_file_exists, test_is_created_today]
    }
}

pub fn module(workdir: &Path) -> TestModule {
    TestModule::new("test_06_module_setup", workdir)
        .with_temp_dir()
        .class::<TestFileClassSetup>()
        .class::<TestDirectory>()
}
