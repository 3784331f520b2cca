//! A single test that creates its own file and never cleans up

use std::path::{Path, PathBuf};

use unit_harness::{FILE_NAME, ModuleScope, TestClass, TestMethod, TestModule, test_methods};

use super::{check_exists, create_file};

pub struct TestFileExist {
    file_name: PathBuf,
}

impl TestFileExist {
    fn test_created_file_exists(&mut self) -> anyhow::Result<()> {
        create_file(None, &self.file_name)?.keep();
        check_exists(&self.file_name)
    }
}

impl TestClass for TestFileExist {
    const NAME: &'static str = "TestFileExist";

    fn set_up_class(scope: &ModuleScope) -> anyhow::Result<Self> {
        Ok(Self {
            file_name: scope.root().join(FILE_NAME),
        })
    }

    fn methods() -> Vec<TestMethod<Self>> {
        test_methods![Self => test_created_file_exists]
    }
}

pub fn module(workdir: &Path) -> TestModule {
    TestModule::new("test_01_trivial", workdir).class::<TestFileExist>()
}
