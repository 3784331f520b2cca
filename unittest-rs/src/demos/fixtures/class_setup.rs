//! Per-class fixture: the file is created before the first test and
//! deleted after the last

use std::path::Path;

use unit_harness::{
    FILE_NAME, FileFixture, ModuleScope, TestClass, TestMethod, TestModule, test_methods,
};

use super::{
    check_created_today, check_exists, check_is_4_bytes_long, check_is_file, create_file,
    remove_file,
};

/// Also used by the module-level demonstration, where the scope root is
/// the module's temporary directory instead of the working directory
pub struct TestFileClassSetup {
    file: FileFixture,
}

impl TestFileClassSetup {
    fn test_file_exists(&mut self) -> anyhow::Result<()> {
        check_exists(self.file.path())
    }

    fn test_is_file(&mut self) -> anyhow::Result<()> {
        check_is_file(self.file.path())
    }

    fn test_is_4_bytes_long(&mut self) -> anyhow::Result<()> {
        check_is_4_bytes_long(self.file.path())
    }

    fn test_is_created_today(&mut self) -> anyhow::Result<()> {
        check_created_today(self.file.path())
    }
}

impl TestClass for TestFileClassSetup {
    const NAME: &'static str = "TestFileClassSetup";

    fn set_up_class(scope: &ModuleScope) -> anyhow::Result<Self> {
        let file = create_file(Some("setUpClass"), &scope.root().join(FILE_NAME))?;
        Ok(Self { file })
    }

    fn tear_down_class(self) -> anyhow::Result<()> {
        remove_file("tearDownClass", self.file)
    }

    fn methods() -> Vec<TestMethod<Self>> {
        test_methods![Self =>
            test_file_exists,
            test_is_file,
            test_is_4_bytes_long,
            test_is_created_today,
        ]
    }
}

pub fn module(workdir: &Path) -> TestModule {
    TestModule::new("test_04_class_setup", workdir).class::<TestFileClassSetup>()
}
