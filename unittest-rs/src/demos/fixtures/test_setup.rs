//! Per-test fixture: `set_up` creates the file before each test and
//! `tear_down` deletes it after

use std::path::{Path, PathBuf};

use unit_harness::{
    FILE_NAME, FileFixture, ModuleScope, TestClass, TestMethod, TestModule, test_methods,
};

use super::{
    check_created_today, check_exists, check_is_4_bytes_long, check_is_file, create_file,
    remove_file,
};

pub struct TestFileSetup {
    file_name: PathBuf,
    file: Option<FileFixture>,
}

impl TestFileSetup {
    fn test_file_exists(&mut self) -> anyhow::Result<()> {
        check_exists(&self.file_name)
    }

    fn test_is_file(&mut self) -> anyhow::Result<()> {
        check_is_file(&self.file_name)
    }

    fn test_is_4_bytes_long(&mut self) -> anyhow::Result<()> {
        check_is_4_bytes_long(&self.file_name)
    }

    fn test_is_created_today(&mut self) -> anyhow::Result<()> {
        check_created_today(&self.file_name)
    }
}

impl TestClass for TestFileSetup {
    const NAME: &'static str = "TestFileSetup";

    fn set_up_class(scope: &ModuleScope) -> anyhow::Result<Self> {
        Ok(Self {
            file_name: scope.root().join(FILE_NAME),
            file: None,
        })
    }

    fn set_up(&mut self) -> anyhow::Result<()> {
        self.file = Some(create_file(Some("setUp"), &self.file_name)?);
        Ok(())
    }

    fn tear_down(&mut self) -> anyhow::Result<()> {
        match self.file.take() {
            Some(file) => remove_file("tearDown", file),
            None => Ok(()),
        }
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
    TestModule::new("test_03_test_setup", workdir).class::<TestFileSetup>()
}
