//! Four tests without shared setup: each one recreates the file itself

use std::path::{Path, PathBuf};

use unit_harness::{FILE_NAME, ModuleScope, TestClass, TestMethod, TestModule, test_methods};

use super::{check_created_today, check_exists, check_is_4_bytes_long, check_is_file, create_file};

pub struct TestFile {
    file_name: PathBuf,
}

impl TestFile {
    fn create(&self) -> anyhow::Result<()> {
        create_file(None, &self.file_name)?.keep();
        Ok(())
    }

    fn test_file_exists(&mut self) -> anyhow::Result<()> {
        self.create()?;
        check_exists(&self.file_name)
    }

    fn test_is_file(&mut self) -> anyhow::Result<()> {
        self.create()?;
        check_is_file(&self.file_name)
    }

    fn test_is_4_bytes_long(&mut self) -> anyhow::Result<()> {
        self.create()?;
        check_is_4_bytes_long(&self.file_name)
    }

    fn test_is_created_today(&mut self) -> anyhow::Result<()> {
        self.create()?;
        check_created_today(&self.file_name)
    }
}

impl TestClass for TestFile {
    const NAME: &'static str = "TestFile";

    fn set_up_class(scope: &ModuleScope) -> anyhow::Result<Self> {
        Ok(Self {
            file_name: scope.root().join(FILE_NAME),
        })
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
    TestModule::new("test_02_multiple_cases", workdir).class::<TestFile>()
}
