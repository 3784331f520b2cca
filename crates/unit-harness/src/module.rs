//! Test modules: a set of classes with optional module-level setup

use std::path::{Path, PathBuf};

use crate::class::TestClass;
use crate::report::Report;
use crate::runner::{Runner, run_class};

/// Type-erased entry point of one class
pub(crate) type ClassRunner = fn(&Runner, &ModuleScope, &mut Report);

pub(crate) struct ClassEntry {
    pub(crate) name: &'static str,
    pub(crate) run: ClassRunner,
}

/// State shared by every class of a module while it runs
#[derive(Debug, Clone)]
pub struct ModuleScope {
    workdir: PathBuf,
    temp_dir: Option<PathBuf>,
}

impl ModuleScope {
    pub(crate) fn new(workdir: PathBuf, temp_dir: Option<PathBuf>) -> Self {
        Self { workdir, temp_dir }
    }

    /// Directory the module was started in
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// The module-level temporary directory, if the module has one
    pub fn temp_dir(&self) -> Option<&Path> {
        self.temp_dir.as_deref()
    }

    /// Where fixtures should be created: the temporary directory if the
    /// module has one, the working directory otherwise
    pub fn root(&self) -> &Path {
        self.temp_dir().unwrap_or(&self.workdir)
    }
}

/// A named collection of test classes
pub struct TestModule {
    name: String,
    workdir: PathBuf,
    temp_dir: bool,
    classes: Vec<ClassEntry>,
}

impl TestModule {
    /// Module `name` whose fixtures live in `workdir`
    pub fn new(name: impl Into<String>, workdir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            workdir: workdir.into(),
            temp_dir: false,
            classes: Vec::new(),
        }
    }

    /// Create a temporary directory before the first class and remove it
    /// after the last one
    #[must_use]
    pub fn with_temp_dir(mut self) -> Self {
        self.temp_dir = true;
        self
    }

    /// Append a class
    #[must_use]
    pub fn class<C: TestClass>(mut self) -> Self {
        self.classes.push(ClassEntry {
            name: C::NAME,
            run: run_class::<C>,
        });
        self
    }

    /// Module name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Working directory
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Whether module-level setup creates a temporary directory
    pub fn uses_temp_dir(&self) -> bool {
        self.temp_dir
    }

    /// Names of the classes, in execution order
    pub fn class_names(&self) -> Vec<&'static str> {
        self.classes.iter().map(|c| c.name).collect()
    }

    pub(crate) fn classes(&self) -> &[ClassEntry] {
        &self.classes
    }
}

impl std::fmt::Debug for TestModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestModule")
            .field("name", &self.name)
            .field("workdir", &self.workdir)
            .field("temp_dir", &self.temp_dir)
            .field("classes", &self.class_names())
            .finish()
    }
}
