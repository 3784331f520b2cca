//! Test classes and their lifecycle hooks

use crate::module::ModuleScope;

/// Body of a test method
pub type TestBody<C> = fn(&mut C) -> anyhow::Result<()>;

/// A named test method of class `C`
pub struct TestMethod<C> {
    /// Method name as reported
    pub name: &'static str,
    /// Method body
    pub body: TestBody<C>,
}

impl<C> TestMethod<C> {
    /// Create a test method
    pub fn new(name: &'static str, body: TestBody<C>) -> Self {
        Self { name, body }
    }
}

impl<C> Clone for TestMethod<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for TestMethod<C> {}

impl<C> std::fmt::Debug for TestMethod<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestMethod").field("name", &self.name).finish()
    }
}

/// A group of test methods sharing lifecycle hooks
///
/// The runner drives a class like this:
///
/// ```text
/// set_up_class
///     set_up, <method>, tear_down      (for every method)
/// tear_down_class
/// ```
///
/// `tear_down` runs whenever `set_up` succeeded, even if the method failed.
/// If `set_up_class` fails, no method runs.
pub trait TestClass: Sized {
    /// Class name as reported
    const NAME: &'static str;

    /// Runs once before the first method and builds the shared state
    fn set_up_class(scope: &ModuleScope) -> anyhow::Result<Self>;

    /// Runs once after the last method
    fn tear_down_class(self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Runs before every method
    fn set_up(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// Runs after every method whose `set_up` succeeded
    fn tear_down(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    /// The test methods, in execution order
    fn methods() -> Vec<TestMethod<Self>>;
}

/// Build the `Vec<TestMethod<_>>` for a class from its method names
///
/// ```ignore
/// fn methods() -> Vec<TestMethod<Self>> {
///     test_methods![Self => test_file_exists, test_is_file]
/// }
/// ```
#[macro_export]
macro_rules! test_methods {
    ($class:ty => $($method:ident),* $(,)?) => {
        vec![$($crate::TestMethod::new(stringify!($method), <$class>::$method)),*]
    };
}
