//! File fixture demonstrations
//!
//! The same four checks (exists, is a file, 4 bytes long, modified today)
//! under different fixture lifecycles.

pub mod class_setup;
pub mod module_setup;
pub mod multiple_cases;
pub mod test_setup;
pub mod trivial;

use std::path::Path;

use unit_harness::{FILE_CONTENT, FileFixture, assert_equal, assert_true, probe};

/// Create the fixture file, announcing it the way each hook does
pub(crate) fn create_file(hook: Option<&str>, path: &Path) -> anyhow::Result<FileFixture> {
    match hook {
        Some(hook) => log::info!("{hook}: Creating file {}", path.display()),
        None => log::info!("Creating file {}", path.display()),
    }
    Ok(FileFixture::create(path)?)
}

/// Remove the fixture file, announcing it
pub(crate) fn remove_file(hook: &str, file: FileFixture) -> anyhow::Result<()> {
    log::info!("{hook}: Deleting file {}", file.path().display());
    file.remove()?;
    Ok(())
}

pub(crate) fn check_exists(path: &Path) -> anyhow::Result<()> {
    assert_true(probe::exists(path))?;
    Ok(())
}

pub(crate) fn check_is_file(path: &Path) -> anyhow::Result<()> {
    assert_true(probe::is_file(path))?;
    Ok(())
}

pub(crate) fn check_is_4_bytes_long(path: &Path) -> anyhow::Result<()> {
    assert_equal(probe::size(path)?, FILE_CONTENT.len() as u64)?;
    Ok(())
}

pub(crate) fn check_created_today(path: &Path) -> anyhow::Result<()> {
    assert_equal(probe::today(), probe::modified_date(path)?)?;
    Ok(())
}
