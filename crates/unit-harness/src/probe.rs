//! File properties checked by the fixture demonstrations

use chrono::{DateTime, Local, NaiveDate};
use std::fs;
use std::io;
use std::path::Path;

/// Whether anything exists at `path`
pub fn exists(path: &Path) -> bool {
    path.exists()
}

/// Whether `path` is a regular file
pub fn is_file(path: &Path) -> bool {
    path.is_file()
}

/// Size of the file at `path` in bytes
pub fn size(path: &Path) -> io::Result<u64> {
    Ok(fs::metadata(path)?.len())
}

/// Local date of the last modification of `path`
pub fn modified_date(path: &Path) -> io::Result<NaiveDate> {
    let modified = fs::metadata(path)?.modified()?;
    Ok(DateTime::<Local>::from(modified).date_naive())
}

/// Today's local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
