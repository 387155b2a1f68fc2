// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use tracing::info;

use crate::config::options::ExportOptions;
use crate::export::write_table;
use crate::error::RunError;
use crate::table::Table;

/// Write the table where `export` points. Returns the final path.
pub fn export_table(export: &ExportOptions, table: &Table) -> Result<PathBuf, RunError> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let out = BufWriter::new(File::create(&path)?); // truncate/overwrite
    write_table(out, table, export.format, export.include_headers)?;

    info!(path = %path.display(), rows = table.len(), "table exported");
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Trailing separator means the user meant a directory.
pub fn looks_like_dir_hint(p: &str) -> bool {
    p.ends_with('/') || p.ends_with('\\')
}
