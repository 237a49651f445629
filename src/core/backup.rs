use crate::core::store::TableStore;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::models::Table;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::sibling_with_suffix;
use crate::utils::time::file_stamp;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the container to `dest_file`, optionally zipped. Returns the final path.
    pub fn backup(db_path: &Path, dest_file: &Path, compress: bool, force: bool) -> AppResult<PathBuf> {
        // 1️⃣ Check container exists
        if !db_path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", db_path.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest_file.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        ensure_writable(dest_file, force)?;

        // 3️⃣ Copy container
        fs::copy(db_path, dest_file)?;
        success(format!("Backup created: {}", dest_file.display()));

        // 4️⃣ Optional compression
        if !compress {
            return Ok(dest_file.to_path_buf());
        }

        let compressed = compress_backup(dest_file)?;
        if compressed != dest_file {
            if let Err(e) = fs::remove_file(dest_file) {
                warning(format!("Failed to remove uncompressed backup: {}", e));
            } else {
                info(format!("Removed uncompressed backup: {}", dest_file.display()));
            }
        }

        Ok(compressed)
    }

    /// Explicit recovery from a corrupt container: move it aside and start fresh.
    ///
    /// Returns the path the old file was moved to (if there was one) and the
    /// freshly initialized table.
    pub fn reset(db_path: &Path, headers: &[String]) -> AppResult<(Option<PathBuf>, Table)> {
        let moved = if db_path.exists() {
            let aside = sibling_with_suffix(db_path, &format!(".corrupt-{}", file_stamp()));
            fs::rename(db_path, &aside)?;
            warning(format!("Previous container moved to {}", aside.display()));
            Some(aside)
        } else {
            None
        };

        let table = TableStore::initialize(db_path, headers)?;
        Ok((moved, table))
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("invalid backup path: {}", path.display())))?;

    let mut f = fs::File::open(path)?;
    zip.start_file(name, options).map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    info(format!("📦 Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
