use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::ui::prompt::confirm;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the ledger database to `dest_file`, or into `dest_file` with a
    /// `.zip` extension when compressing.
    ///
    /// Returns the final path, or `None` when the user declined to
    /// overwrite an existing file.
    pub fn backup(
        db_path: &Path,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let dest = if compress {
            Path::new(dest_file).with_extension("zip")
        } else {
            PathBuf::from(dest_file)
        };

        if !db_path.exists() {
            return Err(AppError::Backup(format!(
                "Database not found: {}",
                db_path.display()
            )));
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if dest.exists()
            && !force
            && !confirm(&format!(
                "The file '{}' already exists. Overwrite it?",
                dest.display()
            ))
        {
            warning("Backup cancelled by user.");
            return Ok(None);
        }

        if compress {
            compress_backup(db_path, &dest)?;
        } else {
            fs::copy(db_path, &dest)?;
        }

        log::info!("Backup created: {}", dest.display());
        success(format!("Backup created: {}", dest.display()));
        Ok(Some(dest))
    }
}

/// Write `src` into a new .zip archive at `zip_path`.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "ledger.sqlite".to_string());

    let mut f = fs::File::open(src)?;
    zip.start_file(entry_name, options)
        .map_err(|e| AppError::Backup(e.to_string()))?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(|e| AppError::Backup(e.to_string()))?;

    log::debug!("Compressed backup: {}", zip_path.display());
    Ok(())
}
