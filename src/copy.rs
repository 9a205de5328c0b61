use std::fs;
use std::io;
use std::path::Path;

use crate::console;
use crate::error::PackError;
use crate::options::ResolvedOptions;

/// Copy the configured entries from the root into the outdir, in list order.
///
/// An entry whose source does not exist is silently skipped. Regular files
/// are copied byte for byte, directories recursively, symbolic links
/// recreated rather than followed; intermediate directories under the outdir
/// are created as needed. Duplicate entries are copied twice. A copy failure
/// aborts the remaining entries; prior copies stay in place.
pub fn copy_files(options: &ResolvedOptions) -> Result<(), PackError> {
    for filename in &options.copy_files {
        let src = options.root.join(filename);
        let dest = options.outdir.join(filename);
        if src.symlink_metadata().is_err() {
            continue;
        }
        copy_entry(&src, &dest).map_err(|source| PackError::Copy { src, dest, source })?;
        console::log(format!(
            "{} {}",
            console::label("copied:"),
            console::path(filename)
        ));
    }
    Ok(())
}

fn copy_entry(src: &Path, dest: &Path) -> io::Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    let file_type = src.symlink_metadata()?.file_type();
    if file_type.is_dir() {
        copy_dir_all(src, dest)
    } else if file_type.is_symlink() {
        copy_symlink(src, dest)
    } else {
        fs::copy(src, dest)?;
        Ok(())
    }
}

fn copy_dir_all(src: &Path, dest: &Path) -> io::Result<()> {
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let to = dest.join(entry.file_name());
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            copy_dir_all(&entry.path(), &to)?;
        } else if file_type.is_symlink() {
            copy_symlink(&entry.path(), &to)?;
        } else {
            fs::copy(entry.path(), &to)?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dest: &Path) -> io::Result<()> {
    let target = fs::read_link(src)?;
    if dest.symlink_metadata().is_ok() {
        fs::remove_file(dest)?;
    }
    std::os::unix::fs::symlink(target, dest)
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dest: &Path) -> io::Result<()> {
    // Creating links needs elevated rights on Windows; copy the target instead.
    fs::copy(src, dest)?;
    Ok(())
}
