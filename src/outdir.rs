use std::fs;
use std::path::Path;

use crate::console;
use crate::error::PackError;
use crate::options::ResolvedOptions;

/// Clear the outdir contents before staging.
///
/// Does nothing when the flag is off or the outdir does not exist (or is not
/// a directory). Otherwise removes every direct entry inside the outdir
/// recursively; the outdir itself is kept. Symbolic links among the entries
/// are removed, never followed, so nothing outside the outdir is touched.
pub fn empty_outdir(options: &ResolvedOptions) -> Result<(), PackError> {
    if !options.empty_outdir {
        return Ok(());
    }
    let outdir = &options.outdir;
    if !outdir.is_dir() {
        return Ok(());
    }

    let entries = fs::read_dir(outdir).map_err(|source| PackError::Remove {
        path: outdir.clone(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| PackError::Remove {
            path: outdir.clone(),
            source,
        })?;
        remove_entry(&entry.path()).map_err(|source| PackError::Remove {
            path: entry.path(),
            source,
        })?;
        console::log(format!(
            "{} {}",
            console::label("removed:"),
            console::path(&entry.file_name().to_string_lossy())
        ));
    }

    let shown = options.outdir.strip_prefix(&options.root).unwrap_or(outdir);
    console::log(format!(
        "{} {}",
        console::label("outdir emptied:"),
        console::path(&shown.display().to_string())
    ));
    Ok(())
}

fn remove_entry(path: &Path) -> std::io::Result<()> {
    // symlink_metadata so a link to a directory is unlinked, not descended.
    if path.symlink_metadata()?.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::PackOptions;
    use tempfile::TempDir;

    fn resolved(root: &Path, empty: bool) -> ResolvedOptions {
        PackOptions::new()
            .root(root)
            .empty_outdir(empty)
            .resolve(false)
            .unwrap()
    }

    #[test]
    fn test_empties_files_and_subdirectories() {
        let root = TempDir::new().unwrap();
        let outdir = root.path().join("out");
        fs::create_dir_all(outdir.join("b")).unwrap();
        fs::write(outdir.join("a.txt"), "a").unwrap();
        fs::write(outdir.join("b/c.txt"), "c").unwrap();

        empty_outdir(&resolved(root.path(), true)).unwrap();

        assert!(outdir.is_dir());
        assert_eq!(fs::read_dir(&outdir).unwrap().count(), 0);

        // Already empty: a second run is a no-op.
        empty_outdir(&resolved(root.path(), true)).unwrap();
        assert!(outdir.is_dir());
    }

    #[test]
    fn test_absent_outdir_is_noop() {
        let root = TempDir::new().unwrap();
        empty_outdir(&resolved(root.path(), true)).unwrap();
        assert!(!root.path().join("out").exists());
    }

    #[test]
    fn test_disabled_flag_is_noop() {
        let root = TempDir::new().unwrap();
        let outdir = root.path().join("out");
        fs::create_dir_all(&outdir).unwrap();
        fs::write(outdir.join("a.txt"), "a").unwrap();

        empty_outdir(&resolved(root.path(), false)).unwrap();
        assert!(outdir.join("a.txt").exists());
    }

    #[test]
    fn test_outdir_path_occupied_by_file_is_noop() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("out"), "not a directory").unwrap();

        empty_outdir(&resolved(root.path(), true)).unwrap();
        assert!(root.path().join("out").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_entry_is_unlinked_not_followed() {
        let root = TempDir::new().unwrap();
        let outdir = root.path().join("out");
        fs::create_dir_all(&outdir).unwrap();
        let elsewhere = root.path().join("elsewhere");
        fs::create_dir_all(&elsewhere).unwrap();
        fs::write(elsewhere.join("keep.txt"), "keep").unwrap();
        std::os::unix::fs::symlink(&elsewhere, outdir.join("link")).unwrap();

        empty_outdir(&resolved(root.path(), true)).unwrap();

        assert_eq!(fs::read_dir(&outdir).unwrap().count(), 0);
        assert!(elsewhere.join("keep.txt").exists());
    }
}
