use std::fs;

use serde_json::Value;

use crate::console;
use crate::error::PackError;
use crate::options::{Manifest, ResolvedOptions};

/// Name of the manifest file, under the root and under the outdir.
pub const MANIFEST_FILENAME: &str = "package.json";

/// Compile `root/package.json` into `outdir/package.json`.
///
/// Does nothing when disabled. Otherwise reads the source manifest, decodes
/// it with the configured encoding, parses it as a JSON object, applies the
/// transform function, and writes the result into the outdir (created if
/// absent), overwriting any existing file there. Compact output by default;
/// two-space indentation when compression is off. A missing source, a parse
/// failure, or a write failure is fatal, and a parse failure writes nothing.
pub fn compile_manifest(options: &ResolvedOptions) -> Result<(), PackError> {
    if !options.compile_manifest {
        return Ok(());
    }

    let src = options.root.join(MANIFEST_FILENAME);
    let bytes = fs::read(&src).map_err(|source| PackError::ManifestRead {
        path: src.clone(),
        source,
    })?;
    let text = options.manifest_encoding.decode(&bytes);
    let parsed: Manifest = serde_json::from_str(&text)
        .map_err(|source| PackError::ManifestParse { path: src, source })?;

    let compiled = Value::Object((options.manifest_override)(parsed));
    let rendered = if options.compress_manifest {
        compiled.to_string()
    } else {
        format!("{compiled:#}")
    };

    fs::create_dir_all(&options.outdir).map_err(|source| PackError::ManifestWrite {
        path: options.outdir.clone(),
        source,
    })?;
    let dest = options.outdir.join(MANIFEST_FILENAME);
    fs::write(&dest, rendered).map_err(|source| PackError::ManifestWrite { path: dest, source })?;

    console::log(format!(
        "{} {}",
        console::label("manifest compiled:"),
        console::produced(MANIFEST_FILENAME)
    ));
    Ok(())
}
