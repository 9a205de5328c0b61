use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::encoding::Encoding;
use crate::error::PackError;

/// A parsed manifest: a string-keyed JSON object, insertion-ordered.
pub type Manifest = Map<String, Value>;

/// Caller-supplied transform applied to the parsed manifest before writing.
///
/// The function receives the full parsed object by value and its return value
/// is authoritative: a key it removes is absent from the output (never emitted
/// as `null`), a key it inserts is written.
pub type ManifestOverride = Arc<dyn Fn(Manifest) -> Manifest + Send + Sync>;

/// Files copied from the root into the outdir when `copy_files` is unset.
pub const DEFAULT_COPY_FILES: [&str; 3] = ["README.md", "LICENSE", "CHANGELOG.md"];

/// The default manifest transform: drop `scripts` and `devDependencies`.
pub fn default_manifest_override(mut manifest: Manifest) -> Manifest {
    manifest.remove("scripts");
    manifest.remove("devDependencies");
    manifest
}

/// Packaging options, every field optional.
///
/// Construct with the builder-style setters or deserialize from a JSON config
/// file (camelCase keys: `root`, `outdir`, `emptyOutdir`, `copyFiles`,
/// `compileManifest`, `compressManifest`, `manifestEncoding`). The transform
/// function cannot be expressed in a config file and is skipped during
/// deserialization.
///
/// Unset fields resolve to their documented defaults in [`PackOptions::resolve`],
/// once per invocation; the operations themselves never consult fallbacks.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackOptions {
    /// Directory where `package.json` lives; defaults to the working directory.
    pub root: Option<PathBuf>,
    /// Directory receiving copied files and the compiled manifest;
    /// defaults to `root/out`.
    pub outdir: Option<PathBuf>,
    /// Whether to clear the outdir contents before staging. There is no
    /// universal default: each entry point passes its own to `resolve`.
    pub empty_outdir: Option<bool>,
    /// Paths relative to `root` to copy into the outdir, in order;
    /// defaults to [`DEFAULT_COPY_FILES`].
    pub copy_files: Option<Vec<String>>,
    /// Whether to compile `package.json` into the outdir; defaults to true.
    pub compile_manifest: Option<bool>,
    /// Whether to serialize the compiled manifest without whitespace
    /// (true, the default) or with two-space indentation.
    pub compress_manifest: Option<bool>,
    /// Transform applied to the parsed manifest;
    /// defaults to [`default_manifest_override`].
    #[serde(skip)]
    pub manifest_override: Option<ManifestOverride>,
    /// Encoding used to decode `package.json`; defaults to UTF-8.
    pub manifest_encoding: Option<Encoding>,
}

impl PackOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn outdir(mut self, outdir: impl Into<PathBuf>) -> Self {
        self.outdir = Some(outdir.into());
        self
    }

    pub fn empty_outdir(mut self, empty: bool) -> Self {
        self.empty_outdir = Some(empty);
        self
    }

    pub fn copy_files(mut self, files: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.copy_files = Some(files.into_iter().map(Into::into).collect());
        self
    }

    pub fn compile_manifest(mut self, compile: bool) -> Self {
        self.compile_manifest = Some(compile);
        self
    }

    pub fn compress_manifest(mut self, compress: bool) -> Self {
        self.compress_manifest = Some(compress);
        self
    }

    pub fn manifest_override<F>(mut self, transform: F) -> Self
    where
        F: Fn(Manifest) -> Manifest + Send + Sync + 'static,
    {
        self.manifest_override = Some(Arc::new(transform));
        self
    }

    pub fn manifest_encoding(mut self, encoding: Encoding) -> Self {
        self.manifest_encoding = Some(encoding);
        self
    }

    /// Resolve every unset field to its default, yielding the concrete record
    /// the operations run against.
    ///
    /// `empty_outdir_default` is the entry point's own default for the
    /// empty-outdir flag: the plugin hooks pass `true` (stale output is
    /// cleared before staging), the CLI passes `false` (only `--empty-outdir`
    /// or the `clean` subcommand empties).
    pub fn resolve(&self, empty_outdir_default: bool) -> Result<ResolvedOptions, PackError> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => env::current_dir().map_err(|source| PackError::WorkingDir { source })?,
        };
        let outdir = self.outdir.clone().unwrap_or_else(|| root.join("out"));

        Ok(ResolvedOptions {
            root,
            outdir,
            empty_outdir: self.empty_outdir.unwrap_or(empty_outdir_default),
            copy_files: self
                .copy_files
                .clone()
                .unwrap_or_else(|| DEFAULT_COPY_FILES.map(str::to_string).to_vec()),
            compile_manifest: self.compile_manifest.unwrap_or(true),
            compress_manifest: self.compress_manifest.unwrap_or(true),
            manifest_override: self
                .manifest_override
                .clone()
                .unwrap_or_else(|| Arc::new(default_manifest_override)),
            manifest_encoding: self.manifest_encoding.unwrap_or_default(),
        })
    }
}

/// The product of [`PackOptions::resolve`]: every field concrete.
#[derive(Clone)]
pub struct ResolvedOptions {
    pub root: PathBuf,
    pub outdir: PathBuf,
    pub empty_outdir: bool,
    pub copy_files: Vec<String>,
    pub compile_manifest: bool,
    pub compress_manifest: bool,
    pub manifest_override: ManifestOverride,
    pub manifest_encoding: Encoding,
}
