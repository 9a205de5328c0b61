use crate::copy::copy_files;
use crate::error::PackError;
use crate::manifest::compile_manifest;
use crate::options::PackOptions;
use crate::outdir::empty_outdir;

/// Name reported to the host plugin system.
pub const PLUGIN_NAME: &str = "packout";

/// Host-neutral lifecycle descriptor.
///
/// One policy, regardless of host: [`build_start`](Plugin::build_start)
/// clears the outdir, [`build_end`](Plugin::build_end) copies the configured
/// files and compiles the manifest, so both rerun on every rebuild in watch
/// mode. Options are resolved afresh at each hook firing, with the
/// empty-outdir flag defaulting to true.
#[derive(Clone)]
pub struct Plugin {
    options: PackOptions,
}

impl Plugin {
    pub fn new(options: PackOptions) -> Self {
        Self { options }
    }

    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    /// "Build starting" hook: empty the outdir.
    pub fn build_start(&self) -> Result<(), PackError> {
        let resolved = self.options.resolve(true)?;
        empty_outdir(&resolved)
    }

    /// "Build finished" hook: copy files, then compile the manifest.
    pub fn build_end(&self) -> Result<(), PackError> {
        let resolved = self.options.resolve(true)?;
        copy_files(&resolved)?;
        compile_manifest(&resolved)
    }
}
