pub mod cli;
pub mod copy;
pub mod encoding;
pub mod error;
pub mod host;
pub mod manifest;
pub mod options;
pub mod outdir;
pub mod plugin;

mod console;

pub use copy::copy_files;
pub use encoding::Encoding;
pub use error::PackError;
pub use host::{Host, HostPlugin, esbuild, farm, rolldown, rollup, rspack, vite, webpack};
pub use manifest::compile_manifest;
pub use options::{
    DEFAULT_COPY_FILES, Manifest, ManifestOverride, PackOptions, ResolvedOptions,
    default_manifest_override,
};
pub use outdir::empty_outdir;
pub use plugin::Plugin;
