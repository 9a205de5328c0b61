use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use crate::copy::copy_files;
use crate::encoding::Encoding;
use crate::manifest::compile_manifest;
use crate::options::PackOptions;
use crate::outdir::empty_outdir;

#[derive(Parser)]
#[command(name = "packout")]
#[command(about = "Stage package files and a compiled manifest into an outdir")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every step once: empty (if requested), copy, compile
    Run {
        /// Directory where package.json lives (default: working directory)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Output directory (default: <root>/out)
        #[arg(long)]
        outdir: Option<PathBuf>,

        /// JSON config file with the same option names as the plugin
        #[arg(long)]
        config: Option<PathBuf>,

        /// Relative path to copy (repeatable, overrides the config list)
        #[arg(long = "copy")]
        copy: Vec<String>,

        /// Empty the outdir before staging
        #[arg(long)]
        empty_outdir: bool,

        /// Do not compile the manifest
        #[arg(long)]
        skip_manifest: bool,

        /// Indent the compiled manifest with two spaces instead of compressing
        #[arg(long)]
        pretty: bool,

        /// Encoding of the source manifest (utf8, utf16le, latin1)
        #[arg(long)]
        encoding: Option<Encoding>,
    },

    /// Copy the configured files into the outdir
    Copy {
        /// Directory where package.json lives (default: working directory)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Output directory (default: <root>/out)
        #[arg(long)]
        outdir: Option<PathBuf>,

        /// JSON config file with the same option names as the plugin
        #[arg(long)]
        config: Option<PathBuf>,

        /// Relative path to copy (repeatable, overrides the config list)
        #[arg(long = "copy")]
        copy: Vec<String>,
    },

    /// Compile the manifest into the outdir
    Manifest {
        /// Directory where package.json lives (default: working directory)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Output directory (default: <root>/out)
        #[arg(long)]
        outdir: Option<PathBuf>,

        /// JSON config file with the same option names as the plugin
        #[arg(long)]
        config: Option<PathBuf>,

        /// Indent the compiled manifest with two spaces instead of compressing
        #[arg(long)]
        pretty: bool,

        /// Encoding of the source manifest (utf8, utf16le, latin1)
        #[arg(long)]
        encoding: Option<Encoding>,
    },

    /// Empty the outdir
    Clean {
        /// Directory the outdir default is derived from
        #[arg(long)]
        root: Option<PathBuf>,

        /// Output directory (default: <root>/out)
        #[arg(long)]
        outdir: Option<PathBuf>,

        /// JSON config file with the same option names as the plugin
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            root,
            outdir,
            config,
            copy,
            empty_outdir,
            skip_manifest,
            pretty,
            encoding,
        } => run_command(
            root,
            outdir,
            config,
            copy,
            empty_outdir,
            skip_manifest,
            pretty,
            encoding,
        ),
        Commands::Copy {
            root,
            outdir,
            config,
            copy,
        } => copy_command(root, outdir, config, copy),
        Commands::Manifest {
            root,
            outdir,
            config,
            pretty,
            encoding,
        } => manifest_command(root, outdir, config, pretty, encoding),
        Commands::Clean {
            root,
            outdir,
            config,
        } => clean_command(root, outdir, config),
    }
}

fn run_command(
    root: Option<PathBuf>,
    outdir: Option<PathBuf>,
    config: Option<PathBuf>,
    copy: Vec<String>,
    empty: bool,
    skip_manifest: bool,
    pretty: bool,
    encoding: Option<Encoding>,
) -> Result<()> {
    let mut options = load_options(config, root, outdir)?;
    if !copy.is_empty() {
        options.copy_files = Some(copy);
    }
    if empty {
        options.empty_outdir = Some(true);
    }
    if skip_manifest {
        options.compile_manifest = Some(false);
    }
    if pretty {
        options.compress_manifest = Some(false);
    }
    if encoding.is_some() {
        options.manifest_encoding = encoding;
    }

    // The CLI only empties when asked, unlike the plugin hooks.
    let resolved = options.resolve(false)?;
    empty_outdir(&resolved).context("Failed to empty outdir")?;
    copy_files(&resolved).context("Failed to copy files")?;
    compile_manifest(&resolved).context("Failed to compile manifest")?;

    Ok(())
}

fn copy_command(
    root: Option<PathBuf>,
    outdir: Option<PathBuf>,
    config: Option<PathBuf>,
    copy: Vec<String>,
) -> Result<()> {
    let mut options = load_options(config, root, outdir)?;
    if !copy.is_empty() {
        options.copy_files = Some(copy);
    }

    let resolved = options.resolve(false)?;
    copy_files(&resolved).context("Failed to copy files")?;

    Ok(())
}

fn manifest_command(
    root: Option<PathBuf>,
    outdir: Option<PathBuf>,
    config: Option<PathBuf>,
    pretty: bool,
    encoding: Option<Encoding>,
) -> Result<()> {
    let mut options = load_options(config, root, outdir)?;
    if pretty {
        options.compress_manifest = Some(false);
    }
    if encoding.is_some() {
        options.manifest_encoding = encoding;
    }
    // Asking for the manifest subcommand overrides a disabling config.
    options.compile_manifest = Some(true);

    let resolved = options.resolve(false)?;
    compile_manifest(&resolved).context("Failed to compile manifest")?;

    Ok(())
}

fn clean_command(
    root: Option<PathBuf>,
    outdir: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let mut options = load_options(config, root, outdir)?;
    options.empty_outdir = Some(true);

    let resolved = options.resolve(true)?;
    empty_outdir(&resolved).context("Failed to empty outdir")?;

    Ok(())
}

/// Load options from the config file (if given), then let the path flags
/// override its fields.
fn load_options(
    config: Option<PathBuf>,
    root: Option<PathBuf>,
    outdir: Option<PathBuf>,
) -> Result<PackOptions> {
    let mut options = match config {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        }
        None => PackOptions::new(),
    };

    if root.is_some() {
        options.root = root;
    }
    if outdir.is_some() {
        options.outdir = outdir;
    }

    Ok(options)
}
