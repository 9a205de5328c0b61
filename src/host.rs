//! Per-bundler registration surface.
//!
//! Every supported host gets a named factory taking the same options and
//! returning a host-tagged wrapper around the neutral [`Plugin`]; the tag is
//! the only per-host difference.

use std::fmt;

use crate::error::PackError;
use crate::options::PackOptions;
use crate::plugin::Plugin;

/// A supported host bundler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    Vite,
    Rollup,
    Rolldown,
    Webpack,
    Rspack,
    Esbuild,
    Farm,
}

impl Host {
    pub fn as_str(&self) -> &'static str {
        match self {
            Host::Vite => "vite",
            Host::Rollup => "rollup",
            Host::Rolldown => "rolldown",
            Host::Webpack => "webpack",
            Host::Rspack => "rspack",
            Host::Esbuild => "esbuild",
            Host::Farm => "farm",
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A [`Plugin`] tagged with the host it was built for.
#[derive(Clone)]
pub struct HostPlugin {
    host: Host,
    plugin: Plugin,
}

impl HostPlugin {
    fn new(host: Host, options: PackOptions) -> Self {
        Self {
            host,
            plugin: Plugin::new(options),
        }
    }

    pub fn host(&self) -> Host {
        self.host
    }

    pub fn name(&self) -> &'static str {
        self.plugin.name()
    }

    pub fn build_start(&self) -> Result<(), PackError> {
        self.plugin.build_start()
    }

    pub fn build_end(&self) -> Result<(), PackError> {
        self.plugin.build_end()
    }
}

pub fn vite(options: PackOptions) -> HostPlugin {
    HostPlugin::new(Host::Vite, options)
}

pub fn rollup(options: PackOptions) -> HostPlugin {
    HostPlugin::new(Host::Rollup, options)
}

pub fn rolldown(options: PackOptions) -> HostPlugin {
    HostPlugin::new(Host::Rolldown, options)
}

pub fn webpack(options: PackOptions) -> HostPlugin {
    HostPlugin::new(Host::Webpack, options)
}

pub fn rspack(options: PackOptions) -> HostPlugin {
    HostPlugin::new(Host::Rspack, options)
}

pub fn esbuild(options: PackOptions) -> HostPlugin {
    HostPlugin::new(Host::Esbuild, options)
}

pub fn farm(options: PackOptions) -> HostPlugin {
    HostPlugin::new(Host::Farm, options)
}
