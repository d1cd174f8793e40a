//! `slang.conf` loading and the resolved, immutable settings.
//!
//! The file is optional TOML. Command-line flags override whatever it
//! sets; routes given on the command line replace the file's routes.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::Deserialize;
use slang_compile::{can_compile, full_extension, ContextOptions};
use slang_server::{RouteRule, RouteTable, ServerConfig, DEFAULT_PORT};
use thiserror::Error;
use url::Url;

use crate::cli::Cli;

pub const DEFAULT_CONFIG_PATH: &str = "./slang.conf";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("configuration {} is not valid", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid exclude pattern '{pattern}'")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("invalid proxy URL '{url}'")]
    Proxy {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// The on-disk configuration. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub debug: Option<bool>,
    pub server: ServerSection,
    pub routes: BTreeMap<String, RouteTargets>,
    pub stylesheet: ExcludeSection,
    pub javascript: ExcludeSection,
    pub unmanaged: UnmanagedSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    pub port: Option<u16>,
    pub proxy: Option<String>,
    pub root: Option<PathBuf>,
    pub strict: Option<bool>,
}

/// A route maps to one local directory or a list of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RouteTargets {
    One(String),
    Many(Vec<String>),
}

impl RouteTargets {
    fn into_vec(self) -> Vec<String> {
        match self {
            RouteTargets::One(target) => vec![target],
            RouteTargets::Many(targets) => targets,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExcludeSection {
    pub exclude: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UnmanagedSection {
    pub copy: Option<bool>,
    pub exclude_from_copy: Vec<String>,
}

impl FileConfig {
    pub fn parse(path: &Path, text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `explicit`, which must exist, or the default path if present.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = explicit.unwrap_or(Path::new(DEFAULT_CONFIG_PATH));
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(path, &text),
            Err(err) if explicit.is_none() && err.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// How much the tool says.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Default log filter when `RUST_LOG` is unset.
    pub fn filter(self) -> &'static str {
        match self {
            Verbosity::Quiet => "warn",
            Verbosity::Normal => "info",
            Verbosity::Verbose => "debug",
            Verbosity::Debug => "trace",
        }
    }

    pub fn is_quiet(self) -> bool {
        self == Verbosity::Quiet
    }
}

/// What the batch builder does with one file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Compile,
    Copy,
    Skip,
}

/// Batch build policy.
#[derive(Clone, Debug)]
pub struct BuildConfig {
    pub options: ContextOptions,
    pub stylesheet_exclude: GlobSet,
    pub javascript_exclude: GlobSet,
    pub copy: bool,
    pub copy_exclude: GlobSet,
}

impl BuildConfig {
    /// Compile what a compiler claims unless its family excludes it, copy
    /// unmanaged files when copying is on, skip everything else.
    pub fn action(&self, path: &Path) -> Action {
        let name = path.file_name().unwrap_or(path.as_os_str());
        if can_compile(path) {
            let exclude = match full_extension(path) {
                ".scss" | ".css" | ".min.scss" | ".min.css" => Some(&self.stylesheet_exclude),
                ".ejs" | ".js" | ".min.ejs" | ".min.js" => Some(&self.javascript_exclude),
                _ => None,
            };
            if exclude.is_some_and(|set| set.is_match(name)) {
                Action::Skip
            } else {
                Action::Compile
            }
        } else if self.copy && !self.copy_exclude.is_match(name) {
            Action::Copy
        } else {
            Action::Skip
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            options: ContextOptions::empty(),
            stylesheet_exclude: GlobSet::empty(),
            javascript_exclude: GlobSet::empty(),
            copy: false,
            copy_exclude: GlobSet::empty(),
        }
    }
}

/// Everything a command needs, resolved once at startup.
#[derive(Clone, Debug)]
pub struct Settings {
    pub verbosity: Verbosity,
    pub server: ServerConfig,
    pub build: BuildConfig,
}

impl Settings {
    /// Load the configuration file named by `cli` and apply its flags.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = FileConfig::load(cli.conf.as_deref())?;
        Self::resolve(cli, file)
    }

    pub fn resolve(cli: &Cli, file: FileConfig) -> Result<Self, ConfigError> {
        let quiet = cli.quiet || file.quiet.unwrap_or(false);
        let verbosity = if quiet {
            Verbosity::Quiet
        } else if cli.debug || file.debug.unwrap_or(false) {
            Verbosity::Debug
        } else if cli.verbose || file.verbose.unwrap_or(false) {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };

        let mut options = ContextOptions::empty();
        options.set(ContextOptions::VERBOSE, verbosity >= Verbosity::Verbose);
        options.set(ContextOptions::ANNOTATE_IMPORTS, cli.annotate);

        let proxy = match (&cli.proxy, file.server.proxy) {
            (Some(url), _) => Some(url.clone()),
            (None, Some(url)) => Some(
                Url::parse(&url).map_err(|source| ConfigError::Proxy { url, source })?,
            ),
            (None, None) => None,
        };

        let routes = if cli.routes.is_empty() {
            file.routes
                .into_iter()
                .map(|(remote, targets)| RouteRule::new(&remote, targets.into_vec()))
                .collect::<Vec<_>>()
        } else {
            cli.routes
                .iter()
                .map(|(remote, local)| RouteRule::new(remote, [local.as_str()]))
                .collect()
        };

        let root = match &cli.command {
            crate::cli::Command::Run { root: Some(root) } => root.clone(),
            _ => file.server.root.unwrap_or_else(|| PathBuf::from(".")),
        };

        let port = cli.port.or(file.server.port).unwrap_or(DEFAULT_PORT);
        let server = ServerConfig {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
            root,
            proxy,
            routes: RouteTable::new(routes),
            strict: cli.strict || file.server.strict.unwrap_or(false),
            options,
        };

        let build = BuildConfig {
            options,
            stylesheet_exclude: glob_set(&file.stylesheet.exclude)?,
            javascript_exclude: glob_set(&file.javascript.exclude)?,
            copy: cli.copy || file.unmanaged.copy.unwrap_or(false),
            copy_exclude: glob_set(&file.unmanaged.exclude_from_copy)?,
        };

        Ok(Settings {
            verbosity,
            server,
            build,
        })
    }
}

fn glob_set(patterns: &[String]) -> Result<GlobSet, ConfigError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| ConfigError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| ConfigError::Pattern {
        pattern: patterns.join(", "),
        source,
    })
}
