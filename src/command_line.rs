// command_line.rs - CLI argument parsing
//
// clap derive definition of the glyphls command line.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

////////////////////////////////////////////////////////////////////////////////
//
//  Enums
//
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info  => tracing::Level::INFO,
            LogLevel::Warn  => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
//
//  CommandLine struct
//
////////////////////////////////////////////////////////////////////////////////

/// List directory entries with an icon chosen by the GLYPHLS_ICONS rules.
#[derive(Debug, Parser)]
#[command(name = "glyphls", version, about)]
pub struct CommandLine {
    /// Directories or files to list
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Include entries whose names start with '.'
    #[arg(short = 'a', long = "all")]
    pub show_hidden: bool,

    /// Omit the icon column
    #[arg(long = "no-icons")]
    pub no_icons: bool,

    /// Print the active icon rules in priority order and exit
    #[arg(long = "rules", conflicts_with = "show_env_help")]
    pub show_rules: bool,

    /// Explain the GLYPHLS_ICONS format and exit
    #[arg(long = "env")]
    pub show_env_help: bool,

    /// Log verbosity when RUST_LOG is not set
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

impl CommandLine {
    /// Parse arguments, not including argv[0].
    pub fn parse_from_args<I, S>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<std::ffi::OsString> + Clone,
    {
        let argv = std::iter::once(std::ffi::OsString::from("glyphls"))
            .chain(args.into_iter().map(Into::into));
        Self::try_parse_from(argv)
    }
}
