//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs populated from clap, one per subcommand
//! - `from_matches()` extractors that pull relevant fields (ignoring hidden ones)
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use thompson_lib::engine::Verbosity;
use thompson_lib::{DEFAULT_RECURSION_LIMIT, EMPTY_INPUT_SENTINEL};

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::common::{BuildArgs, OutputFormat};
use crate::commands::dot::DotArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::matching::MatchArgs;
use crate::commands::shell::ShellArgs;
use crate::commands::trace::TraceArgs;

pub struct CheckParams {
    pub expr: String,
    pub recursion_limit: u32,
    pub color: ColorChoice,
    // Note: empty_marker and verbose are parsed but not extracted (unified flags)
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            expr: parse_expr(m),
            recursion_limit: parse_recursion_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            build: BuildArgs {
                expr: p.expr,
                recursion_limit: p.recursion_limit,
                color: p.color.should_colorize(),
            },
        }
    }
}

pub struct DumpParams {
    pub expr: String,
    pub format: OutputFormat,
    pub recursion_limit: u32,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            expr: parse_expr(m),
            format: parse_format(m),
            recursion_limit: parse_recursion_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            build: BuildArgs {
                expr: p.expr,
                recursion_limit: p.recursion_limit,
                color: p.color.should_colorize(),
            },
            format: p.format,
        }
    }
}

pub struct DotParams {
    pub expr: String,
    pub output: Option<PathBuf>,
    pub recursion_limit: u32,
    pub color: ColorChoice,
}

impl DotParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            expr: parse_expr(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            recursion_limit: parse_recursion_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<DotParams> for DotArgs {
    fn from(p: DotParams) -> Self {
        Self {
            build: BuildArgs {
                expr: p.expr,
                recursion_limit: p.recursion_limit,
                color: p.color.should_colorize(),
            },
            output: p.output,
        }
    }
}

pub struct MatchParams {
    pub expr: String,
    pub inputs: Vec<String>,
    pub empty_marker: String,
    pub format: OutputFormat,
    pub recursion_limit: u32,
    pub color: ColorChoice,
}

impl MatchParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            expr: parse_expr(m),
            inputs: m
                .get_many::<String>("inputs")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            empty_marker: parse_empty_marker(m),
            format: parse_format(m),
            recursion_limit: parse_recursion_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<MatchParams> for MatchArgs {
    fn from(p: MatchParams) -> Self {
        Self {
            build: BuildArgs {
                expr: p.expr,
                recursion_limit: p.recursion_limit,
                color: p.color.should_colorize(),
            },
            inputs: p.inputs,
            empty_marker: p.empty_marker,
            format: p.format,
        }
    }
}

pub struct TraceParams {
    pub expr: String,
    pub input: String,
    pub empty_marker: String,
    pub verbose: u8,
    pub recursion_limit: u32,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            expr: parse_expr(m),
            input: m.get_one::<String>("input").cloned().unwrap_or_default(),
            empty_marker: parse_empty_marker(m),
            verbose: m.get_count("verbose"),
            recursion_limit: parse_recursion_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            _ => Verbosity::Verbose,
        };

        Self {
            build: BuildArgs {
                expr: p.expr,
                recursion_limit: p.recursion_limit,
                color: p.color.should_colorize(),
            },
            input: p.input,
            empty_marker: p.empty_marker,
            verbosity,
        }
    }
}

pub struct ShellParams {
    pub quiet: bool,
    pub empty_marker: String,
    pub color: ColorChoice,
}

impl ShellParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            quiet: m.get_flag("quiet"),
            empty_marker: parse_empty_marker(m),
            color: parse_color(m),
        }
    }
}

impl From<ShellParams> for ShellArgs {
    fn from(p: ShellParams) -> Self {
        Self {
            quiet: p.quiet,
            empty_marker: p.empty_marker,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_expr(m: &ArgMatches) -> String {
    m.get_one::<String>("expr").cloned().unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}

fn parse_empty_marker(m: &ArgMatches) -> String {
    m.get_one::<String>("empty_marker")
        .cloned()
        .unwrap_or_else(|| EMPTY_INPUT_SENTINEL.to_string())
}

fn parse_recursion_limit(m: &ArgMatches) -> u32 {
    m.get_one::<u32>("recursion_limit")
        .copied()
        .unwrap_or(DEFAULT_RECURSION_LIMIT)
}
