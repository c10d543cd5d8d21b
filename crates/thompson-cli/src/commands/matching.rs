//! Test input strings against an expression.

use serde::Serialize;
use thompson_core::utils::quote_input;
use thompson_lib::{Colors, Matcher, normalize_input};

use super::common::{BuildArgs, OutputFormat};

pub struct MatchArgs {
    pub build: BuildArgs,
    pub inputs: Vec<String>,
    pub empty_marker: String,
    pub format: OutputFormat,
}

/// Verdict for one input, as emitted by `--format json`.
#[derive(Debug, Serialize)]
pub struct MatchReport<'a> {
    pub input: &'a str,
    pub matched: bool,
}

pub fn run(args: MatchArgs) {
    let nfa = args.build.build_or_exit();
    let matcher = Matcher::new(&nfa);

    let reports: Vec<MatchReport<'_>> = args
        .inputs
        .iter()
        .map(|input| MatchReport {
            input,
            matched: matcher.is_match(normalize_input(input, &args.empty_marker)),
        })
        .collect();

    match args.format {
        OutputFormat::Text => {
            let colors = Colors::new(args.build.color);
            for line in render_text(&reports, colors) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        },
    }

    if reports.iter().any(|r| !r.matched) {
        std::process::exit(1);
    }
}

/// A bare verdict for a single input, `"input": verdict` lines for several.
pub fn render_text(reports: &[MatchReport<'_>], colors: Colors) -> Vec<String> {
    let verdict = |matched: bool| {
        if matched {
            format!("{}match{}", colors.green, colors.reset)
        } else {
            format!("{}no match{}", colors.red, colors.reset)
        }
    };

    if let [single] = reports {
        return vec![verdict(single.matched)];
    }
    reports
        .iter()
        .map(|r| format!("{}: {}", quote_input(r.input), verdict(r.matched)))
        .collect()
}
