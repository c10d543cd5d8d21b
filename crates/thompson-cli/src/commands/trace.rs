//! Trace matcher execution for debugging.

use thompson_lib::engine::{PrintTracer, Verbosity};
use thompson_lib::{Colors, Matcher, normalize_input};

use super::common::BuildArgs;

pub struct TraceArgs {
    pub build: BuildArgs,
    pub input: String,
    pub empty_marker: String,
    pub verbosity: Verbosity,
}

pub fn run(args: TraceArgs) {
    let nfa = args.build.build_or_exit();
    let colors = Colors::new(args.build.color);
    let mut tracer = PrintTracer::new(&nfa, args.verbosity, colors);

    let input = normalize_input(&args.input, &args.empty_marker);
    let matched = Matcher::new(&nfa).is_match_traced(input, &mut tracer);
    tracer.print();

    if !matched {
        std::process::exit(1);
    }
}
