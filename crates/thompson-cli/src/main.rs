mod cli;
mod commands;

use cli::{CheckParams, DotParams, DumpParams, MatchParams, ShellParams, TraceParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("dot", m)) => {
            let params = DotParams::from_matches(m);
            commands::dot::run(params.into());
        }
        Some(("match", m)) => {
            let params = MatchParams::from_matches(m);
            commands::matching::run(params.into());
        }
        Some(("trace", m)) => {
            let params = TraceParams::from_matches(m);
            commands::trace::run(params.into());
        }
        Some(("shell", m)) => {
            let params = ShellParams::from_matches(m);
            commands::shell::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
