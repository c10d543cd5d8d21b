//! Render the automaton as Graphviz DOT.

use std::path::{Path, PathBuf};

use super::common::BuildArgs;

pub struct DotArgs {
    pub build: BuildArgs,
    pub output: Option<PathBuf>,
}

pub fn run(args: DotArgs) {
    let nfa = args.build.build_or_exit();
    let dot = nfa.to_dot();

    let Some(path) = args.output else {
        print!("{}", dot);
        return;
    };

    if let Err(e) = write_dot(&path, &dot) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Write rendered DOT to `path`, naming the path in the error.
pub fn write_dot(path: &Path, dot: &str) -> std::io::Result<()> {
    std::fs::write(path, dot).map_err(|e| {
        std::io::Error::new(e.kind(), format!("cannot write {}: {}", path.display(), e))
    })
}
