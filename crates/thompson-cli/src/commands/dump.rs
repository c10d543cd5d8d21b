//! Print the automaton's state table.

use thompson_lib::Colors;

use super::common::{BuildArgs, OutputFormat};

pub struct DumpArgs {
    pub build: BuildArgs,
    pub format: OutputFormat,
}

pub fn run(args: DumpArgs) {
    let nfa = args.build.build_or_exit();

    match args.format {
        OutputFormat::Text => {
            let colors = Colors::new(args.build.color);
            print!("{}", nfa.printer().colors(colors).dump());
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&nfa) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        },
    }
}
