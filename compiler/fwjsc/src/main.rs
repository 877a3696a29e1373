//! FWJS command line.

use std::process::ExitCode;

use fwjsc::commands::{explain_error, lex_file, parse_file, run_file};
use fwjsc::{init_tracing, RunOptions};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        print_usage();
        return ExitCode::SUCCESS;
    };

    match command.as_str() {
        "run" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: fwjs run <file.fwjs> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --color=<mode>    auto (default), always, never");
                eprintln!("  --print-result    Print the value of the last statement");
                return ExitCode::FAILURE;
            };
            match RunOptions::from_flags(args.get(3..).unwrap_or_default()) {
                Ok(options) => run_file(path, &options),
                Err(msg) => {
                    eprintln!("error: {msg}");
                    ExitCode::FAILURE
                }
            }
        }
        "parse" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: fwjs parse <file.fwjs>");
                return ExitCode::FAILURE;
            };
            parse_file(path)
        }
        "lex" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: fwjs lex <file.fwjs>");
                return ExitCode::FAILURE;
            };
            lex_file(path)
        }
        "explain" | "--explain" => {
            let Some(code) = args.get(2) else {
                eprintln!("Usage: fwjs explain <ERROR_CODE>");
                eprintln!("Example: fwjs explain E6003");
                return ExitCode::FAILURE;
            };
            explain_error(code)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("fwjs {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            // A bare `.fwjs` path runs the file.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("fwjs"))
            {
                run_file(command, &RunOptions::default())
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                ExitCode::FAILURE
            }
        }
    }
}

fn print_usage() {
    println!("FWJS, a Featherweight JavaScript interpreter");
    println!();
    println!("Usage: fwjs <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.fwjs>      Run a program");
    println!("  parse <file.fwjs>    Parse and print the syntax tree");
    println!("  lex <file.fwjs>      Tokenize and print the tokens");
    println!("  explain <code>       Describe an error code (e.g., E6003)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --color=<mode>       auto (default), always, never");
    println!("  --print-result       Print the value of the last statement");
    println!();
    println!("Environment:");
    println!("  FWJS_LOG=<filter>    Enable logging, e.g. FWJS_LOG=fwjs_eval=trace");
    println!("  FWJS_LOG_TREE=1      Show logs as an indented span tree");
    println!();
    println!("Examples:");
    println!("  fwjs run main.fwjs");
    println!("  fwjs run main.fwjs --print-result");
    println!("  fwjs explain E6002");
}
