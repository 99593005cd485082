use std::{env, fs::read_to_string, process::exit};

use bloco::run_source;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: bloco <source-file>");
        exit(2);
    }

    let file_path = &args[1];
    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            exit(2);
        }
    };

    let (output, diagnostics) = run_source(&source);
    for line in &output {
        println!("{}", line);
    }

    if !diagnostics.is_empty() {
        exit(1);
    }
}
