use std::io::{self, BufRead, Write};

use clap::Parser;
use exprsolver::{Engine, ast::format_postfix};
use tracing_subscriber::filter::LevelFilter;

/// exprsolver evaluates arithmetic expressions with variables, constants and
/// functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the postfix (reverse Polish) form of each line before its value.
    #[arg(short, long)]
    postfix: bool,

    /// Log every evaluation step to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// A single line to evaluate. Without it, lines are read from stdin.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut engine = Engine::new();

    if let Some(line) = &args.expression {
        if !run_line(&mut engine, line, args.postfix) {
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = repl(&mut engine, args.postfix) {
        eprintln!("Failed to read from stdin: {e}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };

    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(io::stderr)
                             .init();
}

/// Reads lines until end of input or `:quit`.
///
/// `:vars`, `:functions` and `:constants` list the symbol tables.
fn repl(engine: &mut Engine, postfix: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim_end_matches(['\n', '\r']);

        match line.trim() {
            "" => {},
            ":quit" => return Ok(()),
            ":vars" => print_all(&engine.list_variables()),
            ":functions" => print_all(&engine.list_functions()),
            ":constants" => print_all(&engine.list_constants()),
            _ => {
                run_line(engine, line, postfix);
            },
        }
    }
}

fn run_line(engine: &mut Engine, line: &str, postfix: bool) -> bool {
    if postfix {
        match engine.to_postfix(line) {
            Ok(terms) => println!("{}", format_postfix(&terms)),
            Err(e) => {
                eprintln!("{e}");
                return false;
            },
        }
    }

    match engine.evaluate(line) {
        Ok(value) => {
            println!("{value}");
            true
        },
        Err(e) => {
            eprintln!("{e}");
            false
        },
    }
}

fn print_all(entries: &[String]) {
    for entry in entries {
        println!("{entry}");
    }
}
