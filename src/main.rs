use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use francois::{Environment, produce_ast, run, tokenize};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

/// francois is a small scripting language with French keywords.
///
/// Without a script, an interactive session is started on standard input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells francois to look at a file instead of a script.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Print the token stream instead of evaluating.
    #[arg(short, long, conflicts_with = "ast")]
    tokens: bool,

    /// Print the parsed syntax tree instead of evaluating.
    #[arg(short, long)]
    ast: bool,

    /// In an interactive session, start from a fresh environment after an
    /// error instead of keeping earlier variables.
    #[arg(short, long)]
    reset_on_error: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace).
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: Option<String>,
}

/// What to do with each chunk of source.
#[derive(Debug, Clone, Copy)]
enum Mode {
    Tokens,
    Ast,
    Evaluate,
}

impl From<&Args> for Mode {
    fn from(args: &Args) -> Self {
        if args.tokens {
            Self::Tokens
        } else if args.ast {
            Self::Ast
        } else {
            Self::Evaluate
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let mode = Mode::from(&args);

    let Some(contents) = args.contents else {
        return repl(mode, args.reset_on_error);
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}': {e}");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    let mut env = Environment::with_builtins();
    match process(&script, mode, &mut env) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs one chunk of source in the requested mode and renders the output.
fn process(source: &str, mode: Mode, env: &mut Environment) -> Result<String, francois::Error> {
    match mode {
        Mode::Tokens => Ok(tokenize(source).iter()
                                           .map(|t| format!("{:<16} {:?} (line {})", t.kind, t.text, t.line))
                                           .collect::<Vec<_>>()
                                           .join("\n")),
        Mode::Ast => Ok(format!("{:#?}", produce_ast(source)?)),
        Mode::Evaluate => Ok(run(source, env)?.to_string()),
    }
}

/// Reads lines from stdin and runs each one in a shared environment.
fn repl(mode: Mode, reset_on_error: bool) -> ExitCode {
    let mut env = Environment::with_builtins();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    info!("starting interactive session");
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Failed to read input: {e}");
                return ExitCode::FAILURE;
            },
            None => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        match process(&line, mode, &mut env) {
            Ok(output) => println!("{output}"),
            Err(e) => {
                eprintln!("{e}");
                if reset_on_error {
                    info!("resetting environment after error");
                    env = Environment::with_builtins();
                }
            },
        }
    }

    println!();
    ExitCode::SUCCESS
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder().with_default_directive(level.into())
                                     .from_env_lossy();

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}
