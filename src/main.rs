use clap::{Arg, ArgAction, Command};
use colored::Colorize;
use log::{debug, info};
use rpn_calc::{Config, EventLog, Evaluator};
use rustyline::error::ReadlineError;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use thiserror::Error;

const BANNER: &str = "Welcome to RPN Calculator! Input your RPN Expression here and Enter exit to exit the procedure.";

#[derive(Debug, Error)]
enum AppError {
    #[error("IO error: {0}")]
    IO(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),

    #[error("{0}")]
    Other(String),
}

impl From<String> for AppError {
    fn from(s: String) -> Self {
        AppError::Other(s)
    }
}

/// One calculator session: the evaluator plus its transcript
struct Session {
    evaluator: Evaluator,
    events: EventLog,
}

impl Session {
    fn new(config: &Config) -> Self {
        Self {
            evaluator: Evaluator::with_precision(config.precision),
            events: EventLog::new(config.log_format, config.log_file.as_ref().map(PathBuf::from)),
        }
    }

    /// Evaluate a line, print the error if any, then always print the stack
    fn run_line(&mut self, line: &str, out: &mut impl Write) -> Result<(), AppError> {
        let result = self.evaluator.evaluate(Some(line));
        let stack = self.evaluator.render_stack();

        let error = result.err().map(|err| err.to_string());
        if let Some(message) = &error {
            writeln!(out, "{}", message.red())?;
        }
        writeln!(out, "{}", format!("Stack: {}", stack).trim_end())?;

        self.events.line_evaluated(line, error.as_deref(), &stack)?;
        Ok(())
    }
}

fn main() {
    env_logger::init();

    let matches = Command::new("rpn-calc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive RPN calculator with per-operation undo")
        .arg(
            Arg::new("expr")
                .short('e')
                .long("expr")
                .value_name("EXPR")
                .help("Evaluate an expression (can be used multiple times)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Evaluate each line of a file"),
        )
        .arg(
            Arg::new("interactive")
                .short('i')
                .long("interactive")
                .help("Start the REPL after evaluating expressions or files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("precision")
                .long("precision")
                .value_name("DIGITS")
                .help("Number of fractional digits shown for stack values")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Write the session transcript in JSON format")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("FILE")
                .help("Append a transcript of every evaluated line to FILE"),
        )
        .get_matches();

    let config = Config::from_env().with_overrides(
        matches.get_one::<usize>("precision").copied(),
        matches.get_flag("json"),
        matches.get_one::<String>("log-file").cloned(),
    );
    debug!("Configuration: {:?}", config);

    let expressions: Vec<String> = matches
        .get_many::<String>("expr")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let file = matches.get_one::<String>("file");
    let batch = !expressions.is_empty() || file.is_some();
    let interactive = matches.get_flag("interactive") || !batch;

    let mut session = Session::new(&config);
    info!("Session {} started", session.events.session());

    if let Err(err) = run(&mut session, &config, &expressions, file, interactive) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(
    session: &mut Session,
    config: &Config,
    expressions: &[String],
    file: Option<&String>,
    interactive: bool,
) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for expr in expressions {
        session.run_line(expr.trim(), &mut out)?;
    }

    if let Some(path) = file {
        run_file(session, Path::new(path), &mut out)?;
    }

    // The REPL uses its own terminal handle
    drop(out);

    if interactive {
        run_interactive(session, config)?;
    }
    Ok(())
}

fn run_file(session: &mut Session, path: &Path, out: &mut impl Write) -> Result<(), AppError> {
    if !path.exists() {
        return Err(format!("Input file not found: {}", path.display()).into());
    }

    let source = fs::read_to_string(path)?;
    for line in source.lines().map(str::trim).filter(|l| !l.is_empty()) {
        session.run_line(line, out)?;
    }
    Ok(())
}

fn run_interactive(session: &mut Session, config: &Config) -> Result<(), AppError> {
    println!("{}", BANNER);

    let mut rl = rustyline::DefaultEditor::new()?;

    loop {
        let line = match rl.readline(&config.prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        let trimmed = line.trim();
        if !trimmed.is_empty() {
            rl.add_history_entry(trimmed)?;
        }

        match trimmed {
            t if t == config.exit_keyword => break,
            "help" => print_help(config),
            "history" => {
                println!("{}", serde_json::to_string_pretty(session.evaluator.history())?);
            }
            _ => session.run_line(trimmed, &mut io::stdout())?,
        }
    }

    info!("Session {} finished", session.events.session());
    Ok(())
}

fn print_help(config: &Config) {
    println!("Enter numbers and operators separated by single spaces.");
    println!("  integers       - push a value");
    println!("  + - * /        - binary arithmetic on the top two values");
    println!("  sqrt           - square root of the top value");
    println!("  undo           - revert the latest push or operator");
    println!("  clear          - empty the stack and the undo history");
    println!();
    println!("Session commands:");
    println!("  help           - show this message");
    println!("  history        - show the undo history");
    println!("  {:<14} - leave the calculator", config.exit_keyword);
}
