//! # rjs-lint CLI
//!
//! Command-line front end: reads a JavaScript file, parses it, runs the
//! scope analyzer over it, and renders any diagnostics to stderr.

use std::path::PathBuf;
use std::process;

use clap::{Arg, Command};

use rjs_lint::analyzer::{CollectingSink, Diagnostic};
use rjs_lint::driver;
use rjs_lint::parser::{self, ParserConfig};

const VERSION: &str = "0.1.0";
const APP_NAME: &str = "rjs-lint";

/// Parsed command-line configuration.
#[derive(Debug, Clone)]
struct CliConfig {
    input_file: Option<PathBuf>,
    verbose:    bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("input file not specified")]
    MissingInputFile,
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("{0} parse error(s) found")]
    ParseFailed(usize),
}

type CliResult<T> = Result<T, CliError>;

fn main() {
    let config = parse_command_line_arguments();
    let Some(ref input_file) = config.input_file else {
        display_usage_information();
        eprintln!("Error: {}", CliError::MissingInputFile);
        process::exit(2);
    };

    match run(input_file, &config) {
        Ok(diagnostic_count) => process::exit(if diagnostic_count == 0 { 0 } else { 1 }),
        Err(CliError::ParseFailed(_)) => process::exit(2),
        Err(error) => {
            eprintln!("Error: {error}");
            process::exit(2);
        }
    }
}

fn parse_command_line_arguments() -> CliConfig {
    let matches = Command::new(APP_NAME)
        .version(VERSION)
        .about("A single-pass lexical-scope linter for JavaScript")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(clap::ArgAction::SetTrue)
                .help("Print per-phase progress while analyzing"),
        )
        .arg(
            Arg::new("input")
                .help("JavaScript file to analyze")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .index(1),
        )
        .get_matches();

    CliConfig { input_file: matches.get_one::<PathBuf>("input").cloned(), verbose: matches.get_flag("verbose") }
}

fn display_usage_information() {
    eprintln!("Usage: {APP_NAME} [OPTIONS] <FILE>");
    eprintln!("       Use --help for more information");
}

/// Runs the full parse -> analyze -> report pipeline, returning the number of
/// diagnostics found.
fn run(file_path: &PathBuf, config: &CliConfig) -> CliResult<usize> {
    if !file_path.exists() {
        return Err(CliError::FileNotFound(file_path.clone()));
    }

    let source = std::fs::read_to_string(file_path).map_err(|_| CliError::FileNotFound(file_path.clone()))?;

    if config.verbose {
        eprintln!("parsing {}", file_path.display());
    }

    let parse_result = parser::parse_js(&source, &file_path.to_string_lossy(), &ParserConfig::default());

    if !parse_result.errors.is_empty() {
        for error in &parse_result.errors {
            eprintln!("{}: {error}", file_path.display());
        }
        return Err(CliError::ParseFailed(parse_result.errors.len()));
    }
    let program = parse_result.ast.expect("no parse errors implies an AST");

    if config.verbose {
        eprintln!("analyzing {} top-level statement(s)", program.body.len());
    }

    let sink = driver::analyze_program(&program, CollectingSink::new());
    let diagnostics = sink.into_diagnostics();

    if config.verbose {
        eprintln!("found {} diagnostic(s)", diagnostics.len());
    }

    for diagnostic in &diagnostics {
        render_diagnostic(&source, file_path, diagnostic);
    }

    Ok(diagnostics.len())
}

/// Prints one `file:line:column: message` line per diagnostic, plus a
/// `note:` line pointing at the paired location for diagnostics that carry
/// one (redeclaration, assignment-to-const).
fn render_diagnostic(source: &str, file_path: &PathBuf, diagnostic: &Diagnostic) {
    match diagnostic {
        Diagnostic::UseOfUndeclaredVariable { name }
        | Diagnostic::AssignmentToUndeclaredVariable { name }
        | Diagnostic::AssignmentToConstGlobalVariable { assignment: name }
        | Diagnostic::RedeclarationOfGlobalVariable { redeclaration: name } => {
            print_location(source, file_path, name.span().start, diagnostic);
        }
        Diagnostic::AssignmentToConstVariable { declaration, assignment, .. }
        | Diagnostic::AssignmentToConstVariableBeforeItsDeclaration { declaration, assignment, .. } => {
            print_location(source, file_path, assignment.span().start, diagnostic);
            print_note(source, file_path, declaration.span().start, "const declared here");
        }
        Diagnostic::AssignmentBeforeVariableDeclaration { assignment, declaration }
        | Diagnostic::VariableUsedBeforeDeclaration { use_site: assignment, declaration }
        | Diagnostic::FunctionCallBeforeDeclarationInBlockedScope { use_site: assignment, declaration } => {
            print_location(source, file_path, assignment.span().start, diagnostic);
            print_note(source, file_path, declaration.span().start, "declared here");
        }
        Diagnostic::RedeclarationOfVariable { redeclaration, original_declaration } => {
            print_location(source, file_path, redeclaration.span().start, diagnostic);
            print_note(source, file_path, original_declaration.span().start, "originally declared here");
        }
    }
}

fn print_location(source: &str, path: &PathBuf, offset: u32, diagnostic: &Diagnostic) {
    let (line, column) = parser::get_line_column(source, offset);
    eprintln!("{}:{line}:{column}: {diagnostic}", path.display());
}

fn print_note(source: &str, path: &PathBuf, offset: u32, message: &str) {
    let (line, column) = parser::get_line_column(source, offset);
    eprintln!("{}:{line}:{column}: note: {message}", path.display());
}
