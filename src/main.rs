use clap::{Args, Parser, Subcommand};
use full_name::{parse_name, Field, Lexicon, ParseOptions, ParsedName};
use std::io::{self, BufRead, Write};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// BSD EX_USAGE
const USAGE_ERROR: i32 = 64;

#[derive(Parser)]
#[command(
    name = "full_name",
    about = "Split personal names into title, first, middle, last, nickname and suffix"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a name and print it as JSON. Exits with status 1 if the parse
    /// produced warnings.
    Parse(ParseArgs),
}

#[derive(Args)]
struct ParseArgs {
    /// Words of the name, or `-` to parse newline-separated names from stdin
    #[arg(required = true)]
    name: Vec<String>,

    /// Set to `all` to let --fix-case-override decide re-casing
    #[arg(long)]
    fix_case: Option<String>,

    /// 1 forces re-casing, 0 forbids it
    #[arg(long, allow_negative_numbers = true)]
    fix_case_override: Option<i64>,

    /// Use the extended title, suffix and particle lists
    #[arg(long)]
    long_lists: bool,

    /// Print only this field (title, first, middle, last, nick or suffix)
    #[arg(long)]
    field: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let status = match cli.command {
        Command::Parse(args) => parse_mode(&args),
    };
    process::exit(status);
}

fn parse_mode(args: &ParseArgs) -> i32 {
    let options = match ParseOptions::from_raw(args.fix_case.as_deref(), args.fix_case_override) {
        Ok(options) if args.long_lists => options.with_lexicon(Lexicon::Extended),
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            return USAGE_ERROR;
        }
    };

    let field = match args.field.as_deref().map(str::parse::<Field>).transpose() {
        Ok(field) => field,
        Err(e) => {
            eprintln!("{}", e);
            return USAGE_ERROR;
        }
    };

    debug!(?options, ?field, "parse mode");

    if args.name.len() == 1 && args.name[0] == "-" {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for line in io::stdin().lock().lines() {
            let input = match line {
                Ok(input) => input,
                Err(_) => break,
            };

            let parsed = parse_name(Some(&input), &options);
            if writeln!(out, "{}", render(&parsed, field)).is_err() {
                break;
            }
        }
        0
    } else {
        let input = args.name.join(" ");
        let parsed = parse_name(Some(&input), &options);
        println!("{}", render(&parsed, field));

        if parsed.has_warnings() {
            1
        } else {
            0
        }
    }
}

fn render(parsed: &ParsedName, field: Option<Field>) -> String {
    match field {
        Some(field) => parsed.get(field).to_string(),
        None => parsed.to_json().to_string(),
    }
}
