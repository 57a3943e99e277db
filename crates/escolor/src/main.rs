use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use escolor_core::{
    es_file_to_hex, es_node_to_hex, format_channel, hex_file_to_es, hex_to_color, DataNode,
};

const FORMAT_HELP: &str = "\
Formats:
  fractional: color <name> <r> <g> <b> [<a>]
  hex:        color <name> #<RRGGBB>

A bare #RRGGBB argument converts one hex color to fractional channels.
Three or four bare channel values convert one fractional color to hex.";

/// Convert between Endless Sky fractional color records and 24-bit HTML hex codes.
#[derive(Parser, Debug)]
#[command(name = "escolor")]
#[command(about = "Converts colors between fractional game records and HTML hex codes")]
#[command(after_help = FORMAT_HELP)]
struct Args {
    /// Read fractional color records from FILE and print them as hex codes
    #[arg(long, value_name = "FILE")]
    es_to_hex: Option<PathBuf>,

    /// Read hex color records from FILE and print them as fractional records
    #[arg(long, value_name = "FILE")]
    hex_to_es: Option<PathBuf>,

    /// A single color: one #RRGGBB code, or 3-4 fractional channel values
    #[arg(value_name = "COLOR", allow_negative_numbers = true)]
    color: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                let _ = err.print();
                return ExitCode::SUCCESS;
            }
            // Usage error: a short diagnostic, then the help text.
            println!("Error: {}\n", err.kind());
            print_help();
            return ExitCode::from(1);
        }
    };

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run(args: Args) -> Result<ExitCode, anyhow::Error> {
    if let Some(path) = &args.es_to_hex {
        for entry in es_file_to_hex(path)? {
            println!("{}", entry);
        }
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(path) = &args.hex_to_es {
        for entry in hex_file_to_es(path)? {
            println!("{}", entry);
        }
        return Ok(ExitCode::SUCCESS);
    }

    if args.color.is_empty() {
        print_help();
        return Ok(ExitCode::from(1));
    }

    // A single #RRGGBB code prints its bare fractional channels.
    if let Some(code) = args.color.iter().find(|arg| arg.starts_with('#')) {
        match hex_to_color(code) {
            Some(color) => {
                let channels: Vec<String> =
                    color.channels().iter().map(|&v| format_channel(v)).collect();
                println!("{}", channels.join(" "));
            }
            None => println!(),
        }
        return Ok(ExitCode::SUCCESS);
    }

    // Three or four bare channel values print one hex code. They go
    // through the same tokenizer used for files, so quoting and joined
    // arguments behave identically.
    if args.color.len() >= 3 {
        if let Some(node) = DataNode::parse_line(&args.color.join(" ")) {
            println!("{}", es_node_to_hex(&node, 0));
            return Ok(ExitCode::SUCCESS);
        }
    }

    log::debug!("{} bare argument(s), need a #code or 3+ channels", args.color.len());
    Ok(ExitCode::from(2))
}

fn print_help() {
    let mut command = Args::command();
    let _ = command.print_help();
}
