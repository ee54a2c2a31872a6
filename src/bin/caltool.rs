use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use hebrew_cal::cal::split_tokens;
use hebrew_cal::trace_init::init_tracing;
use hebrew_cal::{Category, Mapper, WordContext};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "caltool", about = "Hebrew to CAL code transliteration")]
struct Cli {
    /// Path to a writing-system TOML replacing the built-in tables
    #[arg(long, global = true)]
    writing: Option<PathBuf>,
    /// Directory for JSON trace output (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert Hebrew words to CAL code (reads stdin lines when no word is given)
    Convert {
        /// Words to convert
        words: Vec<String>,
        /// Output one JSON object per word
        #[arg(long)]
        json: bool,
    },

    /// Print the source-to-target mapping table
    Table {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Split CAL text into atomic units
    Split {
        /// CAL text
        cal: String,
    },
}

#[derive(Debug, Serialize)]
struct ConvertRecord<'a> {
    input: &'a str,
    output: String,
    dotted: bool,
    tokens: Vec<String>,
}

#[derive(Debug, Serialize)]
struct TableRow<'a> {
    codepoint: String,
    character: char,
    category: Category,
    token: &'a str,
}

fn convert_word(mapper: &Mapper, word: &str, json: bool) -> String {
    let ctx = WordContext::analyze(word);
    let output = mapper.map_with(word, ctx);
    if !json {
        return output;
    }
    let tokens = split_tokens(&output).into_iter().map(String::from).collect();
    let record = ConvertRecord {
        input: word,
        output,
        dotted: ctx.is_dotted,
        tokens,
    };
    die!(serde_json::to_string(&record), "Error encoding JSON: {}")
}

fn convert_cmd(mapper: &Mapper, words: &[String], json: bool) {
    if !words.is_empty() {
        for word in words {
            println!("{}", convert_word(mapper, word, json));
        }
        return;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = die!(line, "Error reading stdin: {}");
        if json {
            for word in line.split_whitespace() {
                println!("{}", convert_word(mapper, word, true));
            }
        } else {
            let converted: Vec<String> = line
                .split_whitespace()
                .map(|word| convert_word(mapper, word, false))
                .collect();
            println!("{}", converted.join(" "));
        }
    }
}

fn table_cmd(mapper: &Mapper, json: bool) {
    let rows: Vec<TableRow<'_>> = mapper
        .pair()
        .entries()
        .map(|(category, c, token)| TableRow {
            codepoint: format!("U+{:04X}", c as u32),
            character: c,
            category,
            token,
        })
        .collect();

    if json {
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&rows), "Error encoding JSON: {}")
        );
        return;
    }
    for row in &rows {
        let token = if row.token.is_empty() { "(empty)" } else { row.token };
        println!("{}\t{}\t{}", row.codepoint, row.category, token);
    }
    println!(
        "# {} entries, multiples: {}",
        rows.len(),
        mapper.multiples().join(" ")
    );
}

fn main() {
    let cli = Cli::parse();

    if let Some(ref dir) = cli.trace_dir {
        if !init_tracing(dir) {
            eprintln!(
                "warning: --trace-dir ignored (no `trace` feature, or a subscriber is already set)"
            );
        }
    }
    if let Some(ref path) = cli.writing {
        let toml = die!(fs::read_to_string(path), "Error reading writing TOML: {}");
        die!(Mapper::init_custom(toml), "Invalid writing TOML: {}");
    }

    match cli.command {
        Command::Convert { words, json } => convert_cmd(Mapper::global(), &words, json),
        Command::Table { json } => table_cmd(Mapper::global(), json),
        Command::Split { cal } => println!("{}", split_tokens(&cal).join(" ")),
    }
}
