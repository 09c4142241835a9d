//! Transcript CLI: 字幕获取、解析、检索的命令行工具
//!
//! Usage:
//!   transcript-cli fetch <video-url> [--search <term>] [--at <secs>] [--json]
//!   transcript-cli parse <file> [--json]
//!   transcript-cli search <file> <term>
//!   transcript-cli at <file> <time>

use anyhow::{bail, Context};
use std::path::Path;
use tracing_subscriber::EnvFilter;
use transcript_lib_rust::{
    format_time, parse_time_to_seconds, parse_transcript, Cue, ParsedTranscript,
    TranscriptClient,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let result = match args[1].as_str() {
        "fetch" => cmd_fetch(&args[2..]).await,
        "parse" => cmd_parse(&args[2..]),
        "search" => cmd_search(&args[2..]),
        "at" => cmd_at(&args[2..]),
        "version" | "--version" | "-V" => {
            cmd_version();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"transcript-cli: 字幕获取与解析命令行工具

USAGE:
    transcript-cli <COMMAND> [OPTIONS]

COMMANDS:
    fetch <video-url> [--search <term>] [--at <secs>] [--json]
                                Fetch and parse a Vimeo transcript
    parse <file> [--json]       Parse a local WebVTT / SRT file
    search <file> <term>        List cues containing a term
    at <file> <time>            Show the cue active at a time (secs or [HH:]MM:SS)
    version                     Show version information
    help                        Show this help message

ENVIRONMENT:
    VIMEO_ACCESS_TOKEN          Personal access token (required for fetch)
    TRANSCRIPT_CHAIN_MODE       sequential | race
    RUST_LOG                    Log filter, e.g. transcript_lib_rust=debug"#
    );
}

fn cmd_version() {
    println!(
        "transcript-cli {} (transcript-lib-rust {})",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_VERSION"),
    );
}

/// Value following `flag`, if present.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn load_file(path: &str) -> anyhow::Result<ParsedTranscript> {
    let content = std::fs::read_to_string(Path::new(path))
        .with_context(|| format!("cannot read {path}"))?;
    Ok(parse_transcript(&content))
}

fn print_cue(cue: &Cue) {
    println!(
        "[{} - {}] {}",
        format_time(cue.start),
        format_time(cue.end),
        cue.text
    );
}

fn print_transcript(transcript: &ParsedTranscript, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(transcript)?);
        return Ok(());
    }
    println!(
        "format: {}  cues: {}  duration: {}",
        transcript.format(),
        transcript.len(),
        format_time(transcript.duration())
    );
    for cue in transcript.cues() {
        print_cue(cue);
    }
    if transcript.is_empty() && !transcript.plain_text().is_empty() {
        println!("{}", transcript.plain_text());
    }
    Ok(())
}

async fn cmd_fetch(args: &[String]) -> anyhow::Result<()> {
    let Some(url) = args.first().filter(|a| !a.starts_with("--")) else {
        bail!("usage: transcript-cli fetch <video-url> [--search <term>] [--at <secs>] [--json]");
    };
    let json = has_flag(args, "--json");

    let client = TranscriptClient::from_env()?;
    let outcome = client.get_vimeo_transcript(url).await;

    if json && flag_value(args, "--search").is_none() && flag_value(args, "--at").is_none() {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        if !outcome.is_success() {
            std::process::exit(2);
        }
        return Ok(());
    }

    let transcript = match outcome.into_result() {
        Ok(t) => t,
        Err(message) => bail!(message),
    };

    if let Some(term) = flag_value(args, "--search") {
        for cue in transcript.search(term) {
            print_cue(cue);
        }
        return Ok(());
    }
    if let Some(at) = flag_value(args, "--at") {
        let secs = parse_time_to_seconds(at)?;
        match transcript.cue_at(secs) {
            Some(cue) => print_cue(cue),
            None => println!("no cue at {}", format_time(secs)),
        }
        return Ok(());
    }
    print_transcript(&transcript, json)
}

fn cmd_parse(args: &[String]) -> anyhow::Result<()> {
    let Some(path) = args.first() else {
        bail!("usage: transcript-cli parse <file> [--json]");
    };
    let transcript = load_file(path)?;
    print_transcript(&transcript, has_flag(args, "--json"))
}

fn cmd_search(args: &[String]) -> anyhow::Result<()> {
    let (Some(path), Some(term)) = (args.first(), args.get(1)) else {
        bail!("usage: transcript-cli search <file> <term>");
    };
    let transcript = load_file(path)?;
    let hits = transcript.search(term);
    if hits.is_empty() {
        println!("no matches for {term:?}");
    }
    for cue in hits {
        print_cue(cue);
    }
    Ok(())
}

fn cmd_at(args: &[String]) -> anyhow::Result<()> {
    let (Some(path), Some(time)) = (args.first(), args.get(1)) else {
        bail!("usage: transcript-cli at <file> <time>");
    };
    let secs = parse_time_to_seconds(time)?;
    let transcript = load_file(path)?;
    match transcript.cue_at(secs) {
        Some(cue) => print_cue(cue),
        None => println!("no cue at {}", format_time(secs)),
    }
    Ok(())
}
