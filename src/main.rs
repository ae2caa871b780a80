//! # chatpress CLI
//!
//! Command-line interface for the chatpress library.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatpress::cli::Args;
use chatpress::render::{pretty_print, to_html, write_markdown};
use chatpress::{ChatpressError, Segmenter};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatpressError> {
    let args = Args::parse();
    let total_start = Instant::now();

    println!("📦 chatpress v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    if !args.no_markdown {
        println!("💾 Output:  {}", args.output);
    }
    if let Some(ref html) = args.html {
        println!("🌐 HTML:    {}", html);
    }
    println!();

    println!("⏳ Parsing transcript...");
    let parse_start = Instant::now();
    let mut segmenter = Segmenter::new();
    let parsed = segmenter.parse_file(&args.input)?;
    println!(
        "   Found {} messages across {} dates ({:.2}s)",
        parsed.total_records(),
        parsed.len(),
        parse_start.elapsed().as_secs_f64()
    );

    if !args.no_markdown {
        println!("💾 Writing Markdown...");
        write_markdown(parsed, &args.output)?;
    }

    if let Some(ref html_path) = args.html {
        println!("🌐 Writing HTML...");
        fs::write(html_path, to_html(parsed, args.title.as_deref()))?;
    }

    if args.print {
        println!();
        pretty_print(parsed)?;
    }

    println!();
    println!("✅ Done in {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}
