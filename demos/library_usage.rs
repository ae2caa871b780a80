//! Example: Using chatpress as a library
//!
//! This example demonstrates how to use chatpress in your own projects.
//!
//! Run with: cargo run --example library_usage

use chatpress::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== chatpress Library Usage Examples ===\n");

    // Example 1: Parse a transcript from a string
    println!("1. Parsing a transcript:");
    let raw = "\
[09:00, 01/01/2024] Alice: Happy new year!
[09:01, 01/01/2024] Bob: Same to you!
And the family, of course.
[10:15, 02/01/2024] Alice: Back to work today
[10:16, 02/01/2024] Bob: Already?";

    let mut segmenter = Segmenter::new();
    let parsed = segmenter.parse(raw);
    println!(
        "   {} messages across {} dates",
        parsed.total_records(),
        parsed.len()
    );

    // Example 2: Walk the grouped structure
    println!("\n2. Walking the date groups:");
    for group in parsed {
        println!("   {} ({} messages)", group.date(), group.len());
        for record in group.records() {
            println!("      [{}] {}", record.time(), record.body().replace('\n', " | "));
        }
    }

    // Example 3: Render to Markdown
    println!("\n3. Markdown rendering:");
    let markdown = to_markdown(parsed);
    for line in markdown.lines().take(5) {
        println!("   {}", line);
    }

    // Example 4: HTML document wrapper
    println!("\n4. HTML document (first 80 chars):");
    let html = to_html(parsed, Some("New Year chat"));
    println!("   {}...", &html[..80.min(html.len())]);

    // Example 5: Paginated export through a custom backend
    println!("\n5. Document export with a custom backend:");
    struct ByteCounter;

    impl DocumentRenderer for ByteCounter {
        fn name(&self) -> &'static str {
            "byte-counter"
        }

        fn render(&self, html: &str) -> chatpress::Result<Vec<u8>> {
            // A real backend would paginate here (headless browser, print
            // pipeline, ...). This one just archives the HTML.
            Ok(html.as_bytes().to_vec())
        }
    }

    let backend = ByteCounter;
    let bytes = backend.render(&html)?;
    println!("   backend '{}' produced {} bytes", backend.name(), bytes.len());

    // Example 6: Console projection
    println!("\n6. Console projection:");
    pretty_print(parsed)?;

    println!("=== Examples complete! ===");
    Ok(())
}
