//! Command-line interface definition using clap.
//!
//! The CLI is a thin surrounding component over the library: it loads one
//! transcript file, parses it, and writes the requested projections. No
//! paginated-document backend ships with the binary; embedding applications
//! supply their own [`DocumentRenderer`](crate::render::DocumentRenderer).

use clap::Parser;

/// Extract bracketed-timestamp chat transcripts and press them into
/// Markdown or a console dump.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatpress")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatpress whatsapp_chat.txt
    chatpress chat.txt -o family.md
    chatpress chat.txt --html chat.html --title \"Family chat\"
    chatpress chat.txt --print")]
pub struct Args {
    /// Path to the transcript text file
    pub input: String,

    /// Path to the Markdown output file
    #[arg(short, long, default_value = "transcript.md")]
    pub output: String,

    /// Also write the HTML document wrapper to this path
    #[arg(long, value_name = "PATH")]
    pub html: Option<String>,

    /// Document title embedded in the HTML head
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Print the grouped transcript to the console
    #[arg(long)]
    pub print: bool,

    /// Skip writing the Markdown file
    #[arg(long)]
    pub no_markdown: bool,
}
