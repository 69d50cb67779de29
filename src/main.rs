mod router;
mod session;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use session::Session;

#[derive(Parser)]
#[command(name = "doc_processor", about = "Single-session document analysis assistant")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session: upload a document, then issue instructions
    Repl,
    /// Run a single instruction against a document file
    Ask {
        /// Path to the document text file
        #[arg(short, long)]
        file: PathBuf,
        /// Instruction, e.g. "summarize" or "find dates"
        instruction: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Repl => repl(),
        Commands::Ask { file, instruction } => {
            let text = fs::read_to_string(&file)
                .with_context(|| format!("reading document from {}", file.display()))?;
            let mut session = Session::new();
            session.upload(&text);
            println!("{}", router::route(&session, &instruction));
            Ok(())
        }
    }
}

const UPLOAD_FIRST: &str = "Please upload a document first by typing 'upload'";

const WELCOME: &str = "Welcome to Document Processor!
I can help you analyze documents. Here's how it works:
  1. Type 'upload' and paste your document (finish with 'END' on its own line)
  2. Then provide an instruction like:
     - 'generate questions'
     - 'summarize this'
     - 'extract key points'
     - 'find dates in the document'
Type 'exit' to quit.";

/// Line-based console loop. All I/O lives here; the core only sees strings.
fn repl() -> anyhow::Result<()> {
    println!("{}", WELCOME);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut session = Session::new();

    loop {
        print!("\nYour input: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break; // EOF
        };
        let input = line?.trim().to_string();

        if input.eq_ignore_ascii_case("exit") {
            println!("Goodbye!");
            break;
        }

        if input.eq_ignore_ascii_case("upload") {
            println!("Please paste your document content (type 'END' on a new line when finished):");
            let mut content = Vec::new();
            for line in lines.by_ref() {
                let line = line?;
                if line.trim().eq_ignore_ascii_case("end") {
                    break;
                }
                content.push(line);
            }
            let ack = session.upload(&content.join("\n"));
            info!(
                "Document uploaded ({} chars)",
                session.content().chars().count()
            );
            println!("\n{}", ack);
            continue;
        }

        println!("\n{}", instruction_reply(&session, &input));
    }

    Ok(())
}

/// Console-side reply to a non-command line: instructions are only routed
/// once a document is ready; before that the loop nudges toward 'upload'.
fn instruction_reply(session: &Session, input: &str) -> String {
    if session.is_ready() {
        router::route(session, input)
    } else {
        UPLOAD_FIRST.to_string()
    }
}
