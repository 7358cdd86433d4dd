//! Command-line interface for feedtext.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use tracing::debug;

use crate::cdata::strip_cdata;
use crate::entities::decode_entities;
use crate::error::{FeedTextError, Result};
use crate::name_address::parse_name_address;
use crate::text::{parse_text, parse_text_lossy};
use crate::xml::{find_descendants, parse_document};

/// feedtext - Decode the text of syndication feed fields.
#[derive(Parser)]
#[command(name = "feedtext")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode XML entity references.
    Decode {
        /// Text to decode (default: read from stdin)
        text: Option<String>,
    },

    /// Unwrap CDATA sections, decoding the text around them.
    StripCdata {
        /// Text to process (default: read from stdin)
        text: Option<String>,
    },

    /// Print the text of elements in a feed document.
    Text {
        /// Feed document (RSS, Atom, RDF)
        file: PathBuf,

        /// Tag name of the element, without namespace prefix (e.g., title)
        #[arg(short, long)]
        element: String,

        /// Print every matching element instead of only the first
        #[arg(short, long)]
        all: bool,

        /// Unwrap every CDATA section and keep undecodable text as written
        #[arg(long)]
        lossy: bool,
    },

    /// Split an author field into name and address.
    NameAddress {
        /// Text to parse (default: read from stdin)
        text: Option<String>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = execute(cli.command)?;
    println!("{output}");
    Ok(())
}

/// Execute a command and return what it prints.
pub fn execute(command: Commands) -> Result<String> {
    match command {
        Commands::Decode { text } => Ok(decode_entities(&input_or_stdin(text)?)?),
        Commands::StripCdata { text } => Ok(strip_cdata(&input_or_stdin(text)?)),
        Commands::Text {
            file,
            element,
            all,
            lossy,
        } => text_command(&file, &element, all, lossy),
        Commands::NameAddress { text } => Ok(name_address_command(&input_or_stdin(text)?)),
    }
}

/// Use the given argument, or read all of stdin without its final newline.
fn input_or_stdin(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    let trimmed_len = buffer.trim_end_matches(['\n', '\r']).len();
    buffer.truncate(trimmed_len);
    Ok(buffer)
}

/// Execute the text command.
fn text_command(file: &Path, element: &str, all: bool, lossy: bool) -> Result<String> {
    let content = std::fs::read_to_string(file)?;
    let doc = parse_document(&content)?;

    let mut texts = Vec::new();
    for node in find_descendants(doc.root_element(), element) {
        let text = if lossy {
            parse_text_lossy(&node)
        } else {
            parse_text(&node)?
        };
        texts.push(text);
        if !all {
            break;
        }
    }

    if texts.is_empty() {
        debug!(element, file = %file.display(), "no matching element");
        return Err(FeedTextError::MissingElement {
            element: element.to_string(),
            context: file.display().to_string(),
        });
    }

    debug!(count = texts.len(), element, "extracted element text");
    Ok(texts.join("\n"))
}

/// Execute the name-address command.
fn name_address_command(text: &str) -> String {
    let parsed = parse_name_address(text);
    format!(
        "{} {}\n{} {}",
        style("Name:").bold(),
        parsed.name,
        style("Address:").bold(),
        parsed.address
    )
}
