//! kagajat CLI
//!
//! Usage:
//!   kagajat [OPTIONS] [FILE]
//!
//! Options:
//!   -t, --template <KEY>   Use a stock template from the catalog
//!   -s, --set NAME=VALUE   Set a placeholder value (repeatable)
//!   -o, --output <FILE>    Output PDF path
//!   -l, --list             List catalog templates
//!   --fields               Show the input's placeholder fields
//!   -p, --preview          Print the substituted text instead of a PDF
//!   -h, --help             Print help

use std::collections::HashMap;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use kagajat::{
    extract, paginate, render_pdf, substitute, Catalog, PageConfig, PdfConfig, PdfFont,
};

#[derive(Parser)]
#[command(name = "kagajat")]
#[command(about = "Nepali document templates with paginated PDF export")]
struct Cli {
    /// Template file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Use a stock template from the catalog by key
    #[arg(short, long)]
    template: Option<String>,

    /// Catalog file overriding the embedded templates (TOML format)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Set a placeholder value (repeatable)
    #[arg(short, long = "set", value_name = "NAME=VALUE")]
    set: Vec<String>,

    /// Placeholder values from a flat TOML table
    #[arg(long)]
    values: Option<PathBuf>,

    /// Output PDF path
    #[arg(short, long, default_value = "document.pdf")]
    output: PathBuf,

    /// Document title stored in the PDF metadata
    #[arg(long)]
    title: Option<String>,

    /// TTF font file for full Devanagari support
    #[arg(short, long)]
    font: Option<PathBuf>,

    /// List catalog templates
    #[arg(short, long)]
    list: bool,

    /// Show the input's placeholder fields
    #[arg(long)]
    fields: bool,

    /// Print the substituted text instead of writing a PDF
    #[arg(short, long)]
    preview: bool,

    /// Show placeholder syntax reference
    #[arg(long)]
    syntax: bool,

    /// Debug mode: dump the computed layout to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Handle documentation flags first
    if cli.syntax {
        print_syntax();
        return;
    }

    // Load catalog
    let catalog = match &cli.catalog {
        Some(path) => match Catalog::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading catalog '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Catalog::default(),
    };

    if cli.list {
        for entry in catalog.entries() {
            println!("{:<14} {}", entry.key, entry.name);
        }
        return;
    }

    // If no input at all and stdin is a terminal (interactive), show intro help
    if cli.template.is_none() && cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Resolve the template text and a default title
    let (source, default_title) = if let Some(key) = &cli.template {
        match catalog.get(key) {
            Some(entry) => (entry.content.clone(), entry.name.clone()),
            None => {
                eprintln!("Error: no template '{}' in the catalog (try --list)", key);
                std::process::exit(1);
            }
        }
    } else if let Some(path) = &cli.input {
        match fs::read_to_string(path) {
            Ok(content) => {
                let title = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "document".to_string());
                (content, title)
            }
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
    } else {
        let mut buffer = String::new();
        match io::stdin().read_to_string(&mut buffer) {
            Ok(_) => (buffer, "document".to_string()),
            Err(e) => {
                eprintln!("Error reading from stdin: {}", e);
                std::process::exit(1);
            }
        }
    };

    if cli.fields {
        for name in extract(&source) {
            println!("{}", name);
        }
        return;
    }

    // Collect placeholder values: TOML file first, --set overrides
    let mut values: HashMap<String, String> = HashMap::new();
    if let Some(path) = &cli.values {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading values file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        };
        let parsed: HashMap<String, String> = match toml::from_str(&content) {
            Ok(parsed) => parsed,
            Err(e) => {
                eprintln!("Error parsing values file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        };
        values.extend(parsed);
    }
    for pair in &cli.set {
        match pair.split_once('=') {
            Some((name, value)) => {
                values.insert(name.to_string(), value.to_string());
            }
            None => {
                eprintln!("Error: --set expects NAME=VALUE, got '{}'", pair);
                std::process::exit(1);
            }
        }
    }

    let text = substitute(&source, &values);

    if cli.preview {
        println!("{}", text);
        return;
    }

    // Unfilled tokens stay visible in the output; warn so the omission is
    // a choice, not a surprise
    let unfilled = extract(&text);
    if !unfilled.is_empty() {
        eprintln!("Warning: unfilled fields: {}", unfilled.join(", "));
    }

    let layout = match paginate(&text, &PageConfig::default()) {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.debug {
        layout.debug_dump();
    }

    let mut pdf_config = PdfConfig::default().with_title(cli.title.unwrap_or(default_title));
    if let Some(path) = cli.font {
        pdf_config = pdf_config.with_font(PdfFont::External(path));
    }

    let bytes = match render_pdf(&layout, &pdf_config) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = fs::write(&cli.output, &bytes) {
        eprintln!("Error writing '{}': {}", cli.output.display(), e);
        std::process::exit(1);
    }

    println!(
        "Wrote {} ({} page{})",
        cli.output.display(),
        layout.page_count(),
        if layout.page_count() == 1 { "" } else { "s" }
    );
}

fn print_intro() {
    println!(
        r#"kagajat - Nepali document templates with paginated PDF export

USAGE:
    kagajat [OPTIONS] [FILE]
    echo '<template>' | kagajat --set name=value

OPTIONS:
    -t, --template <KEY>   Use a stock template (see --list)
    -c, --catalog <FILE>   Catalog file overriding the embedded templates
    -s, --set NAME=VALUE   Set a placeholder value (repeatable)
    --values <FILE>        Placeholder values from a flat TOML table
    -o, --output <FILE>    Output PDF path (default: document.pdf)
    --title <TITLE>        Document title stored in the PDF
    -f, --font <FILE>      TTF font for full Devanagari support
    -l, --list             List catalog templates
    --fields               Show the input's placeholder fields
    -p, --preview          Print the substituted text instead of a PDF
    --syntax               Show placeholder syntax reference
    -d, --debug            Dump the computed layout to stderr
    -h, --help             Print help

QUICK START:
    kagajat --template citizenship --fields
    kagajat --template citizenship --set 'नाम=राज कुमार' -o letter.pdf

This fills the stock citizenship recommendation letter and writes an A4
PDF. Run --syntax for the placeholder format."#
    );
}

fn print_syntax() {
    println!(
        r#"KAGAJAT TEMPLATE SYNTAX
=======================

PLACEHOLDERS
------------
A placeholder is a double-brace token:

    नाम: {{{{नाम}}}}
    ठेगाना: {{{{ठेगाना}}}}

The name is any run of characters except '}}'. Names may repeat; every
occurrence of a name resolves to the same value.

SUBSTITUTION
------------
    kagajat letter.txt --set 'नाम=राज कुमार' --set 'ठेगाना=काठमाडौं'

Filled tokens are replaced with their values. Unfilled tokens stay
visible as {{{{name}}}} so a missing field is never silently blanked;
set a value to the empty string to blank one on purpose.

Stray or unterminated braces are not errors - they pass through as
literal text.

LAYOUT
------
Output pages are A4 portrait with a 15mm margin, 12pt body text, 7mm
line height and a 2mm gap between paragraphs. Lines wrap at spaces to
fit the page width; paragraphs follow the line breaks of the input."#
    );
}
