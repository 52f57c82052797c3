//! Agent Dashboard CLI
//!
//! Usage:
//!   agent-dashboard [OPTIONS] [FILE]
//!
//! Options:
//!   -c, --config <FILE>  Config file (TOML format)
//!   -f, --fallback       Substitute axis defaults for unknown archetypes
//!   -t, --tokens         Print the resolved style tokens as JSON
//!   -a, --archetypes     List every archetype and its style fragments
//!   --components         List the registered components
//!   --standalone         Wrap output in a complete HTML document
//!   --fragment           Emit only the rendered fragments
//!   -d, --debug          Annotate elements and trace the resolved style
//!   -h, --help           Print help

mod logging;

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use agent_dashboard::tokens::{Axis, DimensionMaps};
use agent_dashboard::{
    render_document, resolve_tokens, ComponentKind, ConfigFile, DashboardDocument, RenderConfig,
    UnknownArchetypePolicy,
};

#[derive(Parser)]
#[command(name = "agent-dashboard")]
#[command(about = "Render generated dashboard documents to Tailwind HTML")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Config file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Substitute axis defaults for unknown archetypes instead of failing
    #[arg(short, long)]
    fallback: bool,

    /// Print the resolved style tokens as JSON instead of rendering
    #[arg(short, long)]
    tokens: bool,

    /// List every archetype and its style fragments
    #[arg(short, long)]
    archetypes: bool,

    /// List the registered components
    #[arg(long)]
    components: bool,

    /// Wrap output in a complete HTML document
    #[arg(long, conflicts_with = "fragment")]
    standalone: bool,

    /// Emit only the rendered fragments
    #[arg(long)]
    fragment: bool,

    /// Debug mode: annotate elements with their component and trace the resolved style
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug);

    // Listings need no input
    if cli.archetypes {
        print_archetypes();
        return;
    }

    if cli.components {
        println!("{}", ComponentKind::names().join("\n"));
        return;
    }

    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let mut config = RenderConfig::new();
    if let Some(path) = &cli.config {
        match ConfigFile::from_file(path) {
            Ok(file) => config = file.apply_to(config),
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }
    if cli.fallback {
        config = config.with_policy(UnknownArchetypePolicy::Fallback);
    }
    if cli.standalone || cli.fragment {
        let html = config.html.clone().with_standalone(cli.standalone);
        config = config.with_html(html);
    }
    config = config.with_debug(cli.debug);

    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let doc = match DashboardDocument::from_json(&source) {
        Ok(doc) => doc,
        Err(e) => {
            eprint!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
    };

    if cli.tokens {
        let tokens = match resolve_tokens(&doc, &config) {
            Ok((tokens, _)) => tokens,
            Err(e) => {
                eprintln!("Error: invalid style spec: {}", e);
                std::process::exit(1);
            }
        };
        match serde_json::to_string_pretty(&tokens) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing tokens: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    match render_document(&doc, &config) {
        Ok(html) => print!("{}", html),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_archetypes() {
    let maps = DimensionMaps::shared();
    for axis in Axis::ALL {
        println!("[{}]", axis);
        for (key, fields) in maps.entries(axis) {
            println!("  {}", key);
            for (field, fragment) in fields {
                println!("    {:<14} {}", field, fragment);
            }
        }
        println!();
    }
}

fn print_intro() {
    println!(
        r#"Agent Dashboard - render generated dashboard documents to Tailwind HTML

USAGE:
    agent-dashboard [OPTIONS] [FILE]
    cat board.json | agent-dashboard

OPTIONS:
    -c, --config       Config file (TOML)
    -f, --fallback     Substitute defaults for unknown archetypes
    -t, --tokens       Print resolved style tokens as JSON
    -a, --archetypes   List archetypes per style axis
    --components       List registered components
    --fragment         Emit fragments without the HTML document
    -d, --debug        Annotate elements with their component
    -h, --help         Print help

INPUT:
    {{"style": {{"layout": "sidebar-main", "tone": "minimal", "shape": "rounded",
               "density": "comfortable", "typography": "modern", "color": "blue"}},
     "content": {{"componentName": "Page", "children": [...]}}}}"#
    );
}
