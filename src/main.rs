use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use mailtext::{Config, Session, TemplateLibrary};

#[derive(Parser)]
#[command(name = "mailtext")]
#[command(about = "Turn HTML email templates into plain mail-body text")]
struct Cli {
    /// Config file (defaults to mailtext.toml, built-in defaults if absent)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an HTML file to formatted plain text
    Convert {
        /// Input HTML file, `-` or omitted for stdin
        input: Option<PathBuf>,

        /// Write the text here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the templates in a library file
    List {
        /// Template library (JSON)
        library: PathBuf,

        /// Only show templates in this category
        #[arg(long)]
        category: Option<String>,
    },
    /// List the categories in a library file
    Categories {
        /// Template library (JSON)
        library: PathBuf,
    },
    /// Print a template's title and converted body
    Show {
        /// Template library (JSON)
        library: PathBuf,

        /// Template id
        id: u64,

        /// Print only the body
        #[arg(long)]
        body_only: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> mailtext::Result<()> {
    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from("mailtext.toml"));
    let config = Config::load(&config_path)?;

    match cli.command {
        Commands::Convert { input, output } => convert(input, output, &config),
        Commands::List { library, category } => {
            let mut session = open(&library, &config)?;
            session.set_category(category);
            if session.library().is_empty() {
                eprintln!("Library is empty.");
            } else if session.visible().is_empty() {
                eprintln!("No templates found.");
            }
            for template in session.visible() {
                println!("{}\t{}", template.id, template.label());
            }
            Ok(())
        }
        Commands::Categories { library } => {
            let session = open(&library, &config)?;
            for category in session.library().categories() {
                println!("{}", category);
            }
            Ok(())
        }
        Commands::Show {
            library,
            id,
            body_only,
        } => {
            let mut session = open(&library, &config)?;
            let template = session.select(id)?;

            if !template.has_content() {
                eprintln!("No content available for this template");
            }
            let body = template.plain_body(&config)?;
            if body_only {
                println!("{}", body);
            } else {
                println!("{}\n\n{}", template.title, body);
            }
            Ok(())
        }
    }
}

fn open(library: &Path, config: &Config) -> mailtext::Result<Session> {
    let library = TemplateLibrary::load(library, &config.templates)?;
    Ok(Session::new(library))
}

fn convert(input: Option<PathBuf>, output: Option<PathBuf>, config: &Config) -> mailtext::Result<()> {
    let html = match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(&path)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let text = mailtext::html_to_text_with_config(&html, config)?;

    match output {
        Some(path) => {
            fs::write(&path, text)?;
            eprintln!("Created {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}
