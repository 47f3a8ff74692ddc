use clap::{Parser, Subcommand};
use navpress::{config, output, sidebar};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "navpress")]
#[command(about = "Sidebar index generator for markdown blog sites")]
#[command(long_about = "\
Sidebar index generator for markdown blog sites

Your filesystem is the data source. Folders become sidebar categories,
front-matter supplies titles, dates and explicit ordering, and the output
is a site manifest the rendering framework consumes at build start.

Content structure:

  docs/
  ├── site.toml                    # Site config (optional)
  ├── posts/                       # Articles
  │   ├── index.md                 # Section landing page (never indexed)
  │   ├── hello-world.md           # Root article (front-matter category)
  │   ├── Data Structures/         # Folder name = category
  │   │   ├── sorting.md
  │   │   └── trees.md
  │   └── Life/
  │       └── travel.md
  └── about/                       # About section (optional)
      ├── index.md
      └── Projects/
          └── index.md             # Subdir with landing page = own group

Front-matter keys (all optional):
  title:     display title (default: filename)
  category:  grouping for root-level articles (folders always win)
  date:      sorts newest-first within equal order
  order:     explicit rank; unset articles sort last

Run 'navpress gen-config' to print a documented site.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "docs", global = true)]
    source: PathBuf,

    /// Manifest output path
    #[arg(long, default_value = "site.json", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan content and write the site manifest
    Index,
    /// Validate content without writing the manifest
    Check,
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Index => {
            println!("==> Indexing {}", cli.source.display());
            let site_index = sidebar::build(&cli.source)?;
            output::print_index_output(&site_index);
            let json = serde_json::to_string_pretty(&site_index.manifest)?;
            std::fs::write(&cli.output, json)?;
            println!("==> Manifest written: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_index = sidebar::build(&cli.source)?;
            output::print_index_output(&site_index);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_site_toml());
        }
    }

    Ok(())
}
