use clap::{Parser, Subcommand};

mod diagnostics;
mod render;
mod structure;
mod validate;

use structure::{DOC_STRUCTURE, SectionKey};

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "docmap")]
#[command(about = "Documentation section registry", long_about = None)]
struct Cli {
    /// Print INFO lines to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the registry as JSON.
    Show {
        #[arg(long)]
        pretty: bool,
    },

    /// List sections with their relative and full paths.
    List,

    /// Print the full path of one section.
    Path {
        /// Section key, e.g. `api`.
        section: String,
    },

    /// Check the registry's path invariants.
    Check {
        /// Print the per-section report as JSON instead of the summary line.
        #[arg(long)]
        json: bool,
    },
}

/// Execute one subcommand and return what should go to stdout.
fn run(cmd: Commands) -> Result<String> {
    let out = match cmd {
        Commands::Show { pretty } => render::render_json(&DOC_STRUCTURE, pretty)?,
        Commands::List => render::render_list(&DOC_STRUCTURE),
        Commands::Path { section } => {
            let key: SectionKey = section.parse()?;
            diagnostics::info(format!(
                "{} is {} under {}",
                key,
                DOC_STRUCTURE.relative(key),
                DOC_STRUCTURE.root
            ));
            DOC_STRUCTURE.path(key)
        }
        Commands::Check { json } => {
            let report = validate::check(&DOC_STRUCTURE)?;
            if json {
                serde_json::to_string_pretty(&report)?
            } else {
                report.summary()
            }
        }
    };
    Ok(out)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    diagnostics::set_verbose(cli.verbose);

    let out = run(cli.cmd)?;
    if out.ends_with('\n') {
        print!("{}", out);
    } else {
        println!("{}", out);
    }

    Ok(())
}
