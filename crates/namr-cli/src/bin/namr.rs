// namr: Generate package names from titles.
//
// Each title is given as an argument, read from a DESCRIPTION file, or read
// line by line from stdin. Prints one name per title.
//
// Usage:
//   namr [TITLE]... [-a] [-b] [--description PATH [--field NAME]] [-d DIR] [-v]

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use namr_cli::CommonArgs;
use namr_en::{NameOptions, is_valid_package_name};

#[derive(Parser)]
#[command(
    name = "namr",
    version,
    about = "Generate a package name from a title"
)]
struct Cli {
    /// Titles to name (reads stdin lines when none are given)
    titles: Vec<String>,

    /// Append the title's first acronym to the name
    #[arg(short = 'a', long)]
    acronym: bool,

    /// Prefer a verb from the title
    #[arg(short = 'b', long = "verb")]
    prefer_verb: bool,

    /// Read the title from a package DESCRIPTION file
    #[arg(long, value_name = "PATH", conflicts_with = "titles")]
    description: Option<PathBuf>,

    /// DESCRIPTION field to read the title from
    #[arg(long, value_name = "NAME", default_value = "Title", requires = "description")]
    field: String,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let cli = Cli::parse();
    namr_cli::init_tracing(cli.common.verbose);

    let mut namer = namr_cli::load_namer(cli.common.data_path.as_deref())
        .unwrap_or_else(|e| namr_cli::fatal(&e.to_string()));
    namer.set_options(NameOptions {
        include_acronym: cli.acronym,
        prefer_verb: cli.prefer_verb,
    });

    let titles = match &cli.description {
        Some(path) => vec![
            namr_cli::read_description_field(path, &cli.field)
                .unwrap_or_else(|e| namr_cli::fatal(&e.to_string())),
        ],
        None => namr_cli::titles_or_stdin(cli.titles),
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut failed = false;

    for title in &titles {
        match namer.generate_name(title) {
            Ok(name) => {
                if !is_valid_package_name(&name) {
                    tracing::warn!(%name, "generated name is not a valid package name");
                }
                let _ = writeln!(out, "{name}");
            }
            Err(e) => {
                failed = true;
                let _ = out.flush();
                eprintln!("{}", namr_cli::failure_line(title, &e));
            }
        }
    }

    let _ = out.flush();
    if failed {
        process::exit(1);
    }
}
