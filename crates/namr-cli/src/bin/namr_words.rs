// namr-words: Show the candidate words of titles.
//
// Prints every word that survives stopword filtering, with its
// part-of-speech label (or "-" when untagged), one title block per input.
//
// Usage:
//   namr-words [TITLE]... [-d DIR] [-v]

use std::io::{self, Write};

use clap::Parser;

use namr_cli::CommonArgs;

#[derive(Parser)]
#[command(
    name = "namr-words",
    version,
    about = "List the candidate words of a title with their parts of speech"
)]
struct Cli {
    /// Titles to inspect (reads stdin lines when none are given)
    titles: Vec<String>,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() {
    let cli = Cli::parse();
    namr_cli::init_tracing(cli.common.verbose);

    let namer = namr_cli::load_namer(cli.common.data_path.as_deref())
        .unwrap_or_else(|e| namr_cli::fatal(&e.to_string()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for title in namr_cli::titles_or_stdin(cli.titles) {
        let _ = writeln!(out, "{title}");
        let words = namer.words(&title);
        if words.is_empty() {
            let _ = writeln!(out, "  (no candidate words)");
        }
        for word in words {
            let label = word.part_of_speech.as_deref().unwrap_or("-");
            let _ = writeln!(out, "  {:<15} {label}", word.text);
        }
    }
}
