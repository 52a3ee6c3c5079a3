use std::process::ExitCode;
use clap::Parser;
use std::time::Instant;

use wordgrid::errors::GridError;
use wordgrid::grid::Grid;
use wordgrid::scan::ScanMode;
use wordgrid::searcher;
use wordgrid::word_list::WordList;

/// Package version plus the git hash this binary was built from.
const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Word-search puzzle solver
#[derive(Parser, Debug)]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
struct Cli {
    /// Path to the puzzle grid file (one row per line; spaces between letters are allowed)
    grid: String,

    /// Words to search for
    words: Vec<String>,

    /// Path to a word-list file (one word per line), appended after WORDS
    #[arg(short = 'w', long)]
    word_list: Option<String>,

    /// Confine matches to a single row, column, or diagonal line
    /// (by default a match may span the seam between two merged lines)
    #[arg(long)]
    per_line: bool,
}

/// Entry point of the word-search CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {

    // Set up logging
    let debug_enabled = std::env::var("WORDGRID_DEBUG").is_ok();
    wordgrid::log::init_logger(debug_enabled);

    log::info!("Starting word search");

    if let Err(e) = try_main() {
        // Print the error message to stderr, with code and help text if it's a GridError
        if let Some(grid_err) = e.downcast_ref::<GridError>() {
            eprintln!("Error: {}", grid_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the word-search CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Read and validate the puzzle grid from disk.
/// 3. Gather words from positional arguments and the optional word-list file.
/// 4. Scan all four axes and print each found word on stdout.
/// 5. Print diagnostics (grid dimensions, counts, timings) on stderr.
///
/// Returns `Ok(())` on success or an error (e.g., unreadable file, ragged
/// grid) which bubbles up to [`main`].
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // 1. Read and validate the grid. The read and the parse are separate so
    //    a shape violation reaches main() as a GridError, not a stringified
    //    io::Error.
    let t_load = Instant::now();
    let grid_text = std::fs::read_to_string(&cli.grid).map_err(|e| {
        std::io::Error::new(e.kind(), format!("failed to read grid file '{}': {}", cli.grid, e))
    })?;
    let grid = Grid::parse_from_str(&grid_text)?;

    // 2. Gather the words: positional arguments first, then the file
    let mut words = cli.words;
    if let Some(path) = &cli.word_list {
        words.extend(WordList::load_from_path(path)?.words);
    }
    let load_secs = t_load.elapsed().as_secs_f64();

    if words.is_empty() {
        log::warn!("no words to search for; the result will be empty");
    }

    let mode = if cli.per_line {
        ScanMode::PerLine
    } else {
        ScanMode::Merged
    };

    // 3. Scan all four axes
    let words_ref: Vec<_> = words.iter().map(String::as_str).collect();
    let t_search = Instant::now();
    let found = searcher::search_with_mode(&grid, &words_ref, mode);
    let search_secs = t_search.elapsed().as_secs_f64();

    // 4. Print each found word on stdout
    for word in &found {
        println!("{word}");
    }

    // 5. Print diagnostics to stderr
    let distinct: std::collections::HashSet<&str> = found.iter().map(String::as_str).collect();
    eprintln!(
        "✓ Found {} of {} word(s) ({} match(es) across all directions)",
        distinct.len(),
        words.len(),
        found.len()
    );
    eprintln!(
        "Loaded {}x{} grid and {} word(s) in {:.3}s; searched in {:.3}s.",
        grid.height(),
        grid.width(),
        words.len(),
        load_secs,
        search_secs
    );

    Ok(())
}
