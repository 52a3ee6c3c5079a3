//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of full four-axis searches on *your* machine.
//! - Builds a deterministic synthetic grid per case, runs the search several
//!   times, and reports the median.
//! - Half of each case's words are sliced out of the grid (guaranteed hits),
//!   half are alphabet probes that may or may not land.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print found words:              `cargo run --bin bench_local --release -- -p 10`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - This is *not* Criterion. It's quick and convenient, not statistically
//!   rigorous.
//! - Use the same machine and `--release` for more comparable numbers.
//! - Grid shapes + word counts live in `get_cases()` below.
//! - Grid construction and printing stay outside the timed section.
//! - One warm-up run per case is done (not included in timing).
//! - We report the *median* over repeats (more robust than mean for small _N_).

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;
use wordgrid::grid::Grid;
use wordgrid::searcher;

/// Simple local benchmark runner: synthesize a grid per case, time the
/// four-axis search over it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of repeats per case (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Print up to this many found words per case (0 = print none)
    #[arg(short = 'p', long = "print", default_value_t = 0)]
    print_limit: usize,
}

/// A benchmark case: a grid shape and how many words to search it for.
#[derive(Clone)]
struct Case {
    name: &'static str,
    rows: usize,
    cols: usize,
    num_words: usize,
}

/// Edit/add new shapes here. The summary displays `name`.
fn get_cases() -> Vec<Case> {
    vec![
        Case { name: "small square", rows: 10, cols: 10, num_words: 20 },
        Case { name: "medium square", rows: 50, cols: 50, num_words: 100 },
        Case { name: "large square", rows: 120, cols: 120, num_words: 200 },
        Case { name: "wide", rows: 20, cols: 200, num_words: 100 },
        Case { name: "tall", rows: 200, cols: 20, num_words: 100 },
    ]
}

/// Deterministic letter soup: the same shape always yields the same grid, so
/// runs are comparable across machines and builds.
fn synthetic_grid(rows: usize, cols: usize) -> Grid {
    let cells: Vec<Vec<char>> = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| {
                    let mixed = r * 31 + c * 7 + (r * c) % 13;
                    char::from(b'A' + (mixed % 26) as u8)
                })
                .collect()
        })
        .collect();

    Grid::new(cells).expect("synthetic rows are rectangular")
}

/// Builds the case's word list: even indexes are substrings sliced straight
/// out of a grid row (hits), odd indexes are rotating alphabet probes.
fn pick_words(grid: &Grid, count: usize) -> Vec<String> {
    const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    let rows = grid.rows();
    (0..count)
        .map(|i| {
            let len = 4 + i % 5;
            if i % 2 == 0 {
                let row = &rows[(i / 2) % rows.len()];
                let len = len.min(row.len());
                let start = (i * 3) % (row.len() - len + 1);
                row[start..start + len].iter().collect()
            } else {
                ALPHABET
                    .iter()
                    .cycle()
                    .skip(i % 26)
                    .take(len)
                    .map(|&b| char::from(b))
                    .collect()
            }
        })
        .collect()
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    // safe: f64 durations are never NaN in this context
    xs.sort_by(|a, b| a.partial_cmp(b).expect("f64 durations should not be NaN"));
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

const MAX_NAME_LEN: usize = 16;

fn main() {
    /// One row in the benchmark summary: (case name, grid dims, word count,
    /// median seconds, results in the last run).
    type SummaryRow = (String, String, usize, f64, usize);

    let cli = Cli::parse();

    let cases = get_cases();
    let mut summary: Vec<SummaryRow> = Vec::with_capacity(cases.len());

    for (idx, case) in cases.iter().enumerate() {
        eprintln!(
            "\n[{:02}] {} ({}x{}, {} words)",
            idx + 1,
            case.name,
            case.rows,
            case.cols,
            case.num_words
        );

        // Setup is not part of the timing.
        let grid = synthetic_grid(case.rows, case.cols);
        let words = pick_words(&grid, case.num_words);
        let words_ref: Vec<_> = words.iter().map(String::as_str).collect();

        // One *warm-up* execution per case to "touch" code paths / caches.
        // We intentionally ignore its timing.
        let _warmup = searcher::search(&grid, &words_ref);

        // Repeat the timed runs and collect durations.
        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last_found: Vec<String> = Vec::new();

        for rep in 0..cli.num_repeats {
            // Keep only the *core* operation inside the timed region.
            let t_search = Instant::now();
            let found = searcher::search(black_box(&grid), black_box(&words_ref));
            let search_secs = t_search.elapsed().as_secs_f64();

            // Prevent the compiler from proving the result unused and eliding work.
            let _keep = black_box(found.len());

            times.push(search_secs);
            last_found = found;

            eprintln!(
                "  run {:>2}/{:>2}: {:.3}s ({} found)",
                rep + 1,
                cli.num_repeats,
                search_secs,
                last_found.len()
            );
        }

        // Prefer median for small N--it's less sensitive to noisy outliers.
        let med = median(times);

        // Optionally print a few found words from the *last* run (outside timing).
        if cli.print_limit > 0 {
            for word in last_found.iter().take(cli.print_limit) {
                println!("{word}");
            }
        }

        eprintln!(
            "  → median {:.3}s over {} run(s); last run found {} result(s)",
            med,
            cli.num_repeats,
            last_found.len()
        );

        summary.push((
            case.name.to_string(),
            format!("{}x{}", case.rows, case.cols),
            case.num_words,
            med,
            last_found.len(),
        ));
    }

    // Compact summary at the end for a quick scan across all cases.
    eprintln!("\n==== Summary ====");
    eprintln!(
        "{:<MAX_NAME_LEN$} | {:>9} | {:>6} | {:>10} | {:>8}",
        "case", "grid", "words", "median (s)", "results"
    );
    eprintln!(
        "{:-<MAX_NAME_LEN$}-+-{:-<9}-+-{:-<6}-+-{:-<10}-+-{:-<8}",
        "", "", "", "", ""
    );
    for (name, dims, num_words, med, num_found) in &summary {
        eprintln!(
            "{name:<MAX_NAME_LEN$} | {dims:>9} | {num_words:>6} | {med:>10.3} | {num_found:>8}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd_even_empty() {
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 2.0, 3.0]), 2.5);
    }

    #[test]
    fn test_synthetic_grid_is_deterministic() {
        let a = synthetic_grid(12, 9);
        let b = synthetic_grid(12, 9);
        assert_eq!(a, b);
        assert_eq!(a.height(), 12);
        assert_eq!(a.width(), 9);
    }

    #[test]
    fn test_pick_words_planted_hits_are_found() {
        let grid = synthetic_grid(10, 10);
        let words = pick_words(&grid, 8);
        assert_eq!(words.len(), 8);

        let words_ref: Vec<_> = words.iter().map(String::as_str).collect();
        let found = searcher::search(&grid, &words_ref);

        // every even-index word was sliced from a row, so each must appear
        for word in words.iter().step_by(2) {
            assert!(found.contains(word), "planted word {word} not found");
        }
    }
}
