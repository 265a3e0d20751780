use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use glidetype::decoder::GestureSnapshot;
use glidetype::suggest::levenshtein;

pub fn print_snapshot(snapshot: &GestureSnapshot, valid: bool) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["Samples", "Path Length", "Duration (ms)", "Valid Swipe"]);
    table.add_row(vec![
        Cell::new(snapshot.sample_count),
        Cell::new(format!("{:.1}", snapshot.total_path_length)),
        Cell::new(snapshot.duration_ms),
        Cell::new(if valid { "yes" } else { "no" }),
    ]);
    println!("{table}");
}

pub fn print_decode(word: Option<&str>, suggestions: &[String]) {
    match word {
        Some(w) => println!("\nDecoded word: {}", w),
        None => println!("\nDecoded word: (none)"),
    }

    if suggestions.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Suggestion", "Edit Distance"]);
    for (i, suggestion) in suggestions.iter().enumerate() {
        let distance = match word {
            Some(w) => levenshtein(w, suggestion).to_string(),
            None => "-".to_string(),
        };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(suggestion),
            Cell::new(distance).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");
}

fn pct(part: usize, whole: usize) -> String {
    if whole == 0 {
        return "-".to_string();
    }
    format!("{:.1}%", 100.0 * part as f32 / whole as f32)
}

pub fn print_bench_summary(total: usize, exact: usize, suggested: usize, skipped: usize) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["Gestures", "Exact Decode", "In Suggestions", "Skipped"]);
    table.add_row(vec![
        Cell::new(total),
        Cell::new(format!("{} ({})", exact, pct(exact, total))),
        Cell::new(format!("{} ({})", suggested, pct(suggested, total))),
        Cell::new(skipped),
    ]);
    println!("{table}");
}
