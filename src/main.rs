// Entry point and interactive console flow.
//
// The console drives the whole pipeline:
// - Option [1] reads the PDF and the points table, runs extraction and
//   parsing, and caches the results.
// - Option [2] aggregates and renders the reports: daily totals, per-code
//   totals, one day's detail, and the CSV/JSON exports.
// - After generating reports, the user can go back to the menu or exit.
mod aggregate;
mod extract;
mod output;
mod parser;
mod points;
mod types;
mod util;

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::Mutex;
use types::{Record, SummaryStats};

// Simple in-memory app state so the PDF is extracted and parsed once but
// reports can be generated multiple times in a single run.
static APP_STATE: Lazy<Mutex<AppState>> = Lazy::new(|| {
    Mutex::new(AppState {
        records: None,
        points: None,
    })
});

struct AppState {
    records: Option<Vec<Record>>,
    points: Option<HashMap<String, i64>>,
}

/// Print `prompt` and read one trimmed line from stdin.
fn read_line_prompt(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf.trim().to_string()
}

fn read_choice() -> String {
    read_line_prompt("Enter choice: ")
}

/// Ask the user whether to go back to the selection menu after generating
/// reports. Returns `true` for `Y`, `false` for `N`.
fn prompt_back_to_menu() -> bool {
    loop {
        match read_line_prompt("Back to menu (Y/N): ").to_uppercase().as_str() {
            "Y" => return true,
            "N" => return false,
            _ => println!("Invalid choice. Please enter Y or N."),
        }
    }
}

/// Handle option [1]: read both input files and run the front half of the
/// pipeline (extract → parse → load table), caching the outcome.
fn handle_load() {
    let pdf_path = read_line_prompt("PDF file path: ");
    let points_path = read_line_prompt("Points table path: ");

    let pdf_bytes = match std::fs::read(&pdf_path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Failed to read {}: {}\n", pdf_path, e);
            return;
        }
    };
    let points_bytes = match std::fs::read(&points_path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Failed to read {}: {}\n", points_path, e);
            return;
        }
    };

    let text = match extract::extract_text(&pdf_bytes) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Extraction failed: {}\n", e);
            return;
        }
    };

    let records = parser::parse_rows(&text);
    let points = points::load_points(&points_bytes);

    println!(
        "Parsed {} records from the PDF ({} characters of text).",
        util::format_int(records.len()),
        util::format_int(text.len())
    );
    println!(
        "Points table: {} codes loaded.",
        util::format_int(points.len())
    );
    if records.is_empty() {
        println!("Note: no rows matched the CODE dd.mm.yyyy hh:mm pattern.");
    }
    println!();

    let mut state = APP_STATE.lock().unwrap();
    state.records = Some(records);
    state.points = Some(points);
}

/// Handle option [2]: aggregate the cached inputs and render every report.
///
/// This function is intentionally side-effectful: it writes two CSV files
/// and a JSON summary, and prints table previews to the console.
fn handle_generate_reports() {
    let (records, points) = {
        let state = APP_STATE.lock().unwrap();
        (state.records.clone(), state.points.clone())
    };
    let (Some(records), Some(points)) = (records, points) else {
        println!("Error: No data loaded. Please load the files first (option 1).\n");
        return;
    };

    let agg = aggregate::aggregate(&records, &points);

    println!("Total points: {}", util::format_int(agg.grand_total));
    println!("Days: {}\n", util::format_int(agg.daily_totals.len()));

    println!("Daily totals");
    let daily = output::daily_rows(&agg.daily_totals);
    output::preview_table_rows(&daily, 31);
    match output::daily_csv_bytes(&agg.daily_totals) {
        Ok(bytes) => {
            if let Err(e) = output::write_bytes("paivakertymat.csv", &bytes) {
                eprintln!("Write error: {}", e);
            } else {
                println!("(Full table exported to paivakertymat.csv)\n");
            }
        }
        Err(e) => eprintln!("Render error: {}", e),
    }

    println!("Code totals");
    output::preview_table_rows(&output::code_totals_rows(&agg.totals_by_code), 20);

    if !agg.daily_by_code.is_empty() {
        let days: Vec<&String> = agg.daily_by_code.keys().collect();
        println!("Available days: {:?}", days);
        let chosen = read_line_prompt("Day to export detail for (blank = first): ");
        let day = if chosen.is_empty() {
            days[0].clone()
        } else {
            chosen
        };
        match agg.daily_by_code.get(&day) {
            Some(by_code) => {
                println!("\nDetail for {}", day);
                output::preview_table_rows(&output::detail_rows(by_code), 20);
                match output::day_detail_csv_bytes(by_code) {
                    Ok(bytes) => {
                        let file = format!("erittely_{}.csv", day);
                        if let Err(e) = output::write_bytes(&file, &bytes) {
                            eprintln!("Write error: {}", e);
                        } else {
                            println!("(Detail exported to {})\n", file);
                        }
                    }
                    Err(e) => eprintln!("Render error: {}", e),
                }
            }
            None => println!("No such day: {}\n", day),
        }
    }

    let summary = SummaryStats {
        grand_total: agg.grand_total,
        days: agg.daily_totals.len(),
        records: records.len(),
        distinct_codes: agg.totals_by_code.len(),
    };
    if let Err(e) = output::write_json("summary.json", &summary) {
        eprintln!("Write error: {}", e);
    }
    println!("Summary written to summary.json\n");
}

fn main() {
    loop {
        println!("[1] Load PDF and points table");
        println!("[2] Generate reports\n");
        match read_choice().as_str() {
            "1" => {
                handle_load();
            }
            "2" => {
                println!();
                handle_generate_reports();
                if !prompt_back_to_menu() {
                    println!("Exiting.");
                    break;
                }
            }
            _ => {
                println!("Invalid choice. Please enter 1 or 2.\n");
            }
        }
    }
}
