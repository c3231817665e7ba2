//! CLI command implementations.

use crate::QueryKind;
use colored::Colorize;
use sociogram_graph::Sociogram;
use std::io::{self, BufRead};
use std::path::Path;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Run the interactive menu loop, the default mode.
///
/// The graph is built once up front; afterwards each line on stdin picks a
/// query by number until "4" or end of input quits.
pub fn run_menu(names: &Path, likes: &Path) -> Result<()> {
    let graph = Sociogram::from_paths(names, likes)?;
    print_summary(&graph);
    print_menu();

    for line in io::stdin().lock().lines() {
        match line?.trim() {
            "1" => print_isolated(&graph),
            "2" => print_unrequited(&graph),
            "3" => print_popular(&graph),
            "4" => return Ok(()),
            _ => continue, // unrecognized selection, keep reading
        }
        print_menu();
    }

    Ok(())
}

/// Run a single query non-interactively.
pub fn run_query(names: &Path, likes: &Path, kind: QueryKind, json: bool) -> Result<()> {
    let graph = Sociogram::from_paths(names, likes)?;

    if json {
        let output = match kind {
            QueryKind::Isolated => serde_json::json!({
                "query": "isolated",
                "names": graph.isolated_vertices()
            }),
            QueryKind::Unrequited => serde_json::json!({
                "query": "unrequited",
                "names": graph.unrequited_vertices()
            }),
            QueryKind::Popular => serde_json::json!({
                "query": "popular",
                "entries": graph.most_popular_vertices()
            }),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_summary(&graph);
    match kind {
        QueryKind::Isolated => print_isolated(&graph),
        QueryKind::Unrequited => print_unrequited(&graph),
        QueryKind::Popular => print_popular(&graph),
    }

    Ok(())
}

fn print_summary(graph: &Sociogram) {
    let stats = graph.stats();
    println!(
        "{} Loaded {} names and {} likes",
        "✓".green(),
        stats.vertex_count.to_string().cyan(),
        stats.like_count.to_string().cyan()
    );
}

fn print_menu() {
    println!();
    println!("Please make your selection");
    println!("1 - Those whom nobody loves");
    println!("2 - There is no love in reply");
    println!("3 - The list of popular people");
    println!("4 - Quit");
    println!();
}

fn print_isolated(graph: &Sociogram) {
    println!("{}", "Those whom nobody loves:".cyan().bold());
    print_names(&graph.isolated_vertices());
}

fn print_unrequited(graph: &Sociogram) {
    println!("{}", "There is no love in reply:".cyan().bold());
    print_names(&graph.unrequited_vertices());
}

fn print_popular(graph: &Sociogram) {
    println!("{}", "The list of popular people:".cyan().bold());

    let entries = graph.most_popular_vertices();
    if entries.is_empty() {
        println!("  {}", "(nobody)".dimmed());
        return;
    }
    for entry in entries {
        println!("  name: {}\tpopularity: {}", entry.name.cyan(), entry.likes);
    }
}

fn print_names(names: &[String]) {
    if names.is_empty() {
        println!("  {}", "(nobody)".dimmed());
        return;
    }
    for name in names {
        println!("  {}", name);
    }
}
