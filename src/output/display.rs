//! Display functions for command results

use super::formatters::{create_progress_bar, format_cell, grid_lines};
use crate::commands::{LettersResult, SolveResult, SurveyResult};
use crate::core::Grid;
use crate::generator::{GeneratedPuzzle, QualitySnapshot, Termination};
use crate::solver::WordResult;
use colored::Colorize;

fn print_grid(grid: &Grid) {
    println!();
    for line in grid_lines(grid) {
        println!("   {}", line.bright_yellow().bold());
    }
}

fn print_words(words: &WordResult, verbose: bool) {
    let groups = words.by_length();
    let largest = groups.values().map(Vec::len).max().unwrap_or(0);

    println!("\n📚 {}", "Words by length:".bright_cyan().bold());
    for (length, group) in &groups {
        let bar = create_progress_bar(group.len() as f64, largest as f64, 30);
        println!("   {length:2}: {} {:4}", bar.green(), group.len());
        if verbose {
            println!("       {}", group.join(", ").bright_black());
        }
    }
}

fn print_snapshot(snapshot: &QualitySnapshot) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Total words:      {}", snapshot.total.to_string().bright_yellow().bold());
    println!("   Average length:   {:.2}", snapshot.average_length);
    println!("   Uncommon words:   {:.1}%", snapshot.percent_uncommon);
}

/// Print a solved grid
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}x{} grid",
        result.grid.width(),
        result.grid.height()
    );
    println!("{}", "─".repeat(60).cyan());

    print_grid(&result.grid);
    if result.words.is_empty() {
        println!("\n{}", "No words found".red().bold());
        return;
    }
    print_words(&result.words, verbose);
    println!(
        "\n{}",
        format!("✅ {} words, longest {} letters", result.words.len(), result.words.longest())
            .green()
            .bold()
    );
}

/// Print a generated puzzle
pub fn print_generated_puzzle(puzzle: &GeneratedPuzzle, verbose: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GENERATED PUZZLE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    print_grid(&puzzle.grid);
    println!("\n   Code: {}", puzzle.code().bright_white());
    print_snapshot(&puzzle.snapshot);
    print_words(&puzzle.words, verbose);

    println!();
    let message = puzzle.message();
    match puzzle.termination {
        Termination::Qualified => println!("{}", format!("✅ {message}").green().bold()),
        Termination::BestAttempt | Termination::Cancelled => {
            println!("{}", format!("⚠️  {message}").yellow().bold());
        }
    }
}

/// Print a survey summary
pub fn print_survey_result(result: &SurveyResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SURVEY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("   Rolls:            {}", result.repetitions);
    println!("   In range:         {}", result.qualifying.len());
    println!("   Added to board:   {}", result.added.to_string().green());
    println!("   Board size:       {}", result.board_size);
    println!("   Board average:    {:.1} words", result.board_average);

    if !result.qualifying.is_empty() {
        println!("\n🏆 {}", "Best rolls:".bright_cyan().bold());
        for (code, score) in result.qualifying.iter().take(5) {
            println!("   {score:4}  {code}");
        }
    }
}

/// Print a sampled letter sequence
pub fn print_letters(result: &LettersResult) {
    let letters: Vec<String> = result.letters.iter().map(|l| format_cell(l)).collect();
    println!(
        "{} {}",
        format!("{}:", result.distribution).bright_cyan(),
        letters.join(" ").bright_yellow()
    );
}
