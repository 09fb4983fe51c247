use colored::Colorize;

use gd_core::{Category, INSTRUCTIONS};

pub fn run() -> Result<(), String> {
    println!("  {}\n", "How to play".bold());
    for line in INSTRUCTIONS {
        println!("  {line}");
    }
    println!("\n  {}\n", "Categories".bold());
    for category in Category::ALL {
        println!("  {:<8} {}", category.to_string(), category.blurb());
    }
    println!("\n  Run 'guess-duel table' for the exact ranges and hit points.");
    Ok(())
}
