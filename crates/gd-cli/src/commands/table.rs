use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use gd_core::{Category, DifficultyTable, Level};

pub fn run(category: Option<&str>, path: Option<&Path>, json: bool) -> Result<(), String> {
    let difficulty = super::load_table(path)?;

    if json {
        let text = difficulty.to_json_pretty().map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    let categories = match category {
        Some(name) => vec![Category::parse(name).map_err(|e| e.to_string())?],
        None => Category::ALL.to_vec(),
    };

    println!("{}", render(&difficulty, &categories));
    Ok(())
}

fn render(difficulty: &DifficultyTable, categories: &[Category]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Category", "Level", "Range", "HP", "Hint"]);

    for &category in categories {
        for level in Level::all() {
            let rules = difficulty.rules(category, level);
            let hint = match rules.hint {
                Some(kind) if level.get() >= gd_core::hint::HINT_MIN_LEVEL => kind.to_string(),
                _ => "-".to_string(),
            };
            table.add_row(vec![
                category.to_string(),
                level.to_string(),
                rules.range.to_string(),
                rules.starting_hp.to_string(),
                hint,
            ]);
        }
    }
    table
}
