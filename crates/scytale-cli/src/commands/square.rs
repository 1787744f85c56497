use scytale_core::cipher::vigenere;

use crate::app::AppContext;
use crate::ui::bold;

pub fn handle_square(ctx: &AppContext) -> anyhow::Result<()> {
    let rows = vigenere::square();
    let ui = ctx.ui();

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if !ui.mode.is_pretty() {
        for row in &rows {
            println!("{}", row);
        }
        return Ok(());
    }

    // row label is the key letter, column header the text letter
    let header: Vec<String> = rows[0].chars().map(|c| c.to_string()).collect();
    println!("    {}", bold(ui, &header.join(" ")));
    for row in &rows {
        let label = row.chars().next().map(String::from).unwrap_or_default();
        let cells: Vec<String> = row.chars().map(|c| c.to_string()).collect();
        println!("{} | {}", bold(ui, &label), cells.join(" "));
    }
    Ok(())
}
