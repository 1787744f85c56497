use scytale_core::CipherKind;

use crate::app::AppContext;
use crate::output::method_json;
use crate::ui::table;

pub fn handle_methods(ctx: &AppContext) -> anyhow::Result<()> {
    let ui = ctx.ui();
    if ui.mode.is_json() {
        let methods: Vec<serde_json::Value> =
            CipherKind::ALL.iter().map(|&kind| method_json(kind)).collect();
        println!("{}", serde_json::to_string_pretty(&methods)?);
        return Ok(());
    }

    let rows: Vec<Vec<String>> = CipherKind::ALL
        .iter()
        .map(|kind| {
            vec![
                kind.identifier().to_string(),
                kind.name().to_string(),
                kind.key_rule().to_string(),
            ]
        })
        .collect();
    println!("{}", table(ui, &["Method", "Name", "Key"], &rows));
    Ok(())
}
