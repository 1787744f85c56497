use scytale_core::{KeyValidator, ParsedKey, ScytaleError};

use crate::app::AppContext;
use crate::cli::KeyArgs;
use crate::output::key_json;
use crate::ui::kv;

pub fn handle_key(ctx: &AppContext, args: &KeyArgs) -> anyhow::Result<()> {
    let kind = ctx.config()?.method(args.method.as_deref())?;
    let parsed = KeyValidator::validate(kind, &args.key).map_err(ScytaleError::from)?;

    let ui = ctx.ui();
    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&key_json(&parsed))?);
        return Ok(());
    }
    if ctx.quiet() {
        return Ok(());
    }

    println!("{}", kv(ui, "Method", kind.identifier()));
    match &parsed {
        ParsedKey::Caesar(key) => println!("{}", kv(ui, "Shift", &key.shift().to_string())),
        ParsedKey::Columnar(key) => {
            println!("{}", kv(ui, "Columns", &key.columns().to_string()));
            println!("{}", kv(ui, "Order", &format!("{:?}", key.order())));
            println!("{}", kv(ui, "Ranks", &format!("{:?}", key.ranks())));
        }
        ParsedKey::Vigenere(key) => println!("{}", kv(ui, "Running key", key.as_str())),
    }
    Ok(())
}
