use scytale_core::{CipherResponse, Direction};

use crate::app::AppContext;
use crate::cli::TransformArgs;
use crate::helpers::read_text;
use crate::output::response_json;
use crate::ui::{bold, kv};

pub fn handle_transform(
    ctx: &AppContext,
    args: &TransformArgs,
    direction: Direction,
) -> anyhow::Result<()> {
    let kind = ctx.config()?.method(args.method.as_deref())?;
    let registry = ctx.registry()?;
    let text = read_text(args.text.clone())?;

    let output = registry.dispatch(kind, direction, &text, &args.key)?;
    tracing::info!(
        method = %kind,
        %direction,
        chars = output.chars().count(),
        "transform complete"
    );

    let ui = ctx.ui();
    if ui.mode.is_json() {
        let response = CipherResponse { text: output };
        println!("{}", serde_json::to_string_pretty(&response_json(&response))?);
    } else if ui.mode.is_pretty() && !ctx.quiet() {
        println!("{}", kv(ui, "Method", kind.name()));
        println!("{}", kv(ui, "Direction", direction.as_str()));
        println!("{}", bold(ui, &output));
    } else {
        println!("{}", output);
    }
    Ok(())
}
