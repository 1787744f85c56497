use crate::app::AppContext;
use crate::config::{to_toml, write_config, ScytaleConfig};
use crate::errors::CliError;
use crate::ui::kv;

pub fn handle_config_show(ctx: &AppContext) -> anyhow::Result<()> {
    let path = ctx.config_path()?;
    let config = ctx.config()?;
    let ui = ctx.ui();

    if ui.mode.is_json() {
        let value = serde_json::json!({
            "path": path.to_string_lossy(),
            "exists": path.exists(),
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if !ctx.quiet() {
        println!("{}", kv(ui, "Path", &path.to_string_lossy()));
        println!("{}", kv(ui, "Exists", &path.exists().to_string()));
        println!();
    }
    print!("{}", to_toml(config)?);
    Ok(())
}

pub fn handle_config_init(ctx: &AppContext, force: bool) -> anyhow::Result<()> {
    let path = ctx.config_path()?;
    if path.exists() && !force {
        return Err(CliError::InvalidConfig(format!(
            "Config already exists at {}\nHint: Pass --force to overwrite it.",
            path.display()
        ))
        .into());
    }

    write_config(&path, &ScytaleConfig::default())?;
    tracing::info!(path = %path.display(), "wrote default config");
    if !ctx.quiet() {
        println!("Wrote config to {}", path.display());
    }
    Ok(())
}
