//! Configuration inspection and scaffolding.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Init { force } => init(ctx, force),
        ConfigCommand::Path => path(ctx),
    }
}

fn show(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Configuration");
    ctx.output.kv("Store name", ctx.store_name());
    ctx.output
        .kv("WhatsApp", ctx.whatsapp_number().unwrap_or("(not set)"));
    ctx.output
        .kv("Data dir", &ctx.data_dir().display().to_string());
    ctx.output.kv(
        "Slide interval",
        &format!("{} ms", ctx.slide_interval().as_millis()),
    );
    ctx.output.kv(
        "Notice TTL",
        &format!("{} ms", ctx.notice_ttl().as_millis()),
    );
    ctx.output.kv(
        "Login delay",
        &format!("{} ms", ctx.login_delay().as_millis()),
    );
    Ok(())
}

fn init(ctx: &Context, force: bool) -> Result<()> {
    let path = ctx.cwd.join("vitrine.toml");
    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }
    std::fs::write(&path, generate_default_config())?;
    ctx.output.success(&format!("Wrote {}", path.display()));
    Ok(())
}

fn path(ctx: &Context) -> Result<()> {
    match ctx.config_path() {
        Some(path) => ctx.output.line(&path.display().to_string()),
        None => ctx.output.info("No config file found, using defaults"),
    }
    Ok(())
}
