//! Scriptable cart operations against the persisted snapshot.

use anyhow::{bail, Result};
use chrono::Utc;
use serde_json::json;

use vitrine_commerce::cart::OrderSummary;
use vitrine_commerce::ids::ProductId;
use vitrine_store::{CartStore, CatalogStore, Slot};

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    ctx.output
        .debug(&format!("Using data dir: {}", ctx.data_dir().display()));
    let slot = Slot::open(ctx.data_dir())?;
    let mut store = CartStore::open(slot);

    match args.command {
        CartCommand::Show => show(&store, ctx),
        CartCommand::Add {
            id,
            size,
            color,
            quantity,
        } => add(&mut store, ctx, &id, &size, &color, quantity),
        CartCommand::Update { line, delta } => update(&mut store, ctx, line, delta),
        CartCommand::Remove { line } => remove(&mut store, ctx, line),
        CartCommand::Checkout => checkout(&store, ctx),
    }
}

fn show(store: &CartStore, ctx: &Context) -> Result<()> {
    let cart = store.cart();
    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "items": cart.items(),
            "item_count": cart.item_count(),
            "total": cart.total()?.to_decimal(),
        }));
        return Ok(());
    }

    if cart.is_empty() {
        ctx.output.info("Seu carrinho está vazio.");
        return Ok(());
    }
    for (position, item) in cart.items().iter().enumerate() {
        ctx.output.line(&format!(
            "{}. {} (Tam: {}, {}) x{} - {}",
            position + 1,
            item.name,
            item.key.size,
            item.key.color,
            item.quantity,
            item.line_total()?.display()
        ));
    }
    ctx.output.kv("Total", &cart.total()?.display());
    Ok(())
}

fn add(
    store: &mut CartStore,
    ctx: &Context,
    id: &str,
    size: &str,
    color: &str,
    quantity: i64,
) -> Result<()> {
    let catalog = CatalogStore::seeded();
    let id = ProductId::new(id);
    let Some(product) = catalog.product(&id) else {
        bail!("Product '{}' not found", id);
    };

    let index = store.add_item(product, size, color, quantity)?;
    let item = &store.cart().items()[index];
    ctx.output.success(&format!(
        "{} x{} ({}, {}) no carrinho",
        item.name, item.quantity, item.key.size, item.key.color
    ));
    Ok(())
}

fn update(store: &mut CartStore, ctx: &Context, line: usize, delta: i64) -> Result<()> {
    let changed = match line.checked_sub(1) {
        Some(index) => store.update_quantity(index, delta)?,
        None => false,
    };
    if changed {
        ctx.output.success(&format!("Linha {line} atualizada"));
    } else {
        ctx.output.info("Item não encontrado.");
    }
    Ok(())
}

fn remove(store: &mut CartStore, ctx: &Context, line: usize) -> Result<()> {
    let removed = match line.checked_sub(1) {
        Some(index) => store.remove_item(index)?,
        None => false,
    };
    if removed {
        ctx.output.success("Item removido.");
    } else {
        ctx.output.info("Item não encontrado.");
    }
    Ok(())
}

fn checkout(store: &CartStore, ctx: &Context) -> Result<()> {
    let cart = store.cart();
    if cart.is_empty() {
        ctx.output.info("Seu carrinho está vazio.");
        return Ok(());
    }

    let summary = OrderSummary::from_cart(cart, ctx.store_name())?;
    let link = summary.whatsapp_link(ctx.whatsapp_number());

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "generated_at": Utc::now().to_rfc3339(),
            "store": summary.store_name,
            "lines": summary.lines,
            "total": summary.total.to_decimal(),
            "message": summary.message(),
            "link": link,
        }));
        return Ok(());
    }

    ctx.output.header("Pedido");
    for line in &summary.lines {
        ctx.output.list_item(line);
    }
    ctx.output.kv("Total", &summary.total.display());
    ctx.output.line("");
    ctx.output.info("Abra o link para finalizar no WhatsApp:");
    ctx.output.line(&link);
    Ok(())
}
