//! Interactive storefront session.

use std::time::Instant;

use anyhow::Result;
use chrono::Utc;
use console::style;
use dialoguer::{Input, Select};

use vitrine_commerce::cart::OrderSummary;
use vitrine_commerce::catalog::Product;
use vitrine_commerce::ids::{CategoryId, ProductId};

use super::StoreArgs;
use crate::app::{App, ViewState};
use crate::context::Context;
use crate::output::{format_rating, tag_badges};

/// Run the store command.
pub async fn run(args: StoreArgs, ctx: &Context) -> Result<()> {
    let mut app = App::boot(ctx, ViewState::Store)?;

    if let Some(category) = args.category {
        app.filter.set_category(CategoryId::new(category));
    }
    if let Some(query) = args.query {
        app.filter.set_query(query);
    }

    session(&mut app, ctx).await
}

/// Drive the screens until the shopper leaves.
pub async fn session(app: &mut App, ctx: &Context) -> Result<()> {
    loop {
        match app.view {
            ViewState::Store => {
                if !storefront(app, ctx)? {
                    ctx.output.line(&format!(
                        "© {} Todos os direitos reservados.",
                        Utc::now().format("%Y")
                    ));
                    return Ok(());
                }
            }
            ViewState::AdminLogin => super::admin::login(app, ctx).await?,
            ViewState::AdminDashboard => super::admin::dashboard(app, ctx)?,
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum StoreAction {
    ViewProduct,
    SearchProducts,
    PickCategory,
    OpenCart,
    NextSlide,
    ClearFilters,
    OpenAdmin,
    Quit,
}

/// One storefront redraw plus one action. Returns `false` when the
/// shopper quits.
fn storefront(app: &mut App, ctx: &Context) -> Result<bool> {
    let now = Instant::now();
    app.carousel.sync_len(app.catalog.visible_slides().len(), now);
    app.carousel.tick(now);

    render_hero(app, ctx);
    app.show_notices(&ctx.output, now);
    render_chips(app, ctx);

    let listed = app.filter.apply(app.catalog.products());
    render_listing(&listed, ctx);
    let listed_ids: Vec<ProductId> = listed.iter().map(|p| p.id.clone()).collect();

    let mut actions = Vec::new();
    if !listed_ids.is_empty() {
        actions.push(StoreAction::ViewProduct);
    }
    actions.push(StoreAction::SearchProducts);
    actions.push(StoreAction::PickCategory);
    actions.push(StoreAction::OpenCart);
    if app.carousel.len() > 1 {
        actions.push(StoreAction::NextSlide);
    }
    if listed_ids.is_empty() {
        actions.push(StoreAction::ClearFilters);
    }
    actions.push(StoreAction::OpenAdmin);
    actions.push(StoreAction::Quit);

    let labels: Vec<String> = actions
        .iter()
        .map(|action| match action {
            StoreAction::ViewProduct => "Ver produto".to_string(),
            StoreAction::SearchProducts => "Buscar produtos".to_string(),
            StoreAction::PickCategory => "Filtrar por categoria".to_string(),
            StoreAction::OpenCart => format!("Meu Carrinho ({})", app.cart.cart().len()),
            StoreAction::NextSlide => "Próximo slide".to_string(),
            StoreAction::ClearFilters => "Limpar Filtros".to_string(),
            StoreAction::OpenAdmin => "Área administrativa".to_string(),
            StoreAction::Quit => "Sair".to_string(),
        })
        .collect();

    let choice = Select::new()
        .with_prompt("O que deseja fazer?")
        .items(&labels)
        .default(0)
        .interact()?;

    match actions[choice] {
        StoreAction::ViewProduct => pick_product(app, ctx, &listed_ids)?,
        StoreAction::SearchProducts => {
            let query: String = Input::new()
                .with_prompt("Buscar produtos...")
                .allow_empty(true)
                .interact_text()?;
            app.filter.set_query(query);
        }
        StoreAction::PickCategory => pick_category(app)?,
        StoreAction::OpenCart => cart_screen(app, ctx)?,
        StoreAction::NextSlide => app.carousel.advance(Instant::now()),
        StoreAction::ClearFilters => {
            app.filter.set_category(CategoryId::all());
            app.filter.set_query("");
        }
        StoreAction::OpenAdmin => app.view = ViewState::AdminLogin,
        StoreAction::Quit => return Ok(false),
    }

    Ok(true)
}

fn render_hero(app: &App, ctx: &Context) {
    let output = &ctx.output;
    output.header(ctx.store_name());

    let slides = app.catalog.visible_slides();
    if let Some(slide) = slides.get(app.carousel.index()) {
        if let Some(badge) = &slide.badge {
            output.line(&style(badge).magenta().bold().to_string());
        }
        output.line(&style(&slide.title).bold().to_string());
        output.line(&slide.subtitle);
        output.line(&style(format!("[ {} ]", slide.cta_text)).cyan().to_string());
        if slides.len() > 1 {
            output.line(&slide_dots(slides.len(), app.carousel.index()));
        }
    }
    output.rule();
}

fn slide_dots(len: usize, current: usize) -> String {
    (0..len)
        .map(|index| if index == current { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_chips(app: &App, ctx: &Context) {
    let chips: Vec<String> = app
        .catalog
        .categories()
        .iter()
        .map(|category| {
            if category.id == app.filter.category {
                style(&category.name).bold().underlined().to_string()
            } else {
                category.name.clone()
            }
        })
        .collect();
    ctx.output.line(&chips.join("  "));
    ctx.output.line("");
}

fn render_listing(products: &[&Product], ctx: &Context) {
    let output = &ctx.output;
    if products.is_empty() {
        output.line(&style("Nenhum produto encontrado").bold().to_string());
        output.line("Tente ajustar seus filtros ou busca.");
        return;
    }

    for product in products {
        let price = match &product.original_price {
            Some(original) => format!(
                "{} {}",
                style(original.display()).dim().strikethrough(),
                style(product.price.display()).bold()
            ),
            None => style(product.price.display()).bold().to_string(),
        };

        output.line(&format!(
            "{}{}  {}  {}",
            product.name,
            tag_badges(product),
            price,
            format_rating(product.rating, product.reviews)
        ));
    }
}

fn pick_product(app: &mut App, ctx: &Context, listed: &[ProductId]) -> Result<()> {
    let mut labels: Vec<String> = listed
        .iter()
        .filter_map(|id| app.catalog.product(id))
        .map(|p| format!("{} - {}", p.name, p.price.display()))
        .collect();
    labels.push("Voltar".to_string());

    let choice = Select::new()
        .with_prompt("Escolha um produto")
        .items(&labels)
        .default(0)
        .interact()?;
    if choice == listed.len() {
        return Ok(());
    }

    let id = listed[choice].clone();
    product_detail(app, ctx, &id)
}

fn product_detail(app: &mut App, ctx: &Context, id: &ProductId) -> Result<()> {
    let output = &ctx.output;
    let Some(product) = app.catalog.product(id) else {
        output.info("Produto indisponível.");
        return Ok(());
    };

    output.header(&product.name);
    if let Some(category) = app.catalog.category_name(&product.category) {
        output.kv("Categoria", category);
    }
    let price = match &product.original_price {
        Some(original) => format!(
            "{} {}",
            style(product.price.display()).bold(),
            style(original.display()).dim().strikethrough()
        ),
        None => style(product.price.display()).bold().to_string(),
    };
    output.kv("Preço", &price);
    if product.is_sale {
        output.kv("Oferta", &style("Promoção").red().to_string());
    }
    if let Some(discount) = product.discount_percentage() {
        output.kv("Desconto", &format!("{discount:.0}%"));
    }
    output.kv(
        "Avaliação",
        &format_rating(product.rating, product.reviews),
    );
    output.line("");
    output.line(&style("Descrição").bold().to_string());
    output.line(&product.description);
    output.line("");

    let name = product.name.clone();
    let sizes = product.sizes.clone();
    let colors = product.colors.clone();

    let size = Select::new()
        .with_prompt("Tamanho")
        .items(&sizes)
        .default(0)
        .interact()?;
    let color = Select::new()
        .with_prompt("Cor")
        .items(&colors)
        .default(0)
        .interact()?;
    let quantity: i64 = Input::new()
        .with_prompt("Quantidade")
        .default(1)
        .interact_text()?;

    let confirm = Select::new()
        .items(&["Adicionar ao Carrinho", "Voltar"])
        .default(0)
        .interact()?;
    if confirm == 1 {
        return Ok(());
    }

    let Some(product) = app.catalog.product(id) else {
        return Ok(());
    };
    let now = Instant::now();
    match app.cart.add_item(product, &sizes[size], &colors[color], quantity) {
        Ok(_) => app.notices.success(format!("{name} adicionado ao carrinho!"), now),
        Err(e) => app.notices.error(e.to_string(), now),
    };
    Ok(())
}

fn pick_category(app: &mut App) -> Result<()> {
    let labels: Vec<String> = app
        .catalog
        .categories()
        .iter()
        .map(|c| c.name.clone())
        .collect();
    let ids: Vec<CategoryId> = app
        .catalog
        .categories()
        .iter()
        .map(|c| c.id.clone())
        .collect();
    let current = ids
        .iter()
        .position(|id| *id == app.filter.category)
        .unwrap_or(0);

    let choice = Select::new()
        .with_prompt("Categoria")
        .items(&labels)
        .default(current)
        .interact()?;
    app.filter.set_category(ids[choice].clone());
    Ok(())
}

#[derive(Clone, Copy, PartialEq)]
enum CartAction {
    ChangeQuantity,
    RemoveItem,
    Checkout,
    KeepShopping,
}

fn cart_screen(app: &mut App, ctx: &Context) -> Result<()> {
    loop {
        let output = &ctx.output;
        output.header(&format!("Meu Carrinho ({})", app.cart.cart().len()));
        app.show_notices(&ctx.output, Instant::now());

        if app.cart.cart().is_empty() {
            ctx.output.info("Seu carrinho está vazio.");
            return Ok(());
        }

        for (position, item) in app.cart.cart().items().iter().enumerate() {
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
        let total = app.cart.cart().total()?.display();
        ctx.output.kv("Subtotal", &total);
        ctx.output.kv("Frete", "Grátis");
        ctx.output.kv("Total", &total);

        let actions = [
            CartAction::ChangeQuantity,
            CartAction::RemoveItem,
            CartAction::Checkout,
            CartAction::KeepShopping,
        ];
        let labels = [
            "Alterar quantidade",
            "Remover item",
            "Finalizar no WhatsApp",
            "Continuar Comprando",
        ];
        let choice = Select::new().items(&labels).default(3).interact()?;

        match actions[choice] {
            CartAction::ChangeQuantity => {
                let line: usize = Input::new().with_prompt("Número do item").interact_text()?;
                let delta: i64 = Input::new()
                    .with_prompt("Ajuste (ex.: 1 ou -1)")
                    .allow_empty(false)
                    .interact_text()?;
                let result = match line.checked_sub(1) {
                    Some(index) => app.cart.update_quantity(index, delta),
                    None => Ok(false),
                };
                match result {
                    Ok(false) => ctx.output.info("Item não encontrado."),
                    Ok(true) => {}
                    Err(e) => {
                        app.notices.error(e.to_string(), Instant::now());
                    }
                }
            }
            CartAction::RemoveItem => {
                let line: usize = Input::new().with_prompt("Número do item").interact_text()?;
                let result = match line.checked_sub(1) {
                    Some(index) => app.cart.remove_item(index),
                    None => Ok(false),
                };
                match result {
                    Ok(false) => ctx.output.info("Item não encontrado."),
                    Ok(true) => {}
                    Err(e) => {
                        app.notices.error(e.to_string(), Instant::now());
                    }
                }
            }
            CartAction::Checkout => checkout(app, ctx)?,
            CartAction::KeepShopping => return Ok(()),
        }
    }
}

/// Render the order and the deep link. The cart stays intact so the
/// shopper can keep adjusting it after the hand-off.
fn checkout(app: &App, ctx: &Context) -> Result<()> {
    let summary = OrderSummary::from_cart(app.cart.cart(), ctx.store_name())?;
    let output = &ctx.output;

    output.header("Pedido");
    for line in &summary.lines {
        output.list_item(line);
    }
    output.kv("Total", &summary.total.display());
    output.line("");
    output.info("Abra o link para finalizar no WhatsApp:");
    output.line(&summary.whatsapp_link(ctx.whatsapp_number()));
    Ok(())
}
