//! Admin login and dashboard screens.

use std::time::Instant;

use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input, Password, Select};

use vitrine_commerce::catalog::{Category, ProductDraft, Slide, SlideDraft};
use vitrine_commerce::error::CommerceError;
use vitrine_commerce::ids::{ProductId, SlideId};
use vitrine_commerce::money::{Currency, Money};
use vitrine_store::CatalogStore;

use super::AdminArgs;
use crate::app::{App, ViewState};
use crate::context::Context;
use crate::output::status_badge;

/// Mocked weekly sales series rendered on the overview tab.
const WEEKLY_SALES: [(&str, u32); 7] = [
    ("Seg", 4000),
    ("Ter", 3000),
    ("Qua", 5000),
    ("Qui", 2780),
    ("Sex", 6890),
    ("Sab", 8390),
    ("Dom", 7490),
];

/// Run the admin command.
pub async fn run(args: AdminArgs, ctx: &Context) -> Result<()> {
    let mut app = App::boot(ctx, ViewState::AdminLogin)?;
    if let Some(email) = args.email {
        app.login_email = email;
    }
    super::store::session(&mut app, ctx).await
}

/// Fake login gate. Any credentials pass after a short delay.
pub async fn login(app: &mut App, ctx: &Context) -> Result<()> {
    let output = &ctx.output;
    output.header("Admin Login");
    output.line(&format!("Entre para gerenciar o {}", ctx.store_name()));

    let choice = Select::new()
        .items(&["Entrar", "Voltar para a Loja"])
        .default(0)
        .interact()?;
    if choice == 1 {
        app.return_to_store(Instant::now());
        return Ok(());
    }

    let email: String = Input::new()
        .with_prompt("Email Corporativo")
        .default(app.login_email.clone())
        .interact_text()?;
    let _password = Password::new()
        .with_prompt("Senha")
        .allow_empty_password(true)
        .interact()?;

    let spinner = output.spinner("Autenticando...");
    tokio::time::sleep(ctx.login_delay()).await;
    spinner.finish_and_clear();

    app.login_email = email;
    app.notices
        .success("Login realizado com sucesso!", Instant::now());
    app.view = ViewState::AdminDashboard;
    Ok(())
}

/// One dashboard redraw plus one tab action.
pub fn dashboard(app: &mut App, ctx: &Context) -> Result<()> {
    let output = &ctx.output;
    output.header("Dashboard");
    output.line("Bem-vindo de volta ao painel de controle.");
    app.show_notices(&ctx.output, Instant::now());

    let tabs = ["Visão Geral", "Produtos", "Slider Hero", "Sair do Sistema"];
    let choice = Select::new().items(&tabs).default(0).interact()?;
    match choice {
        0 => overview(app, ctx),
        1 => products_tab(app, ctx)?,
        2 => slides_tab(app, ctx)?,
        _ => app.return_to_store(Instant::now()),
    }
    Ok(())
}

fn overview(app: &App, ctx: &Context) {
    let output = &ctx.output;
    output.kv("Receita Mensal", "R$ 12.4K (+15% este mês)");
    output.kv(
        "Produtos Ativos",
        &format!("{} (Total do catálogo)", app.catalog.active_product_count()),
    );
    output.kv("Visitas Hoje", "1.2K (+5% vs ontem)");
    output.line("");
    output.line(&style("Vendas da Semana").bold().to_string());

    let max = WEEKLY_SALES.iter().map(|(_, v)| *v).max().unwrap_or(1);
    for (day, value) in WEEKLY_SALES {
        let width = (value as usize * 24) / max as usize;
        output.line(&format!("{day}  {} {}", "█".repeat(width.max(1)), value));
    }
}

fn products_tab(app: &mut App, ctx: &Context) -> Result<()> {
    let mut query = String::new();
    loop {
        let output = &ctx.output;
        output.header("Gerenciar Produtos");
        output.line("Adicione, edite ou remova produtos do catálogo.");
        app.show_notices(&ctx.output, Instant::now());

        let widths = [28, 12, 12, 10, 10];
        ctx.output.table_header(
            &["Produto", "Categoria", "Preço", "Estoque", "Status"],
            &widths,
        );
        let entries: Vec<(ProductId, String)> = {
            let matches = app.catalog.search_products(&query);
            for product in &matches {
                let category = app
                    .catalog
                    .category_name(&product.category)
                    .unwrap_or("-")
                    .to_string();
                let price = product.price.display();
                let stock = format!("{} un.", product.total_stock());
                let status = status_badge(product.status);
                ctx.output.table_row(
                    &[
                        product.name.as_str(),
                        category.as_str(),
                        price.as_str(),
                        stock.as_str(),
                        status.as_str(),
                    ],
                    &widths,
                );
            }
            matches
                .iter()
                .map(|p| (p.id.clone(), p.name.clone()))
                .collect()
        };

        let choice = Select::new()
            .items(&[
                "Novo Produto",
                "Editar produto",
                "Excluir produto",
                "Buscar",
                "Voltar",
            ])
            .default(0)
            .interact()?;
        match choice {
            0 => {
                let draft = product_form(&app.catalog, ProductDraft::default())?;
                match app.catalog.create_product(draft) {
                    Ok(_) => app
                        .notices
                        .success("Produto criado com sucesso!", Instant::now()),
                    Err(CommerceError::ValidationError(_)) => app
                        .notices
                        .error("Preencha os campos obrigatórios.", Instant::now()),
                    Err(e) => app.notices.error(e.to_string(), Instant::now()),
                };
            }
            1 => {
                let Some(id) = pick_entry(&entries, "Escolha um produto")? else {
                    continue;
                };
                let Some(product) = app.catalog.product(&id) else {
                    continue;
                };
                let draft = product_form(&app.catalog, ProductDraft::from_product(product))?;
                match app.catalog.update_product(&id, draft) {
                    Ok(()) => app
                        .notices
                        .success("Produto atualizado com sucesso!", Instant::now()),
                    Err(CommerceError::ValidationError(_)) => app
                        .notices
                        .error("Preencha os campos obrigatórios.", Instant::now()),
                    Err(e) => app.notices.error(e.to_string(), Instant::now()),
                };
            }
            2 => {
                let Some(id) = pick_entry(&entries, "Escolha um produto")? else {
                    continue;
                };
                let confirmed = Confirm::new()
                    .with_prompt("Tem certeza que deseja excluir este produto?")
                    .default(false)
                    .interact()?;
                if !confirmed {
                    ctx.output.warn("Exclusão cancelada");
                } else if app.catalog.delete_product(&id) {
                    app.notices.success("Produto removido.", Instant::now());
                }
            }
            3 => {
                query = Input::new()
                    .with_prompt("Buscar produtos por nome...")
                    .allow_empty(true)
                    .interact_text()?;
            }
            _ => return Ok(()),
        }
    }
}

fn slides_tab(app: &mut App, ctx: &Context) -> Result<()> {
    loop {
        let output = &ctx.output;
        output.header("Slider da Página Inicial");
        output.line("Gerencie os destaques visuais da sua loja.");
        app.show_notices(&ctx.output, Instant::now());

        let widths = [8, 26, 14, 10];
        ctx.output
            .table_header(&["Ordem", "Título", "Badge", "Status"], &widths);
        let entries: Vec<(SlideId, String)> = {
            let mut slides: Vec<&Slide> = app.catalog.slides().iter().collect();
            slides.sort_by_key(|s| s.order);
            for slide in &slides {
                let order = slide.order.to_string();
                let status = if slide.active {
                    style("Ativo").green().to_string()
                } else {
                    style("Inativo").dim().to_string()
                };
                ctx.output.table_row(
                    &[
                        order.as_str(),
                        slide.title.as_str(),
                        slide.badge.as_deref().unwrap_or("-"),
                        status.as_str(),
                    ],
                    &widths,
                );
            }
            slides
                .iter()
                .map(|s| (s.id.clone(), s.title.clone()))
                .collect()
        };

        let choice = Select::new()
            .items(&["Novo Slide", "Editar slide", "Excluir slide", "Voltar"])
            .default(0)
            .interact()?;
        match choice {
            0 => {
                let draft = SlideDraft {
                    order: (app.catalog.slides().len() + 1) as i32,
                    ..SlideDraft::default()
                };
                let draft = slide_form(draft)?;
                match app.catalog.create_slide(draft) {
                    Ok(_) => app
                        .notices
                        .success("Novo slide adicionado!", Instant::now()),
                    Err(CommerceError::ValidationError(_)) => app
                        .notices
                        .error("Título e Imagem são obrigatórios.", Instant::now()),
                    Err(e) => app.notices.error(e.to_string(), Instant::now()),
                };
            }
            1 => {
                let Some(id) = pick_entry(&entries, "Escolha um slide")? else {
                    continue;
                };
                let Some(slide) = app.catalog.slide(&id) else {
                    continue;
                };
                let draft = slide_form(SlideDraft::from_slide(slide))?;
                match app.catalog.update_slide(&id, draft) {
                    Ok(()) => app.notices.success("Slide atualizado!", Instant::now()),
                    Err(CommerceError::ValidationError(_)) => app
                        .notices
                        .error("Título e Imagem são obrigatórios.", Instant::now()),
                    Err(e) => app.notices.error(e.to_string(), Instant::now()),
                };
            }
            2 => {
                let Some(id) = pick_entry(&entries, "Escolha um slide")? else {
                    continue;
                };
                let confirmed = Confirm::new()
                    .with_prompt("Tem certeza que deseja excluir este slide?")
                    .default(false)
                    .interact()?;
                if !confirmed {
                    ctx.output.warn("Exclusão cancelada");
                } else if app.catalog.delete_slide(&id) {
                    app.notices.success("Slide removido.", Instant::now());
                }
            }
            _ => return Ok(()),
        }
    }
}

fn pick_entry<T: Clone>(entries: &[(T, String)], prompt: &str) -> Result<Option<T>> {
    let mut labels: Vec<&str> = entries.iter().map(|(_, name)| name.as_str()).collect();
    labels.push("Voltar");
    let choice = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    if choice == entries.len() {
        return Ok(None);
    }
    Ok(Some(entries[choice].0.clone()))
}

/// Prompt for the editable product fields, carrying the rest of the
/// draft through unchanged.
fn product_form(catalog: &CatalogStore, mut draft: ProductDraft) -> Result<ProductDraft> {
    draft.name = Input::new()
        .with_prompt("Nome do Produto")
        .default(draft.name)
        .allow_empty(true)
        .interact_text()?;

    let categories: Vec<&Category> = catalog
        .categories()
        .iter()
        .filter(|c| !c.id.is_all())
        .collect();
    let labels: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    let current = categories
        .iter()
        .position(|c| c.id == draft.category)
        .unwrap_or(0);
    let chosen = Select::new()
        .with_prompt("Categoria")
        .items(&labels)
        .default(current)
        .interact()?;
    draft.category = categories[chosen].id.clone();

    let price: f64 = Input::new()
        .with_prompt("Preço (R$)")
        .default(draft.price.to_decimal())
        .interact_text()?;
    draft.price = Money::from_decimal(price, Currency::BRL);

    let original: f64 = Input::new()
        .with_prompt("Preço Original")
        .default(
            draft
                .original_price
                .map(|p| p.to_decimal())
                .unwrap_or_default(),
        )
        .interact_text()?;
    draft.original_price = if original > 0.0 {
        Some(Money::from_decimal(original, Currency::BRL))
    } else {
        None
    };

    draft.is_sale = Confirm::new()
        .with_prompt("Em Promoção")
        .default(draft.is_sale)
        .interact()?;
    draft.is_new = Confirm::new()
        .with_prompt("Novo Lançamento")
        .default(draft.is_new)
        .interact()?;

    let images: String = Input::new()
        .with_prompt("Imagens (URLs separadas por vírgula)")
        .default(draft.images.join(", "))
        .allow_empty(true)
        .interact_text()?;
    draft.images = images
        .split(',')
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .collect();

    draft.description = Input::new()
        .with_prompt("Descrição")
        .default(draft.description)
        .allow_empty(true)
        .interact_text()?;

    Ok(draft)
}

fn slide_form(mut draft: SlideDraft) -> Result<SlideDraft> {
    draft.title = Input::new()
        .with_prompt("Título Principal")
        .default(draft.title)
        .allow_empty(true)
        .interact_text()?;
    draft.subtitle = Input::new()
        .with_prompt("Subtítulo")
        .default(draft.subtitle)
        .allow_empty(true)
        .interact_text()?;
    draft.cta_text = Input::new()
        .with_prompt("Texto do Botão")
        .default(draft.cta_text)
        .interact_text()?;

    let badge: String = Input::new()
        .with_prompt("Badge (Opcional)")
        .default(draft.badge.unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    draft.badge = if badge.trim().is_empty() {
        None
    } else {
        Some(badge)
    };

    draft.image = Input::new()
        .with_prompt("URL da Imagem")
        .default(draft.image)
        .allow_empty(true)
        .interact_text()?;
    draft.active = Confirm::new()
        .with_prompt("Slide Ativo")
        .default(draft.active)
        .interact()?;
    draft.order = Input::new()
        .with_prompt("Ordem")
        .default(draft.order)
        .interact_text()?;

    Ok(draft)
}
