//! Read-only catalogue inspection.

use anyhow::{bail, Result};

use vitrine_commerce::catalog::{Product, Slide, StorefrontFilter};
use vitrine_commerce::ids::{CategoryId, ProductId};
use vitrine_store::CatalogStore;

use super::{CatalogArgs, CatalogCommand};
use crate::context::Context;
use crate::output::{format_rating, status_badge};

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = CatalogStore::seeded();
    match args.command {
        CatalogCommand::List {
            category,
            query,
            all,
        } => list(&catalog, ctx, category, query, all),
        CatalogCommand::Show { id } => show(&catalog, ctx, &id),
        CatalogCommand::Slides { all } => slides(&catalog, ctx, all),
        CatalogCommand::Categories => categories(&catalog, ctx),
    }
}

fn list(
    catalog: &CatalogStore,
    ctx: &Context,
    category: Option<String>,
    query: Option<String>,
    all: bool,
) -> Result<()> {
    let category = category.map(CategoryId::new).unwrap_or_else(CategoryId::all);
    let query = query.unwrap_or_default();

    let products: Vec<&Product> = if all {
        let needle = query.to_lowercase();
        catalog
            .products()
            .iter()
            .filter(|p| category.is_all() || p.category == category)
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .collect()
    } else {
        let mut filter = StorefrontFilter::new();
        filter.set_category(category);
        filter.set_query(query);
        filter.apply(catalog.products())
    };

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header("Produtos");
    let widths = [14, 28, 12, 12, 10];
    ctx.output.table_header(
        &["ID", "Nome", "Categoria", "Preço", "Status"],
        &widths,
    );
    for product in &products {
        let id = product.id.to_string();
        let price = product.price.display();
        let category = catalog.category_name(&product.category).unwrap_or("-");
        let status = status_badge(product.status);
        ctx.output.table_row(
            &[
                id.as_str(),
                product.name.as_str(),
                category,
                price.as_str(),
                status.as_str(),
            ],
            &widths,
        );
    }
    Ok(())
}

fn show(catalog: &CatalogStore, ctx: &Context, id: &str) -> Result<()> {
    let id = ProductId::new(id);
    let Some(product) = catalog.product(&id) else {
        bail!("Product '{}' not found", id);
    };

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("ID", &product.id.to_string());
    if let Some(category) = catalog.category_name(&product.category) {
        ctx.output.kv("Categoria", category);
    }
    ctx.output.kv("Preço", &product.price.display());
    if let Some(original) = &product.original_price {
        ctx.output.kv("Preço Original", &original.display());
    }
    ctx.output
        .kv("Avaliação", &format_rating(product.rating, product.reviews));
    ctx.output.kv("Tamanhos", &product.sizes.join(", "));
    ctx.output.kv("Cores", &product.colors.join(", "));
    ctx.output.kv("Estoque", &format!("{} un.", product.total_stock()));
    ctx.output.kv("Status", product.status.as_str());
    ctx.output.line("");
    ctx.output.line(&product.description);
    if !product.images.is_empty() {
        ctx.output.line("");
        for image in &product.images {
            ctx.output.list_item(image);
        }
    }
    Ok(())
}

fn slides(catalog: &CatalogStore, ctx: &Context, all: bool) -> Result<()> {
    let listed: Vec<&Slide> = if all {
        let mut slides: Vec<&Slide> = catalog.slides().iter().collect();
        slides.sort_by_key(|s| s.order);
        slides
    } else {
        catalog.visible_slides()
    };

    if ctx.output.is_json() {
        ctx.output.json(&listed);
        return Ok(());
    }

    ctx.output.header("Slides");
    let widths = [8, 26, 14, 10];
    ctx.output
        .table_header(&["Ordem", "Título", "Badge", "Status"], &widths);
    for slide in &listed {
        let order = slide.order.to_string();
        let status = if slide.active { "Ativo" } else { "Inativo" };
        ctx.output.table_row(
            &[
                order.as_str(),
                slide.title.as_str(),
                slide.badge.as_deref().unwrap_or("-"),
                status,
            ],
            &widths,
        );
    }
    Ok(())
}

fn categories(catalog: &CatalogStore, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&catalog.categories());
        return Ok(());
    }

    ctx.output.header("Categorias");
    for category in catalog.categories() {
        ctx.output
            .list_item(&format!("{} - {}", category.id, category.name));
    }
    Ok(())
}
