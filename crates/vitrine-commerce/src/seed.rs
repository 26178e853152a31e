//! Seed data the stores boot from.
//!
//! Every process starts from this catalogue. Admin edits live in memory
//! only, so a restart restores exactly these records.

use crate::catalog::{Category, Product, ProductStatus, Slide};
use crate::ids::{CategoryId, ProductId, SlideId};
use crate::money::{Currency, Money};
use std::collections::BTreeMap;

fn brl(cents: i64) -> Money {
    Money::new(cents, Currency::BRL)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn default_stock(quantity: u32) -> BTreeMap<String, u32> {
    BTreeMap::from([("default".to_string(), quantity)])
}

/// The fixed category list, `all` chip first.
pub fn categories() -> Vec<Category> {
    vec![
        Category::new(CategoryId::all(), "Todos"),
        Category::new("tshirts", "Camisetas"),
        Category::new("pants", "Calças"),
        Category::new("dresses", "Vestidos"),
        Category::new("shoes", "Tênis"),
        Category::new("accessories", "Acessórios"),
    ]
}

/// The hero slides every process starts with.
pub fn slides() -> Vec<Slide> {
    vec![
        Slide {
            id: SlideId::new("1"),
            image: "https://images.unsplash.com/photo-1483985988355-763728e1935b?q=80&w=2070&auto=format&fit=crop".to_string(),
            title: "Coleção Verão 2024".to_string(),
            subtitle: "Looks frescos e modernos para a estação mais quente.".to_string(),
            cta_text: "Explorar Agora".to_string(),
            badge: Some("NOVO".to_string()),
            link: None,
            order: 1,
            active: true,
        },
        Slide {
            id: SlideId::new("2"),
            image: "https://images.unsplash.com/photo-1558769132-cb1aea458c5e?q=80&w=1974&auto=format&fit=crop".to_string(),
            title: "Urban Streetwear".to_string(),
            subtitle: "O estilo que domina as ruas da cidade.".to_string(),
            cta_text: "Ver Coleção".to_string(),
            badge: Some("TRENDING".to_string()),
            link: None,
            order: 2,
            active: true,
        },
        Slide {
            id: SlideId::new("3"),
            image: "https://images.unsplash.com/photo-1515955656352-a1fa3ffcd111?q=80&w=2070&auto=format&fit=crop".to_string(),
            title: "Sneakers Off".to_string(),
            subtitle: "Até 40% de desconto em modelos selecionados.".to_string(),
            cta_text: "Aproveitar".to_string(),
            badge: Some("SALE".to_string()),
            link: None,
            order: 3,
            active: true,
        },
    ]
}

/// The product catalogue every process starts with.
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Camiseta Oversized Premium".to_string(),
            description: "Camiseta 100% algodão egípcio, modelagem oversized moderna e confortável. Ideal para compor looks casuais com estilo.".to_string(),
            price: brl(8990),
            original_price: None,
            category: CategoryId::new("tshirts"),
            images: strings(&[
                "https://images.unsplash.com/photo-1583743814966-8936f5b7be1a?q=80&w=1000&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?q=80&w=1000&auto=format&fit=crop",
            ]),
            rating: 4.8,
            reviews: 124,
            colors: strings(&["#000000", "#FFFFFF", "#8B5CF6"]),
            sizes: strings(&["P", "M", "G", "GG"]),
            stock: default_stock(50),
            is_new: true,
            is_sale: false,
            status: ProductStatus::Active,
        },
        Product {
            id: ProductId::new("2"),
            name: "Tênis Runner Pro".to_string(),
            description: "Tecnologia de amortecimento avançada para o máximo conforto no seu dia a dia ou treinos.".to_string(),
            price: brl(29990),
            original_price: Some(brl(39990)),
            category: CategoryId::new("shoes"),
            images: strings(&[
                "https://images.unsplash.com/photo-1542291026-7eec264c27ff?q=80&w=1000&auto=format&fit=crop",
                "https://images.unsplash.com/photo-1608231387042-66d1773070a5?q=80&w=1000&auto=format&fit=crop",
            ]),
            rating: 4.9,
            reviews: 86,
            colors: strings(&["#FFFFFF", "#10B981"]),
            sizes: strings(&["38", "39", "40", "41", "42"]),
            stock: default_stock(20),
            is_new: false,
            is_sale: true,
            status: ProductStatus::Active,
        },
        Product {
            id: ProductId::new("3"),
            name: "Calça Cargo Utility".to_string(),
            description: "Calça cargo com múltiplos bolsos funcionais e tecido resistente.".to_string(),
            price: brl(15990),
            original_price: None,
            category: CategoryId::new("pants"),
            images: strings(&[
                "https://images.unsplash.com/photo-1517445312582-06b9b0659b9a?q=80&w=1000&auto=format&fit=crop",
            ]),
            rating: 4.6,
            reviews: 42,
            colors: strings(&["#000000", "#4B5563"]),
            sizes: strings(&["38", "40", "42", "44"]),
            stock: default_stock(35),
            is_new: false,
            is_sale: false,
            status: ProductStatus::Active,
        },
        Product {
            id: ProductId::new("4"),
            name: "Vestido Floral Summer".to_string(),
            description: "Leveza e elegância em uma peça única. Estampa exclusiva.".to_string(),
            price: brl(18990),
            original_price: None,
            category: CategoryId::new("dresses"),
            images: strings(&[
                "https://images.unsplash.com/photo-1572804013309-59a88b7e92f1?q=80&w=1000&auto=format&fit=crop",
            ]),
            rating: 4.7,
            reviews: 56,
            colors: strings(&["#EC4899", "#FCD34D"]),
            sizes: strings(&["P", "M", "G"]),
            stock: default_stock(15),
            is_new: false,
            is_sale: false,
            status: ProductStatus::Active,
        },
        Product {
            id: ProductId::new("5"),
            name: "Jaqueta Bomber Tech".to_string(),
            description: "Proteção contra vento e água com estilo futurista.".to_string(),
            price: brl(34990),
            original_price: None,
            category: CategoryId::new("accessories"),
            images: strings(&[
                "https://images.unsplash.com/photo-1551028919-ac66e6a39d51?q=80&w=1000&auto=format&fit=crop",
            ]),
            rating: 5.0,
            reviews: 12,
            colors: strings(&["#1F2937"]),
            sizes: strings(&["M", "G", "GG"]),
            stock: default_stock(10),
            is_new: true,
            is_sale: false,
            status: ProductStatus::Active,
        },
        Product {
            id: ProductId::new("6"),
            name: "Boné Minimalist".to_string(),
            description: "Design limpo e ajuste perfeito.".to_string(),
            price: brl(5990),
            original_price: None,
            category: CategoryId::new("accessories"),
            images: strings(&[
                "https://images.unsplash.com/photo-1588850561407-ed78c282e89b?q=80&w=1000&auto=format&fit=crop",
            ]),
            rating: 4.5,
            reviews: 89,
            colors: strings(&["#000000", "#FFFFFF", "#3B82F6"]),
            sizes: strings(&["Único"]),
            stock: default_stock(100),
            is_new: false,
            is_sale: false,
            status: ProductStatus::Active,
        },
    ]
}
