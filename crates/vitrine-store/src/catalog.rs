//! In-memory catalogue administration.

use tracing::debug;
use vitrine_commerce::catalog::{
    visible_slides, Category, Product, ProductDraft, Slide, SlideDraft,
};
use vitrine_commerce::ids::{CategoryId, ProductId, SlideId};
use vitrine_commerce::{seed, CommerceError};

/// The catalogue, hero slides, and category list, administered in memory.
///
/// A store starts from the seed records and edits last for the process
/// lifetime only; the next start is pristine again.
pub struct CatalogStore {
    products: Vec<Product>,
    slides: Vec<Slide>,
    categories: Vec<Category>,
}

impl CatalogStore {
    /// Start from the seed records.
    pub fn seeded() -> Self {
        Self {
            products: seed::products(),
            slides: seed::slides(),
            categories: seed::categories(),
        }
    }

    /// All products in insertion order, every status.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All slides in insertion order, active or not.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// The fixed category list, `all` chip first.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by ID.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a slide by ID.
    pub fn slide(&self, id: &SlideId) -> Option<&Slide> {
        self.slides.iter().find(|s| &s.id == id)
    }

    /// Display name for a category key, when known.
    pub fn category_name(&self, id: &CategoryId) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| &c.id == id)
            .map(|c| c.name.as_str())
    }

    /// Number of storefront-visible products.
    pub fn active_product_count(&self) -> usize {
        self.products.iter().filter(|p| p.is_visible()).count()
    }

    /// Admin-side name search: case-insensitive, every status.
    pub fn search_products(&self, term: &str) -> Vec<&Product> {
        let needle = term.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Slides visible in the storefront, in display order.
    pub fn visible_slides(&self) -> Vec<&Slide> {
        visible_slides(&self.slides)
    }

    /// Validate and append a new product, returning its fresh ID.
    pub fn create_product(&mut self, draft: ProductDraft) -> Result<ProductId, CommerceError> {
        draft.validate()?;
        let id = ProductId::generate();
        self.products.push(draft.build(id.clone()));
        debug!(product = %id, "product created");
        Ok(id)
    }

    /// Validate and replace the product under `id`, keeping its position.
    pub fn update_product(
        &mut self,
        id: &ProductId,
        draft: ProductDraft,
    ) -> Result<(), CommerceError> {
        draft.validate()?;
        let index = self
            .products
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))?;
        self.products[index] = draft.build(id.clone());
        debug!(product = %id, "product updated");
        Ok(())
    }

    /// Delete a product. Returns whether anything was removed.
    pub fn delete_product(&mut self, id: &ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| &p.id != id);
        let removed = self.products.len() < before;
        if removed {
            debug!(product = %id, "product deleted");
        }
        removed
    }

    /// Validate and append a new slide, returning its fresh ID.
    pub fn create_slide(&mut self, draft: SlideDraft) -> Result<SlideId, CommerceError> {
        draft.validate()?;
        let id = SlideId::generate();
        self.slides.push(draft.build(id.clone()));
        debug!(slide = %id, "slide created");
        Ok(id)
    }

    /// Validate and replace the slide under `id`, keeping its position.
    pub fn update_slide(&mut self, id: &SlideId, draft: SlideDraft) -> Result<(), CommerceError> {
        draft.validate()?;
        let index = self
            .slides
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| CommerceError::SlideNotFound(id.to_string()))?;
        self.slides[index] = draft.build(id.clone());
        debug!(slide = %id, "slide updated");
        Ok(())
    }

    /// Delete a slide. Returns whether anything was removed.
    pub fn delete_slide(&mut self, id: &SlideId) -> bool {
        let before = self.slides.len();
        self.slides.retain(|s| &s.id != id);
        let removed = self.slides.len() < before;
        if removed {
            debug!(slide = %id, "slide deleted");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_commerce::money::{Currency, Money};

    fn valid_draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            price: Money::new(12990, Currency::BRL),
            ..ProductDraft::default()
        }
    }

    #[test]
    fn test_seeded_store_matches_seed() {
        let store = CatalogStore::seeded();
        assert_eq!(store.products().len(), 6);
        assert_eq!(store.slides().len(), 3);
        assert_eq!(store.categories().len(), 6);
        assert_eq!(store.active_product_count(), 6);
    }

    #[test]
    fn test_create_product_appends_with_fresh_id() {
        let mut store = CatalogStore::seeded();
        let id = store.create_product(valid_draft("Moletom College")).unwrap();

        assert_eq!(store.products().len(), 7);
        let created = store.product(&id).unwrap();
        assert_eq!(created.name, "Moletom College");
        assert_eq!(store.products().last().unwrap().id, id);
    }

    #[test]
    fn test_create_product_rejects_invalid_draft() {
        let mut store = CatalogStore::seeded();
        let mut draft = valid_draft("Sem Preço");
        draft.price = Money::zero(Currency::BRL);

        assert!(store.create_product(draft).is_err());
        assert_eq!(store.products().len(), 6);
    }

    #[test]
    fn test_update_product_replaces_in_place() {
        let mut store = CatalogStore::seeded();
        let id = ProductId::new("3");
        let position = store.products().iter().position(|p| p.id == id).unwrap();

        let mut draft = ProductDraft::from_product(store.product(&id).unwrap());
        draft.name = "Calça Cargo Reforçada".to_string();
        store.update_product(&id, draft).unwrap();

        assert_eq!(store.products().len(), 6);
        assert_eq!(store.products()[position].id, id);
        assert_eq!(store.products()[position].name, "Calça Cargo Reforçada");
    }

    #[test]
    fn test_update_unknown_product_errors_without_mutation() {
        let mut store = CatalogStore::seeded();
        let result = store.update_product(&ProductId::new("missing"), valid_draft("Qualquer"));
        assert!(matches!(result, Err(CommerceError::ProductNotFound(_))));
        assert_eq!(store.products().len(), 6);
    }

    #[test]
    fn test_delete_product_removes_exactly_the_target() {
        let mut store = CatalogStore::seeded();
        assert!(store.delete_product(&ProductId::new("2")));
        assert_eq!(store.products().len(), 5);
        assert!(store.product(&ProductId::new("2")).is_none());

        assert!(!store.delete_product(&ProductId::new("2")));
        assert_eq!(store.products().len(), 5);
    }

    #[test]
    fn test_search_products_covers_every_status() {
        let mut store = CatalogStore::seeded();
        let id = ProductId::new("1");
        let mut draft = ProductDraft::from_product(store.product(&id).unwrap());
        draft.status = vitrine_commerce::catalog::ProductStatus::Draft;
        store.update_product(&id, draft).unwrap();

        let hits = store.search_products("camiseta");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, id);
        assert_eq!(store.active_product_count(), 5);
    }

    #[test]
    fn test_slide_crud_mirrors_product_crud() {
        let mut store = CatalogStore::seeded();
        let draft = SlideDraft {
            title: "Coleção Inverno".to_string(),
            image: "https://img.example/winter.jpg".to_string(),
            order: 4,
            ..SlideDraft::default()
        };
        let id = store.create_slide(draft).unwrap();
        assert_eq!(store.slides().len(), 4);

        let mut edit = SlideDraft::from_slide(store.slide(&id).unwrap());
        edit.active = false;
        store.update_slide(&id, edit).unwrap();
        assert!(!store.slide(&id).unwrap().active);
        assert_eq!(store.visible_slides().len(), 3);

        assert!(store.delete_slide(&id));
        assert_eq!(store.slides().len(), 3);
        assert!(!store.delete_slide(&id));
    }

    #[test]
    fn test_invalid_slide_draft_blocks_save() {
        let mut store = CatalogStore::seeded();
        let draft = SlideDraft {
            title: String::new(),
            image: "https://img.example/x.jpg".to_string(),
            ..SlideDraft::default()
        };
        assert!(store.create_slide(draft).is_err());
        assert_eq!(store.slides().len(), 3);
    }

    #[test]
    fn test_category_name_lookup() {
        let store = CatalogStore::seeded();
        assert_eq!(store.category_name(&CategoryId::new("shoes")), Some("Tênis"));
        assert_eq!(store.category_name(&CategoryId::new("nope")), None);
    }
}
