//! Catalog read engine
//!
//! Serves the reference data other engines name by id: franchise stores,
//! products, raw materials, and recipes. The hub only reads the catalog;
//! writes happen in the back-office tooling that owns this data.

use std::sync::Arc;

use shared::AppError;
use shared::AppResult;
use shared::models::{Material, Product, Recipe, Store};

use crate::store::Collection;

/// Catalog read engine
#[derive(Debug)]
pub struct CatalogService {
    stores: Arc<Collection<Store>>,
    products: Arc<Collection<Product>>,
    materials: Arc<Collection<Material>>,
    recipes: Arc<Collection<Recipe>>,
}

impl CatalogService {
    pub fn new(
        stores: Arc<Collection<Store>>,
        products: Arc<Collection<Product>>,
        materials: Arc<Collection<Material>>,
        recipes: Arc<Collection<Recipe>>,
    ) -> Self {
        Self {
            stores,
            products,
            materials,
            recipes,
        }
    }

    pub async fn stores(&self) -> Vec<Store> {
        self.stores.all()
    }

    pub async fn store(&self, id: &str) -> AppResult<Store> {
        self.stores.find(id)
    }

    pub async fn products(&self) -> Vec<Product> {
        self.products.all()
    }

    pub async fn product(&self, id: &str) -> AppResult<Product> {
        self.products.find(id)
    }

    pub async fn materials(&self) -> Vec<Material> {
        self.materials.all()
    }

    pub async fn material(&self, id: &str) -> AppResult<Material> {
        self.materials.find(id)
    }

    pub async fn recipes(&self) -> Vec<Recipe> {
        self.recipes.all()
    }

    /// Look up the recipe producing the given product.
    ///
    /// Recipes are keyed by their own id, so this scans by `product_id`.
    pub async fn recipe_for_product(&self, product_id: &str) -> AppResult<Recipe> {
        self.recipes
            .filter(|r| r.product_id == product_id)
            .into_iter()
            .next()
            .ok_or_else(|| AppError::recipe_not_found(product_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;
    use shared::models::{ProductStatus, RecipeItem, StoreInventoryStatus, StoreStatus};

    fn store(id: &str, name: &str) -> Store {
        Store {
            id: id.into(),
            name: name.into(),
            location: "123 Main St".into(),
            manager: "John Smith".into(),
            status: StoreStatus::Active,
            revenue: 150_000.0,
            inventory_status: StoreInventoryStatus::Good,
        }
    }

    fn product(id: &str, sku: &str) -> Product {
        Product {
            id: id.into(),
            sku: sku.into(),
            name: "Bê bò bistech đặc biệt".into(),
            category: "Main Course".into(),
            price: 150_000.0,
            cost: 70_000.0,
            unit: "portion".into(),
            stock: 50.0,
            image: String::new(),
            status: ProductStatus::Active,
        }
    }

    fn recipe(id: &str, product_id: &str) -> Recipe {
        Recipe {
            id: id.into(),
            product_id: product_id.into(),
            product_name: "Bê bò bistech đặc biệt".into(),
            items: vec![RecipeItem {
                material_id: "1".into(),
                material_name: "Thịt bò tươi".into(),
                quantity: 0.25,
                unit: "kg".into(),
                cost_per_unit: 250_000.0,
            }],
            instructions: "Áp chảo thịt bò đến độ chín mong muốn.".into(),
            batch_yield: 1.0,
            total_cost: 73_000.0,
            status: ProductStatus::Active,
            last_updated: "2023-10-25".into(),
        }
    }

    fn service() -> CatalogService {
        let stores = Arc::new(Collection::new("store", |id| AppError::store_not_found(id)));
        let products = Arc::new(Collection::new("product", |id| {
            AppError::product_not_found(id)
        }));
        let materials = Arc::new(Collection::new("material", |id| {
            AppError::material_not_found(id)
        }));
        let recipes = Arc::new(Collection::new("recipe", |id| {
            AppError::recipe_not_found(id)
        }));
        stores.push(store("1", "Downtown Store"));
        stores.push(store("2", "Uptown Branch"));
        products.push(product("1", "BS-001"));
        recipes.push(recipe("REC-001", "1"));
        CatalogService::new(stores, products, materials, recipes)
    }

    #[tokio::test]
    async fn test_list_and_get() {
        let svc = service();
        assert_eq!(svc.stores().await.len(), 2);
        assert_eq!(svc.store("2").await.unwrap().name, "Uptown Branch");
        assert_eq!(svc.products().await.len(), 1);
        assert_eq!(svc.product("1").await.unwrap().sku, "BS-001");
        assert!(svc.materials().await.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_ids_report_their_domain() {
        let svc = service();
        assert_eq!(
            svc.store("99").await.unwrap_err().code,
            ErrorCode::StoreNotFound
        );
        assert_eq!(
            svc.product("99").await.unwrap_err().code,
            ErrorCode::ProductNotFound
        );
        assert_eq!(
            svc.material("99").await.unwrap_err().code,
            ErrorCode::MaterialNotFound
        );
    }

    #[tokio::test]
    async fn test_recipe_for_product() {
        let svc = service();
        let recipe = svc.recipe_for_product("1").await.unwrap();
        assert_eq!(recipe.id, "REC-001");
        assert_eq!(recipe.items.len(), 1);

        let err = svc.recipe_for_product("99").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RecipeNotFound);
    }
}
