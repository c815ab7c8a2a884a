//! Product-data collaborator: static catalog with category filtering.

use horta_core::{DomainError, DomainResult, Money};

use crate::category::{Category, CategoryFilter, ALL};
use crate::product::{Product, ProductId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            categories,
            products,
        }
    }

    /// The distributor's standard assortment.
    pub fn seed() -> Self {
        let categories = vec![
            Category::new(ALL, "Todos os Produtos"),
            Category::new("verduras", "Verduras"),
            Category::new("legumes", "Legumes"),
            Category::new("frutas", "Frutas"),
            Category::new("temperos", "Temperos"),
            Category::new("graos", "Grãos e Cereais"),
        ];

        #[rustfmt::skip]
        let rows: [(&str, &str, &str, u64, &str, &str, &str, u32, u32); 12] = [
            ("1", "Alface Americana", "verduras", 450, "unidade", "/fresh-lettuce.png", "Alface americana fresca e crocante", 150, 5),
            ("2", "Tomate Italiano", "legumes", 690, "kg", "/italian-tomatoes.jpg", "Tomate italiano premium para molhos", 200, 2),
            ("3", "Cebola Roxa", "legumes", 520, "kg", "/red-onion.jpg", "Cebola roxa de primeira qualidade", 180, 3),
            ("4", "Rúcula Orgânica", "verduras", 850, "maço", "/organic-arugula.jpg", "Rúcula orgânica certificada", 80, 3),
            ("5", "Batata Inglesa", "legumes", 420, "kg", "/pile-of-potatoes.png", "Batata inglesa para diversos preparos", 300, 5),
            ("6", "Cenoura", "legumes", 380, "kg", "/fresh-carrots.png", "Cenoura fresca e doce", 250, 3),
            ("7", "Manjericão Fresco", "temperos", 600, "maço", "/fresh-basil.png", "Manjericão fresco aromático", 60, 2),
            ("8", "Limão Tahiti", "frutas", 750, "kg", "/tahiti-lemon.jpg", "Limão tahiti suculento", 120, 2),
            ("9", "Arroz Integral", "graos", 1290, "kg", "/bowl-of-brown-rice.png", "Arroz integral de alta qualidade", 500, 10),
            ("10", "Feijão Preto", "graos", 850, "kg", "/black-beans-close-up.png", "Feijão preto tipo 1", 400, 10),
            ("11", "Espinafre", "verduras", 550, "maço", "/fresh-spinach.png", "Espinafre fresco rico em ferro", 90, 3),
            ("12", "Pimentão Vermelho", "legumes", 980, "kg", "/red-bell-pepper.jpg", "Pimentão vermelho doce", 100, 2),
        ];

        let products = rows
            .into_iter()
            .map(
                |(id, name, category, centavos, unit, image, description, stock, min_order)| Product {
                    id: ProductId::new(id),
                    name: name.to_string(),
                    category: category.to_string(),
                    price: Money::from_centavos(centavos),
                    promo_price: None,
                    is_promo: false,
                    unit: unit.to_string(),
                    min_order,
                    stock,
                    image: image.to_string(),
                    description: description.to_string(),
                },
            )
            .collect();

        Self::new(categories, products)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Products in `category` (exact id match), or all of them for `"all"`.
    pub fn get_products(&self, category: &str) -> Vec<&Product> {
        let filter = CategoryFilter::parse(category);
        self.products
            .iter()
            .filter(|p| filter.matches(&p.category))
            .collect()
    }

    pub fn get_product(&self, id: &ProductId) -> DomainResult<&Product> {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(DomainError::not_found)
    }

    /// Display name for a category id; unknown ids are shown as-is.
    pub fn category_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map_or(id, |c| c.name.as_str())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_every_product() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.get_products("all").len(), 12);
        assert_eq!(catalog.categories().len(), 6);
    }

    #[test]
    fn category_filter_is_exact() {
        let catalog = Catalog::seed();
        let greens = catalog.get_products("verduras");
        assert_eq!(greens.len(), 3);
        assert!(greens.iter().all(|p| p.category == "verduras"));
        assert!(catalog.get_products("cogumelos").is_empty());
    }

    #[test]
    fn get_product_by_id() {
        let catalog = Catalog::seed();
        let rice = catalog.get_product(&ProductId::new("9")).unwrap();
        assert_eq!(rice.name, "Arroz Integral");
        assert_eq!(rice.price, Money::from_centavos(1290));
        assert_eq!(rice.min_order, 10);

        assert_eq!(
            catalog.get_product(&ProductId::new("99")),
            Err(DomainError::NotFound)
        );
    }

    #[test]
    fn unknown_category_name_passes_through() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.category_name("graos"), "Grãos e Cereais");
        assert_eq!(catalog.category_name("cogumelos"), "cogumelos");
    }
}
