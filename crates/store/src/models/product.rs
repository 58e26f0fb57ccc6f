//! Catalog product model.

use serde::{Deserialize, Serialize};

use aurum_core::{Category, Price, ProductId};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: Category,
    pub image_url: String,
    /// Units on hand. Admin edits may set any value, including negative.
    pub stock: i64,
    /// Highlighted on the home page and sorted first in the default
    /// catalog order.
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Whether at least one unit is available.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Fields for a product being added to the catalog; the store assigns the
/// id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: Category,
    pub image_url: String,
    pub stock: i64,
    #[serde(default)]
    pub featured: bool,
}

/// A partial product update. Set fields replace the product's values;
/// unset fields are left alone. Values are not validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub category: Option<Category>,
    pub image_url: Option<String>,
    pub stock: Option<i64>,
    pub featured: Option<bool>,
}

impl ProductPatch {
    /// Merge the set fields into `product`.
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(image_url) = self.image_url {
            product.image_url = image_url;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(featured) = self.featured {
            product.featured = featured;
        }
    }

    /// A patch that only changes the stock level.
    #[must_use]
    pub fn stock(stock: i64) -> Self {
        Self {
            stock: Some(stock),
            ..Self::default()
        }
    }
}

/// Sort orders offered by the shop page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogSort {
    /// Featured products first, otherwise catalog order.
    #[default]
    Featured,
    /// Cheapest first.
    PriceAscending,
    /// Most expensive first.
    PriceDescending,
    /// Alphabetical by product name.
    Name,
}

impl std::fmt::Display for CatalogSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Featured => write!(f, "featured"),
            Self::PriceAscending => write!(f, "price-low"),
            Self::PriceDescending => write!(f, "price-high"),
            Self::Name => write!(f, "name"),
        }
    }
}

impl std::str::FromStr for CatalogSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(Self::Featured),
            "price-low" => Ok(Self::PriceAscending),
            "price-high" => Ok(Self::PriceDescending),
            "name" => Ok(Self::Name),
            _ => Err(format!("invalid catalog sort: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product() -> Product {
        Product {
            id: ProductId::new("1"),
            name: "Classic Cuban Link Chain".to_string(),
            description: "Vintage 14K gold".to_string(),
            price: Price::usd(Decimal::from(1299)),
            category: Category::Chain,
            image_url: "/images/products/cuban-link-chain.jpg".to_string(),
            stock: 1,
            featured: true,
        }
    }

    #[test]
    fn test_patch_merges_set_fields_only() {
        let mut p = product();
        ProductPatch {
            name: Some("Cuban Link Chain".to_string()),
            stock: Some(5),
            ..ProductPatch::default()
        }
        .apply(&mut p);

        assert_eq!(p.name, "Cuban Link Chain");
        assert_eq!(p.stock, 5);
        // Untouched fields keep their values
        assert_eq!(p.price, Price::usd(Decimal::from(1299)));
        assert!(p.featured);
    }

    #[test]
    fn test_patch_accepts_unvalidated_values() {
        let mut p = product();
        ProductPatch::stock(-3).apply(&mut p);
        assert_eq!(p.stock, -3);
        assert!(!p.in_stock());
    }

    #[test]
    fn test_featured_defaults_false_on_disk() {
        let json = r#"{
            "id": "9",
            "name": "Plain Band",
            "description": "",
            "price": {"amount": "199", "currency_code": "USD"},
            "category": "ring",
            "image_url": "",
            "stock": 2
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert!(!p.featured);
    }

    #[test]
    fn test_catalog_sort_parse() {
        assert_eq!(
            "price-low".parse::<CatalogSort>().unwrap(),
            CatalogSort::PriceAscending
        );
        assert!("newest".parse::<CatalogSort>().is_err());
    }
}
