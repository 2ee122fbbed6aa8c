//! Parameterized product listing
//!
//! One descriptor serves every grid: the home store, a category, a
//! subcategory, the promo grid and search results are all the same
//! filter → sort → paginate pass over the full catalog.

use serde::Serialize;

use super::page::{self, PAGE_SIZE};
use super::sort::{self, SortKey};
use crate::db::models::Product;

/// What a grid page asked for
#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    /// Category display name (decoded), matched case-insensitively
    pub category: Option<String>,
    /// Subcategory display name (decoded), matched case-insensitively
    pub subcategory: Option<String>,
    /// Keep only items with an active promo price
    pub promo_only: bool,
    /// Case-insensitive title substring
    pub search: Option<String>,
    pub sort: Option<SortKey>,
    /// Zero-based page cursor
    pub page: usize,
}

/// One grid page plus enough context to render the pager
#[derive(Debug, Clone, Serialize)]
pub struct ListingPage {
    pub items: Vec<Product>,
    pub page: usize,
    pub page_count: usize,
    /// Matching products across all pages
    pub total: usize,
}

impl ListingQuery {
    pub fn apply(&self, products: Vec<Product>) -> ListingPage {
        let filtered: Vec<Product> = products
            .into_iter()
            .filter(|p| self.keeps(p))
            .collect();
        let total = filtered.len();

        let ordered = sort::sorted(filtered, self.sort);
        let pages = page::chunk(ordered, PAGE_SIZE);
        let page_count = pages.len();
        let current = page::clamp_page(self.page, page_count);
        let items = pages.into_iter().nth(current).unwrap_or_default();

        ListingPage {
            items,
            page: current,
            page_count,
            total,
        }
    }

    fn keeps(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            let matched = product
                .category
                .as_deref()
                .is_some_and(|c| c.to_lowercase() == category.to_lowercase());
            if !matched {
                return false;
            }
        }
        if let Some(subcategory) = &self.subcategory {
            let matched = product
                .subcategory
                .as_deref()
                .is_some_and(|s| s.to_lowercase() == subcategory.to_lowercase());
            if !matched {
                return false;
            }
        }
        if self.promo_only && !product.on_promo() {
            return false;
        }
        if let Some(q) = &self.search
            && !product.title.to_lowercase().contains(&q.to_lowercase())
        {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surrealdb::RecordId;

    fn product(key: &str, title: &str, category: &str, subcategory: &str) -> Product {
        let mut p = Product::new(title, 10.0);
        p.id = Some(RecordId::from_table_key("product", key));
        p.category = Some(category.to_string());
        p.subcategory = Some(subcategory.to_string());
        p
    }

    fn catalog() -> Vec<Product> {
        let mut tapis = product("1", "Tapis berbère", "Décoration", "Tapis");
        tapis.promo = Some(79.0);
        vec![
            tapis,
            product("2", "Miroir doré", "Décoration", "Miroirs"),
            product("3", "Service à café", "Cuisine", "Vaisselle"),
            product("4", "Tapis d'entrée", "Décoration", "Tapis"),
        ]
    }

    #[test]
    fn category_filter_is_case_insensitive() {
        let q = ListingQuery {
            category: Some("décoration".to_string()),
            ..Default::default()
        };
        let page = q.apply(catalog());
        assert_eq!(page.total, 3);
        assert!(page.items.iter().all(|p| p.category.as_deref() == Some("Décoration")));
    }

    #[test]
    fn subcategory_narrows_within_category() {
        let q = ListingQuery {
            category: Some("Décoration".to_string()),
            subcategory: Some("Tapis".to_string()),
            ..Default::default()
        };
        let page = q.apply(catalog());
        assert_eq!(page.total, 2);
    }

    #[test]
    fn promo_only_requires_a_nonzero_promo() {
        let mut items = catalog();
        items[1].promo = Some(0.0); // promo 0 is not a promotion
        let q = ListingQuery {
            promo_only: true,
            ..Default::default()
        };
        let page = q.apply(items);
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].title, "Tapis berbère");
    }

    #[test]
    fn search_matches_title_substrings() {
        let q = ListingQuery {
            search: Some("tapis".to_string()),
            ..Default::default()
        };
        let page = q.apply(catalog());
        assert_eq!(page.total, 2);
    }

    #[test]
    fn filters_and_pages_compose() {
        let mut items = Vec::new();
        for i in 0..20 {
            items.push(product(&i.to_string(), &format!("Assiette {i}"), "Cuisine", "Vaisselle"));
        }
        items.push(product("x", "Miroir", "Décoration", "Miroirs"));

        let q = ListingQuery {
            category: Some("Cuisine".to_string()),
            page: 2,
            ..Default::default()
        };
        let page = q.apply(items);
        assert_eq!(page.total, 20);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.page, 2);
        assert_eq!(page.items.len(), 4);
    }

    #[test]
    fn out_of_range_page_falls_back_to_first() {
        let q = ListingQuery {
            page: 9,
            ..Default::default()
        };
        let page = q.apply(catalog());
        assert_eq!(page.page, 0);
        assert_eq!(page.items.len(), 4);
    }

    #[test]
    fn empty_catalog_yields_an_empty_page() {
        let page = ListingQuery::default().apply(Vec::new());
        assert_eq!(page.page_count, 0);
        assert_eq!(page.total, 0);
        assert!(page.items.is_empty());
    }
}
