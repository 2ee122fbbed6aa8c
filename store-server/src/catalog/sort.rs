//! Product sorting
//!
//! Every grid (home, category, subcategory, promo, search) offers the same
//! closed set of sort keys. Sorting is a pure function of (list, key); ties
//! keep their original relative order so repeated sorts are reproducible.

use crate::db::models::Product;

/// Sort keys offered by the storefront grids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Du - cher au + cher (effective price)
    PriceAsc,
    /// Du + cher au - cher
    PriceDesc,
    /// De A à Z
    NameAsc,
    /// De Z à A
    NameDesc,
    /// Du + récent au + ancien
    Recent,
    /// Du + ancien au + récent
    Oldest,
    /// Meilleures ventes
    BestSelling,
}

impl SortKey {
    /// Parse a query-string value. Unrecognized keys yield `None`, which
    /// [`sorted`] treats as "leave the input order unchanged".
    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "price_asc" => Some(Self::PriceAsc),
            "price_desc" => Some(Self::PriceDesc),
            "name_asc" => Some(Self::NameAsc),
            "name_desc" => Some(Self::NameDesc),
            "recent" => Some(Self::Recent),
            "oldest" => Some(Self::Oldest),
            "best_selling" => Some(Self::BestSelling),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::NameAsc => "name_asc",
            Self::NameDesc => "name_desc",
            Self::Recent => "recent",
            Self::Oldest => "oldest",
            Self::BestSelling => "best_selling",
        }
    }
}

/// Return a new, totally-ordered list. The input order is the fallback for
/// `None` (identity) and for equal keys (stable sort).
pub fn sorted(mut products: Vec<Product>, key: Option<SortKey>) -> Vec<Product> {
    let Some(key) = key else {
        return products;
    };

    match key {
        SortKey::PriceAsc => {
            products.sort_by(|a, b| a.effective_price().total_cmp(&b.effective_price()));
        }
        SortKey::PriceDesc => {
            products.sort_by(|a, b| b.effective_price().total_cmp(&a.effective_price()));
        }
        // Unicode lowercase comparison stands in for the browser's
        // locale-aware compare; good enough for the catalog's French titles
        SortKey::NameAsc => {
            products.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
        SortKey::NameDesc => {
            products.sort_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()));
        }
        SortKey::Recent => {
            products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        SortKey::Oldest => {
            products.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        }
        SortKey::BestSelling => {
            products.sort_by(|a, b| b.sales.cmp(&a.sales));
        }
    }

    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use surrealdb::RecordId;

    fn product(key: &str, title: &str, price: f64) -> Product {
        let mut p = Product::new(title, price);
        p.id = Some(RecordId::from_table_key("product", key));
        p
    }

    fn titles(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn unknown_key_is_identity() {
        assert_eq!(SortKey::from_param("by_magic"), None);
        let list = vec![product("1", "B", 2.0), product("2", "A", 1.0)];
        let out = sorted(list, None);
        assert_eq!(titles(&out), vec!["B", "A"]);
    }

    #[test]
    fn every_param_round_trips() {
        for key in [
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::NameAsc,
            SortKey::NameDesc,
            SortKey::Recent,
            SortKey::Oldest,
            SortKey::BestSelling,
        ] {
            assert_eq!(SortKey::from_param(key.as_str()), Some(key));
        }
    }

    #[test]
    fn price_asc_uses_effective_price() {
        // promo 0 is "no promotion"; promo 30 overrides the base 40
        let mut a = product("1", "Plain", 50.0);
        a.promo = Some(0.0);
        let mut b = product("2", "Deal", 40.0);
        b.promo = Some(30.0);

        let out = sorted(vec![a, b], Some(SortKey::PriceAsc));
        assert_eq!(titles(&out), vec!["Deal", "Plain"]);

        let out = sorted(out, Some(SortKey::PriceDesc));
        assert_eq!(titles(&out), vec!["Plain", "Deal"]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let list = vec![
            product("1", "tapis", 1.0),
            product("2", "Assiette", 1.0),
            product("3", "miroir", 1.0),
        ];
        let out = sorted(list, Some(SortKey::NameAsc));
        assert_eq!(titles(&out), vec!["Assiette", "miroir", "tapis"]);
    }

    #[test]
    fn recent_and_oldest_compare_timestamps() {
        let now = Utc::now();
        let mut old = product("1", "Old", 1.0);
        old.created_at = now - Duration::days(30);
        let mut new = product("2", "New", 1.0);
        new.created_at = now;

        let out = sorted(vec![old.clone(), new.clone()], Some(SortKey::Recent));
        assert_eq!(titles(&out), vec!["New", "Old"]);

        let out = sorted(vec![new, old], Some(SortKey::Oldest));
        assert_eq!(titles(&out), vec!["Old", "New"]);
    }

    #[test]
    fn best_selling_sorts_sales_descending() {
        let mut a = product("1", "A", 1.0);
        a.sales = 5;
        let mut b = product("2", "B", 1.0);
        b.sales = 20;
        let c = product("3", "C", 1.0); // sales defaults to 0

        let out = sorted(vec![a, b, c], Some(SortKey::BestSelling));
        assert_eq!(titles(&out), vec!["B", "A", "C"]);
    }

    #[test]
    fn sorting_is_idempotent_and_stable() {
        // Equal keys keep their input order, so a second pass changes nothing
        let list = vec![
            product("1", "First", 10.0),
            product("2", "Second", 10.0),
            product("3", "Third", 5.0),
        ];
        let once = sorted(list, Some(SortKey::PriceAsc));
        assert_eq!(titles(&once), vec!["Third", "First", "Second"]);

        let twice = sorted(once.clone(), Some(SortKey::PriceAsc));
        assert_eq!(titles(&twice), titles(&once));
    }

    #[test]
    fn empty_list_stays_empty() {
        assert!(sorted(Vec::new(), Some(SortKey::Recent)).is_empty());
    }
}
