use std::cmp;

use crate::models::Product;

/// Client-facing sort keys. Anything unrecognized resolves to `Newest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    RatingDesc,
    #[default]
    Newest,
}

impl SortKey {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("price_asc") => SortKey::PriceAsc,
            Some("price_desc") => SortKey::PriceDesc,
            Some("rating_desc") => SortKey::RatingDesc,
            _ => SortKey::Newest,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::RatingDesc => "rating_desc",
            SortKey::Newest => "newest",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Price,
    EcoRating,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// A total order over products: the primary field in `direction`, then `id` ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ordering {
    pub field: SortField,
    pub direction: Direction,
}

impl From<SortKey> for Ordering {
    fn from(key: SortKey) -> Self {
        let (field, direction) = match key {
            SortKey::PriceAsc => (SortField::Price, Direction::Ascending),
            SortKey::PriceDesc => (SortField::Price, Direction::Descending),
            SortKey::RatingDesc => (SortField::EcoRating, Direction::Descending),
            SortKey::Newest => (SortField::CreatedAt, Direction::Descending),
        };
        Ordering { field, direction }
    }
}

impl Ordering {
    pub fn compare(&self, a: &Product, b: &Product) -> cmp::Ordering {
        let primary = match self.field {
            SortField::Price => a.price.total_cmp(&b.price),
            SortField::EcoRating => a.eco_rating.total_cmp(&b.eco_rating),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        let primary = match self.direction {
            Direction::Ascending => primary,
            Direction::Descending => primary.reverse(),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }

    pub fn sort(&self, products: &mut [Product]) {
        products.sort_by(|a, b| self.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::models::Category;

    fn product(id: i32, price: f64, eco_rating: f64, created_secs: i64) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            description: "test".to_string(),
            price,
            category: Category::Other,
            images: vec!["img.jpg".to_string()],
            eco_rating,
            materials: vec![],
            features: vec![],
            certifications: vec![],
            stock: 0,
            is_featured: false,
            created_at: Utc.timestamp_opt(created_secs, 0).unwrap(),
        }
    }

    fn ids(products: &[Product]) -> Vec<i32> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn keys_parse_exactly() {
        assert_eq!(SortKey::parse(Some("price_asc")), SortKey::PriceAsc);
        assert_eq!(SortKey::parse(Some("PRICE_ASC")), SortKey::Newest);
        assert_eq!(SortKey::parse(None), SortKey::Newest);
    }

    #[test]
    fn each_key_resolves_to_its_field_and_direction() {
        assert_eq!(
            Ordering::from(SortKey::RatingDesc),
            Ordering {
                field: SortField::EcoRating,
                direction: Direction::Descending
            }
        );
        assert_eq!(
            Ordering::from(SortKey::Newest),
            Ordering {
                field: SortField::CreatedAt,
                direction: Direction::Descending
            }
        );
    }

    #[test]
    fn ties_break_on_ascending_id_in_both_directions() {
        let mut products = vec![
            product(3, 10.0, 4.5, 100),
            product(1, 10.0, 4.5, 100),
            product(2, 5.0, 5.0, 200),
        ];

        Ordering::from(SortKey::PriceAsc).sort(&mut products);
        assert_eq!(ids(&products), vec![2, 1, 3]);

        Ordering::from(SortKey::PriceDesc).sort(&mut products);
        assert_eq!(ids(&products), vec![1, 3, 2]);

        Ordering::from(SortKey::Newest).sort(&mut products);
        assert_eq!(ids(&products), vec![2, 1, 3]);

        Ordering::from(SortKey::RatingDesc).sort(&mut products);
        assert_eq!(ids(&products), vec![2, 1, 3]);
    }
}
