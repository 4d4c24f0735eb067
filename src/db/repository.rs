use diesel::dsl::sql;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::Bool;

use crate::catalog::{CatalogQuery, Direction, Ordering, Predicate, SortField};
use crate::db::connection::{PgPool, PgPooledConnection};
use crate::db::models::{NewProductRow, ProductChangeset, ProductRow};
use crate::db::schema::products;
use crate::error::StoreError;
use crate::models::{NewProduct, Product, ProductUpdate};
use crate::store::ProductStore;

type BoxedCondition = Box<dyn BoxableExpression<products::table, Pg, SqlType = Bool>>;

/// PostgreSQL-backed [`ProductStore`].
#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        PgProductStore { pool }
    }

    fn conn(&self) -> Result<PgPooledConnection, StoreError> {
        Ok(self.pool.get()?)
    }

    /// Removes every product; used by the seeder.
    pub fn clear(&self) -> Result<usize, StoreError> {
        let conn = &mut self.conn()?;
        Ok(diesel::delete(products::table).execute(conn)?)
    }
}

impl ProductStore for PgProductStore {
    fn find_matching(&self, query: &CatalogQuery) -> Result<Vec<Product>, StoreError> {
        let conn = &mut self.conn()?;
        catalog_query(query)
            .load::<ProductRow>(conn)?
            .into_iter()
            .map(Product::try_from)
            .collect()
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Product>, StoreError> {
        let conn = &mut self.conn()?;
        products::table
            .find(id)
            .first::<ProductRow>(conn)
            .optional()?
            .map(Product::try_from)
            .transpose()
    }

    fn insert(&self, new_product: NewProduct) -> Result<Product, StoreError> {
        let conn = &mut self.conn()?;
        let row = diesel::insert_into(products::table)
            .values(NewProductRow::from(new_product))
            .get_result::<ProductRow>(conn)?;
        Product::try_from(row)
    }

    fn update(&self, id: i32, changes: ProductUpdate) -> Result<Option<Product>, StoreError> {
        // diesel refuses an UPDATE with nothing to SET
        if changes.is_empty() {
            return self.find_by_id(id);
        }
        let conn = &mut self.conn()?;
        diesel::update(products::table.find(id))
            .set(ProductChangeset::from(changes))
            .get_result::<ProductRow>(conn)
            .optional()?
            .map(Product::try_from)
            .transpose()
    }

    fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let conn = &mut self.conn()?;
        let deleted = diesel::delete(products::table.find(id)).execute(conn)?;
        Ok(deleted > 0)
    }
}

fn catalog_query(query: &CatalogQuery) -> products::BoxedQuery<'static, Pg> {
    let filtered = products::table
        .into_boxed::<Pg>()
        .filter(condition(&query.predicate));
    ordered(filtered, query.ordering)
}

fn ordered(
    query: products::BoxedQuery<'static, Pg>,
    ordering: Ordering,
) -> products::BoxedQuery<'static, Pg> {
    match (ordering.field, ordering.direction) {
        (SortField::Price, Direction::Ascending) => {
            query.order((products::price.asc(), products::id.asc()))
        }
        (SortField::Price, Direction::Descending) => {
            query.order((products::price.desc(), products::id.asc()))
        }
        (SortField::EcoRating, Direction::Ascending) => {
            query.order((products::eco_rating.asc(), products::id.asc()))
        }
        (SortField::EcoRating, Direction::Descending) => {
            query.order((products::eco_rating.desc(), products::id.asc()))
        }
        (SortField::CreatedAt, Direction::Ascending) => {
            query.order((products::created_at.asc(), products::id.asc()))
        }
        (SortField::CreatedAt, Direction::Descending) => {
            query.order((products::created_at.desc(), products::id.asc()))
        }
    }
}

fn always(value: bool) -> BoxedCondition {
    Box::new(sql::<Bool>(if value { "TRUE" } else { "FALSE" }))
}

/// Translates a [`Predicate`] into a SQL condition on `products`.
fn condition(predicate: &Predicate) -> BoxedCondition {
    match predicate {
        Predicate::Always => always(true),
        Predicate::All(clauses) => clauses
            .iter()
            .map(condition)
            .reduce(|acc, next| Box::new(acc.and(next)))
            .unwrap_or_else(|| always(true)),
        Predicate::Any(clauses) => clauses
            .iter()
            .map(condition)
            .reduce(|acc, next| Box::new(acc.or(next)))
            .unwrap_or_else(|| always(false)),
        Predicate::CategoryIn(labels) => {
            Box::new(products::category.eq_any(labels.iter().cloned().collect::<Vec<_>>()))
        }
        Predicate::PriceAtLeast(min) => Box::new(products::price.ge(*min)),
        Predicate::PriceAtMost(max) => Box::new(products::price.le(*max)),
        Predicate::RatingAtLeast(min) => Box::new(products::eco_rating.ge(*min)),
        Predicate::NameContains(needle) => Box::new(products::name.ilike(contains_pattern(needle))),
        Predicate::DescriptionContains(needle) => {
            Box::new(products::description.ilike(contains_pattern(needle)))
        }
    }
}

/// `%needle%` with LIKE metacharacters escaped, so the needle matches literally.
fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
