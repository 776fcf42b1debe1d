use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};

/// Product entity
///
/// A `Product` always has a non-blank name and a finite, positive price.
/// The only ways to obtain one are [`Product::new`] and loading a stored row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Time-ordered identifier (UUID v7)
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> ProductResult<Self> {
        let name = name.into();
        validate(&name, price)?;

        Ok(Self {
            id: Uuid::now_v7(),
            name,
            price,
            created_at: Utc::now(),
        })
    }

    /// Merge `update` over the current fields.
    ///
    /// The merged result is validated before anything is assigned, so a
    /// rejected update leaves `self` untouched.
    pub fn apply_update(&mut self, update: UpdateProduct) -> ProductResult<()> {
        let name = update.name.unwrap_or_else(|| self.name.clone());
        let price = update.price.unwrap_or(self.price);
        validate(&name, price)?;

        self.name = name;
        self.price = price;
        Ok(())
    }
}

fn validate(name: &str, price: f64) -> ProductResult<()> {
    if name.trim().is_empty() {
        return Err(ProductError::Validation("name must not be empty".to_string()));
    }
    if !price.is_finite() || price <= 0.0 {
        return Err(ProductError::Validation(
            "price must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

/// Body of `POST /products`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateProduct {
    #[schema(example = "Standing desk")]
    pub name: String,
    #[schema(example = 249.99)]
    pub price: f64,
}

/// Body of `PUT /products/{id}`; absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub price: Option<f64>,
}

/// Ordering of product listings by creation time
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Anything other than `asc`/`desc` (including empty) means `Asc`.
    pub fn parse_lenient(value: &str) -> Self {
        Self::from_str(value.trim()).unwrap_or_default()
    }
}

const MAX_SQL_BOUND: u64 = i64::MAX as u64;

/// Listing request after query-string normalisation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListProducts {
    pub page: u64,
    pub limit: u64,
    pub sort: SortOrder,
}

impl ListProducts {
    pub fn new(page: u64, limit: u64, sort: SortOrder) -> Self {
        Self { page, limit, sort }
    }

    /// `(offset, limit)` when both `page` and `limit` are non-zero,
    /// `None` for an unpaginated listing.
    ///
    /// Both values are capped at `i64::MAX`, the largest OFFSET/LIMIT a SQL
    /// driver will bind.
    pub fn window(&self) -> Option<(u64, u64)> {
        if self.page == 0 || self.limit == 0 {
            return None;
        }
        let offset = (self.page - 1).saturating_mul(self.limit).min(MAX_SQL_BOUND);
        Some((offset, self.limit.min(MAX_SQL_BOUND)))
    }
}

/// Raw query string of `GET /products`
///
/// Values are kept as text so that missing, negative or non-numeric
/// `page`/`limit` fall back to 0 instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductListQuery {
    /// 1-based page number; 0 or absent disables pagination
    pub page: Option<String>,
    /// Page size; 0 or absent disables pagination
    pub limit: Option<String>,
    /// `asc` (default) or `desc`
    pub sort: Option<String>,
}

impl From<ProductListQuery> for ListProducts {
    fn from(query: ProductListQuery) -> Self {
        let number = |value: Option<String>| {
            value
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(0)
        };

        Self {
            page: number(query.page),
            limit: number(query.limit),
            sort: query
                .sort
                .as_deref()
                .map(SortOrder::parse_lenient)
                .unwrap_or_default(),
        }
    }
}

/// One page of products, echoing the requested `page` and `limit`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductPage {
    pub data: Vec<Product>,
    pub page: u64,
    pub limit: u64,
}
