use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PRODUCT_TABLE_NAME: &str = "products";
pub const USER_TABLE_NAME: &str = "users";

pub const DEFAULT_PAGE_LIMIT: i64 = 10;
pub const DEFAULT_PAGE_OFFSET: i64 = 0;

/// Stored product record
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub warranty_months: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// One-line summary used in debug logs
    pub fn debug_summary(&self) -> String {
        format!(
            "Product[ID={}, Name='{}', Price={:.2}, Quantity={}]",
            self.id, self.name, self.price, self.quantity
        )
    }
}

/// Request body for product create and full replacement.
///
/// The storefront form posts `type`, `specifications` and `warranty`, so those
/// are accepted as aliases of the stored column names.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    #[serde(default, alias = "specifications")]
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
    #[serde(default, alias = "type")]
    pub category: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, alias = "warranty")]
    pub warranty_months: Option<i32>,
}

/// Stored user record. The password hash never leaves the server.
#[derive(Serialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for user create and full replacement
#[derive(Deserialize, Debug, Clone)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Fail,
}

/// Standard `{status, message, data}` response envelope
#[derive(Serialize, Debug)]
pub struct ApiResponse<T: Serialize> {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: None,
        }
    }
}

/// Raw `limit`/`offset` query parameters, kept as strings so that
/// unparsable values fall back to defaults instead of rejecting the request
#[derive(Deserialize, Debug, Default)]
pub struct PaginationQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: DEFAULT_PAGE_OFFSET,
        }
    }
}

impl Pagination {
    pub fn new(limit: i64, offset: i64) -> Self {
        Self { limit, offset }
    }

    pub fn from_query(query: &PaginationQuery) -> Self {
        let limit = query
            .limit
            .as_deref()
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_PAGE_LIMIT);
        let offset = query
            .offset
            .as_deref()
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|v| *v >= 0)
            .unwrap_or(DEFAULT_PAGE_OFFSET);

        Self { limit, offset }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn query(limit: Option<&str>, offset: Option<&str>) -> PaginationQuery {
        PaginationQuery {
            limit: limit.map(str::to_string),
            offset: offset.map(str::to_string),
        }
    }

    #[test]
    fn test_pagination_defaults() {
        assert_eq!(Pagination::from_query(&query(None, None)), Pagination::new(10, 0));
        assert_eq!(
            Pagination::from_query(&query(Some("abc"), Some("x1"))),
            Pagination::new(10, 0)
        );
        assert_eq!(
            Pagination::from_query(&query(Some("0"), Some("-3"))),
            Pagination::new(10, 0)
        );
    }

    #[test]
    fn test_pagination_parsed() {
        assert_eq!(
            Pagination::from_query(&query(Some("25"), Some("50"))),
            Pagination::new(25, 50)
        );
        assert_eq!(
            Pagination::from_query(&query(Some(" 3 "), None)),
            Pagination::new(3, 0)
        );
    }

    #[test]
    fn test_product_input_aliases() {
        let input: ProductInput = serde_json::from_value(json!({
            "type": "laptop",
            "brand": "Acme",
            "model": "X1",
            "specifications": "16GB RAM",
            "color": "black",
            "price": 999.5,
            "quantity": 3,
            "warranty": 24,
            "name": "Acme X1"
        }))
        .unwrap();

        assert_eq!(input.category.as_deref(), Some("laptop"));
        assert_eq!(input.description.as_deref(), Some("16GB RAM"));
        assert_eq!(input.warranty_months, Some(24));
    }

    #[test]
    fn test_product_input_requires_core_fields() {
        let missing_price = serde_json::from_value::<ProductInput>(json!({
            "name": "Widget",
            "quantity": 5
        }));
        assert!(missing_price.is_err());
    }

    #[test]
    fn test_debug_summary() {
        let now = Utc::now();
        let product = Product {
            id: 3,
            name: "Widget".to_string(),
            description: String::new(),
            price: 9.5,
            quantity: 5,
            category: None,
            brand: None,
            model: None,
            color: None,
            warranty_months: None,
            created_at: now,
            updated_at: now,
        };
        assert_eq!(
            product.debug_summary(),
            "Product[ID=3, Name='Widget', Price=9.50, Quantity=5]"
        );
    }

    #[test]
    fn test_user_hides_password_hash() {
        let now = Utc::now();
        let user = User {
            id: 1,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            created_at: now,
            updated_at: now,
        };
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password_hash").is_none());
        assert_eq!(value["email"], "alice@example.com");
    }

    #[test]
    fn test_envelope_shape() {
        let body = serde_json::to_value(ApiResponse::message("done")).unwrap();
        assert_eq!(body, json!({"status": "success", "message": "done"}));

        let body = serde_json::to_value(ApiResponse::success("ok", vec![1, 2])).unwrap();
        assert_eq!(body["data"], json!([1, 2]));
    }
}
