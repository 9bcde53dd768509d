use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize, de::IgnoredAny};
use std::fmt;
use utoipa::ToSchema;

/// Identifier of a product.
///
/// Only the repository's `create` moves a product from `Unassigned` to
/// `Assigned`. The assigned value is the 24-character hex form of a BSON
/// `ObjectId`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ProductId {
    #[default]
    Unassigned,
    Assigned(String),
}

impl ProductId {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ProductId::Unassigned => None,
            ProductId::Assigned(id) => Some(id),
        }
    }

    pub fn is_assigned(&self) -> bool {
        matches!(self, ProductId::Assigned(_))
    }
}

impl From<ObjectId> for ProductId {
    fn from(id: ObjectId) -> Self {
        ProductId::Assigned(id.to_hex())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Unassigned => f.write_str("<unassigned>"),
            ProductId::Assigned(id) => f.write_str(id),
        }
    }
}

/// Product entity as seen by callers of the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Stored exactly as given. No currency, sign or range checks.
    pub price: f64,
}

impl Product {
    /// A product that has not been stored yet.
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            id: ProductId::Unassigned,
            name: name.into(),
            description: description.into(),
            price,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = ProductId::Assigned(id.into());
        self
    }
}

/// The replaceable part of a stored product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl From<&Product> for ProductFields {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
        }
    }
}

/// Product as stored in the `products` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl ProductDocument {
    pub fn from_parts(id: ObjectId, fields: ProductFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
        }
    }
}

impl From<ProductDocument> for Product {
    fn from(doc: ProductDocument) -> Self {
        Self {
            id: doc.id.into(),
            name: doc.name,
            description: doc.description,
            price: doc.price,
        }
    }
}

/// Request body for creating or replacing a product.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProductInput {
    /// Accepted in any JSON shape and ignored. Create assigns a fresh id
    /// and update takes it from the path.
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "65f1c0ffee0ddba11ca7f00d")]
    pub id: Option<IgnoredAny>,
    #[schema(example = "Widget")]
    pub name: String,
    #[schema(example = "A widget")]
    pub description: String,
    #[schema(example = 9.99)]
    pub price: f64,
}

impl From<ProductInput> for Product {
    fn from(input: ProductInput) -> Self {
        Product::new(input.name, input.description, input.price)
    }
}

/// Response body for a stored product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    #[schema(example = "65f1c0ffee0ddba11ca7f00d")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Only stored products are rendered, so the id is always assigned.
impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        debug_assert!(
            product.id.is_assigned(),
            "rendering a product that was never stored"
        );

        let id = match product.id {
            ProductId::Assigned(id) => id,
            ProductId::Unassigned => String::new(),
        };

        Self {
            id,
            name: product.name,
            description: product.description,
            price: product.price,
        }
    }
}
