//! The `cupcakes` table
//!
//! One row per cupcake. `id` is assigned by the store on insert and never
//! reassigned; `flavor`, `size`, and `rating` are always present;
//! `image_url` is nullable and never the empty string.

use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Image substituted when a caller explicitly clears `image_url` on update.
pub const DEFAULT_IMAGE_URL: &str = "https://tinyurl.com/demo-cupcake";

/// A stored cupcake. Serializes directly to the API response shape, with an
/// unset `image_url` rendered as JSON `null`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "cupcakes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub flavor: String,
    #[sea_orm(column_type = "Text")]
    pub size: String,
    pub rating: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(image_url: Option<&str>) -> Model {
        Model {
            id: 7,
            flavor: "chocolate".to_string(),
            size: "medium".to_string(),
            rating: 8.0,
            image_url: image_url.map(String::from),
        }
    }

    #[test]
    fn test_serializes_to_response_shape() {
        let json = serde_json::to_value(sample(Some("https://example.com/c.jpg"))).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["flavor"], "chocolate");
        assert_eq!(json["size"], "medium");
        assert_eq!(json["rating"], 8.0);
        assert_eq!(json["image_url"], "https://example.com/c.jpg");
        assert_eq!(json.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_unset_image_url_serializes_as_null() {
        let json = serde_json::to_value(sample(None)).unwrap();
        assert!(json["image_url"].is_null());
    }

    #[test]
    fn test_default_image_url_is_a_url() {
        assert!(DEFAULT_IMAGE_URL.starts_with("https://"));
    }
}
