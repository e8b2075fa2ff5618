use chrono::{DateTime, Utc};
use serde::Deserialize;

/// An image attached to a post. The data layer delivers them in storage
/// order, not display order.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Image {
    pub id: String,
    pub url: String,
    pub alt_text: Option<String>,
    pub caption: Option<String>,
    #[serde(default)]
    pub display_order: i32,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub name_ar: String,
    pub slug: String,
    pub icon: Option<String>,
    pub color: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub display_order: i32,
}

fn default_true() -> bool {
    true
}

/// A published post as delivered by the data-fetching layer. Read-only to
/// the search pipeline.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Post {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Resolved once at load time. Filtering only ever looks at this field.
    pub category_id: Option<String>,
    pub category: Option<Category>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub images: Vec<Image>,
    pub author: Option<String>,
}

impl Post {
    /// Normalizes a freshly deserialized post: fills `category_id` from the
    /// embedded category's slug when the flat field is missing, and puts the
    /// images in display order.
    pub fn resolve(&mut self) {
        if self.category_id.is_none() {
            self.category_id = self.category.as_ref().map(|c| c.slug.clone());
        }
        self.images.sort_by_key(|img| img.display_order);
    }
}

/// Parses the full post collection from the data layer's JSON payload.
pub fn posts_from_json(payload: &str) -> serde_json::Result<Vec<Post>> {
    let mut posts: Vec<Post> = serde_json::from_str(payload)?;
    for post in posts.iter_mut() {
        post.resolve();
    }
    Ok(posts)
}
