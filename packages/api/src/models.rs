//! Wire types for the TechVision API.
//!
//! Catalog records are read-only on the client; the server owns their
//! lifecycle. Identity lives in [`store::UserInfo`] so the storage layer
//! and this crate agree on one record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use store::UserInfo;

// -- Auth --

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserLogin {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSignup {
    pub username: String,
    pub password: String,
}

/// Successful login/signup payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub user: UserInfo,
}

// -- Catalog --

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GithubProject {
    pub id: i64,
    pub repo_id: String,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stars: i64,
    pub forks: i64,
    pub url: String,
    pub trending_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    pub id: String,
    pub title: String,
    /// `abstract` on the wire; renamed because it is a Rust keyword.
    #[serde(rename = "abstract")]
    pub summary: String,
    pub authors: Vec<String>,
    pub pdf_url: Option<String>,
    pub code_url: Option<String>,
    pub published_date: NaiveDate,
    pub source: String,
    pub category_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub slug: String,
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl<T> Default for PaginatedResponse<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
            page: 0,
            limit: 0,
        }
    }
}

// -- Favorites --

/// What kind of catalog item a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Project,
    Paper,
}

impl ItemType {
    /// Wire value and path segment: `"project"` or `"paper"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Project => "project",
            ItemType::Paper => "paper",
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bookmark owned by one user. At most one per `(item_type, item_id)`
/// pair per user; the server enforces it, the client reconciles to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: String,
    pub user_id: String,
    pub item_type: ItemType,
    pub item_id: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for adding a favorite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteCreate {
    pub item_type: ItemType,
    pub item_id: String,
}

/// Favorites joined against the catalog, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrichedFavorites {
    pub projects: Vec<GithubProject>,
    pub papers: Vec<Paper>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_item_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ItemType::Project).unwrap(), "\"project\"");
        assert_eq!(serde_json::to_string(&ItemType::Paper).unwrap(), "\"paper\"");
        assert_eq!(ItemType::Project.to_string(), "project");

        let back: ItemType = serde_json::from_str("\"paper\"").unwrap();
        assert_eq!(back, ItemType::Paper);
    }

    #[test]
    fn test_favorite_roundtrip() {
        let fav = Favorite {
            id: "f1".to_string(),
            user_id: "1".to_string(),
            item_type: ItemType::Project,
            item_id: "42".to_string(),
            created_at: "2025-06-01T12:00:00Z".parse().unwrap(),
        };

        let s = serde_json::to_string(&fav).unwrap();
        let v: Value = serde_json::from_str(&s).unwrap();
        assert_eq!(v["item_type"], "project");
        assert_eq!(v["item_id"], "42");

        let back: Favorite = serde_json::from_str(&s).unwrap();
        assert_eq!(back, fav);
    }

    #[test]
    fn test_paper_abstract_field_rename() {
        let body = json!({
            "id": "p1",
            "title": "Attention Is All You Need",
            "abstract": "We propose a new architecture.",
            "authors": ["Vaswani"],
            "pdf_url": null,
            "code_url": null,
            "published_date": "2017-06-12",
            "source": "arxiv",
            "category_id": null,
        });

        let paper: Paper = serde_json::from_value(body).unwrap();
        assert_eq!(paper.summary, "We propose a new architecture.");

        let v: Value = serde_json::to_value(&paper).unwrap();
        assert!(v.get("abstract").is_some());
        assert!(v.get("summary").is_none());
    }

    #[test]
    fn test_paginated_response_decodes() {
        let body = json!({
            "data": [{
                "id": 7,
                "repo_id": "r7",
                "name": "ripgrep",
                "full_name": "BurntSushi/ripgrep",
                "description": "recursively search",
                "language": "Rust",
                "stars": 40000,
                "forks": 2000,
                "url": "https://github.com/BurntSushi/ripgrep",
                "trending_date": "2025-06-01",
            }],
            "total": 1,
            "page": 1,
            "limit": 20,
        });

        let page: PaginatedResponse<GithubProject> = serde_json::from_value(body).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].name, "ripgrep");
        assert_eq!(page.total, 1);

        let empty = PaginatedResponse::<GithubProject>::default();
        assert!(empty.data.is_empty());
    }
}
