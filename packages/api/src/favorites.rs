//! # Favorites — the remote list and the client-side mirror of it
//!
//! The server owns the favorites list and its uniqueness invariant: at most
//! one entry per `(item_type, item_id)` pair per user. Views keep an
//! optimistic local mirror, but the authoritative answer is always
//! [`ApiClient::favorites`] — a page refresh re-derives every is-favorited
//! flag from it via [`FavoriteSet::from_list`], never from what a previous
//! toggle happened to do.
//!
//! [`ApiClient::toggle_favorite`] applies the write policy: a `Conflict` on
//! add or a `NotFound` on remove means the server already agrees with the
//! desired end state, so both are treated as success and reconciled into
//! the set; every other error surfaces to the caller.

use std::collections::HashSet;

use crate::client::{ApiClient, CredentialProvider};
use crate::error::ApiError;
use crate::models::{EnrichedFavorites, Favorite, FavoriteCreate, ItemType};

impl<P: CredentialProvider> ApiClient<P> {
    /// GET `/user/favorites` — all favorites for the current identity.
    /// [`ApiError::Unauthorized`] without a session; never partial data.
    pub async fn favorites(&self) -> Result<Vec<Favorite>, ApiError> {
        self.get_json("/user/favorites").await
    }

    /// GET `/user/favorites/enriched` — favorites joined against the
    /// catalog, grouped by kind.
    pub async fn enriched_favorites(&self) -> Result<EnrichedFavorites, ApiError> {
        self.get_json("/user/favorites/enriched").await
    }

    /// POST `/user/favorites`. [`ApiError::Conflict`] if the pair is
    /// already favorited.
    pub async fn add_favorite(
        &self,
        item_type: ItemType,
        item_id: &str,
    ) -> Result<Favorite, ApiError> {
        let body = FavoriteCreate {
            item_type,
            item_id: item_id.to_string(),
        };
        self.post_json("/user/favorites", &body).await
    }

    /// DELETE `/user/favorites/{item_type}/{item_id}`.
    /// [`ApiError::NotFound`] if the pair is not favorited.
    pub async fn remove_favorite(
        &self,
        item_type: ItemType,
        item_id: &str,
    ) -> Result<(), ApiError> {
        self.delete(&format!("/user/favorites/{item_type}/{item_id}"))
            .await
    }

    /// Flip membership of the pair and reconcile `set` to the outcome.
    ///
    /// Returns the new is-favorited state. `Conflict` on add and `NotFound`
    /// on remove are success-equivalent: the server is already in the
    /// desired state, which also means `set` was stale — it is corrected
    /// either way.
    pub async fn toggle_favorite(
        &self,
        set: &mut FavoriteSet,
        item_type: ItemType,
        item_id: &str,
    ) -> Result<bool, ApiError> {
        if set.contains(item_type, item_id) {
            match self.remove_favorite(item_type, item_id).await {
                Ok(()) | Err(ApiError::NotFound(_)) => {}
                Err(err) => return Err(err),
            }
            set.remove(item_type, item_id);
            Ok(false)
        } else {
            match self.add_favorite(item_type, item_id).await {
                Ok(_) | Err(ApiError::Conflict(_)) => {}
                Err(err) => return Err(err),
            }
            set.insert(item_type, item_id);
            Ok(true)
        }
    }
}

/// The is-favorited flags a view renders, keyed by
/// `(item_type, item_id)`.
#[derive(Clone, Debug, Default)]
pub struct FavoriteSet {
    entries: HashSet<(ItemType, String)>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from the authoritative server list.
    pub fn from_list(favorites: &[Favorite]) -> Self {
        Self {
            entries: favorites
                .iter()
                .map(|f| (f.item_type, f.item_id.clone()))
                .collect(),
        }
    }

    pub fn contains(&self, item_type: ItemType, item_id: &str) -> bool {
        self.entries.contains(&(item_type, item_id.to_string()))
    }

    pub fn insert(&mut self, item_type: ItemType, item_id: &str) {
        self.entries.insert((item_type, item_id.to_string()));
    }

    pub fn remove(&mut self, item_type: ItemType, item_id: &str) {
        self.entries.remove(&(item_type, item_id.to_string()));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fav(item_type: ItemType, item_id: &str) -> Favorite {
        Favorite {
            id: format!("f-{item_id}"),
            user_id: "1".to_string(),
            item_type,
            item_id: item_id.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_from_list_keys_by_type_and_id() {
        let set = FavoriteSet::from_list(&[
            fav(ItemType::Project, "42"),
            fav(ItemType::Paper, "42"),
        ]);

        assert_eq!(set.len(), 2);
        assert!(set.contains(ItemType::Project, "42"));
        assert!(set.contains(ItemType::Paper, "42"));
        assert!(!set.contains(ItemType::Paper, "7"));
    }

    #[test]
    fn test_same_pair_listed_twice_collapses() {
        // The set mirrors the server invariant even if a response ever
        // carried a duplicate.
        let set = FavoriteSet::from_list(&[
            fav(ItemType::Project, "42"),
            fav(ItemType::Project, "42"),
        ]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_insert_and_remove() {
        let mut set = FavoriteSet::new();
        assert!(set.is_empty());

        set.insert(ItemType::Paper, "p1");
        assert!(set.contains(ItemType::Paper, "p1"));

        set.remove(ItemType::Paper, "p1");
        assert!(set.is_empty());
    }
}
