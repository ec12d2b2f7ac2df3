//! In-memory user repository.
//!
//! Records live for the lifetime of the store instance only. Ids come from a
//! counter that is never rewound, so a deleted id is not handed out again.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::user_repository::UserRepository;
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[derive(Debug)]
struct MemoryState {
    users: BTreeMap<i32, User>,
    next_id: i32,
}

/// Process-local implementation of UserRepository.
///
/// The map and the id counter sit behind one lock, held for the whole of
/// each operation.
#[derive(Debug)]
pub struct MemoryUserStore {
    state: Mutex<MemoryState>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState {
                users: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MemoryUserStore {
    async fn list(&self) -> AppResult<Vec<User>> {
        let state = self.state.lock().await;
        Ok(state.users.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> AppResult<Option<User>> {
        let state = self.state.lock().await;
        Ok(state.users.get(&id).cloned())
    }

    async fn create(&self, full_name: String) -> AppResult<User> {
        let mut state = self.state.lock().await;

        let id = state.next_id;
        state.next_id = id
            .checked_add(1)
            .ok_or_else(|| AppError::internal("in-memory user id space exhausted"))?;

        let user = User::new(id, full_name);
        state.users.insert(id, user.clone());
        tracing::debug!(user_id = id, "User stored in memory");

        Ok(user)
    }

    async fn update(&self, id: i32, full_name: String) -> AppResult<Option<User>> {
        let mut state = self.state.lock().await;

        Ok(state.users.get_mut(&id).map(|user| {
            user.rename(full_name);
            user.clone()
        }))
    }

    async fn delete(&self, id: i32) -> AppResult<Option<User>> {
        let mut state = self.state.lock().await;
        Ok(state.users.remove(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = MemoryUserStore::new();

        let alice = store.create("Alice".to_string()).await.unwrap();
        let bob = store.create("Bob".to_string()).await.unwrap();

        assert_eq!(alice, User::new(1, "Alice"));
        assert_eq!(bob, User::new(2, "Bob"));
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let store = MemoryUserStore::new();

        let created = store.create("Grace Hopper".to_string()).await.unwrap();
        let fetched = store.get(created.id).await.unwrap();

        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let store = MemoryUserStore::new();
        assert_eq!(store.get(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = MemoryUserStore::new();

        let first = store.create("A".to_string()).await.unwrap();
        let second = store.create("B".to_string()).await.unwrap();
        store.delete(second.id).await.unwrap();
        store.delete(first.id).await.unwrap();

        let third = store.create("C".to_string()).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_update_replaces_full_name() {
        let store = MemoryUserStore::new();
        let user = store.create("Alice".to_string()).await.unwrap();

        let updated = store.update(user.id, "Alicia".to_string()).await.unwrap();

        assert_eq!(updated, Some(User::new(user.id, "Alicia")));
        assert_eq!(store.get(user.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing_does_not_insert() {
        let store = MemoryUserStore::new();

        let result = store.update(5, "Nobody".to_string()).await.unwrap();

        assert_eq!(result, None);
        assert!(store.list().await.unwrap().is_empty());
        assert_eq!(store.get(5).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_returns_record_then_absent() {
        let store = MemoryUserStore::new();
        let user = store.create("Alice".to_string()).await.unwrap();

        assert_eq!(store.delete(user.id).await.unwrap(), Some(user.clone()));
        assert_eq!(store.get(user.id).await.unwrap(), None);
        assert_eq!(store.delete(user.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_in_insertion_order() {
        let store = MemoryUserStore::new();
        for name in ["A", "B", "C"] {
            store.create(name.to_string()).await.unwrap();
        }
        store.delete(2).await.unwrap();

        let names: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.full_name)
            .collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_get_unique_ids() {
        let store = Arc::new(MemoryUserStore::new());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.create(format!("user {}", i)).await.unwrap().id })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=50).collect::<Vec<_>>());
    }
}
