//! In-memory todo storage.
//!
//! A mutex-guarded map from id to record plus a monotonically increasing
//! id counter, so concurrent creates and updates are well-defined.
//! Invariants: every key equals its record's id, ids are assigned
//! sequentially starting at 1, and the counter is always greater than every
//! existing id (deleted ids are never reused).

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use crate::api::todo::models::{Todo, TodoCreate};

struct Store {
    todos: BTreeMap<u64, Todo>,
    next_id: u64,
}

/// Process-wide todo store.
pub struct TodoRepository {
    inner: Mutex<Store>,
}

impl TodoRepository {
    pub fn new() -> Self {
        TodoRepository {
            inner: Mutex::new(Store {
                todos: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Insert a new record, assigning the next id and stamping both
    /// timestamps with the creation instant.
    pub fn create(&self, new_todo: TodoCreate) -> Todo {
        let mut store = self.lock();

        let id = store.next_id;
        store.next_id += 1;

        let now = Utc::now();
        let todo = Todo {
            id,
            title: new_todo.title,
            description: new_todo.description,
            completed: new_todo.completed,
            created_at: now,
            updated_at: now,
        };

        store.todos.insert(id, todo.clone());
        todo
    }

    /// All records. Iteration order is ascending id, which coincides with
    /// insertion order because ids are monotonic; callers must not rely on
    /// any ordering contract.
    pub fn list(&self) -> Vec<Todo> {
        self.lock().todos.values().cloned().collect()
    }

    pub fn get(&self, id: u64) -> Option<Todo> {
        self.lock().todos.get(&id).cloned()
    }

    /// Replace title, description, and completed on an existing record.
    /// The id and created_at are preserved; updated_at is set to now.
    pub fn update(&self, id: u64, change: TodoCreate) -> Option<Todo> {
        let mut store = self.lock();
        let todo = store.todos.get_mut(&id)?;

        todo.title = change.title;
        todo.description = change.description;
        todo.completed = change.completed;
        todo.updated_at = Utc::now();

        Some(todo.clone())
    }

    /// Remove and return the record, if present.
    pub fn delete(&self, id: u64) -> Option<Todo> {
        self.lock().todos.remove(&id)
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        // A poisoned lock means another request panicked mid-mutation; the
        // map itself is still structurally sound, so keep serving.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for TodoRepository {
    fn default() -> Self {
        Self::new()
    }
}
