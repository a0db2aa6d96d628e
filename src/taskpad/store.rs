//! # The todo store
//!
//! [`TodoStore`] is the single owner of the todo collection and the next-id
//! counter. Nothing else mutates either; every UI (JSON API, rendered pages,
//! tests) goes through the operations here.
//!
//! ## Invariants
//!
//! - Insertion order is preserved; there is no sorting anywhere.
//! - `id` values are unique and assigned in increasing order, starting at 1.
//! - No two records have case-insensitively identical text. The duplicate
//!   check applies on add and on edit, where the record being edited is
//!   excluded (re-saving a record with its own text is not a duplicate).
//! - A failed operation leaves the collection exactly as it was.

use crate::error::{Result, TaskpadError};
use crate::model::{Priority, PriorityFilter, Todo};

/// In-memory todo collection plus the id counter.
///
/// Process-lifetime state: build one per process (or per test), hand it to
/// the server behind a lock. Contents are lost on restart by design.
#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
}

// Derived Default would start the id counter at 0; ids start at 1.
impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// The fixed demo records the server boots with.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (text, priority) in [
            ("Complete project documentation", Priority::High),
            ("Review code and fix bugs", Priority::Medium),
            ("Update README file", Priority::Low),
        ] {
            store.push_new(text.to_string(), priority);
        }
        store
    }

    /// All records, insertion order.
    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    /// Records matching `filter`, insertion order. `All` behaves as
    /// [`TodoStore::list`].
    pub fn list_by_priority(&self, filter: PriorityFilter) -> Vec<Todo> {
        self.todos
            .iter()
            .filter(|todo| filter.matches(todo.priority))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: u64) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Create a record. Trims `raw_text`, rejects empty and duplicate text,
    /// resolves the priority (empty means `Medium`), appends at the end.
    pub fn add(&mut self, raw_text: &str, raw_priority: Option<&str>) -> Result<Todo> {
        let text = raw_text.trim();
        if text.is_empty() {
            return Err(TaskpadError::EmptyTask);
        }
        if self.is_duplicate(text, None) {
            return Err(TaskpadError::DuplicateTask);
        }
        let priority = Priority::resolve(raw_priority)?;

        Ok(self.push_new(text.to_string(), priority))
    }

    /// Update a record in place. The record keeps its id and its position in
    /// insertion order. An empty `raw_priority` leaves the priority alone.
    pub fn edit(&mut self, id: u64, raw_text: &str, raw_priority: Option<&str>) -> Result<Todo> {
        if self.get(id).is_none() {
            return Err(TaskpadError::NotFound(id));
        }
        let text = raw_text.trim();
        if text.is_empty() {
            return Err(TaskpadError::EmptyTask);
        }
        if self.is_duplicate(text, Some(id)) {
            return Err(TaskpadError::DuplicateTask);
        }
        // Validate the priority before touching the record.
        let priority = match raw_priority.map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(value.parse::<Priority>()?),
        };

        let todo = self
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(TaskpadError::NotFound(id))?;
        todo.text = text.to_string();
        if let Some(priority) = priority {
            todo.priority = priority;
        }
        Ok(todo.clone())
    }

    /// Remove a record, preserving the relative order of the rest.
    pub fn delete(&mut self, id: u64) -> Result<Todo> {
        let position = self
            .todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(TaskpadError::NotFound(id))?;
        Ok(self.todos.remove(position))
    }

    fn push_new(&mut self, text: String, priority: Priority) -> Todo {
        let todo = Todo {
            id: self.next_id,
            text,
            priority,
        };
        self.next_id += 1;
        self.todos.push(todo.clone());
        todo
    }

    fn is_duplicate(&self, text: &str, exclude_id: Option<u64>) -> bool {
        let needle = text.to_lowercase();
        self.todos
            .iter()
            .filter(|todo| Some(todo.id) != exclude_id)
            .any(|todo| todo.text.to_lowercase() == needle)
    }
}
