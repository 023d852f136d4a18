use async_trait::async_trait;

use crate::domain::{
    error::TodoError,
    repository::TodoRepository,
    todo::{CreateTodo, Todo, TodoId, UpdateTodo},
};
use crate::infrastructure::document_store::DocumentStore;

/// Repository over the `todos` collection of a [`DocumentStore`] document.
///
/// Every operation is an independent load → mutate → save sequence; nothing
/// is cached between calls and there is no lock around the sequence. Two
/// concurrent writers can therefore each load the same document and the
/// second save silently overwrites the first one's change (a lost update).
/// Callers that need stronger guarantees must serialize access themselves.
#[derive(Clone)]
pub struct FileTodoRepository {
    store: DocumentStore,
}

impl FileTodoRepository {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TodoRepository for FileTodoRepository {
    async fn create(&self, input: CreateTodo) -> Result<Todo, TodoError> {
        if input.title.is_empty() {
            return Err(TodoError::Validation("title is required".into()));
        }
        let mut doc = self.store.load().await?;
        // Next id comes off the tail of the list, which holds the highest id
        // only while ids stay monotonic and the list is never reordered.
        // Deleting the tail frees its id for reuse.
        let id = doc.todos.last().map_or(TodoId(1), |t| TodoId(t.id.0 + 1));
        let todo = Todo {
            id,
            title: input.title,
            completed: input.completed.unwrap_or(false),
        };
        doc.todos.push(todo.clone());
        self.store.save(&doc).await?;
        Ok(todo)
    }

    async fn get(&self, id: TodoId) -> Result<Todo, TodoError> {
        let doc = self.store.load().await?;
        doc.todos
            .into_iter()
            .find(|t| t.id == id)
            .ok_or(TodoError::NotFound(id))
    }

    async fn list(&self) -> Result<Vec<Todo>, TodoError> {
        Ok(self.store.load().await?.todos)
    }

    async fn update(&self, id: TodoId, patch: UpdateTodo) -> Result<Todo, TodoError> {
        if patch.is_empty() {
            return Err(TodoError::Validation("no fields to update".into()));
        }
        let mut doc = self.store.load().await?;
        let todo = doc
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TodoError::NotFound(id))?;
        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        let updated = todo.clone();
        self.store.save(&doc).await?;
        Ok(updated)
    }

    async fn delete(&self, id: TodoId) -> Result<(), TodoError> {
        let mut doc = self.store.load().await?;
        let before = doc.todos.len();
        doc.todos.retain(|t| t.id != id);
        if doc.todos.len() == before {
            return Err(TodoError::NotFound(id));
        }
        self.store.save(&doc).await?;
        Ok(())
    }
}
