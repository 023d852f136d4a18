use async_trait::async_trait;

use super::error::TodoError;
use super::todo::{CreateTodo, Todo, TodoId, UpdateTodo};

#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    async fn create(&self, input: CreateTodo) -> Result<Todo, TodoError>;
    async fn get(&self, id: TodoId) -> Result<Todo, TodoError>;
    async fn list(&self) -> Result<Vec<Todo>, TodoError>;
    async fn update(&self, id: TodoId, patch: UpdateTodo) -> Result<Todo, TodoError>;
    async fn delete(&self, id: TodoId) -> Result<(), TodoError>;
}
