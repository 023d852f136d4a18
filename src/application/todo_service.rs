use crate::domain::error::TodoError;
use crate::domain::repository::TodoRepository;
use crate::domain::todo::{CreateTodo, Todo, TodoId, UpdateTodo};
use async_trait::async_trait;

#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn create(&self, input: CreateTodo) -> Result<Todo, TodoError>;
    async fn get(&self, id: TodoId) -> Result<Todo, TodoError>;
    async fn list(&self) -> Result<Vec<Todo>, TodoError>;
    async fn update(&self, id: TodoId, patch: UpdateTodo) -> Result<Todo, TodoError>;
    async fn delete(&self, id: TodoId) -> Result<(), TodoError>;
}

#[derive(Clone)]
pub struct TodoServiceImpl<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoServiceImpl<R> {
    pub fn new(repo: R) -> Self { Self { repo } }
}

#[async_trait]
impl<R: TodoRepository> TodoService for TodoServiceImpl<R> {
    async fn create(&self, input: CreateTodo) -> Result<Todo, TodoError> { self.repo.create(input).await }
    async fn get(&self, id: TodoId) -> Result<Todo, TodoError> { self.repo.get(id).await }
    async fn list(&self) -> Result<Vec<Todo>, TodoError> { self.repo.list().await }
    async fn update(&self, id: TodoId, patch: UpdateTodo) -> Result<Todo, TodoError> { self.repo.update(id, patch).await }
    async fn delete(&self, id: TodoId) -> Result<(), TodoError> { self.repo.delete(id).await }
}
