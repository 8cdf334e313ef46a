use crate::domain::Deadline;
use crate::domain::author::entity::{Author, AuthorId};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AuthorStore: Send + Sync {
    async fn get_by_id(&self, ctx: &Deadline, id: AuthorId) -> DomainResult<Author>;
}
