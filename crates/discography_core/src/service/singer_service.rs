//! Singer use-case service.
//!
//! # Responsibility
//! - Resolve singers by id for album joins.
//! - Provide singer CRUD entry points over the singer store.

use crate::model::singer::{Singer, SingerId};
use crate::repo::error::RepoResult;
use crate::repo::singer_repo::SingerRepository;

/// Use-case service wrapper for singer operations.
pub struct SingerService<R: SingerRepository> {
    repo: R,
}

impl<R: SingerRepository> SingerService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists all singers in storage order.
    pub fn list_singers(&self) -> RepoResult<Vec<Singer>> {
        self.repo.get_all()
    }

    /// Resolves one singer. Every call reaches the repository.
    pub fn get_singer(&self, id: SingerId) -> RepoResult<Singer> {
        self.repo.get(id)
    }

    pub fn create_singer(&self, singer: &Singer) -> RepoResult<()> {
        self.repo.add(singer)
    }

    pub fn delete_singer(&self, id: SingerId) -> RepoResult<()> {
        self.repo.delete(id)
    }
}
