use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::{AppError, Result};
use crate::models::Entity;
use crate::search::{SearchParams, SearchPipeline, SearchResult, SearchStrategy};
use crate::state::{Repository, SearchableRepository};

/// Generic in-memory repository: an ordered collection behind a lock.
///
/// Mutations serialize through the write lock; `search` clones a snapshot
/// under the read lock and runs the pipeline on it, so a search never
/// observes a partially applied mutation.
#[derive(Clone)]
pub struct InMemoryRepository<S: SearchStrategy>
where
    S::Entity: Entity,
{
    items: Arc<RwLock<Vec<S::Entity>>>,
    strategy: Arc<S>,
}

impl<S: SearchStrategy> InMemoryRepository<S>
where
    S::Entity: Entity,
{
    pub fn new(strategy: S) -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
            strategy: Arc::new(strategy),
        }
    }
}

impl<S: SearchStrategy + Default> Default for InMemoryRepository<S>
where
    S::Entity: Entity,
{
    fn default() -> Self {
        Self::new(S::default())
    }
}

#[async_trait]
impl<S: SearchStrategy + 'static> Repository<S::Entity> for InMemoryRepository<S>
where
    S::Entity: Entity,
{
    async fn insert(&self, entity: S::Entity) -> Result<()> {
        tracing::debug!(entity = S::Entity::KIND, id = %entity.id(), "record inserted");
        self.items.write().push(entity);
        Ok(())
    }

    async fn bulk_insert(&self, entities: Vec<S::Entity>) -> Result<()> {
        tracing::debug!(
            entity = S::Entity::KIND,
            count = entities.len(),
            "records bulk inserted"
        );
        self.items.write().extend(entities);
        Ok(())
    }

    async fn update(&self, entity: S::Entity) -> Result<()> {
        let mut items = self.items.write();
        match items.iter().position(|existing| existing.id() == entity.id()) {
            Some(index) => {
                tracing::debug!(entity = S::Entity::KIND, id = %entity.id(), "record updated");
                items[index] = entity;
                Ok(())
            }
            None => Err(AppError::not_found(S::Entity::KIND, entity.id())),
        }
    }

    async fn delete(&self, id: &<S::Entity as Entity>::Id) -> Result<()> {
        let mut items = self.items.write();
        match items.iter().position(|existing| existing.id() == id) {
            Some(index) => {
                items.remove(index);
                tracing::debug!(entity = S::Entity::KIND, id = %id, "record deleted");
                Ok(())
            }
            None => Err(AppError::not_found(S::Entity::KIND, id)),
        }
    }

    async fn find_by_id(&self, id: &<S::Entity as Entity>::Id) -> Result<Option<S::Entity>> {
        Ok(self
            .items
            .read()
            .iter()
            .find(|existing| existing.id() == id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<S::Entity>> {
        Ok(self.items.read().clone())
    }
}

#[async_trait]
impl<S: SearchStrategy + 'static> SearchableRepository<S::Entity, S::Filter>
    for InMemoryRepository<S>
where
    S::Entity: Entity,
{
    async fn search(&self, params: &SearchParams<S::Filter>) -> Result<SearchResult<S::Entity>> {
        let snapshot = self.items.read().clone();
        Ok(SearchPipeline::new(self.strategy.as_ref()).run(snapshot, params))
    }
}
