//! Paginated data source over `SeaORM` entities.
//!
//! Filters are plain `SeaORM` query transformations:
//!
//! ```ignore
//! PaginateRequest::new()
//!     .filter(|query| query.filter(records::Column::Value.starts_with("Value")))
//!     .filter(|query| query.order_by_asc(records::Column::CreatedAt))
//! ```

use std::marker::PhantomData;

use async_trait::async_trait;
use pageturn_core::DataSource;
use sea_orm::{
    DatabaseConnection, DbErr, EntityName, EntityTrait, PaginatorTrait, QuerySelect, Select,
};
use tracing::debug;

use crate::entities::records;

/// Data source for the records table.
pub type RecordSource = EntitySource<records::Entity>;

/// Data source paginating `E::find()`.
#[derive(Debug, Clone)]
pub struct EntitySource<E> {
    db: DatabaseConnection,
    entity: PhantomData<fn() -> E>,
}

impl<E: EntityTrait> EntitySource<E> {
    /// Creates a data source for entity `E`.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// Connection the source queries through.
    #[must_use]
    pub const fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl<E> DataSource for EntitySource<E>
where
    E: EntityTrait,
    E::Model: Sync + 'static,
{
    type Query = Select<E>;
    type Item = E::Model;
    type Error = DbErr;

    fn query(&self) -> Self::Query {
        E::find()
    }

    async fn count(&self, query: &Self::Query) -> Result<u64, Self::Error> {
        let total = query.clone().count(&self.db).await?;
        let entity = E::default();
        debug!(table = entity.table_name(), total, "Counted records");
        Ok(total)
    }

    async fn fetch(
        &self,
        query: Self::Query,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Self::Item>, Self::Error> {
        query.offset(offset).limit(limit).all(&self.db).await
    }
}
