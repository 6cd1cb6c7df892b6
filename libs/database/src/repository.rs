//! Generic SeaORM helpers shared by the domain repositories.
//!
//! Domain adapters wrap a [`BaseRepository`] and keep their own query logic
//! (filters, ordering, conflict targets); this type only owns the connection
//! and the boilerplate around single-row and paged access.

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, PaginatorTrait, PrimaryKeyTrait,
    QueryOrder, Select,
};
use std::marker::PhantomData;

/// One page of models plus the row count of the underlying query
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<M> {
    pub items: Vec<M>,
    pub total_items: u64,
}

pub struct BaseRepository<E: EntityTrait> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E: EntityTrait> Clone for BaseRepository<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: EntityTrait> BaseRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn find_by_id<T>(&self, id: T) -> Result<Option<E::Model>, DbErr>
    where
        T: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        E::find_by_id(id).one(&self.db).await
    }

    /// Every row, ascending by `order_by`
    pub async fn find_all_ordered(&self, order_by: E::Column) -> Result<Vec<E::Model>, DbErr> {
        E::find().order_by_asc(order_by).all(&self.db).await
    }

    /// `INSERT .. ON CONFLICT .. RETURNING *`, yielding the row as stored
    pub async fn upsert(
        &self,
        model: E::ActiveModel,
        on_conflict: OnConflict,
    ) -> Result<E::Model, DbErr>
    where
        E::Model: IntoActiveModel<E::ActiveModel>,
    {
        E::insert(model)
            .on_conflict(on_conflict)
            .exec_with_returning(&self.db)
            .await
    }

    /// Returns the number of rows removed; zero when the id was absent
    pub async fn delete_by_id<T>(&self, id: T) -> Result<u64, DbErr>
    where
        T: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        let result = E::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }

    /// Fetch zero-based page `page` of `select`.
    ///
    /// `select` should carry a deterministic ordering, otherwise rows may
    /// shift between pages. A page starting at or past the last row is empty
    /// and still reports the total, including pages whose offset does not
    /// fit in a PostgreSQL `bigint`.
    pub async fn fetch_page(
        &self,
        select: Select<E>,
        page: u64,
        page_size: u64,
    ) -> Result<PageSlice<E::Model>, DbErr>
    where
        E::Model: Sync,
    {
        if page_size == 0 {
            return Err(DbErr::Custom("page size must be greater than zero".to_owned()));
        }

        let paginator = select.paginate(&self.db, page_size);
        let total_items = paginator.num_items().await?;

        let in_range = page
            .checked_mul(page_size)
            .is_some_and(|offset| offset < total_items && offset <= i64::MAX as u64);

        let items = if in_range {
            paginator.fetch_page(page).await?
        } else {
            Vec::new()
        };

        Ok(PageSlice { items, total_items })
    }
}
