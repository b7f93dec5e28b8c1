//! Generic CRUD over any SeaORM entity.
//!
//! Domain adapters compose a [`BaseRepository`] and add their own named
//! queries on top of it through [`BaseRepository::db`].

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait,
};
use std::marker::PhantomData;

type PrimaryKeyValue<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

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

impl<E> BaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn find_by_id<K>(&self, id: K) -> Result<Option<E::Model>, DbErr>
    where
        K: Into<PrimaryKeyValue<E>>,
    {
        E::find_by_id(id).one(&self.db).await
    }

    pub async fn exists<K>(&self, id: K) -> Result<bool, DbErr>
    where
        K: Into<PrimaryKeyValue<E>>,
    {
        Ok(self.find_by_id(id).await?.is_some())
    }

    pub async fn insert(&self, model: E::ActiveModel) -> Result<E::Model, DbErr> {
        model.insert(&self.db).await
    }

    pub async fn update(&self, model: E::ActiveModel) -> Result<E::Model, DbErr> {
        model.update(&self.db).await
    }

    /// Number of deleted rows; zero when the key does not exist
    pub async fn delete_by_id<K>(&self, id: K) -> Result<u64, DbErr>
    where
        K: Into<PrimaryKeyValue<E>>,
    {
        let result = E::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Transaction};

    mod shelf {
        use sea_orm::entity::prelude::*;

        #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
        #[sea_orm(table_name = "shelves")]
        pub struct Model {
            #[sea_orm(primary_key)]
            pub id: i32,
            pub label: String,
        }

        #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
        pub enum Relation {}

        impl ActiveModelBehavior for ActiveModel {}
    }

    fn shelf(id: i32, label: &str) -> shelf::Model {
        shelf::Model {
            id,
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_find_by_id_and_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![shelf(1, "dairy")]])
            .append_query_results([Vec::<shelf::Model>::new()])
            .into_connection();
        let repo = BaseRepository::<shelf::Entity>::new(db);

        assert_eq!(repo.find_by_id(1).await.unwrap(), Some(shelf(1, "dairy")));
        assert!(!repo.exists(2).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_by_id_reports_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let repo = BaseRepository::<shelf::Entity>::new(db);

        assert_eq!(repo.delete_by_id(4).await.unwrap(), 1);
        assert_eq!(repo.delete_by_id(4).await.unwrap(), 0);

        let log = repo.db().clone().into_transaction_log();
        assert_eq!(
            log[0],
            Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"DELETE FROM "shelves" WHERE "shelves"."id" = $1"#,
                [4i32.into()]
            )
        );
    }
}
