use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product_option::model::ProductOption;
use business::domain::product_option::repository::ProductOptionRepository;

use super::entity::ProductOptionEntity;
use crate::errors::{database_error, insert_error};

pub struct ProductOptionRepositoryPostgres {
    pool: PgPool,
}

impl ProductOptionRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductOptionRepository for ProductOptionRepositoryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProductOption>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductOptionEntity>(
            "SELECT id, product_id, name, description FROM product_options WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn get_by_product_id(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<ProductOption>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductOptionEntity>(
            "SELECT id, product_id, name, description FROM product_options WHERE product_id = $1 ORDER BY name",
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_by_product_id_and_id(
        &self,
        product_id: Uuid,
        id: Uuid,
    ) -> Result<Option<ProductOption>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductOptionEntity>(
            "SELECT id, product_id, name, description FROM product_options WHERE id = $1 AND product_id = $2",
        )
        .bind(id)
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn add(&self, option: &ProductOption) -> Result<(), RepositoryError> {
        let entity = ProductOptionEntity::from_domain(option);

        sqlx::query(
            "INSERT INTO product_options (id, product_id, name, description) VALUES ($1, $2, $3, $4)",
        )
        .bind(entity.id)
        .bind(entity.product_id)
        .bind(entity.name)
        .bind(entity.description)
        .execute(&self.pool)
        .await
        .map_err(insert_error)?;

        Ok(())
    }

    async fn replace(&self, option: &ProductOption) -> Result<(), RepositoryError> {
        let entity = ProductOptionEntity::from_domain(option);

        let result = sqlx::query(
            r#"UPDATE product_options SET
                product_id = $2,
                name = $3,
                description = $4
            WHERE id = $1"#,
        )
        .bind(entity.id)
        .bind(entity.product_id)
        .bind(entity.name)
        .bind(entity.description)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn remove(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM product_options WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn remove_by_product_id(&self, product_id: Uuid) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM product_options WHERE product_id = $1")
            .bind(product_id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected())
    }
}
