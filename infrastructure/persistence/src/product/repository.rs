use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;
use crate::errors::{database_error, insert_error};

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, delivery_price FROM products ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, delivery_price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError> {
        // strpos keeps % and _ in the term literal, unlike LIKE
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, delivery_price FROM products WHERE strpos(lower(name), lower($1)) > 0 ORDER BY name",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn add(&self, product: &Product) -> Result<(), RepositoryError> {
        let entity = ProductEntity::from_domain(product);

        sqlx::query(
            "INSERT INTO products (id, name, description, price, delivery_price) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(entity.id)
        .bind(entity.name)
        .bind(entity.description)
        .bind(entity.price)
        .bind(entity.delivery_price)
        .execute(&self.pool)
        .await
        .map_err(insert_error)?;

        Ok(())
    }

    async fn replace(&self, product: &Product) -> Result<(), RepositoryError> {
        let entity = ProductEntity::from_domain(product);

        let result = sqlx::query(
            r#"UPDATE products SET
                name = $2,
                description = $3,
                price = $4,
                delivery_price = $5
            WHERE id = $1"#,
        )
        .bind(entity.id)
        .bind(entity.name)
        .bind(entity.description)
        .bind(entity.price)
        .bind(entity.delivery_price)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn remove(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
