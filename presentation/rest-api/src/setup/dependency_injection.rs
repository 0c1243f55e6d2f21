use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::product_option::repository::ProductOptionRepositoryPostgres;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::search_by_name::SearchProductsByNameUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::product_option::create::CreateProductOptionUseCaseImpl;
use business::application::product_option::delete::DeleteProductOptionUseCaseImpl;
use business::application::product_option::delete_by_product::DeleteProductOptionsByProductUseCaseImpl;
use business::application::product_option::get_by_product::GetProductOptionsUseCaseImpl;
use business::application::product_option::get_single::GetProductOptionUseCaseImpl;
use business::application::product_option::update::UpdateProductOptionUseCaseImpl;

use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::product_option::routes::ProductOptionApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub product_option_api: ProductOptionApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let option_repository = Arc::new(ProductOptionRepositoryPostgres::new(pool));

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let search_by_name_use_case = Arc::new(SearchProductsByNameUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger: logger.clone(),
        });

        // Product option use cases
        let create_option_use_case = Arc::new(CreateProductOptionUseCaseImpl {
            repository: option_repository.clone(),
            logger: logger.clone(),
        });
        let get_options_use_case = Arc::new(GetProductOptionsUseCaseImpl {
            repository: option_repository.clone(),
            logger: logger.clone(),
        });
        let get_option_use_case = Arc::new(GetProductOptionUseCaseImpl {
            repository: option_repository.clone(),
            logger: logger.clone(),
        });
        let update_option_use_case = Arc::new(UpdateProductOptionUseCaseImpl {
            repository: option_repository.clone(),
            logger: logger.clone(),
        });
        let delete_option_use_case = Arc::new(DeleteProductOptionUseCaseImpl {
            repository: option_repository.clone(),
            logger: logger.clone(),
        });
        let delete_options_by_product_use_case =
            Arc::new(DeleteProductOptionsByProductUseCaseImpl {
                repository: option_repository,
                logger,
            });

        let product_api = ProductApi::new(
            create_use_case,
            get_all_use_case,
            search_by_name_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            delete_options_by_product_use_case,
        );

        let product_option_api = ProductOptionApi::new(
            create_option_use_case,
            get_options_use_case,
            get_option_use_case,
            update_option_use_case,
            delete_option_use_case,
        );

        Self {
            health_api,
            product_api,
            product_option_api,
        }
    }
}
