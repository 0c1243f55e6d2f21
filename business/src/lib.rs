pub mod application {
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod search_by_name;
        pub mod update;
    }
    pub mod product_option {
        pub mod create;
        pub mod delete;
        pub mod delete_by_product;
        pub mod get_by_product;
        pub mod get_single;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod search_by_name;
            pub mod update;
        }
    }
    pub mod product_option {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod delete_by_product;
            pub mod get_by_product;
            pub mod get_single;
            pub mod update;
        }
    }
}
