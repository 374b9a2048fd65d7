pub mod application {
    pub mod product {
        pub mod create;
        pub mod export;
        pub mod resolve;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod export;
            pub mod resolve;
        }
    }
}
