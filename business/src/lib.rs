pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod remove_item;
        pub mod update_quantity;
    }
    pub mod meal {
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_by_restaurant;
        pub mod get_top;
        pub mod search;
    }
    pub mod restaurant {
        pub mod get_all;
        pub mod get_by_id;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod reducer;
        pub mod store;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod remove_item;
            pub mod update_quantity;
        }
    }
    pub mod meal {
        pub mod mapper;
        pub mod model;
        pub mod repository;
        pub mod search;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_by_restaurant;
            pub mod get_top;
            pub mod search;
        }
    }
    pub mod restaurant {
        pub mod mapper;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
        }
    }
    pub mod shared {
        pub mod currency;
        pub mod record;
    }
}
