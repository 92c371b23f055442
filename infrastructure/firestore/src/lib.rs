pub mod client;
pub mod document;
pub mod query;
pub mod value;
pub mod meal {
    pub mod repository;
}
pub mod restaurant {
    pub mod repository;
}
