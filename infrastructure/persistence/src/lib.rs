pub mod db;
pub mod product {
    pub mod entity;
    pub mod repository;
    pub mod unit_of_work;
}
