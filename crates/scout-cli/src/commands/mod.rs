pub mod audit;
pub mod dispatch;
pub mod schema;
pub mod vault;
