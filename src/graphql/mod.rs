pub mod handlers;
pub mod health;
pub mod schema;
pub mod variations;
