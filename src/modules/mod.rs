pub mod appointments;
pub mod auth;
pub mod health;
pub mod navigation;
pub mod records;
pub mod reports;
pub mod users;
