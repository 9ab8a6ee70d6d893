pub mod assignments;
pub mod auth;
pub mod calendar;
pub mod curriculum;
pub mod dashboard;
pub mod dispatch;
pub mod health;
pub mod profile;
pub mod schema;
pub mod shared;
