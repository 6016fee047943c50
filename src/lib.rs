// Calendar Layout Library
// Event layout engine and calendar view models

pub mod models;
pub mod services;
pub mod utils;
