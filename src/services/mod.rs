pub mod db_service;
pub mod memory_store;
pub mod user_store;
