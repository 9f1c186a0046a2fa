pub mod numeric;
pub mod user;
