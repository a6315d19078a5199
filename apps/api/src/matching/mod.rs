pub mod demand;
pub mod handlers;
pub mod matcher;
pub mod scorer;
