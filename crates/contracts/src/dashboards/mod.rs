pub mod analytics;
pub mod overview;
