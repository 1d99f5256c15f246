pub mod product;
pub mod supplier;
