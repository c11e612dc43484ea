mod property_repo;

pub use property_repo::{ListOrder, PropertyRepo};
