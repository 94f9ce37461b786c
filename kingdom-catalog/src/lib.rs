pub mod product;
pub mod catalog;

pub use product::{AddOn, Bundle, CatalogItem};
pub use catalog::{CatalogError, Catalogs};
