mod model;
mod repository;

pub use model::PriceDB;
pub use repository::PriceRepository;
