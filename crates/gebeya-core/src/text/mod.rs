pub mod normalize;
pub mod prices;
pub mod products;

pub use normalize::TextCleaner;
pub use prices::PriceExtractor;
pub use products::ProductDetector;
