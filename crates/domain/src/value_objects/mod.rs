pub mod percentage;
pub mod price;
pub mod price_range;
pub mod tick_range;

pub use percentage::Percentage;
pub use price::Price;
pub use price_range::PriceRange;
pub use tick_range::TickRange;
