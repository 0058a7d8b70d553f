mod asset;
mod detail;

pub use asset::AssetSummary;
pub use detail::{AssetDetail, DetailBundle, PricePoint, PriceSeries};
