mod sale;

pub use sale::{ReleaseSale, Sale, TrackSale};
