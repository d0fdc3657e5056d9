mod contract;
mod expense;
mod registry;
mod release;
mod split;
mod track;

pub use contract::Contract;
pub use expense::Expense;
pub use registry::Catalogue;
pub use release::Release;
pub use split::{ArtistShare, Split};
pub use track::Track;
