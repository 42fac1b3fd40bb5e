pub mod client;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod types;

pub use client::PlacesClient;
pub use error::PlacesError;
pub use normalize::{normalize_and_rank, normalize_place, NormalizedPlace};
pub use pipeline::search_and_rank;
pub use types::{DisplayName, RawPlace, SearchTextResponse};
