mod artwork;

pub use artwork::{Artwork, ArtworkId, ArtworkPage, Pagination};
