pub mod artist;
pub mod album;
pub mod track;
pub mod reviewer;
pub mod review;

pub use artist::Entity as Artist;
pub use album::Entity as Album;
pub use track::Entity as Track;
pub use reviewer::Entity as Reviewer;
pub use review::Entity as Review;
