pub mod wishlist;

pub use wishlist::*;
