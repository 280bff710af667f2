pub mod hash;
pub mod images;
pub mod jwt;
pub mod slug;
