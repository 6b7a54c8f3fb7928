pub mod article;
pub mod artist;
pub mod artwork;
pub mod author;
pub mod constraints;
pub mod event;
pub mod user;
