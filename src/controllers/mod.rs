pub mod article_controller;
pub mod artist_controller;
pub mod artwork_controller;
pub mod author_controller;
pub mod event_controller;
pub mod user_controller;
