mod article_service;
mod artist_service;
mod artwork_service;
mod author_service;
mod event_service;
mod user_service;

pub use article_service::ArticleService;
pub use artist_service::ArtistService;
pub use artwork_service::ArtworkService;
pub use author_service::AuthorService;
pub use event_service::EventService;
pub use user_service::UserService;
