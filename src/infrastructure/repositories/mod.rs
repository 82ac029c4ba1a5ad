pub mod activity_repository;
pub mod article_repository;
pub mod gemini_summary_repository;
pub mod news_repository;
pub mod newsdata_repository;
pub mod summary_repository;
pub mod user_repository;

pub use activity_repository::ActivityRepository;
pub use article_repository::get_or_create_article;
pub use gemini_summary_repository::GeminiSummaryRepository;
pub use news_repository::NewsRepository;
pub use newsdata_repository::NewsDataRepository;
pub use summary_repository::SummaryRepository;
pub use user_repository::UserRepository;
