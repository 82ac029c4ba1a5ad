use anyhow::Result;
use chrono::Utc;
use news_digest_backend::domain::user::{password::hash_password, User};
use sqlx::PgPool;
use uuid::Uuid;

pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Recorded activity joined with its article, as stored
#[derive(Debug, sqlx::FromRow)]
pub struct StoredActivity {
    pub user_id: Uuid,
    pub article_url: String,
    pub article_title: String,
    pub time_spent: f64,
    pub liked: Option<bool>,
    pub clicked_full_article: bool,
}

pub struct TestFixtures {
    pool: PgPool,
}

impl TestFixtures {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a user whose password is `TEST_PASSWORD`
    pub async fn create_user(&self, username: &str) -> Result<User> {
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: hash_password(TEST_PASSWORD)?,
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO users (id, username, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn password_hash_for(&self, username: &str) -> Result<Option<String>> {
        let hash = sqlx::query_scalar("SELECT password_hash FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(hash)
    }

    pub async fn count_articles(&self, url: &str) -> Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM articles WHERE url = $1")
            .bind(url)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn count_users(&self) -> Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn activities_for(&self, user_id: Uuid) -> Result<Vec<StoredActivity>> {
        let rows = sqlx::query_as::<_, StoredActivity>(
            r#"
            SELECT a.user_id, ar.url AS article_url, ar.title AS article_title,
                   a.time_spent, a.liked, a.clicked_full_article
            FROM user_activities a
            JOIN articles ar ON ar.id = a.article_id
            WHERE a.user_id = $1
            ORDER BY a.timestamp ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
