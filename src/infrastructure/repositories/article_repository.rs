use crate::{domain::activity::Article, error::AppResult};
use sqlx::PgConnection;
use uuid::Uuid;

/// Insert the article unless its URL is already stored, then read it back.
///
/// Returns the stored article and whether this call created it. An
/// existing article keeps its original title. Relies on the unique index
/// on `articles.url`, so concurrent callers converge on a single row.
pub async fn get_or_create_article(
    conn: &mut PgConnection,
    url: &str,
    title: &str,
) -> AppResult<(Article, bool)> {
    let result = sqlx::query(
        r#"
        INSERT INTO articles (id, title, url, created_at)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (url) DO NOTHING
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(title)
    .bind(url)
    .bind(chrono::Utc::now())
    .execute(&mut *conn)
    .await?;

    let article = sqlx::query_as::<_, Article>(
        "SELECT id, title, url, created_at FROM articles WHERE url = $1",
    )
    .bind(url)
    .fetch_one(&mut *conn)
    .await?;

    Ok((article, result.rows_affected() == 1))
}
