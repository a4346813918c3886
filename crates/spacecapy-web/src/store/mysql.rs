//! MySQL backend.
//!
//! Every operation opens its own connection and closes it before returning,
//! on the error path too. No pool. The counter is bumped with a single
//! UPDATE; row consistency is left to the database.

use std::future::Future;

use async_trait::async_trait;
use sqlx::mysql::MySqlConnectOptions;
use sqlx::{Connection, MySqlConnection};

use spacecapy_core::error::{Result, SpaceCapyError};

use super::{ImageSource, VisitorStore};
use crate::config::MySqlSection;

const SELECT_RANDOM_IMAGE: &str = "SELECT imagescol FROM images ORDER BY RAND() LIMIT 1";
const INCREMENT_VISITORS: &str = "UPDATE visitor_counter SET count = count + 1";
// CAST keeps the decoded type BIGINT regardless of the column's declared width.
const SELECT_VISITORS: &str = "SELECT CAST(count AS SIGNED) FROM visitor_counter LIMIT 1";

const CREATE_IMAGES: &str =
    "CREATE TABLE IF NOT EXISTS images (imagescol VARCHAR(1024) NOT NULL)";
const CREATE_VISITOR_COUNTER: &str =
    "CREATE TABLE IF NOT EXISTS visitor_counter (count INT NOT NULL DEFAULT 0)";
const SEED_VISITOR_COUNTER: &str = "INSERT INTO visitor_counter (count) \
     SELECT 0 FROM DUAL WHERE NOT EXISTS (SELECT 1 FROM visitor_counter)";

fn db_err(op: &'static str) -> impl Fn(sqlx::Error) -> SpaceCapyError {
    move |e| SpaceCapyError::Database(format!("{op}: {e}"))
}

#[derive(Debug, Clone)]
pub struct MySqlStore {
    opts: MySqlConnectOptions,
}

impl MySqlStore {
    pub fn new(opts: MySqlConnectOptions) -> Self {
        Self { opts }
    }

    pub fn from_config(cfg: &MySqlSection) -> Self {
        Self::new(connect_options(cfg))
    }

    /// Run `f` on a fresh connection, closing it whatever `f` returns.
    async fn with_connection<T, F>(&self, op: &'static str, f: F) -> Result<T>
    where
        F: for<'c> FnOnce(&'c mut MySqlConnection) -> BoxFuture<'c, Result<T>>,
    {
        let mut conn = MySqlConnection::connect_with(&self.opts)
            .await
            .map_err(db_err(op))?;

        let out = f(&mut conn).await;

        if let Err(e) = conn.close().await {
            tracing::warn!(op, error = %e, "mysql connection close failed");
        }
        out
    }

    /// Create both tables if missing and make sure the counter row exists.
    pub async fn bootstrap_schema(&self) -> Result<()> {
        self.with_connection::<(), _>("bootstrap_schema", |conn| {
            Box::pin(async move {
                for stmt in [CREATE_IMAGES, CREATE_VISITOR_COUNTER, SEED_VISITOR_COUNTER] {
                    sqlx::query(stmt)
                        .execute(&mut *conn)
                        .await
                        .map_err(db_err("bootstrap_schema"))?;
                }
                Ok(())
            })
        })
        .await?;
        tracing::info!("mysql schema ready");
        Ok(())
    }
}

type BoxFuture<'a, T> = std::pin::Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Build sqlx connect options from the config section.
pub fn connect_options(cfg: &MySqlSection) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&cfg.host)
        .port(cfg.port)
        .username(&cfg.user)
        .password(&cfg.password)
        .database(&cfg.database)
}

async fn read_visitors(conn: &mut MySqlConnection, op: &'static str) -> Result<i64> {
    let row: Option<Option<i64>> = sqlx::query_scalar(SELECT_VISITORS)
        .fetch_optional(&mut *conn)
        .await
        .map_err(db_err(op))?;
    Ok(counter_or_zero(row))
}

/// Counter row to value. A missing row or a NULL count reads as zero.
pub fn counter_or_zero(row: Option<Option<i64>>) -> i64 {
    row.flatten().unwrap_or(0)
}

/// Image row to URL. No row, NULL and blank values are all absent.
pub fn usable_url(row: Option<Option<String>>) -> Option<String> {
    row.flatten().filter(|u| !u.trim().is_empty())
}

#[async_trait]
impl ImageSource for MySqlStore {
    async fn random_image_url(&self) -> Result<Option<String>> {
        self.with_connection("get_image_url", |conn| {
            Box::pin(async move {
                let row: Option<Option<String>> = sqlx::query_scalar(SELECT_RANDOM_IMAGE)
                    .fetch_optional(&mut *conn)
                    .await
                    .map_err(db_err("get_image_url"))?;
                Ok(usable_url(row))
            })
        })
        .await
    }
}

#[async_trait]
impl VisitorStore for MySqlStore {
    async fn increment(&self) -> Result<i64> {
        self.with_connection("get_visitors_count", |conn| {
            Box::pin(async move {
                sqlx::query(INCREMENT_VISITORS)
                    .execute(&mut *conn)
                    .await
                    .map_err(db_err("get_visitors_count"))?;
                read_visitors(conn, "get_visitors_count").await
            })
        })
        .await
    }

    async fn current(&self) -> Result<i64> {
        self.with_connection("read_visitors", |conn| {
            Box::pin(async move { read_visitors(conn, "read_visitors").await })
        })
        .await
    }
}
