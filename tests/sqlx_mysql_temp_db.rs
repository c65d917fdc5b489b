#![cfg(feature = "sqlx-mysql")]
//! Tests against a live MySQL server using the SQLx connector

mod common;

use std::sync::Arc;

use mysql_tempdb::{
    backends::sqlx_mysql::connect_options, ensure_temp_db, SqlxMySqlConnector, TracingLogger,
};
use sqlx::{Connection, Row};

use common::{init_tracing, is_unavailable, server_config, unique_suffix};

#[tokio::test]
#[ignore]
async fn test_sqlx_temp_db_lifecycle() {
    init_tracing();
    let Some(config) = server_config() else {
        return;
    };

    let (temp_config, mut temp_db) = match ensure_temp_db(
        &SqlxMySqlConnector,
        Arc::new(TracingLogger),
        &unique_suffix("sqlx"),
        &config,
    )
    .await
    {
        Ok(provisioned) => provisioned,
        Err(e) if is_unavailable(&e) => return,
        Err(e) => panic!("Failed to provision temporary database: {:?}", e),
    };

    let mut conn = sqlx::mysql::MySqlConnection::connect_with(&connect_options(&temp_config))
        .await
        .unwrap();
    sqlx::query("CREATE TABLE items (id INT PRIMARY KEY, name VARCHAR(64))")
        .execute(&mut conn)
        .await
        .unwrap();
    sqlx::query("INSERT INTO items (id, name) VALUES (?, ?)")
        .bind(1)
        .bind("first")
        .execute(&mut conn)
        .await
        .unwrap();
    let row = sqlx::query("SELECT DATABASE() AS db, COUNT(*) AS n FROM items")
        .fetch_one(&mut conn)
        .await
        .unwrap();
    assert_eq!(row.get::<String, _>("db"), temp_config.database_name);
    assert_eq!(row.get::<i64, _>("n"), 1);
    conn.close().await.unwrap();

    temp_db.cleanup().await;
    assert!(temp_db.is_released());
}
