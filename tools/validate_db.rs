use anyhow::Context;
use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use sqlx::Row;
use std::env;

/// Report example_items rows that the service cannot serve correctly
#[derive(Parser)]
struct Cli {
    #[arg(long)]
    database_url: Option<String>,

    /// Delete rows whose url is empty
    #[arg(long)]
    fix: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let db_url = cli
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .context("DATABASE_URL must be set or passed with --database-url")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    // Rows that point at no blob at all
    let empty_url_rows =
        sqlx::query(r#"SELECT id, title FROM example_items WHERE btrim(url) = ''"#)
            .fetch_all(&pool)
            .await?;

    println!("Empty url rows: {}", empty_url_rows.len());
    for r in empty_url_rows.iter() {
        let id: i32 = r.get("id");
        let title: Option<String> = r.get("title");
        println!("id: {}, title: {:?}", id, title);
        if cli.fix {
            sqlx::query("DELETE FROM example_items WHERE id = $1")
                .bind(id)
                .execute(&pool)
                .await?;
            println!("Deleted: {}", id);
        }
    }

    // Dimensions are stored as decimal text
    let bad_dimension_rows = sqlx::query(
        r#"SELECT id, width, height FROM example_items
           WHERE width !~ '^[0-9]+$' OR height !~ '^[0-9]+$'"#,
    )
    .fetch_all(&pool)
    .await?;

    println!("Non-numeric dimension rows: {}", bad_dimension_rows.len());
    for r in bad_dimension_rows.iter() {
        let id: i32 = r.get("id");
        let width: String = r.get("width");
        let height: String = r.get("height");
        println!("id: {}, width: {:?}, height: {:?}", id, width, height);
    }

    Ok(())
}
