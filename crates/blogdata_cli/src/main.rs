//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `blogdata_core` linkage, migrations and validation end to end.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `blogdata_cli [DB_PATH] [LOG_DIR]`. Without `DB_PATH` an
//! in-memory database is used; without `LOG_DIR` nothing is logged.

use blogdata_core::db::{open_db, open_db_in_memory};
use blogdata_core::{
    core_version, default_log_level, init_logging, AuthorListQuery, AuthorService,
    PostListQuery, PostService, SqliteAuthorRepository, SqlitePostRepository,
};
use std::error::Error;
use std::process::ExitCode;

const PROBE_AUTHOR_NAME: &str = "blogdata probe";
const PROBE_PHONE_NUMBER: &str = "5550000000";
const PROBE_TITLE: &str = "Top 10 Secrets";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("blogdata_cli error={err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let db_path = args.next();
    if let Some(log_dir) = args.next() {
        init_logging(default_log_level(), &log_dir)?;
    }

    let conn = match db_path.as_deref() {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };
    println!("blogdata_core version={}", core_version());

    let authors = AuthorService::new(SqliteAuthorRepository::new(&conn));
    let author = match authors.find_author_by_name(PROBE_AUTHOR_NAME)? {
        Some(existing) => existing,
        None => authors.create_author(PROBE_AUTHOR_NAME, PROBE_PHONE_NUMBER)?,
    };
    println!("{author}");

    let posts = PostService::new(SqlitePostRepository::new(&conn));
    let post = posts.create_post(PROBE_TITLE, "a".repeat(250), None, "Fiction")?;
    println!("post id={} category={}", post.id(), post.category());

    match posts.create_post(PROBE_TITLE, "a".repeat(250), None, "Drama") {
        Ok(_) => return Err("invalid category was accepted".into()),
        Err(err) => println!("rejected: {err}"),
    }

    println!(
        "authors={} posts={}",
        authors.list_authors(&AuthorListQuery::default())?.len(),
        posts.list_posts(&PostListQuery::default())?.len()
    );
    Ok(())
}
