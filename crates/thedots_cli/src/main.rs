//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to exercise `thedots_core` end to end.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage:
//! - `thedots_cli` / `thedots_cli ping` / `thedots_cli version`
//! - `thedots_cli import <db> <list-name> <file>`
//! - `thedots_cli squares <db> <list-name>`
//! - `thedots_cli export <db> <list-name>`
//!
//! `THEDOTS_LIST_SIZE_LIMIT`, `THEDOTS_LOG_LEVEL` and `THEDOTS_LOG_DIR` are
//! read from the environment; logging stays off unless `THEDOTS_LOG_DIR` is set.

use log::info;
use rusqlite::Connection;
use std::error::Error;
use std::process::ExitCode;
use thedots_core::db::open_db;
use thedots_core::{
    default_log_level, init_logging, ListConfig, PointList, PointListRepository,
    PointListService, SqlitePointListRepository, SqlitePointRepository, SquareService,
    SquareVertex,
};

type CliResult<T> = Result<T, Box<dyn Error>>;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> CliResult<()> {
    init_logging_from_env()?;
    let config = ListConfig::from_env()?;

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] | ["ping"] => println!("thedots_core ping={}", thedots_core::ping()),
        ["version"] => println!("thedots_core version={}", thedots_core::core_version()),
        ["import", db, name, file] => import(db, name, file, config)?,
        ["squares", db, name] => squares(db, name)?,
        ["export", db, name] => export(db, name)?,
        _ => return Err(usage().into()),
    }
    Ok(())
}

fn init_logging_from_env() -> CliResult<()> {
    let Ok(log_dir) = std::env::var("THEDOTS_LOG_DIR") else {
        return Ok(());
    };
    let level =
        std::env::var("THEDOTS_LOG_LEVEL").unwrap_or_else(|_| default_log_level().to_string());
    init_logging(&level, &log_dir)?;
    Ok(())
}

fn import(db: &str, name: &str, file: &str, config: ListConfig) -> CliResult<()> {
    let conn = open_db(db)?;
    let service = PointListService::new(
        SqlitePointRepository::try_new(&conn)?,
        SqlitePointListRepository::try_new(&conn)?,
    );

    let list = match service.find_list_by_name(name)? {
        Some(list) => list,
        None => {
            let list = PointList::new(name);
            service.create_list(&list)?;
            list
        }
    };

    let content = std::fs::read_to_string(file)?;
    let warnings = service.import_points(content.lines(), &list.id, config.point_list_size_limit)?;
    info!(
        "event=cli_import module=cli status=ok list_id={} warnings={}",
        list.id,
        warnings.len()
    );
    for warning in &warnings {
        println!("warning: {}", warning.message());
    }
    println!("list={} id={}", list.name, list.id);
    Ok(())
}

fn squares(db: &str, name: &str) -> CliResult<()> {
    let conn = open_db(db)?;
    let list = find_list(&conn, name)?;

    let squares = SquareService::new(SqlitePointRepository::try_new(&conn)?).find_squares(&list.id)?;
    for square in &squares {
        let corners: Vec<String> = SquareVertex::ALL
            .iter()
            .map(|vertex| {
                let point = square.vertex(*vertex);
                format!("({} {})", point.x(), point.y())
            })
            .collect();
        println!("{}", corners.join(" "));
    }
    println!("squares={}", squares.len());
    Ok(())
}

fn export(db: &str, name: &str) -> CliResult<()> {
    let conn = open_db(db)?;
    let list = find_list(&conn, name)?;
    let service = PointListService::new(
        SqlitePointRepository::try_new(&conn)?,
        SqlitePointListRepository::try_new(&conn)?,
    );
    println!("{}", service.export_points(&list.id)?);
    Ok(())
}

fn find_list(conn: &Connection, name: &str) -> CliResult<PointList> {
    let list = SqlitePointListRepository::try_new(conn)?
        .find_by_name(name)?
        .ok_or_else(|| format!("no list named `{name}`"))?;
    Ok(list)
}

fn usage() -> String {
    "usage: thedots_cli [ping|version|import <db> <list-name> <file>|squares <db> <list-name>|export <db> <list-name>]".to_string()
}
