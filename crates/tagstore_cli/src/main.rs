//! Demo entry point wiring config, logging, backend and the tag controller.
//!
//! Failure to open the backend is fatal and exits with status 1.

use log::{error, info};
use serde_json::json;
use std::process::ExitCode;
use tagstore_core::{
    init_logging, CoreConfig, RepoError, RepoResult, SqliteTagRepository, TagController,
    TagRepository,
};

fn main() -> ExitCode {
    let config = CoreConfig::from_env();

    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("tagstore: logging disabled: {err}");
        }
    }

    let conn = match config.open_db() {
        Ok(conn) => conn,
        Err(err) => {
            error!("event=cli_start module=cli status=error error_code=db_unreachable error={err}");
            eprintln!("tagstore: failed to connect database: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&conn) {
        Ok(()) => {
            info!("event=cli_run module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_run module=cli status=error error={err}");
            eprintln!("tagstore: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(conn: &rusqlite::Connection) -> RepoResult<()> {
    let repo = SqliteTagRepository::try_new(conn)?;
    seed(&repo)?;

    let controller = TagController::new(repo);
    print_step("list_all", controller.list_all().map(|tags| json!(tags)));
    print_step("get_by_id", controller.get_by_id("1").map(|tag| json!(tag)));
    print_step("create", controller.create("3", "Amazon").map(|tag| json!(tag)));
    print_step(
        "update",
        controller.update("2", "Microsoft").map(|tag| json!(tag)),
    );
    print_step("delete", controller.delete("2").map(|()| json!(null)));

    Ok(())
}

/// Inserts the demo rows unless a previous run already did.
fn seed(repo: &SqliteTagRepository<'_>) -> RepoResult<()> {
    for (id, name) in [("1", "Google"), ("2", "Facebook")] {
        if repo.get_by_id(id)?.is_zero() {
            repo.create(id, name)?;
        }
    }
    Ok(())
}

fn print_step(step: &str, result: Result<serde_json::Value, RepoError>) {
    let line = match result {
        Ok(value) => json!({ "step": step, "ok": value }),
        Err(err) => json!({ "step": step, "error": err.to_string() }),
    };
    println!("{line}");
}
