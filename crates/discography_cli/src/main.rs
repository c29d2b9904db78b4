//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `discography_core` linkage with a deterministic ping/version line.
//! - Dump album/singer listings from a database file as JSON.
//!
//! Usage: `discography_cli [DB_PATH [albums|singers|extend-albums|extend-album <ID>]]`
//!
//! Logging is enabled only when `DISCOGRAPHY_LOG_DIR` is set; the level comes
//! from `DISCOGRAPHY_LOG_LEVEL` or the build-mode default.

use discography_core::db::open_db;
use discography_core::{
    core_version, default_log_level, init_logging, ping, AlbumId, AlbumService, SingerService,
    SqliteAlbumRepository, SqliteSingerRepository,
};
use log::{error, info};
use std::error::Error;
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "DISCOGRAPHY_LOG_DIR";
const LOG_LEVEL_ENV: &str = "DISCOGRAPHY_LOG_LEVEL";

fn main() -> ExitCode {
    println!("discography_core ping={}", ping());
    println!("discography_core version={}", core_version());

    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        let level =
            std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(db_path) = args.first() else {
        return ExitCode::SUCCESS;
    };
    let command = args.get(1).map(String::as_str).unwrap_or("extend-albums");

    match run(db_path, command, args.get(2).map(String::as_str)) {
        Ok(output) => {
            println!("{output}");
            info!("event=cli_command module=cli status=ok command={command}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_command module=cli status=error command={command} error={err}");
            eprintln!("{command} failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(db_path: &str, command: &str, arg: Option<&str>) -> Result<String, Box<dyn Error>> {
    let conn = open_db(db_path)?;
    let singers = SingerService::new(SqliteSingerRepository::try_new(&conn)?);
    let albums = AlbumService::new(SqliteAlbumRepository::try_new(&conn)?, &singers);

    let output = match command {
        "albums" => serde_json::to_string_pretty(&albums.list_albums()?)?,
        "singers" => serde_json::to_string_pretty(&singers.list_singers()?)?,
        "extend-albums" => serde_json::to_string_pretty(&albums.list_extend_albums()?)?,
        "extend-album" => {
            let id = arg
                .ok_or("extend-album requires an album id")?
                .parse::<i64>()?;
            serde_json::to_string_pretty(&albums.get_extend_album(AlbumId(id))?)?
        }
        other => return Err(format!("unknown command `{other}`").into()),
    };

    Ok(output)
}
