use std::net::IpAddr;

use clap::{Arg, Command};
use item_registry_server::server::{ServerConfig, ServerNode};
use log::LevelFilter;

fn setup_logger(level: LevelFilter, log_file: Option<&str>) -> Result<(), fern::InitError> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout());
    if let Some(path) = log_file {
        dispatch = dispatch.chain(fern::log_file(path)?);
    }
    dispatch.apply()?;
    Ok(())
}

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    let matches = Command::new("item-registry-server")
        .version("0.1.0")
        .about("An in-memory item registry served over HTTP")
        .arg(
            Arg::new("address")
                .long("address")
                .takes_value(true)
                .default_value("0.0.0.0")
                .validator(|s| s.parse::<IpAddr>())
                .help("Address to listen on"),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .takes_value(true)
                .default_value("8080")
                .validator(|s| s.parse::<u16>())
                .help("Port to listen on"),
        )
        .arg(
            Arg::new("log_level")
                .long("log-level")
                .takes_value(true)
                .default_value("info")
                .possible_values(["off", "error", "warn", "info", "debug", "trace"])
                .help("Maximum log level"),
        )
        .arg(
            Arg::new("log_file")
                .long("log-file")
                .takes_value(true)
                .help("Also append log output to this file"),
        )
        .get_matches();

    let level = matches
        .value_of_t::<LevelFilter>("log_level")
        .unwrap_or_else(|e| e.exit());
    if let Err(e) = setup_logger(level, matches.value_of("log_file")) {
        eprintln!("Failed to set up logger: {}", e);
    }

    let config = ServerConfig {
        address: matches
            .value_of_t::<IpAddr>("address")
            .unwrap_or_else(|e| e.exit()),
        port: matches
            .value_of_t::<u16>("port")
            .unwrap_or_else(|e| e.exit()),
    };
    let server_node = ServerNode::new(config);
    server_node.build().launch().await?;
    Ok(())
}
