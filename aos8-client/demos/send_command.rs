//! Send a CLI command example
//!
//! This example logs in to an OmniSwitch, sends one CLI command and prints
//! the decoded result, then prints the normalized interface status table.
//!
//! # Prerequisites
//!
//! - OmniSwitch running AOS8 with the web management service enabled
//! - Valid credentials
//!
//! # Usage
//!
//! ```bash
//! cargo run --example send_command -- --url https://192.168.70.1 --user admin --password switch
//! ```
//!
//! Another command:
//! ```bash
//! cargo run --example send_command -- --url https://192.168.70.1 --password switch --command "show vlan"
//! ```

use std::env;
use std::time::Duration;

use aos8_client::{ClientBuilder, Output};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    println!("=== aos8-client Send Command Example ===\n");
    println!("Connecting to {}...", args.url);

    let mut client = ClientBuilder::new(&args.url)
        .username(&args.user)
        .password(&args.password)
        .timeout(Duration::from_secs(args.timeout))
        .debug(args.debug)
        .build()
        .await?;
    println!("Logged in!\n");

    println!("Executing: {}", args.command);
    let result = client.cli().send_command(&args.command).await?;
    if result.success {
        println!("{}", result.text().unwrap_or_default());
    } else {
        eprintln!(
            "Command failed (diag={}): {}",
            result.diag,
            result
                .error
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default()
        );
    }

    println!("\n--- Interface status ---\n");
    let status = client.interface().list().await?;
    match &status.output {
        Some(Output::Table(rows)) if status.success => {
            for row in rows {
                println!(
                    "{:<10} admin={:<4} speed={}",
                    row.get("port").map(String::as_str).unwrap_or("-"),
                    row.get("admin_status").map(String::as_str).unwrap_or("-"),
                    row.get("det_speed").map(String::as_str).unwrap_or("-"),
                );
            }
        }
        _ => eprintln!("Status read failed (diag={})", status.diag),
    }

    client.close().await?;
    println!("\nDisconnected.");

    Ok(())
}

struct Args {
    url: String,
    user: String,
    password: String,
    command: String,
    timeout: u64,
    debug: bool,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut url = "https://192.168.70.1".to_string();
        let mut user = "admin".to_string();
        let mut password = env::var("AOS_PASSWORD").unwrap_or_default();
        let mut command = "show configuration snapshot".to_string();
        let mut timeout = 10u64;
        let mut debug = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--url" => {
                    i += 1;
                    if i < args.len() {
                        url = args[i].clone();
                    }
                }
                "--user" | "-u" => {
                    i += 1;
                    if i < args.len() {
                        user = args[i].clone();
                    }
                }
                "--password" | "-P" => {
                    i += 1;
                    if i < args.len() {
                        password = args[i].clone();
                    }
                }
                "--command" | "-c" => {
                    i += 1;
                    if i < args.len() {
                        command = args[i].clone();
                    }
                }
                "--timeout" | "-t" => {
                    i += 1;
                    if i < args.len() {
                        timeout = args[i].parse().unwrap_or(10);
                    }
                }
                "--debug" | "-d" => debug = true,
                _ => {}
            }
            i += 1;
        }

        Self {
            url,
            user,
            password,
            command,
            timeout,
            debug,
        }
    }
}
