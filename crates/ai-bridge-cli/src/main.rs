use std::ffi::OsString;
use std::io::{self, Read, Write};

use ai_bridge::{ping, Message};
use clap::Parser;

/// Answer a ping the way a bridge host would.
///
/// With MESSAGE the argument is answered; otherwise stdin is read as raw
/// bytes. Either way the payload must be valid UTF-8.
#[derive(Parser)]
#[command(name = "ai-bridge-ping", version)]
struct Cli {
    /// Message to answer instead of reading stdin.
    message: Option<OsString>,
}

/// Arguments that are not valid UTF-8 go through the bytes path so they fail
/// like bad stdin does.
fn arg_message(arg: OsString) -> Message {
    match arg.into_string() {
        Ok(text) => Message::Text(text),
        Err(raw) => Message::Bytes(raw.as_encoded_bytes().to_vec()),
    }
}

fn run(cli: Cli) -> Result<String, Box<dyn std::error::Error>> {
    let msg = match cli.message {
        Some(arg) => arg_message(arg),
        None => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            Message::Bytes(buf)
        }
    };
    Ok(ping(msg)?)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(reply) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{}", reply) {
                log::error!("write failed: {}", e);
                std::process::exit(1);
            }
        }
        Err(e) => {
            log::error!("ping failed: {}", e);
            std::process::exit(1);
        }
    }
}
