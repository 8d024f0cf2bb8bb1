use crate::domain::models::{ErrorBody, JsonError, JsonOut};
use serde::Serialize;

pub fn print_json<T: Serialize>(ok: bool, data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok, data })?
    );
    Ok(())
}

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        print_json(true, data)
    } else {
        for d in data {
            println!("{}", row(d));
        }
        Ok(())
    }
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        print_json(true, data)
    } else {
        println!("{}", row(&data));
        Ok(())
    }
}

/// Error envelope on stdout in JSON mode, a single diagnostic on stderr otherwise.
pub fn print_error(json: bool, code: &str, message: &str) {
    if json {
        let body = JsonError {
            ok: false,
            error: ErrorBody {
                code: code.to_string(),
                message: message.to_string(),
            },
        };
        match serde_json::to_string_pretty(&body) {
            Ok(s) => println!("{}", s),
            Err(_) => eprintln!("❌ {}", message),
        }
    } else {
        eprintln!("❌ {}", message);
    }
}
