use anyhow::{Context, Result};
use log::info;

use apputil::config::Config;
use apputil::constants::{CONFIG_GENERATED, ERROR_OTP_UNAVAILABLE, ERROR_TOKEN_UNAVAILABLE};
use apputil::{logger, AppUtil, SimpleAppUtil};

const USAGE: &str = "\
Usage: apputil <command> [args]

Commands:
  otp [length]             Generate a numeric one-time password
  token                    Generate a unique token
  expiry [hours]           Print the expiry instant for a duration
  expired <rfc3339>        Check whether an instant has passed
  date [rfc3339]           Format a date as e.g. \"1st Jan\"
  diff <a,b,..> <c,d,..>   Items of the first list missing from the second
                           (empty items such as in \"a,,b\" are kept)
  init-config [--force]    Write the default configuration file";

const FORCE_FLAG: &str = "--force";

/// Comma-separated list; a missing argument is the empty list.
fn split_list(arg: Option<&String>) -> Vec<String> {
    arg.map(|s| s.split(',').map(str::to_string).collect()).unwrap_or_default()
}

fn parse_number(arg: Option<&String>, default: i32) -> Result<i32> {
    match arg {
        Some(value) => value.parse().with_context(|| format!("Invalid number: {}", value)),
        None => Ok(default),
    }
}

/// Runs without loading the current config so a broken file can be replaced.
fn init_config(force: bool) -> Result<()> {
    let path = Config::default_config_path()?;
    if path.exists() && !force {
        anyhow::bail!("Config file already exists: {} (pass {} to overwrite)", path.display(), FORCE_FLAG);
    }
    Config::generate_default_config(&path, force)?;
    println!("{}: {}", CONFIG_GENERATED, path.display());

    if let Some(active) = Config::active_config_file() {
        if active != path {
            println!("Note: {} takes precedence over {}", active.display(), path.display());
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        eprintln!("{}", USAGE);
        return Ok(());
    };

    if command == "init-config" {
        return init_config(args.get(1).is_some_and(|arg| arg == FORCE_FLAG));
    }

    let config = Config::load()?;
    logger::init(&config.logging)?;

    let util = SimpleAppUtil::system();
    info!("Running command: {}", command);

    match command.as_str() {
        "otp" => {
            let length = parse_number(args.get(1), config.otp.length)?;
            let otp = util.generate_otp(length).context(ERROR_OTP_UNAVAILABLE)?;
            println!("{}", otp);
        }
        "token" => {
            let token = util.generate_unique_token().context(ERROR_TOKEN_UNAVAILABLE)?;
            let expires = util.expiry_time(config.token.expiry_hours);
            println!("{} (expires {})", token, expires.to_rfc3339());
        }
        "expiry" => {
            let hours = parse_number(args.get(1), config.token.expiry_hours)?;
            println!("{}", util.expiry_time(hours).to_rfc3339());
        }
        "expired" => {
            let text = args.get(1).context("Missing timestamp argument")?;
            let t = util.parse_time_rfc3339(text)?;
            println!("{}", util.is_expired(&t));
        }
        "date" => {
            let t = match args.get(1) {
                Some(text) => util.parse_time_rfc3339(text)?,
                None => util.current_time(),
            };
            println!("{}", util.format_ordinal_date(&t));
        }
        "diff" => {
            let a = split_list(args.get(1));
            let b = split_list(args.get(2));
            println!("{}", util.difference(&a, &b).join(","));
        }
        other => {
            eprintln!("Unknown command: {}\n\n{}", other, USAGE);
            std::process::exit(2);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_keeps_empty_items() {
        let arg = "a,,b".to_string();
        assert_eq!(split_list(Some(&arg)), vec!["a", "", "b"]);

        let empty = String::new();
        assert_eq!(split_list(Some(&empty)), vec![""]);
    }

    #[test]
    fn test_split_list_missing_argument() {
        assert!(split_list(None).is_empty());
    }

    #[test]
    fn test_diff_reports_empty_item() {
        let util = SimpleAppUtil::system();
        let a = "x,,y".to_string();
        let b = "x,y".to_string();
        assert_eq!(util.difference(&split_list(Some(&a)), &split_list(Some(&b))), vec![""]);
    }
}
