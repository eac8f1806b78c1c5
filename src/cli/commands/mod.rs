use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ColorChoice, Command,
};

pub const ARG_VERBOSITY: &str = "verbosity";
pub const ARG_STATE_FILE: &str = "state-file";
pub const ARG_LOGIN_DELAY_MS: &str = "login-delay-ms";

pub const DEFAULT_STATE_FILE: &str = ".herd-session.json";

#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("herd")
        .about("Livestock management dashboard session")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_STATE_FILE)
                .long("state-file")
                .help("File that keeps the session marker between runs")
                .default_value(DEFAULT_STATE_FILE)
                .env("HERD_STATE_FILE")
                .global(true)
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            Arg::new(ARG_LOGIN_DELAY_MS)
                .long("login-delay-ms")
                .help("Simulated login round trip in milliseconds")
                .default_value("1000")
                .env("HERD_LOGIN_DELAY_MS")
                .global(true)
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new(ARG_VERBOSITY)
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("HERD_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
        .subcommand(Command::new("status").about("Show the restored session"))
        .subcommand(
            Command::new("login")
                .about("Sign in with any non-empty e-mail and password")
                .arg(
                    Arg::new("email")
                        .short('e')
                        .long("email")
                        .help("Account e-mail")
                        .env("HERD_EMAIL")
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .short('p')
                        .long("password")
                        .help("Account password")
                        .env("HERD_PASSWORD")
                        .hide_env_values(true)
                        .required(true),
                ),
        )
        .subcommand(Command::new("logout").about("Sign out and forget the session marker"))
        .subcommand(
            Command::new("visit")
                .about("Open a dashboard path and show what renders")
                .arg(
                    Arg::new("path")
                        .help("Path to open, e.g. /animals")
                        .required(true),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "herd");
        assert_eq!(
            command.get_about().unwrap().to_string(),
            "Livestock management dashboard session"
        );
        assert_eq!(
            command.get_version().unwrap().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_defaults() {
        temp_env::with_vars(
            [
                ("HERD_STATE_FILE", None::<&str>),
                ("HERD_LOGIN_DELAY_MS", None),
                ("HERD_LOG_LEVEL", None),
            ],
            || {
                let matches = new().get_matches_from(vec!["herd", "status"]);
                assert_eq!(
                    matches
                        .get_one::<std::path::PathBuf>(ARG_STATE_FILE)
                        .map(|p| p.display().to_string()),
                    Some(DEFAULT_STATE_FILE.to_string())
                );
                assert_eq!(matches.get_one::<u64>(ARG_LOGIN_DELAY_MS).copied(), Some(1000));
                assert_eq!(matches.subcommand_name(), Some("status"));
            },
        );
    }

    #[test]
    fn test_login_args() {
        let matches = new().get_matches_from(vec![
            "herd",
            "login",
            "--email",
            "user@farm.com",
            "--password",
            "pw123456",
            "--login-delay-ms",
            "0",
        ]);

        assert_eq!(matches.get_one::<u64>(ARG_LOGIN_DELAY_MS).copied(), Some(0));
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "login");
        assert_eq!(
            sub.get_one::<String>("email").map(String::as_str),
            Some("user@farm.com")
        );
        assert_eq!(
            sub.get_one::<String>("password").map(String::as_str),
            Some("pw123456")
        );
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("HERD_STATE_FILE", Some("/tmp/herd.json")),
                ("HERD_LOGIN_DELAY_MS", Some("250")),
                ("HERD_LOG_LEVEL", Some("info")),
                ("HERD_EMAIL", Some("env@farm.com")),
                ("HERD_PASSWORD", Some("secret")),
            ],
            || {
                let matches = new().get_matches_from(vec!["herd", "login"]);
                assert_eq!(
                    matches
                        .get_one::<std::path::PathBuf>(ARG_STATE_FILE)
                        .map(|p| p.display().to_string()),
                    Some("/tmp/herd.json".to_string())
                );
                assert_eq!(matches.get_one::<u64>(ARG_LOGIN_DELAY_MS).copied(), Some(250));
                assert_eq!(matches.get_one::<u8>(ARG_VERBOSITY).copied(), Some(2));

                let sub = matches.subcommand_matches("login").unwrap();
                assert_eq!(
                    sub.get_one::<String>("email").map(String::as_str),
                    Some("env@farm.com")
                );
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("HERD_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["herd", "logout"]);
                assert_eq!(
                    matches.get_one::<u8>(ARG_VERBOSITY).copied(),
                    Some(index as u8)
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..5_usize {
            temp_env::with_vars([("HERD_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["herd".to_string(), "status".to_string()];
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);
                assert_eq!(
                    matches.get_one::<u8>(ARG_VERBOSITY).copied(),
                    Some(index as u8)
                );
            });
        }
    }

    #[test]
    fn test_subcommand_required() {
        let result = new().try_get_matches_from(vec!["herd"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_visit_requires_path() {
        assert!(new().try_get_matches_from(vec!["herd", "visit"]).is_err());

        let matches = new().get_matches_from(vec!["herd", "visit", "/animals"]);
        let sub = matches.subcommand_matches("visit").unwrap();
        assert_eq!(
            sub.get_one::<String>("path").map(String::as_str),
            Some("/animals")
        );
    }
}
