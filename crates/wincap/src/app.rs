use clap::{Arg, ArgAction, Command};
use wincap_core::window::{DEFAULT_WINDOW_OPTIONS, WINDOW_OPTIONS};

/// clap defaults are strings; kept equal to `DEFAULT_QUERY_TIMEOUT_MS`
const DEFAULT_QUERY_TIMEOUT_MS_STR: &str = "5000";

pub fn build_cli() -> Command {
    Command::new("wincap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Capture macOS windows by application name and title")
        .long_about(
            "wincap finds shareable windows through the macOS window server, matches them \
             against an application name and an optional title substring, and saves them \
             with the system screencapture tool. Without an application name it asks which \
             window to capture.",
        )
        .after_help(window_options_help())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("app")
                .value_name("APP_NAME")
                .help("Application name to match (case-insensitive substring)"),
        )
        .arg(
            Arg::new("title")
                .short('t')
                .long("title")
                .help("Window title to match (case-insensitive substring)")
                .default_value(""),
        )
        .arg(
            Arg::new("filename")
                .short('f')
                .long("filename")
                .help("Output file (default: <app>_<title>_<timestamp>.png)"),
        )
        .arg(
            Arg::new("all")
                .short('a')
                .long("all")
                .help("Capture every window belonging to the application")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("preview")
                .short('p')
                .long("preview")
                .visible_alias("dry-run")
                .help("List matching windows without capturing them")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("interactive")
                .short('i')
                .long("interactive")
                .help("Choose the application and window from a menu")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FORMAT")
                .help("Image format: png, pdf, jpg or tiff")
                .default_value("png"),
        )
        .arg(
            Arg::new("shadow")
                .short('s')
                .long("shadow")
                .help("Include the window shadow in the capture")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("window-options")
                .short('w')
                .long("window-options")
                .value_name("TOKENS")
                .help("Space-separated window selection options")
                .default_value(DEFAULT_WINDOW_OPTIONS),
        )
        .arg(
            Arg::new("include-desktop")
                .long("include-desktop")
                .help("Include desktop elements when listing windows")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("include-offscreen")
                .long("include-offscreen")
                .help("Include windows that are not on screen")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("MS")
                .help("Window query timeout in milliseconds")
                .value_parser(clap::value_parser!(u64))
                .default_value(DEFAULT_QUERY_TIMEOUT_MS_STR),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the preview listing as JSON")
                .action(ArgAction::SetTrue),
        )
}

fn window_options_help() -> String {
    let mut help = String::from("Window selection options:\n");
    for (token, description) in WINDOW_OPTIONS {
        help.push_str(&format!("  {:<16} {}\n", token, description));
    }
    help
}

#[cfg(test)]
mod tests {
    use super::*;
    use wincap_core::window::DEFAULT_QUERY_TIMEOUT_MS;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_timeout_default_matches_core() {
        assert_eq!(
            DEFAULT_QUERY_TIMEOUT_MS_STR.parse::<u64>().unwrap(),
            DEFAULT_QUERY_TIMEOUT_MS
        );
    }

    #[test]
    fn test_defaults() {
        let matches = build_cli().try_get_matches_from(["wincap"]).unwrap();
        assert_eq!(matches.get_one::<String>("app"), None);
        assert_eq!(matches.get_one::<String>("output").unwrap(), "png");
        assert_eq!(
            matches.get_one::<String>("window-options").unwrap(),
            DEFAULT_WINDOW_OPTIONS
        );
        assert_eq!(*matches.get_one::<u64>("timeout").unwrap(), 5000);
        assert!(!matches.get_flag("shadow"));
    }

    #[test]
    fn test_dry_run_alias() {
        let matches = build_cli()
            .try_get_matches_from(["wincap", "--dry-run", "Safari"])
            .unwrap();
        assert!(matches.get_flag("preview"));
        assert_eq!(matches.get_one::<String>("app").unwrap(), "Safari");
    }

    #[test]
    fn test_short_flags() {
        let matches = build_cli()
            .try_get_matches_from([
                "wincap", "Safari", "-t", "Docs", "-f", "out.png", "-a", "-o", "pdf", "-s",
            ])
            .unwrap();
        assert_eq!(matches.get_one::<String>("title").unwrap(), "Docs");
        assert_eq!(matches.get_one::<String>("filename").unwrap(), "out.png");
        assert!(matches.get_flag("all"));
        assert_eq!(matches.get_one::<String>("output").unwrap(), "pdf");
        assert!(matches.get_flag("shadow"));
    }

    #[test]
    fn test_unknown_format_is_left_to_capture() {
        let matches = build_cli()
            .try_get_matches_from(["wincap", "Safari", "-o", "bmp"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("output").unwrap(), "bmp");
    }
}
