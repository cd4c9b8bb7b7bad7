use std::io;
use std::time::Duration;

use clap::ArgMatches;
use tracing::{error, info};

use wincap_core::capture::{CaptureOptions, SystemRunner};
use wincap_core::command::{CommandError, CommandOrchestrator, CommandOutcome, CommandRequest};
use wincap_core::errors::WincapError;
use wincap_core::events;
use wincap_core::window::{
    DEFAULT_QUERY_TIMEOUT_MS, DEFAULT_WINDOW_OPTIONS, WindowDirectory, parse_window_options,
};

pub fn run_command(matches: &ArgMatches) -> Result<(), CommandError> {
    events::log_app_startup();

    let result = build_request(matches).and_then(|request| execute(matches, &request));

    if let Err(e) = &result {
        error!(
            event = "cli.run_failed",
            error = %e,
            error_code = e.error_code(),
            user_error = e.is_user_error()
        );
        events::log_app_error(e);
    }
    result
}

fn execute(matches: &ArgMatches, request: &CommandRequest) -> Result<(), CommandError> {
    let timeout_ms = matches
        .get_one::<u64>("timeout")
        .copied()
        .unwrap_or(DEFAULT_QUERY_TIMEOUT_MS);
    let directory = WindowDirectory::system().with_timeout(Duration::from_millis(timeout_ms));
    let runner = SystemRunner;
    let orchestrator = CommandOrchestrator::new(directory, &runner);

    info!(
        event = "cli.run_started",
        app = ?request.app(),
        title = request.title(),
        timeout_ms = timeout_ms
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    match orchestrator.run(request, &mut out, &mut input)? {
        CommandOutcome::Previewed(windows) => {
            info!(event = "cli.run_completed", previewed = windows.len());
        }
        CommandOutcome::Captured(files) => {
            info!(event = "cli.run_completed", captured = files.len());
        }
    }
    Ok(())
}

/// Translate parsed arguments into a request. Window option tokens are
/// validated here so bad tokens fail before the window server is queried.
fn build_request(matches: &ArgMatches) -> Result<CommandRequest, CommandError> {
    let tokens = matches
        .get_one::<String>("window-options")
        .map(String::as_str)
        .unwrap_or(DEFAULT_WINDOW_OPTIONS);
    let mut query = parse_window_options(tokens)?;
    if matches.get_flag("include-desktop") {
        query = query.with_desktop();
    }
    if matches.get_flag("include-offscreen") {
        query = query.with_offscreen();
    }

    let mut capture = CaptureOptions::new().with_shadow(matches.get_flag("shadow"));
    if let Some(format) = matches.get_one::<String>("output") {
        capture = capture.with_format(format.as_str());
    }

    let mut request = CommandRequest::new(query, capture)
        .with_preview(matches.get_flag("preview"))
        .with_all_windows(matches.get_flag("all"))
        .with_interactive(matches.get_flag("interactive"))
        .with_json(matches.get_flag("json"));

    if let Some(app) = matches.get_one::<String>("app") {
        request = request.with_app(app.as_str());
    }
    if let Some(title) = matches.get_one::<String>("title") {
        request = request.with_title(title.as_str());
    }
    if let Some(filename) = matches.get_one::<String>("filename") {
        request = request.with_filename(filename.as_str());
    }

    Ok(request)
}
