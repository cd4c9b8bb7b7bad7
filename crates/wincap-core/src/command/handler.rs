use std::io::{self, BufRead, Write};

use tracing::{error, info, warn};

use crate::capture::{ProcessRunner, capture};
use crate::filename::build_filename;
use crate::window::{
    WindowDescriptor, WindowDirectory, WindowError, matching_windows, owner_names,
    resolve_window_id, resolve_window_ids,
};

use super::errors::CommandError;
use super::menu::prompt_choice;
use super::table::{write_app_menu, write_window_menu, write_windows_table};
use super::types::{CommandOutcome, CommandRequest, CommandState, Mode};

/// Wires window discovery, filename generation and capture into the
/// preview, single, multi and interactive modes.
///
/// All user-facing text goes to the `out` sink passed to each call; menus
/// read their answers from `input`.
pub struct CommandOrchestrator<'a> {
    directory: WindowDirectory,
    runner: &'a dyn ProcessRunner,
}

impl<'a> CommandOrchestrator<'a> {
    pub fn new(directory: WindowDirectory, runner: &'a dyn ProcessRunner) -> Self {
        Self { directory, runner }
    }

    /// Run the mode selected by `request`.
    ///
    /// Mode conflicts are rejected before the window server is queried.
    pub fn run(
        &self,
        request: &CommandRequest,
        out: &mut dyn Write,
        input: &mut dyn BufRead,
    ) -> Result<CommandOutcome, CommandError> {
        let mode = request.mode().inspect_err(|e| {
            warn!(event = "core.command.mode_rejected", error = %e);
        })?;

        info!(
            event = "core.command.run_started",
            mode = mode.as_str(),
            app = ?request.app(),
            title = request.title()
        );
        transition(mode, CommandState::Idle);

        let result = match mode {
            Mode::Preview => self.preview(request, out).map(CommandOutcome::Previewed),
            Mode::Single => self
                .capture_single(request, out)
                .map(|f| CommandOutcome::Captured(vec![f])),
            Mode::Multi => self.capture_all(request, out).map(CommandOutcome::Captured),
            Mode::Interactive => self
                .capture_interactive(request, out, input)
                .map(|f| CommandOutcome::Captured(vec![f])),
        };

        match &result {
            Ok(_) => {
                transition(mode, CommandState::Done);
                info!(event = "core.command.run_completed", mode = mode.as_str());
            }
            Err(e) => {
                transition(mode, CommandState::Failed);
                error!(event = "core.command.run_failed", mode = mode.as_str(), error = %e);
            }
        }
        result
    }

    /// List the windows matching the filters without capturing anything.
    pub fn preview(
        &self,
        request: &CommandRequest,
        out: &mut dyn Write,
    ) -> Result<Vec<WindowDescriptor>, CommandError> {
        transition(Mode::Preview, CommandState::Resolving);
        let app = request.app().unwrap_or("");
        let windows = self.directory.list(request.query())?;
        let matches: Vec<WindowDescriptor> = matching_windows(&windows, app, request.title())
            .cloned()
            .collect();

        if matches.is_empty() {
            return Err(not_found(app, request.title()));
        }

        if request.json() {
            serde_json::to_writer_pretty(&mut *out, &matches).map_err(io::Error::from)?;
            writeln!(out)?;
        } else {
            writeln!(out, "Matching windows:")?;
            write_windows_table(out, &matches)?;
        }

        info!(event = "core.command.preview_completed", count = matches.len());
        Ok(matches)
    }

    /// Capture the first window matching the filters.
    pub fn capture_single(
        &self,
        request: &CommandRequest,
        out: &mut dyn Write,
    ) -> Result<String, CommandError> {
        transition(Mode::Single, CommandState::Resolving);
        let app = request.app().unwrap_or("");
        let windows = self.directory.list(request.query())?;
        let window_id = resolve_window_id(&windows, app, request.title())?;

        let filename = match request.filename() {
            Some(name) => name.to_string(),
            None => build_filename(app, request.title()),
        };

        transition(Mode::Single, CommandState::Capturing);
        let saved = capture(self.runner, window_id, &filename, request.capture())?;
        writeln!(out, "{}", saved)?;
        Ok(saved)
    }

    /// Capture every window matching the filters, in enumeration order.
    ///
    /// An explicit filename is ignored. Every capture gets a generated name
    /// from the same app/title inputs, so two captures in the same second
    /// write to the same file.
    pub fn capture_all(
        &self,
        request: &CommandRequest,
        out: &mut dyn Write,
    ) -> Result<Vec<String>, CommandError> {
        let app = request.app().unwrap_or("");

        if let Some(ignored) = request.filename() {
            warn!(event = "core.command.filename_ignored", filename = ignored);
            writeln!(
                out,
                "Taking screenshots of all windows belonging to {}, filename option ignored.",
                app
            )?;
        }

        transition(Mode::Multi, CommandState::Resolving);
        let windows = self.directory.list(request.query())?;
        let window_ids = resolve_window_ids(&windows, app, request.title())?;

        transition(Mode::Multi, CommandState::Capturing);
        let mut saved = Vec::with_capacity(window_ids.len());
        for window_id in window_ids {
            let filename = build_filename(app, request.title());
            let path = capture(self.runner, window_id, &filename, request.capture())?;
            writeln!(out, "{}", path)?;
            saved.push(path);
        }

        info!(event = "core.command.capture_all_completed", count = saved.len());
        Ok(saved)
    }

    /// Choose the application and window from menus, then capture it.
    ///
    /// A single candidate at either step is selected without prompting.
    pub fn capture_interactive(
        &self,
        request: &CommandRequest,
        out: &mut dyn Write,
        input: &mut dyn BufRead,
    ) -> Result<String, CommandError> {
        transition(Mode::Interactive, CommandState::Resolving);
        let windows = self.directory.list(request.query())?;
        let title = request.title();

        let app = match request.app() {
            Some(app) => app.to_string(),
            None => {
                let apps = owner_names(&windows);
                if apps.is_empty() {
                    return Err(not_found("", title));
                }
                let index = if apps.len() == 1 {
                    writeln!(out, "Using application: {}", apps[0])?;
                    0
                } else {
                    writeln!(out, "Applications:")?;
                    write_app_menu(out, &apps)?;
                    prompt_choice(out, input, "Select an application", apps.len())?
                };
                apps[index].clone()
            }
        };

        let candidates: Vec<&WindowDescriptor> = matching_windows(&windows, &app, title).collect();
        let window = match candidates.as_slice() {
            [] => return Err(not_found(&app, title)),
            [only] => {
                writeln!(out, "Using window: {} {}", only.window_id(), only.title())?;
                *only
            }
            _ => {
                writeln!(out, "Windows:")?;
                write_window_menu(out, &candidates)?;
                let index = prompt_choice(out, input, "Select a window", candidates.len())?;
                candidates[index]
            }
        };

        info!(
            event = "core.command.window_selected",
            window_id = window.window_id(),
            app = %app
        );

        let filename = match request.filename() {
            Some(name) => name.to_string(),
            None => build_filename(&app, title),
        };

        transition(Mode::Interactive, CommandState::Capturing);
        let saved = capture(self.runner, window.window_id(), &filename, request.capture())?;
        writeln!(out, "{}", saved)?;
        Ok(saved)
    }
}

fn transition(mode: Mode, state: CommandState) {
    info!(
        event = "core.command.state_changed",
        mode = mode.as_str(),
        state = state.as_str()
    );
}

fn not_found(app: &str, title: &str) -> CommandError {
    WindowError::WindowNotFound {
        app: app.to_string(),
        title: title.to_string(),
    }
    .into()
}
