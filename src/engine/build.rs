//! Running the engine build tool for the project's editor target.

use super::EnginePaths;
use crate::config::{Config, Platform};
use crate::error::{Result, SubrealError};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

/// Number of trailing stderr lines kept in [`BuildOutcome::stderr_tail`].
const STDERR_TAIL_LINES: usize = 20;

/// Result of a build tool run.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    /// The command line that was run.
    pub command: String,
    /// Exit code of the process (None if killed or terminated by a signal).
    pub exit_code: Option<i32>,
    /// Whether the process was killed due to timeout.
    pub timed_out: bool,
    pub duration: Duration,
    pub stdout_log: PathBuf,
    pub stderr_log: PathBuf,
    /// Last lines written to stderr.
    pub stderr_tail: Vec<String>,
}

impl BuildOutcome {
    pub fn is_success(&self) -> bool {
        !self.timed_out && self.exit_code == Some(0)
    }
}

/// Program and arguments that build the editor target.
///
/// Shell scripts are run through `bash` outside Windows.
pub fn build_command(config: &Config, paths: &EnginePaths) -> Result<Vec<String>> {
    let mut args = Vec::new();
    if paths.platform != Platform::Windows {
        args.push("bash".to_string());
    }
    args.push(paths.build_tool.to_string_lossy().into_owned());
    args.push(format!("{}Editor", config.project_name));
    args.push(paths.platform.target_name().to_string());
    args.push(config.build_configuration.clone());
    args.push(paths.descriptor.to_string_lossy().into_owned());
    args.extend(config.extra_build_args()?);
    Ok(args)
}

/// Builds the project's editor target, waiting up to the configured timeout.
///
/// Output goes to `Saved/Logs/SubrealBuild.{stdout,stderr}.log` in the
/// project directory. A non-zero exit is reported through the outcome, not
/// as an error.
pub fn build_project(config: &Config) -> Result<BuildOutcome> {
    let paths = EnginePaths::resolve(config);

    if !paths.build_tool.is_file() {
        return Err(SubrealError::ValidationError(format!(
            "build tool not found: {}",
            paths.build_tool.display()
        )));
    }
    if !paths.descriptor.is_file() {
        return Err(SubrealError::ValidationError(format!(
            "project file not found: {}",
            paths.descriptor.display()
        )));
    }

    let args = build_command(config, &paths)?;
    let command_line = shell_words::join(&args);

    let logs_dir = paths.project_dir.join("Saved").join("Logs");
    std::fs::create_dir_all(&logs_dir).map_err(|e| {
        SubrealError::FilesystemError(format!(
            "failed to create log directory '{}': {}",
            logs_dir.display(),
            e
        ))
    })?;
    let stdout_log = logs_dir.join("SubrealBuild.stdout.log");
    let stderr_log = logs_dir.join("SubrealBuild.stderr.log");
    let stdout_file = create_log(&stdout_log)?;
    let stderr_file = create_log(&stderr_log)?;

    log::info!("Running build: {}", command_line);

    let start_time = Instant::now();
    let mut child = Command::new(&args[0])
        .args(&args[1..])
        .current_dir(&paths.project_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::from(stdout_file))
        .stderr(Stdio::from(stderr_file))
        .spawn()
        .map_err(|e| {
            SubrealError::ProcessError(format!(
                "failed to start build tool '{}': {}",
                args[0], e
            ))
        })?;

    let timeout = Duration::from_secs(config.build_timeout_secs);
    let (exit_code, timed_out) = wait_with_timeout(&mut child, timeout)?;
    let duration = start_time.elapsed();

    if timed_out {
        log::warn!("Build killed after {}s", config.build_timeout_secs);
    } else {
        log::info!("Build finished with {:?} in {:.1}s", exit_code, duration.as_secs_f64());
    }

    Ok(BuildOutcome {
        command: command_line,
        exit_code,
        timed_out,
        duration,
        stderr_tail: read_tail(&stderr_log, STDERR_TAIL_LINES),
        stdout_log,
        stderr_log,
    })
}

fn create_log(path: &std::path::Path) -> Result<std::fs::File> {
    std::fs::File::create(path).map_err(|e| {
        SubrealError::FilesystemError(format!(
            "failed to create build log '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Wait for a child process with timeout.
///
/// Returns (exit_code, timed_out).
fn wait_with_timeout(child: &mut Child, timeout: Duration) -> Result<(Option<i32>, bool)> {
    let start = Instant::now();
    let poll_interval = Duration::from_millis(100);

    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok((status.code(), false)),
            Ok(None) => {
                if start.elapsed() >= timeout {
                    // SIGKILL on Unix, TerminateProcess on Windows.
                    let _ = child.kill();
                    let _ = child.wait();
                    return Ok((None, true));
                }
                std::thread::sleep(poll_interval);
            }
            Err(e) => {
                return Err(SubrealError::ProcessError(format!(
                    "failed to check build status: {}",
                    e
                )));
            }
        }
    }
}

fn read_tail(path: &std::path::Path, lines: usize) -> Vec<String> {
    let Ok(bytes) = std::fs::read(path) else {
        return Vec::new();
    };
    let text = String::from_utf8_lossy(&bytes);
    let all: Vec<&str> = text.lines().collect();
    let start = all.len().saturating_sub(lines);
    all[start..].iter().map(|line| line.to_string()).collect()
}
