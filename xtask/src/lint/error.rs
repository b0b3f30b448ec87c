use thiserror::Error;

#[derive(Debug, Error)]
pub enum LintError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Required command not found: {command} ({hint})")]
    MissingCommand { command: String, hint: String },

    #[error("One or more checks failed")]
    ChecksFailed,
}

pub type Result<T> = std::result::Result<T, LintError>;

/// Fails when `command --version` cannot be spawned.
pub fn require_command(command: &str, hint: &str) -> Result<()> {
    std::process::Command::new(command)
        .arg("--version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|_| ())
        .map_err(|_| LintError::MissingCommand {
            command: command.to_string(),
            hint: hint.to_string(),
        })
}
