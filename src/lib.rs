use anyhow::Result;
use log::debug;
use std::process::ExitStatus;

mod command;
pub use command::{COMMAND_PREFIX, compose_command_line, shell_command};

/// Compose the simulator command line from `args` and run it synchronously
/// through the host shell.
///
/// The child's exit status is returned but carries no obligation: the
/// `simulate` binary discards it and exits 0 regardless, matching the shim's
/// forwarding contract.
pub fn launch<T: AsRef<str>>(args: &[T]) -> Result<ExitStatus> {
    let command_line = compose_command_line(args);
    let mut command = shell_command(&command_line);
    debug!("launching: {command:?}");
    let status = command.status()?;
    Ok(status)
}
