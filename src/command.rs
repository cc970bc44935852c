/// Fixed invocation of the external interpreter and the simulator script.
/// Every forwarded argument is appended after it.
pub const COMMAND_PREFIX: &str = "python3 simulator.py";

/// Concatenate the forwarded arguments after [`COMMAND_PREFIX`], each
/// followed by a single space. The trailing space after the last argument is
/// deliberate: the shell ignores it, and the composed string stays a plain
/// join with no special case for the final token.
///
/// Arguments are not quoted or escaped. An argument containing a space is
/// split into multiple words by the shell; that is the shim's contract.
pub fn compose_command_line<T: AsRef<str>>(args: &[T]) -> String {
    let mut command_line = String::from(COMMAND_PREFIX);
    command_line.push(' ');
    for arg in args {
        command_line.push_str(arg.as_ref());
        command_line.push(' ');
    }
    command_line
}

pub use os_specific::shell_command;

#[cfg(unix)]
mod os_specific {
    use std::process::Command;

    /// Wrap `command_line` in the host shell, as `system(3)` would.
    pub fn shell_command(command_line: &str) -> Command {
        let mut command = Command::new("sh");
        command.args(["-c", command_line]);
        command
    }
}

#[cfg(windows)]
mod os_specific {
    use std::process::Command;

    pub fn shell_command(command_line: &str) -> Command {
        let mut command = Command::new("cmd");
        command.args(["/C", command_line]);
        command
    }
}

#[cfg(test)]
mod tests {
    use super::compose_command_line;

    #[test]
    fn composes_prefix_arguments_and_trailing_space() {
        assert_eq!(
            "python3 simulator.py run --seed 42 ",
            compose_command_line(&["run", "--seed", "42"])
        );
    }

    #[test]
    fn preserves_argument_order() {
        assert_eq!(
            "python3 simulator.py 10 2 3 0.5 0.5 ",
            compose_command_line(&["10", "2", "3", "0.5", "0.5"])
        );
    }

    #[test]
    fn does_not_quote_or_escape() {
        assert_eq!(
            "python3 simulator.py a b $HOME ",
            compose_command_line(&["a b", "$HOME"])
        );
    }

    #[test]
    fn empty_argument_list_yields_bare_prefix() {
        let args: [&str; 0] = [];
        assert_eq!("python3 simulator.py ", compose_command_line(&args));
    }
}
