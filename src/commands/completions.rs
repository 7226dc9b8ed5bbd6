//! Shell completions command

use clap::{CommandFactory, ValueEnum};
use clap_complete::Shell;

use crate::cli::CompletionsArgs;
use crate::error::{Result, ShellError};

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let shell = parse_shell(&args.shell)?;
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "gameshell", &mut std::io::stdout().lock());

    Ok(())
}

fn parse_shell(name: &str) -> Result<Shell> {
    let canonical = if name.eq_ignore_ascii_case("pwsh") {
        "powershell"
    } else {
        name
    };
    <Shell as ValueEnum>::from_str(canonical, true).map_err(|_| ShellError::UnsupportedShell {
        shell: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_bash() {
        let args = CompletionsArgs {
            shell: "bash".to_string(),
        };
        assert!(run(args).is_ok());
    }

    #[test]
    fn test_completions_zsh() {
        let args = CompletionsArgs {
            shell: "zsh".to_string(),
        };
        assert!(run(args).is_ok());
    }

    #[test]
    fn test_parse_shell_aliases_and_case() {
        assert_eq!(parse_shell("pwsh").unwrap(), Shell::PowerShell);
        assert_eq!(parse_shell("BASH").unwrap(), Shell::Bash);
        assert_eq!(parse_shell("Fish").unwrap(), Shell::Fish);
    }

    #[test]
    fn test_unknown_shell() {
        let err = parse_shell("tcsh").unwrap_err();
        assert!(matches!(err, ShellError::UnsupportedShell { .. }));
    }
}
