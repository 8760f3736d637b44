//! Shell completions command

use clap::CommandFactory;

use crate::cli::CompletionsArgs;
use crate::error::{Result, invalid_config};

/// Generate shell completions
pub fn run(args: &CompletionsArgs) -> Result<()> {
    let shell = match args.shell.to_lowercase().as_str() {
        "bash" => clap_complete::Shell::Bash,
        "elvish" => clap_complete::Shell::Elvish,
        "fish" => clap_complete::Shell::Fish,
        "powershell" | "pwsh" => clap_complete::Shell::PowerShell,
        "zsh" => clap_complete::Shell::Zsh,
        _ => {
            return Err(invalid_config(format!(
                "unknown shell '{}', supported shells: bash, elvish, fish, powershell, zsh",
                args.shell
            )));
        }
    };

    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(
        shell,
        &mut cmd,
        "npmctl-install",
        &mut std::io::stdout().lock(),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(shell: &str) -> CompletionsArgs {
        CompletionsArgs {
            shell: shell.to_string(),
        }
    }

    #[test]
    fn test_completions_bash() {
        assert!(run(&args("bash")).is_ok());
    }

    #[test]
    fn test_completions_zsh() {
        assert!(run(&args("zsh")).is_ok());
    }

    #[test]
    fn test_completions_pwsh() {
        assert!(run(&args("pwsh")).is_ok());
    }

    #[test]
    fn test_completions_mixed_case() {
        assert!(run(&args("Fish")).is_ok());
    }

    #[test]
    fn test_completions_unknown_shell() {
        let err = run(&args("tcsh")).unwrap_err();
        assert!(err.to_string().contains("unknown shell 'tcsh'"));
    }
}
