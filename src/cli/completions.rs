use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    npmctl-install completions bash > ~/.bash_completion.d/npmctl-install\n\n\
                  Generate zsh completions:\n    npmctl-install completions zsh > ~/.zfunc/_npmctl-install\n\n\
                  Generate fish completions:\n    npmctl-install completions fish > ~/.config/fish/completions/npmctl-install.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
