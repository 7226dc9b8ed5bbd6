use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Enable completions for the current bash session:\n    source <(gameshell completions bash)\n\n\
                  Install zsh completions:\n    gameshell completions zsh > ~/.zfunc/_gameshell\n\n\
                  Install fish completions:\n    gameshell completions fish > ~/.config/fish/completions/gameshell.fish\n\n\
                  PowerShell ('pwsh' is accepted too):\n    gameshell completions pwsh | Out-String | Invoke-Expression")]
pub struct CompletionsArgs {
    /// Target shell: bash, elvish, fish, powershell (pwsh) or zsh, any case
    pub shell: String,
}
