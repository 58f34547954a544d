use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    murano completions bash > ~/.bash_completion.d/murano\n\n\
                  Generate zsh completions:\n    murano completions zsh > ~/.zfunc/_murano\n\n\
                  Generate fish completions:\n    murano completions fish > ~/.config/fish/completions/murano.fish\n\n\
                  Generate PowerShell completions:\n    murano completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
