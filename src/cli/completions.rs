use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    bundlemap completions bash > ~/.bash_completion.d/bundlemap\n\n\
                  Generate zsh completions:\n    bundlemap completions zsh > ~/.zfunc/_bundlemap\n\n\
                  Generate fish completions:\n    bundlemap completions fish > ~/.config/fish/completions/bundlemap.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
