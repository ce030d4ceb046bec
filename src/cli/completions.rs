use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    cnab-publish completions bash > ~/.bash_completion.d/cnab-publish\n\n\
                  Generate zsh completions:\n    cnab-publish completions zsh > ~/.zfunc/_cnab-publish\n\n\
                  Generate fish completions:\n    cnab-publish completions fish > ~/.config/fish/completions/cnab-publish.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
