//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, and PowerShell.

use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

use crate::cli::args::Cli;
use crate::error::ChoresError;

/// Generate shell completions for the specified shell.
///
/// # Arguments
///
/// * `shell` - The shell to generate completions for
///
/// # Returns
///
/// The completion script as a string.
///
/// # Errors
///
/// Returns `ChoresError::Completion` if the generated script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, ChoresError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    generate_to(&mut buf, shell, &mut cmd)?;
    String::from_utf8(buf).map_err(|e| ChoresError::Completion(format!("UTF-8 error: {e}")))
}

fn generate_to<W: Write>(buf: &mut W, shell: Shell, cmd: &mut clap::Command) -> Result<(), ChoresError> {
    clap_complete::generate(shell, cmd, "chores", buf);
    Ok(())
}

/// Get shell from string name.
pub fn shell_from_str(s: &str) -> Option<Shell> {
    match s.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "powershell" | "ps" | "pwsh" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}

/// Get installation instructions for shell completions.
pub fn completion_install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => r#"# Add to ~/.bashrc or ~/.bash_profile:
source <(chores completions bash)

# Or save to a file:
chores completions bash > /usr/local/etc/bash_completion.d/chores
"#.to_string(),

        Shell::Zsh => r#"# Add to ~/.zshrc (before compinit):
source <(chores completions zsh)

# Or save to your fpath:
chores completions zsh > ~/.zsh/completions/_chores
# Then add to ~/.zshrc:
fpath=(~/.zsh/completions $fpath)
autoload -Uz compinit && compinit
"#.to_string(),

        Shell::Fish => r#"# Save to fish completions directory:
chores completions fish > ~/.config/fish/completions/chores.fish

# Or run directly:
chores completions fish | source
"#.to_string(),

        Shell::PowerShell => r#"# Add to your PowerShell profile ($PROFILE):
chores completions powershell | Out-String | Invoke-Expression

# Or save to a file and dot-source it:
chores completions powershell > ~/chores.ps1
. ~/chores.ps1
"#.to_string(),

        Shell::Elvish => r#"# Save to elvish completions directory:
chores completions elvish > ~/.elvish/lib/chores.elv

# Then add to ~/.elvish/rc.elv:
use chores
"#.to_string(),

        _ => "Unknown shell".to_string(),
    }
}
