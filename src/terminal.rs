//! Terminal command dispatcher
//!
//! The drop-down terminal's command table, separated from any rendering.
//! Input is trimmed and lowercased, then matched against a fixed set of
//! commands; everything else falls through to "command not found".

/// What the host terminal should do with a command's result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutput {
    /// Print these lines.
    Text(Vec<String>),
    /// Wipe the scrollback.
    ClearScreen,
}

fn lines(raw: &[&str]) -> CommandOutput {
    CommandOutput::Text(raw.iter().map(|l| (*l).to_string()).collect())
}

/// The welcome screen printed when the terminal opens.
pub fn banner() -> Vec<String> {
    [
        "╔═══════════════════════════════════════════════════════╗",
        "║         DIGITAL RONIN TERMINAL v1.0                   ║",
        "║         \"The way of the warrior is found in code\"     ║",
        "╚═══════════════════════════════════════════════════════╝",
        "",
        "Type \"help\" for available commands.",
        "",
    ]
    .iter()
    .map(|l| (*l).to_string())
    .collect()
}

/// Run one command line against the fixed table.
pub fn execute(input: &str) -> CommandOutput {
    let command = input.trim().to_lowercase();

    match command.as_str() {
        "help" => lines(&[
            "Available commands:",
            "",
            "  whoami          - Display information about the ronin",
            "  contact         - Show contact information",
            "  clear           - Clear the terminal",
            "  sudo rm -rf /   - Try at your own risk...",
            "  help            - Show this help message",
            "",
        ]),

        "whoami" => lines(&[
            "",
            "┌─────────────────────────────────────────────┐",
            "│  THE DIGITAL RONIN                          │",
            "├─────────────────────────────────────────────┤",
            "│  Role:        Security Researcher           │",
            "│  Path:        The Way of the Samurai        │",
            "│  Philosophy:  \"Do not seek to follow in     │",
            "│               the footsteps of the wise.    │",
            "│               Seek what they sought.\"       │",
            "│                                             │",
            "│  Mission:     Master the blade of code,     │",
            "│               guard the digital realm       │",
            "└─────────────────────────────────────────────┘",
            "",
        ]),

        "contact" => lines(&[
            "",
            "CONTACT INFORMATION",
            "══════════════════════════════════════",
            "",
            "  Email:    ronin@example.com",
            "  GitHub:   github.com/digital-ronin",
            "  LinkedIn: linkedin.com/in/digital-ronin",
            "",
            "══════════════════════════════════════",
            "",
        ]),

        "clear" => CommandOutput::ClearScreen,

        "sudo rm -rf /" | "sudo rm -rf" => lines(&[
            "",
            "⚠  CRITICAL ERROR ⚠",
            "",
            "rm: cannot remove '/': Permission denied",
            "rm: cannot remove '/bin': Permission denied",
            "rm: cannot remove '/boot': Permission denied",
            "rm: cannot remove '/dev': Permission denied",
            "",
            "┌────────────────────────────────────────┐",
            "│  YOU HAVE NO POWER HERE, MORTAL!       │",
            "│                                        │",
            "│  The Digital Ronin protects this realm │",
            "└────────────────────────────────────────┘",
            "",
            "[SYSTEM INTEGRITY PROTECTED]",
            "",
        ]),

        "" => CommandOutput::Text(Vec::new()),

        _ => CommandOutput::Text(vec![
            format!("bash: {}: command not found", input.trim()),
            "Type \"help\" for available commands.".to_string(),
            String::new(),
        ]),
    }
}
