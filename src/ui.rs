use crossterm::style::Stylize;

const LOGO: &str = r#"
  ██████╗ ██╗      █████╗ ██╗███╗   ██╗████████╗███████╗██████╗ ███╗   ███╗
  ██╔══██╗██║     ██╔══██╗██║████╗  ██║╚══██╔══╝██╔════╝██╔══██╗████╗ ████║
  ██████╔╝██║     ███████║██║██╔██╗ ██║   ██║   █████╗  ██████╔╝██╔████╔██║
  ██╔═══╝ ██║     ██╔══██║██║██║╚██╗██║   ██║   ██╔══╝  ██╔══██╗██║╚██╔╝██║
  ██║     ███████╗██║  ██║██║██║ ╚████║   ██║   ███████╗██║  ██║██║ ╚═╝ ██║
  ╚═╝     ╚══════╝╚═╝  ╚═╝╚═╝╚═╝  ╚═══╝   ╚═╝   ╚══════╝╚═╝  ╚═╝╚═╝     ╚═╝
"#;

const WELCOME: &str = r#"
  ╔════════════════════════════════════════════════════════════╗
  ║                                                            ║
  ║   Welcome to plainterm!                                    ║
  ║                                                            ║
  ║   Human-readable commands for your terminal.               ║
  ║   Type 'plainterm help' to see all commands.               ║
  ║                                                            ║
  ╚════════════════════════════════════════════════════════════╝
"#;

const SETUP_COMPLETE: &str = r#"
  ╔════════════════════════════════════════════════════════════╗
  ║                                                            ║
  ║   Setup Complete!                                          ║
  ║                                                            ║
  ║   Restart your terminal or run:                            ║
  ║                                                            ║
  ║     source ~/.zshrc     (Mac/Linux zsh)                    ║
  ║     source ~/.bashrc    (Mac/Linux bash)                   ║
  ║                                                            ║
  ║   Then try:                                                ║
  ║                                                            ║
  ║     plainterm tour       Take a quick walkthrough          ║
  ║     git show changes     See modified files                ║
  ║     git help             See all git commands              ║
  ║                                                            ║
  ╚════════════════════════════════════════════════════════════╝
"#;

pub fn print_logo() {
    println!("{}", LOGO.green());
}

pub fn print_welcome() {
    println!("{}", WELCOME.green());
}

pub fn print_setup_complete() {
    println!("{}", SETUP_COMPLETE.green());
}

pub fn print_success(message: &str) {
    println!("{}", format!("  ✓ {}", message).green());
}

pub fn print_error(message: &str) {
    println!("{}", format!("  ✗ {}", message).red());
}

pub fn print_warning(message: &str) {
    println!("{}", format!("  ⚠ {}", message).yellow());
}

pub fn print_info(message: &str) {
    println!("{}", format!("  ℹ {}", message).blue());
}

/// The line printed before every executed command. Exactly one of
/// these appears per execution, whatever the child's outcome.
pub fn print_running(command: &str) {
    println!("{}{}", "  Running: ".dark_grey(), command.white());
}
