use {
    anyhow::{Context, Result},
    crossterm::style::Stylize,
    std::{path::PathBuf, str::FromStr},
};

use crate::{store, ui};

/// Which surface the shell wrapper exposes. The dispatcher itself
/// never consults this; only the generated wrapper script does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Friendly,
    Traditional,
}

impl FromStr for Mode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "friendly" => Ok(Mode::Friendly),
            "traditional" => Ok(Mode::Traditional),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Friendly => write!(f, "friendly"),
            Mode::Traditional => write!(f, "traditional"),
        }
    }
}

fn mode_file() -> PathBuf {
    store::config_dir().join("mode")
}

/// Reads the persisted mode. Missing or malformed content means
/// `Friendly`.
pub fn current() -> Mode {
    read_from(&mode_file())
}

fn read_from(path: &std::path::Path) -> Mode {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(Mode::Friendly)
}

fn write_to(path: &std::path::Path, mode: Mode) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, mode.to_string())
        .with_context(|| format!("Failed to write mode file: {}", path.display()))
}

/// `mode` with no argument shows the current mode; with an argument it
/// switches, rejecting anything other than the two known names.
pub fn handle(arg: Option<&str>) -> Result<()> {
    let Some(name) = arg else {
        show_current();
        return Ok(());
    };

    let Ok(mode) = name.parse::<Mode>() else {
        println!("{}", format!("  Invalid mode: {}", name).red());
        println!("  Available modes: friendly, traditional");
        return Ok(());
    };

    write_to(&mode_file(), mode)?;
    println!();
    match mode {
        Mode::Friendly => {
            ui::print_success("Switched to friendly mode");
            println!();
            println!("  Commands will be translated:");
            println!(
                "    {} -> {}",
                "git show changes".cyan(),
                "git status".dark_grey()
            );
            println!(
                "    {} -> {}",
                "git save \"msg\"".cyan(),
                "git add . && git commit -m \"msg\"".dark_grey()
            );
        }
        Mode::Traditional => {
            ui::print_success("Switched to traditional mode");
            println!();
            println!("  Commands will pass through unchanged:");
            println!("    {} -> {}", "git status".cyan(), "git status".dark_grey());
            println!();
            println!(
                "{}",
                "  Tip: \"plainterm learn git\" still shows you the command reference!".dark_grey()
            );
        }
    }
    println!();
    Ok(())
}

fn show_current() {
    let mode = current();
    println!();
    println!("  {}{}", "Current Mode: ".bold(), mode.to_string().cyan());
    println!();
    match mode {
        Mode::Friendly => {
            println!("  Your commands are translated to traditional commands.");
            println!(
                "  Example: {} -> {}",
                "git show changes".cyan(),
                "git status".dark_grey()
            );
        }
        Mode::Traditional => {
            println!("  Commands pass through directly to traditional tools.");
            println!(
                "  Example: {} -> {}",
                "git show changes".cyan(),
                "git show changes (unchanged)".dark_grey()
            );
        }
    }
    println!();
    println!("  Switch modes:");
    println!("    plainterm mode friendly      Use friendly translations");
    println!("    plainterm mode traditional   Pass through to real commands");
    println!();
    println!(
        "{}",
        "  Note: \"plainterm learn\" and \"plainterm help\" always work in both modes.".dark_grey()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_defaults_to_friendly() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_from(&dir.path().join("mode")), Mode::Friendly);
    }

    #[test]
    fn malformed_content_defaults_to_friendly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mode");
        std::fs::write(&path, "weird\n").unwrap();
        assert_eq!(read_from(&path), Mode::Friendly);
    }

    #[test]
    fn mode_round_trips_through_the_flag_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("mode");
        write_to(&path, Mode::Traditional).unwrap();
        assert_eq!(read_from(&path), Mode::Traditional);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "traditional");
        write_to(&path, Mode::Friendly).unwrap();
        assert_eq!(read_from(&path), Mode::Friendly);
    }

    #[test]
    fn whitespace_around_the_flag_is_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mode");
        std::fs::write(&path, "traditional\n").unwrap();
        assert_eq!(read_from(&path), Mode::Traditional);
    }
}
