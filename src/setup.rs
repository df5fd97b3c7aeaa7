use {
    anyhow::{Context, Result},
    std::path::PathBuf,
};

use crate::{store, ui};

/// Wrapper sourced from the user's shell config. Tool functions route
/// known first words through plainterm and fall back to the real
/// binary for everything else; the mode file short-circuits the whole
/// thing in traditional mode.
const SHELL_SCRIPT: &str = r#"
# plainterm - Human-readable commands

# Check the active mode
_plainterm_mode() {
  local mode_file="$HOME/.plainterm/mode"
  if [ -f "$mode_file" ]; then
    cat "$mode_file"
  else
    echo "friendly"
  fi
}

# Git wrapper
git() {
  local mode=$(_plainterm_mode)

  # Always allow help commands
  if [ "$1" = "help" ]; then
    if [ -z "$2" ]; then
      plainterm git help
    else
      plainterm git help "$2"
    fi
    return
  fi

  # In traditional mode, pass through everything
  if [ "$mode" = "traditional" ]; then
    command git "$@"
    return
  fi

  # In friendly mode, translate commands
  case "$1" in
    show|save|commit|sync|rewind|discard|add|remove|draft|switch|create|delete|merge|rehome|download|fetch|revert|cherry-pick|clean|config)
      plainterm git "$@"
      ;;
    *)
      command git "$@"
      ;;
  esac
}

# NPM wrapper
npm() {
  local mode=$(_plainterm_mode)

  if [ "$1" = "help" ]; then
    plainterm npm help
    return
  fi

  if [ "$mode" = "traditional" ]; then
    command npm "$@"
    return
  fi

  case "$1" in
    install|uninstall|show|update|run)
      plainterm npm "$@"
      ;;
    *)
      command npm "$@"
      ;;
  esac
}

# Java wrapper
java() {
  local mode=$(_plainterm_mode)

  if [ "$1" = "help" ]; then
    plainterm java help
    return
  fi

  if [ "$mode" = "traditional" ]; then
    command java "$@"
    return
  fi

  case "$1" in
    compile|run|create|extract|show|find)
      plainterm java "$@"
      ;;
    *)
      command java "$@"
      ;;
  esac
}

# Docker wrapper
docker() {
  local mode=$(_plainterm_mode)

  if [ "$1" = "help" ]; then
    plainterm docker help
    return
  fi

  if [ "$mode" = "traditional" ]; then
    command docker "$@"
    return
  fi

  case "$1" in
    show|logs|follow|terminal|connect|shell|enter|run|start|stop|kill|restart|pause|resume|remove|delete|build|pull|push|inspect|ip|ports|top|stats|changes|copy|cleanup|compose|history|rename|diff)
      plainterm docker "$@"
      ;;
    *)
      command docker "$@"
      ;;
  esac
}

# Gradle wrapper
gradle() {
  local mode=$(_plainterm_mode)

  if [ "$1" = "help" ]; then
    plainterm gradle help
    return
  fi

  if [ "$mode" = "traditional" ]; then
    command ./gradlew "$@"
    return
  fi

  plainterm gradle "$@"
}

# Maven wrapper
maven() {
  local mode=$(_plainterm_mode)

  if [ "$1" = "help" ]; then
    plainterm maven help
    return
  fi

  if [ "$mode" = "traditional" ]; then
    command mvn "$@"
    return
  fi

  plainterm maven "$@"
}

# Files command (always routed)
files() {
  plainterm files "$@"
}

# Shell scripting commands (Linux/macOS)
shell() {
  plainterm shell "$@"
}

# Server commands - nginx, apache, ssl (Linux)
server() {
  plainterm server "$@"
}

# System administration commands (Linux)
system() {
  plainterm system "$@"
}
"#;

const POWERSHELL_SCRIPT: &str = r#"
# plainterm - Human-readable commands

function Get-PlaintermMode {
  $modeFile = "$env:USERPROFILE\.plainterm\mode"
  if (Test-Path $modeFile) {
    return (Get-Content $modeFile).Trim()
  }
  return "friendly"
}

function git {
  param([Parameter(ValueFromRemainingArguments=$true)]$args)
  $firstArg = $args[0]
  $mode = Get-PlaintermMode

  # Always allow help
  if ($firstArg -eq 'help') {
    & plainterm git @args
    return
  }

  # Traditional mode - pass through
  if ($mode -eq 'traditional') {
    & git.exe @args
    return
  }

  # Friendly mode
  switch ($firstArg) {
    {$_ -in 'show','save','commit','sync','rewind','discard','add','remove','draft','switch','create','delete','merge','rehome','download','fetch','revert','cherry-pick','clean','config'} {
      & plainterm git @args
    }
    default {
      & git.exe @args
    }
  }
}

function npm {
  param([Parameter(ValueFromRemainingArguments=$true)]$args)
  $firstArg = $args[0]
  $mode = Get-PlaintermMode

  if ($firstArg -eq 'help') {
    & plainterm npm help
    return
  }

  if ($mode -eq 'traditional') {
    & npm.cmd @args
    return
  }

  switch ($firstArg) {
    {$_ -in 'install','uninstall','show','update','run'} {
      & plainterm npm @args
    }
    default {
      & npm.cmd @args
    }
  }
}

function java {
  param([Parameter(ValueFromRemainingArguments=$true)]$args)
  $firstArg = $args[0]
  $mode = Get-PlaintermMode

  if ($firstArg -eq 'help') {
    & plainterm java help
    return
  }

  if ($mode -eq 'traditional') {
    & java.exe @args
    return
  }

  switch ($firstArg) {
    {$_ -in 'compile','run','create','extract','show','find'} {
      & plainterm java @args
    }
    default {
      & java.exe @args
    }
  }
}

function docker {
  param([Parameter(ValueFromRemainingArguments=$true)]$args)
  $mode = Get-PlaintermMode

  if ($args[0] -eq 'help') {
    & plainterm docker help
    return
  }

  if ($mode -eq 'traditional') {
    & docker.exe @args
    return
  }

  switch ($args[0]) {
    {$_ -in 'show','logs','follow','terminal','connect','shell','enter','run','start','stop','kill','restart','pause','resume','remove','delete','build','pull','push','inspect','ip','ports','top','stats','changes','copy','cleanup','compose','history','rename','diff'} {
      & plainterm docker @args
    }
    default {
      & docker.exe @args
    }
  }
}

function gradle {
  param([Parameter(ValueFromRemainingArguments=$true)]$args)
  $mode = Get-PlaintermMode

  if ($args[0] -eq 'help') {
    & plainterm gradle help
    return
  }

  if ($mode -eq 'traditional') {
    & .\gradlew @args
    return
  }

  & plainterm gradle @args
}

function maven {
  param([Parameter(ValueFromRemainingArguments=$true)]$args)
  $mode = Get-PlaintermMode

  if ($args[0] -eq 'help') {
    & plainterm maven help
    return
  }

  if ($mode -eq 'traditional') {
    & mvn @args
    return
  }

  & plainterm maven @args
}

function files {
  param([Parameter(ValueFromRemainingArguments=$true)]$args)
  & plainterm files @args
}
"#;

pub struct DetectedShell {
    pub name: &'static str,
    pub config: Option<PathBuf>,
}

pub fn detect_shell() -> DetectedShell {
    let shell = std::env::var("SHELL").unwrap_or_default();
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));

    if shell.contains("zsh") {
        return DetectedShell {
            name: "zsh",
            config: Some(home.join(".zshrc")),
        };
    }
    if shell.contains("bash") {
        let bashrc = home.join(".bashrc");
        let config = if bashrc.exists() {
            bashrc
        } else {
            home.join(".bash_profile")
        };
        return DetectedShell {
            name: "bash",
            config: Some(config),
        };
    }
    if cfg!(windows) {
        let profile = std::process::Command::new("powershell")
            .args(["-Command", "echo $PROFILE"])
            .output()
            .ok()
            .map(|out| String::from_utf8_lossy(&out.stdout).trim().to_string())
            .filter(|s| !s.is_empty());
        return DetectedShell {
            name: "powershell",
            config: profile.map(PathBuf::from),
        };
    }

    DetectedShell {
        name: "unknown",
        config: None,
    }
}

/// Writes the wrapper script under `~/.plainterm` and sources it from
/// the detected shell config. Re-running is a no-op once the source
/// line is in place.
pub fn run() -> Result<()> {
    ui::print_logo();

    println!();
    ui::print_info("Setting up plainterm...");
    println!();

    let shell = detect_shell();

    println!("  Detected shell: {}", shell.name);
    match &shell.config {
        Some(config) => println!("  Config file:    {}", config.display()),
        None => println!("  Config file:    (none)"),
    }
    println!();

    let Some(config) = shell.config else {
        ui::print_error("Could not detect your shell configuration file.");
        println!("  Please manually add the plainterm commands to your shell config.");
        return Ok(());
    };

    let scripts_dir = store::config_dir();
    std::fs::create_dir_all(&scripts_dir)
        .with_context(|| format!("Failed to create directory: {}", scripts_dir.display()))?;

    let (script_path, script, source_command) = if shell.name == "powershell" {
        let path = scripts_dir.join("plainterm.ps1");
        let source = format!(". \"{}\"", path.display());
        (path, POWERSHELL_SCRIPT, source)
    } else {
        let path = scripts_dir.join("plainterm.sh");
        let source = format!("source \"{}\"", path.display());
        (path, SHELL_SCRIPT, source)
    };

    std::fs::write(&script_path, script)
        .with_context(|| format!("Failed to write wrapper script: {}", script_path.display()))?;
    ui::print_success(&format!("Created {}", script_path.display()));

    let config_content = std::fs::read_to_string(&config).unwrap_or_default();
    if config_content.contains(".plainterm")
        || config_content.contains("plainterm.sh")
        || config_content.contains("plainterm.ps1")
    {
        ui::print_warning("plainterm is already in your shell config.");
    } else {
        let addition = format!("\n# plainterm\n{}\n", source_command);
        let mut updated = config_content;
        updated.push_str(&addition);
        std::fs::write(&config, updated)
            .with_context(|| format!("Failed to update shell config: {}", config.display()))?;
        ui::print_success(&format!("Added to {}", config.display()));
    }

    ui::print_setup_complete();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapper_routes_known_first_words_through_plainterm() {
        assert!(SHELL_SCRIPT.contains("plainterm git \"$@\""));
        assert!(SHELL_SCRIPT.contains("command git \"$@\""));
        assert!(SHELL_SCRIPT.contains("show|save|commit|sync|rewind"));
    }

    #[test]
    fn wrapper_reads_the_mode_flag_file() {
        assert!(SHELL_SCRIPT.contains("$HOME/.plainterm/mode"));
        assert!(SHELL_SCRIPT.contains("echo \"friendly\""));
        assert!(POWERSHELL_SCRIPT.contains(".plainterm\\mode"));
    }

    #[test]
    fn traditional_mode_passes_through_unchanged() {
        assert!(SHELL_SCRIPT.contains("if [ \"$mode\" = \"traditional\" ]; then"));
        assert!(POWERSHELL_SCRIPT.contains("$mode -eq 'traditional'"));
    }

    #[test]
    fn synthetic_namespaces_always_route() {
        for func in ["files()", "shell()", "server()", "system()"] {
            assert!(SHELL_SCRIPT.contains(func), "missing {func}");
        }
    }
}
