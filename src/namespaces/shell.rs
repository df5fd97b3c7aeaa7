use crate::{
    core::{
        exec::Platform,
        pattern::{CommandSpec, Registry},
    },
    help::{HelpSection, HelpTable},
};

pub fn register(r: &mut Registry) {
    r.exact("show my shell", "echo $SHELL", "Shows which shell you are using");
    r.exact("show shell version", "$SHELL --version", "Shows shell version");
    r.exact("show environment", "printenv", "Shows all environment variables");
    r.exact("show path", "echo $PATH | tr \":\" \"\\n\"", "Shows PATH directories (one per line)");
    r.exact("show aliases", "alias", "Shows all defined aliases");
    r.exact("show functions", "declare -F", "Shows all defined functions");
    r.exact("show history", "history | tail -50", "Shows last 50 commands");
    r.exact("clear history", "history -c", "Clears command history");
    r.exact("reload shell", "exec $SHELL", "Reloads your shell configuration");
    r.exact("edit bashrc", "${EDITOR:-nano} ~/.bashrc", "Opens .bashrc for editing");
    r.exact("edit zshrc", "${EDITOR:-nano} ~/.zshrc", "Opens .zshrc for editing");
    r.exact("edit profile", "${EDITOR:-nano} ~/.profile", "Opens .profile for editing");
    r.exact("show cron jobs", "crontab -l", "Lists scheduled cron jobs");
    r.exact("edit cron jobs", "crontab -e", "Opens crontab editor");

    r.arg("make executable", make_executable);
    r.arg("run script", run_script);
    r.arg("run in background", run_in_background);
    r.arg("run silent", run_silent);
    r.arg("run and log", run_and_log);
    r.arg("set variable", set_variable);
    r.arg("show variable", show_variable);
    r.arg("add to path", add_to_path);
    r.arg("create alias", create_alias);
    r.arg("remove alias", remove_alias);
    r.arg("create script", create_script);
    r.arg("watch command", watch_command);
    r.arg("repeat", repeat);
    r.arg("save output to", save_output_to);
    r.arg("append output to", append_output_to);
}

fn split_first(args: &str) -> Option<(&str, String)> {
    let mut parts = args.split_whitespace();
    let first = parts.next()?;
    let rest = parts.collect::<Vec<_>>().join(" ");
    if rest.is_empty() {
        return None;
    }
    Some((first, rest))
}

fn make_executable(file: &str, _platform: Platform) -> Option<CommandSpec> {
    let file = file.split_whitespace().next()?;
    Some(CommandSpec::new(format!("chmod +x {file}"), "Makes script executable"))
}

fn run_script(args: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("bash {args}").trim_end().to_string(),
        "Runs a shell script",
    ))
}

fn run_in_background(cmd: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(format!("{cmd} &"), "Runs command in background"))
}

fn run_silent(cmd: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("{cmd} > /dev/null 2>&1"),
        "Runs command silently (no output)",
    ))
}

fn run_and_log(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let (logfile, cmd) = split_first(args)?;
    Some(CommandSpec::new(
        format!("{cmd} 2>&1 | tee {logfile}"),
        "Runs and saves output to file",
    ))
}

fn set_variable(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let (name, value) = split_first(args)?;
    Some(CommandSpec::new(
        format!("export {name}=\"{value}\""),
        "Sets environment variable",
    ))
}

fn show_variable(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let name = args.split_whitespace().next()?;
    Some(CommandSpec::new(format!("echo ${name}"), "Shows variable value"))
}

fn add_to_path(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let dir = args.split_whitespace().next()?;
    Some(CommandSpec::new(
        format!("export PATH=\"$PATH:{dir}\""),
        "Adds directory to PATH",
    ))
}

fn create_alias(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let (name, cmd) = split_first(args)?;
    Some(CommandSpec::new(
        format!("alias {name}='{cmd}'"),
        "Creates a command alias",
    ))
}

fn remove_alias(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let name = args.split_whitespace().next()?;
    Some(CommandSpec::new(format!("unalias {name}"), "Removes an alias"))
}

fn create_script(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let file = args.split_whitespace().next()?;
    Some(CommandSpec::new(
        format!("cat > {file} << 'EOF'\n#!/bin/bash\n\n# Your script here\n\nEOF\nchmod +x {file}"),
        "Creates new executable script",
    ))
}

fn watch_command(cmd: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("watch -n 2 {cmd}"),
        "Runs command every 2 seconds",
    ))
}

fn repeat(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let (times, cmd) = split_first(args)?;
    Some(CommandSpec::new(
        format!("for i in $(seq 1 {times}); do {cmd}; done"),
        format!("Repeats command {times} times"),
    ))
}

fn save_output_to(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let (file, cmd) = split_first(args)?;
    Some(CommandSpec::new(format!("{cmd} > {file}"), "Saves command output to file"))
}

fn append_output_to(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let (file, cmd) = split_first(args)?;
    Some(CommandSpec::new(
        format!("{cmd} >> {file}"),
        "Appends command output to file",
    ))
}

pub static HELP: HelpTable = HelpTable {
    title: "SHELL SCRIPTING COMMANDS",
    sections: &[
        HelpSection {
            key: "scripts",
            title: "SCRIPT EXECUTION",
            rows: &[
                ["shell make executable script.sh", "chmod +x script.sh", "Makes script executable"],
                ["shell run script myscript.sh", "bash myscript.sh", "Runs a shell script"],
                ["shell run in background <cmd>", "<cmd> &", "Runs command in background"],
                ["shell run silent <cmd>", "<cmd> > /dev/null 2>&1", "Runs without output"],
                ["shell run and log out.txt <cmd>", "<cmd> 2>&1 | tee out.txt", "Runs and logs output"],
            ],
        },
        HelpSection {
            key: "environment",
            title: "ENVIRONMENT",
            rows: &[
                ["shell show my shell", "echo $SHELL", "Shows your current shell"],
                ["shell show environment", "printenv", "Shows all env variables"],
                ["shell show path", "echo $PATH | tr...", "Shows PATH (one per line)"],
                ["shell show variable HOME", "echo $HOME", "Shows variable value"],
                ["shell set variable NAME value", "export NAME=\"value\"", "Sets environment variable"],
                ["shell add to path /my/dir", "export PATH=\"$PATH:...\"", "Adds directory to PATH"],
            ],
        },
        HelpSection {
            key: "aliases",
            title: "ALIASES",
            rows: &[
                ["shell show aliases", "alias", "Lists all aliases"],
                ["shell create alias ll ls -la", "alias ll='ls -la'", "Creates a shortcut"],
                ["shell remove alias ll", "unalias ll", "Removes an alias"],
            ],
        },
        HelpSection {
            key: "config",
            title: "SHELL CONFIG",
            rows: &[
                ["shell edit bashrc", "nano ~/.bashrc", "Edit bash configuration"],
                ["shell edit zshrc", "nano ~/.zshrc", "Edit zsh configuration"],
                ["shell reload shell", "exec $SHELL", "Reloads shell config"],
            ],
        },
        HelpSection {
            key: "cron",
            title: "CRON JOBS (Scheduled Tasks)",
            rows: &[
                ["shell show cron jobs", "crontab -l", "Lists scheduled tasks"],
                ["shell edit cron jobs", "crontab -e", "Edit scheduled tasks"],
            ],
        },
        HelpSection {
            key: "utilities",
            title: "UTILITIES",
            rows: &[
                ["shell watch command <cmd>", "watch -n 2 <cmd>", "Repeats every 2 seconds"],
                ["shell repeat 5 echo hello", "for i in...; do...; done", "Repeats command N times"],
                ["shell show history", "history | tail -50", "Shows recent commands"],
            ],
        },
        HelpSection {
            key: "output",
            title: "OUTPUT REDIRECTION",
            rows: &[
                ["shell save output to file.txt <cmd>", "<cmd> > file.txt", "Saves output to file"],
                ["shell append output to file.txt <cmd>", "<cmd> >> file.txt", "Appends to file"],
            ],
        },
    ],
    tips: &[
        "  CRON SCHEDULE FORMAT:",
        "  -----------------------------------------------------------------",
        "  * * * * *  command",
        "  | | | | |",
        "  | | | | +- Day of week (0-7, 0 and 7 are Sunday)",
        "  | | | +--- Month (1-12)",
        "  | | +----- Day of month (1-31)",
        "  | +------- Hour (0-23)",
        "  +--------- Minute (0-59)",
        "",
        "  Examples:",
        "    0 * * * *     Every hour",
        "    0 0 * * *     Every day at midnight",
        "    0 0 * * 0     Every Sunday at midnight",
        "    */5 * * * *   Every 5 minutes",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pattern::Resolution;

    fn dispatch(input: &str) -> Resolution {
        let mut r = Registry::new();
        register(&mut r);
        r.finalize();
        r.dispatch(None, input, Platform::Unix)
    }

    fn cmd(input: &str) -> String {
        match dispatch(input) {
            Resolution::Run(spec) => spec.cmd,
            other => panic!("{input:?}: {other:?}"),
        }
    }

    #[test]
    fn wrapping_commands_compose_around_the_tail() {
        assert_eq!(cmd("run in background npm start"), "npm start &");
        assert_eq!(cmd("run silent make all"), "make all > /dev/null 2>&1");
        assert_eq!(
            cmd("run and log out.txt make all"),
            "make all 2>&1 | tee out.txt"
        );
        assert_eq!(cmd("save output to list.txt ls -la"), "ls -la > list.txt");
        assert_eq!(cmd("append output to list.txt ls -la"), "ls -la >> list.txt");
    }

    #[test]
    fn repeat_expands_to_a_seq_loop() {
        assert_eq!(
            cmd("repeat 5 echo hello"),
            "for i in $(seq 1 5); do echo hello; done"
        );
    }

    #[test]
    fn environment_helpers() {
        assert_eq!(cmd("set variable API_KEY abc 123"), "export API_KEY=\"abc 123\"");
        assert_eq!(cmd("show variable HOME"), "echo $HOME");
        assert_eq!(cmd("add to path /opt/bin"), "export PATH=\"$PATH:/opt/bin\"");
    }

    #[test]
    fn alias_helpers() {
        assert_eq!(cmd("create alias ll ls -la"), "alias ll='ls -la'");
        assert_eq!(cmd("remove alias ll"), "unalias ll");
    }

    #[test]
    fn zero_argument_phrases_are_exact_entries() {
        assert_eq!(cmd("edit bashrc"), "${EDITOR:-nano} ~/.bashrc");
        assert_eq!(cmd("show cron jobs"), "crontab -l");
        assert_eq!(cmd("edit cron jobs"), "crontab -e");
    }

    #[test]
    fn two_token_preconditions_fall_through_when_unmet() {
        assert_eq!(dispatch("run and log out.txt"), Resolution::NotFound);
        assert_eq!(dispatch("set variable API_KEY"), Resolution::NotFound);
    }

    #[test]
    fn run_script_keeps_script_arguments() {
        assert_eq!(cmd("run script deploy.sh --fast"), "bash deploy.sh --fast");
        assert_eq!(cmd("run script deploy.sh"), "bash deploy.sh");
    }
}
