use crate::{
    core::{
        exec::Platform,
        pattern::{CommandSpec, Registry},
    },
    help::{HelpSection, HelpTable},
};

pub fn register(r: &mut Registry) {
    r.arg("find", find);
    r.arg("show", show);
    r.arg("open", open);
    r.arg("count lines", count_lines);
}

/// `find name <pattern>` maps to find(1); everything else is a
/// recursive grep, optionally scoped with `... in <folder>`. Quotes
/// around the search text are stripped before embedding.
fn find(args: &str, _platform: Platform) -> Option<CommandSpec> {
    if let Some(name) = args.strip_prefix("name ") {
        return Some(CommandSpec::new(
            format!("find . -name \"{name}\""),
            format!("Finds files named {name}"),
        ));
    }
    if let Some((text, folder)) = args.split_once(" in ") {
        let text = text.replace('"', "");
        return Some(CommandSpec::new(
            format!("grep -r \"{text}\" ./{folder}"),
            format!("Searches for {text} in {folder}"),
        ));
    }
    let text = args.replace('"', "");
    Some(CommandSpec::new(
        format!("grep -r \"{text}\" ."),
        "Searches for text in all files",
    ))
}

fn show(args: &str, _platform: Platform) -> Option<CommandSpec> {
    if let Some((file, range)) = args.split_once(" lines ") {
        let (start, end) = range.split_once('-')?;
        if start.is_empty() || end.is_empty() {
            return None;
        }
        return Some(CommandSpec::new(
            format!("sed -n '{start},{end}p' {file}"),
            format!("Shows lines {start}-{end} of {file}"),
        ));
    }
    Some(CommandSpec::new(
        format!("cat {args}"),
        format!("Displays contents of {args}"),
    ))
}

fn open(file: &str, platform: Platform) -> Option<CommandSpec> {
    let fallback = match platform {
        Platform::Unix => "nano",
        Platform::Windows => "notepad",
    };
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| fallback.to_string());
    Some(CommandSpec::new(
        format!("{editor} {file}"),
        format!("Opens {file} in your editor"),
    ))
}

fn count_lines(file: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("wc -l {file}"),
        format!("Counts lines in {file}"),
    ))
}

pub static HELP: HelpTable = HelpTable {
    title: "FILES COMMANDS",
    sections: &[
        HelpSection {
            key: "searching",
            title: "SEARCHING",
            rows: &[
                ["files find \"text\"", "grep -r \"text\" .", "Searches for text inside all files"],
                ["files find \"text\" in src", "grep -r \"text\" ./src", "Searches for text inside a specific folder"],
                ["files find name app.js", "find . -name \"app.js\"", "Finds files by name"],
                ["files find name \"*.js\"", "find . -name \"*.js\"", "Finds files matching a pattern"],
            ],
        },
        HelpSection {
            key: "viewing",
            title: "VIEWING",
            rows: &[
                ["files show app.js", "cat app.js", "Displays the contents of a file"],
                ["files show app.js lines 1-20", "sed -n '1,20p' app.js", "Shows specific lines of a file"],
                ["files count lines app.js", "wc -l app.js", "Counts the number of lines in a file"],
            ],
        },
        HelpSection {
            key: "editing",
            title: "EDITING",
            rows: &[["files open app.js", "$EDITOR app.js", "Opens the file in your default editor"]],
        },
    ],
    tips: &[],
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
    fn find_text_strips_quotes_and_scopes_to_folder() {
        assert_eq!(cmd("find \"TODO\""), "grep -r \"TODO\" .");
        assert_eq!(cmd("find \"TODO\" in src"), "grep -r \"TODO\" ./src");
        assert_eq!(cmd("find name \"*.rs\""), "find . -name \"\"*.rs\"\"");
        assert_eq!(cmd("find name app.js"), "find . -name \"app.js\"");
    }

    #[test]
    fn show_lines_uses_sed_ranges() {
        assert_eq!(cmd("show app.js"), "cat app.js");
        assert_eq!(cmd("show app.js lines 1-20"), "sed -n '1,20p' app.js");
    }

    #[test]
    fn show_with_malformed_range_does_not_resolve() {
        assert_eq!(dispatch("show app.js lines 1-"), Resolution::NotFound);
        assert_eq!(dispatch("show app.js lines 20"), Resolution::NotFound);
    }

    #[test]
    fn count_lines_beats_bare_patterns() {
        assert_eq!(cmd("count lines app.js"), "wc -l app.js");
    }

    #[test]
    fn unknown_input_stays_unresolved_for_the_advisory_path() {
        assert_eq!(dispatch("rename app.js"), Resolution::NotFound);
    }
}
