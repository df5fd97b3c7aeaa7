use {
    crate::{core::exec::Platform, store::CustomCommand},
    std::collections::BTreeMap,
};

/// A resolved translation: the real command to run and a one-line
/// description of what it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub cmd: String,
    pub desc: String,
}

impl CommandSpec {
    pub fn new(cmd: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            cmd: cmd.into(),
            desc: desc.into(),
        }
    }
}

/// Maps a residual argument string to a command, or `None` when the
/// arguments don't satisfy the resolver's preconditions (wrong token
/// count or shape). `None` is not an error: the dispatcher simply
/// moves on to the next candidate pattern.
pub type Resolver = fn(&str, Platform) -> Option<CommandSpec>;

struct ExactEntry {
    pattern: &'static str,
    cmd: &'static str,
    desc: &'static str,
}

struct ArgEntry {
    pattern: &'static str,
    resolve: Resolver,
}

/// Per-namespace pattern table: exact phrases plus argument-taking
/// phrases with resolver functions.
pub struct Registry {
    exact: Vec<ExactEntry>,
    templated: Vec<ArgEntry>,
}

/// Outcome of dispatching one line of user input.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Input was empty or a help request; render help, run nothing.
    Help { topic: Option<String> },
    /// Resolved to a concrete command.
    Run(CommandSpec),
    /// Nothing matched; the caller decides between passthrough and an
    /// advisory message.
    NotFound,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            exact: Vec::new(),
            templated: Vec::new(),
        }
    }

    pub fn exact(&mut self, pattern: &'static str, cmd: &'static str, desc: &'static str) {
        debug_assert!(
            !self.exact.iter().any(|e| e.pattern == pattern),
            "duplicate exact pattern: {pattern}"
        );
        self.exact.push(ExactEntry { pattern, cmd, desc });
    }

    pub fn arg(&mut self, pattern: &'static str, resolve: Resolver) {
        debug_assert!(
            !self.templated.iter().any(|e| e.pattern == pattern),
            "duplicate argument pattern: {pattern}"
        );
        self.templated.push(ArgEntry { pattern, resolve });
    }

    /// Orders argument patterns longest-first. Two patterns can only
    /// both match the same input when one is a string-prefix of the
    /// other, so a stable length-descending sort guarantees the more
    /// specific pattern is always tried first regardless of
    /// registration order.
    pub fn finalize(&mut self) {
        self.templated
            .sort_by_key(|e| std::cmp::Reverse(e.pattern.len()));
    }

    /// Resolves one line of input against this table.
    ///
    /// Order: help short-circuit, custom-store override on the literal
    /// full text, exact phrases, then argument patterns first-match-
    /// wins. A resolver precondition failure falls through to the next
    /// candidate; an argument pattern with an empty residual never
    /// resolves.
    pub fn dispatch(
        &self,
        custom: Option<&BTreeMap<String, CustomCommand>>,
        input: &str,
        platform: Platform,
    ) -> Resolution {
        if input.is_empty() || input == "help" {
            return Resolution::Help { topic: None };
        }
        if let Some(topic) = input.strip_prefix("help ") {
            return Resolution::Help {
                topic: Some(topic.trim().to_string()),
            };
        }

        if let Some(entry) = custom.and_then(|map| map.get(input)) {
            return Resolution::Run(CommandSpec::new(entry.cmd.clone(), entry.desc.clone()));
        }

        if let Some(entry) = self.exact.iter().find(|e| e.pattern == input) {
            return Resolution::Run(CommandSpec::new(entry.cmd, entry.desc));
        }

        for entry in &self.templated {
            let matches = input == entry.pattern
                || (input.starts_with(entry.pattern)
                    && input.as_bytes().get(entry.pattern.len()) == Some(&b' '));
            if !matches {
                continue;
            }
            let residual = input[entry.pattern.len()..].trim();
            if residual.is_empty() {
                continue;
            }
            if let Some(spec) = (entry.resolve)(residual, platform) {
                return Resolution::Run(spec);
            }
        }

        Resolution::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(cmd: &str) -> CommandSpec {
        CommandSpec::new(cmd, "test")
    }

    fn two_tokens(args: &str, _platform: Platform) -> Option<CommandSpec> {
        let mut parts = args.split_whitespace();
        let a = parts.next()?;
        let b = parts.next()?;
        Some(spec(&format!("tool pair {a} {b}")))
    }

    fn one_token(args: &str, _platform: Platform) -> Option<CommandSpec> {
        Some(spec(&format!("tool one {args}")))
    }

    fn logs(args: &str, _platform: Platform) -> Option<CommandSpec> {
        Some(spec(&format!("tool logs {args}")))
    }

    fn table() -> Registry {
        let mut r = Registry::new();
        r.exact("show changes", "tool status", "status");
        r.exact("show", "tool summary", "summary");
        // Registered shortest-first on purpose: finalize must reorder.
        r.arg("remote", one_token);
        r.arg("remote add", two_tokens);
        r.arg("show logs", logs);
        r.finalize();
        r
    }

    fn dispatch(input: &str) -> Resolution {
        table().dispatch(None, input, Platform::Unix)
    }

    #[test]
    fn exact_match_wins_over_argument_patterns() {
        assert_eq!(
            dispatch("show changes"),
            Resolution::Run(CommandSpec::new("tool status", "status"))
        );
    }

    #[test]
    fn empty_and_help_short_circuit() {
        assert_eq!(dispatch(""), Resolution::Help { topic: None });
        assert_eq!(dispatch("help"), Resolution::Help { topic: None });
        assert_eq!(
            dispatch("help remotes"),
            Resolution::Help {
                topic: Some("remotes".into())
            }
        );
    }

    #[test]
    fn longer_pattern_resolves_before_its_prefix() {
        // "show logs x" must hit "show logs", not the exact "show"
        // (exact only matches the whole string) nor any shorter arg
        // pattern.
        assert_eq!(
            dispatch("show logs web"),
            Resolution::Run(spec("tool logs web"))
        );
    }

    #[test]
    fn precondition_failure_falls_through_to_prefix_pattern() {
        // "remote add" with a single token fails its two-token
        // precondition and falls through to the bare "remote" pattern.
        assert_eq!(
            dispatch("remote add origin git@host:repo"),
            Resolution::Run(spec("tool pair origin git@host:repo"))
        );
        assert_eq!(
            dispatch("remote add origin"),
            Resolution::Run(spec("tool one add origin"))
        );
    }

    #[test]
    fn argument_pattern_without_residual_never_resolves() {
        assert_eq!(dispatch("remote"), Resolution::NotFound);
        assert_eq!(dispatch("show logs"), Resolution::NotFound);
    }

    #[test]
    fn unmatched_input_is_not_found() {
        assert_eq!(dispatch("totally-unknown-subcommand"), Resolution::NotFound);
    }

    #[test]
    fn custom_entry_overrides_builtins() {
        let mut map = BTreeMap::new();
        map.insert(
            "show changes".to_string(),
            CustomCommand {
                cmd: "tool status --short".to_string(),
                desc: "Custom: tool status --short".to_string(),
            },
        );
        assert_eq!(
            table().dispatch(Some(&map), "show changes", Platform::Unix),
            Resolution::Run(CommandSpec::new(
                "tool status --short",
                "Custom: tool status --short"
            ))
        );
    }

    #[test]
    fn custom_entry_matches_whole_text_only() {
        let mut map = BTreeMap::new();
        map.insert(
            "show".to_string(),
            CustomCommand {
                cmd: "tool custom".to_string(),
                desc: "Custom: tool custom".to_string(),
            },
        );
        // Custom keys are whole-string, not prefixes.
        assert_eq!(
            table().dispatch(Some(&map), "show changes", Platform::Unix),
            Resolution::Run(CommandSpec::new("tool status", "status"))
        );
    }
}
