use {
    anyhow::Result,
    clap::Arg,
    std::{path::PathBuf, str::FromStr},
};

use crate::namespaces::Namespace;

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Privilege {
    Normal,
    Experimental,
}

#[derive(Debug)]
pub(crate) enum ManualFormat {
    Manpages,
    Markdown,
}

#[derive(Debug)]
pub(crate) struct CallArgs {
    pub privileges: Privilege,
    pub command: Command,
}

impl CallArgs {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.privileges == Privilege::Experimental {
            return Ok(());
        }

        match &self.command {
            | _ => (),
        }

        Ok(())
    }
}

#[derive(Debug)]
pub(crate) enum Command {
    /// A built-in namespace followed by a free-form phrase.
    Tool {
        namespace: Namespace,
        words: Vec<String>,
    },
    /// An unrecognized first word, resolved against user-defined
    /// custom packages.
    CustomPackage {
        package: String,
        words: Vec<String>,
    },
    Custom {
        words: Vec<String>,
    },
    Mode {
        mode: Option<String>,
    },
    Learn {
        tool: Option<String>,
    },
    Tour {
        quick: bool,
    },
    Setup,
    MainHelp,
    Manual {
        path: PathBuf,
        format: ManualFormat,
    },
    Autocomplete {
        path: PathBuf,
        shell: clap_complete::Shell,
    },
}

fn phrase_arg() -> Arg {
    Arg::new("words")
        .num_args(0..)
        .allow_hyphen_values(true)
        .trailing_var_arg(true)
}

fn tool_subcommand(namespace: Namespace) -> clap::Command {
    clap::Command::new(namespace.name())
        .about(namespace.blurb())
        .disable_help_flag(true)
        .arg(phrase_arg())
}

pub(crate) struct ClapArgumentLoader {}

impl ClapArgumentLoader {
    pub(crate) fn root_command() -> clap::Command {
        let mut root = clap::Command::new("plainterm")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Human-readable commands for your terminal.")
            .propagate_version(true)
            .disable_help_subcommand(true)
            .allow_external_subcommands(true)
            .args([Arg::new("experimental")
                .short('e')
                .long("experimental")
                .help("Enables experimental features.")
                .num_args(0)]);

        for namespace in Namespace::ALL {
            root = root.subcommand(tool_subcommand(namespace));
        }

        root.subcommand(
            clap::Command::new("custom")
                .about("Manages user-defined command shortcuts.")
                .disable_help_flag(true)
                .arg(phrase_arg()),
        )
        .subcommand(
            clap::Command::new("mode")
                .about("Shows or switches between friendly and traditional mode.")
                .arg(Arg::new("mode").required(false)),
        )
        .subcommand(
            clap::Command::new("learn")
                .about("Browses the command reference as a cheat sheet.")
                .aliases(["docs", "reference"])
                .arg(Arg::new("tool").required(false)),
        )
        .subcommand(
            clap::Command::new("tour")
                .about("Runs the interactive walkthrough.")
                .alias("walkthrough")
                .arg(Arg::new("speed").required(false)),
        )
        .subcommand(clap::Command::new("setup").about("Installs the shell wrapper functions."))
        .subcommand(
            clap::Command::new("man")
                .about("Renders the manual.")
                .arg(Arg::new("out").short('o').long("out").required(true))
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .value_parser(["manpages", "markdown"])
                        .required(true),
                ),
        )
        .subcommand(
            clap::Command::new("autocomplete")
                .about("Renders shell completion scripts.")
                .arg(Arg::new("out").short('o').long("out").required(true))
                .arg(
                    Arg::new("shell")
                        .short('s')
                        .long("shell")
                        .value_parser(["bash", "zsh", "fish", "elvish", "powershell"])
                        .required(true),
                ),
        )
    }

    fn phrase(matches: &clap::ArgMatches) -> Vec<String> {
        matches
            .get_many::<String>("words")
            .map(|words| words.cloned().collect())
            .unwrap_or_default()
    }

    fn external_phrase(matches: &clap::ArgMatches) -> Vec<String> {
        matches
            .get_many::<std::ffi::OsString>("")
            .map(|words| {
                words
                    .map(|word| word.to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub(crate) fn load() -> Result<CallArgs> {
        let command = Self::root_command().get_matches();

        let privileges = if command.get_flag("experimental") {
            Privilege::Experimental
        } else {
            Privilege::Normal
        };

        let cmd = match command.subcommand() {
            | None => Command::MainHelp,
            | Some(("help", _)) => Command::MainHelp,
            | Some(("custom", subc)) => Command::Custom {
                words: Self::phrase(subc),
            },
            | Some(("mode", subc)) => Command::Mode {
                mode: subc.get_one::<String>("mode").cloned(),
            },
            | Some(("learn", subc)) => Command::Learn {
                tool: subc.get_one::<String>("tool").cloned(),
            },
            | Some(("tour", subc)) => Command::Tour {
                quick: matches!(
                    subc.get_one::<String>("speed").map(String::as_str),
                    Some("quick" | "fast")
                ),
            },
            | Some(("setup", _)) => Command::Setup,
            | Some(("man", subc)) => Command::Manual {
                path: subc.get_one::<String>("out").unwrap().into(),
                format: match subc.get_one::<String>("format").unwrap().as_str() {
                    | "manpages" => ManualFormat::Manpages,
                    | "markdown" => ManualFormat::Markdown,
                    | _ => return Err(anyhow::anyhow!("argument \"format\": unknown format")),
                },
            },
            | Some(("autocomplete", subc)) => Command::Autocomplete {
                path: subc.get_one::<String>("out").unwrap().into(),
                shell: clap_complete::Shell::from_str(
                    subc.get_one::<String>("shell").unwrap().as_str(),
                )
                .unwrap(),
            },
            | Some((name, subc)) => match Namespace::from_name(name) {
                | Some(namespace) => Command::Tool {
                    namespace,
                    words: Self::phrase(subc),
                },
                | None => Command::CustomPackage {
                    package: name.to_string(),
                    words: Self::external_phrase(subc),
                },
            },
        };

        let callargs = CallArgs {
            privileges,
            command: cmd,
        };

        callargs.validate()?;
        Ok(callargs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_from(argv: &[&str]) -> Command {
        let matches = ClapArgumentLoader::root_command()
            .try_get_matches_from(argv)
            .unwrap();
        match matches.subcommand() {
            | Some((name, subc)) => match Namespace::from_name(name) {
                | Some(namespace) => Command::Tool {
                    namespace,
                    words: ClapArgumentLoader::phrase(subc),
                },
                | None => Command::CustomPackage {
                    package: name.to_string(),
                    words: ClapArgumentLoader::external_phrase(subc),
                },
            },
            | None => Command::MainHelp,
        }
    }

    #[test]
    fn tool_subcommands_capture_the_whole_phrase() {
        match load_from(&["plainterm", "git", "show", "changes"]) {
            | Command::Tool { namespace, words } => {
                assert_eq!(namespace, Namespace::Git);
                assert_eq!(words, ["show", "changes"]);
            }
            | other => panic!("{other:?}"),
        }
    }

    #[test]
    fn hyphenated_words_survive_parsing() {
        match load_from(&["plainterm", "npm", "add", "lodash", "--dev"]) {
            | Command::Tool { words, .. } => assert_eq!(words, ["add", "lodash", "--dev"]),
            | other => panic!("{other:?}"),
        }
    }

    #[test]
    fn unknown_first_word_becomes_a_custom_package() {
        match load_from(&["plainterm", "deploy", "push"]) {
            | Command::CustomPackage { package, words } => {
                assert_eq!(package, "deploy");
                assert_eq!(words, ["push"]);
            }
            | other => panic!("{other:?}"),
        }
    }

    #[test]
    fn no_subcommand_means_the_main_help() {
        assert!(matches!(load_from(&["plainterm"]), Command::MainHelp));
    }

    fn tour_quick(argv: &[&str]) -> bool {
        let matches = ClapArgumentLoader::root_command()
            .try_get_matches_from(argv)
            .unwrap();
        let Some(("tour", subc)) = matches.subcommand() else {
            panic!("expected a tour invocation");
        };
        matches!(
            subc.get_one::<String>("speed").map(String::as_str),
            Some("quick" | "fast")
        )
    }

    #[test]
    fn tour_accepts_any_trailing_word() {
        assert!(tour_quick(&["plainterm", "tour", "quick"]));
        assert!(tour_quick(&["plainterm", "tour", "fast"]));
        // Unrecognized words parse fine and mean the full tour.
        assert!(!tour_quick(&["plainterm", "tour", "slow"]));
        assert!(!tour_quick(&["plainterm", "tour"]));
    }
}
