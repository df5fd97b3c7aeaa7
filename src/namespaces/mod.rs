use {
    crate::{
        core::{
            exec::{self, Platform},
            pattern::{Registry, Resolution},
        },
        help::{self, HelpTable},
        store::CustomStore,
        ui,
    },
    anyhow::Result,
};

pub mod docker;
pub mod files;
pub mod git;
pub mod gradle;
pub mod java;
pub mod maven;
pub mod npm;
pub mod server;
pub mod shell;
pub mod system;

/// One translation namespace. Tool namespaces wrap a real binary and
/// pass unknown input through to it; synthetic namespaces compose
/// commands from several binaries and have nothing to fall back on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Git,
    Npm,
    Docker,
    Gradle,
    Maven,
    Java,
    Files,
    Shell,
    System,
    Server,
}

impl Namespace {
    pub const ALL: [Namespace; 10] = [
        Namespace::Git,
        Namespace::Npm,
        Namespace::Gradle,
        Namespace::Maven,
        Namespace::Docker,
        Namespace::Java,
        Namespace::Files,
        Namespace::Shell,
        Namespace::System,
        Namespace::Server,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "git" => Some(Namespace::Git),
            "npm" => Some(Namespace::Npm),
            "docker" => Some(Namespace::Docker),
            "gradle" => Some(Namespace::Gradle),
            "maven" => Some(Namespace::Maven),
            "java" => Some(Namespace::Java),
            "files" => Some(Namespace::Files),
            "shell" => Some(Namespace::Shell),
            "system" => Some(Namespace::System),
            "server" => Some(Namespace::Server),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Namespace::Git => "git",
            Namespace::Npm => "npm",
            Namespace::Docker => "docker",
            Namespace::Gradle => "gradle",
            Namespace::Maven => "maven",
            Namespace::Java => "java",
            Namespace::Files => "files",
            Namespace::Shell => "shell",
            Namespace::System => "system",
            Namespace::Server => "server",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Namespace::Git => "Git",
            Namespace::Npm => "NPM",
            Namespace::Docker => "Docker",
            Namespace::Gradle => "Gradle",
            Namespace::Maven => "Maven",
            Namespace::Java => "Java",
            Namespace::Files => "Files",
            Namespace::Shell => "Shell",
            Namespace::System => "System",
            Namespace::Server => "Server",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            Namespace::Git => "Track changes, save work, collaborate with your team",
            Namespace::Npm => "Install packages, manage dependencies, run scripts",
            Namespace::Gradle => "Build and run Java/Android projects",
            Namespace::Maven => "Build, test, and package Java applications",
            Namespace::Docker => "Run apps in containers, manage images",
            Namespace::Java => "Compile, run, and package Java programs directly",
            Namespace::Files => "Search for files, find text in your project",
            Namespace::Shell => "Shell scripting, aliases, and scheduled tasks",
            Namespace::System => "Linux administration: packages, services, firewall",
            Namespace::Server => "Web servers, SSL certificates, and ports",
        }
    }

    /// The real binary unknown input falls through to. `None` for
    /// synthetic namespaces, which print an advisory instead.
    fn passthrough_binary(&self) -> Option<&'static str> {
        match self {
            Namespace::Git => Some("git"),
            Namespace::Npm => Some("npm"),
            Namespace::Docker => Some("docker"),
            Namespace::Gradle => Some("./gradlew"),
            Namespace::Maven => Some("mvn"),
            Namespace::Java => Some("java"),
            Namespace::Files | Namespace::Shell | Namespace::System | Namespace::Server => None,
        }
    }

    pub fn registry(&self) -> Registry {
        let mut registry = Registry::new();
        match self {
            Namespace::Git => git::register(&mut registry),
            Namespace::Npm => npm::register(&mut registry),
            Namespace::Docker => docker::register(&mut registry),
            Namespace::Gradle => gradle::register(&mut registry),
            Namespace::Maven => maven::register(&mut registry),
            Namespace::Java => java::register(&mut registry),
            Namespace::Files => files::register(&mut registry),
            Namespace::Shell => shell::register(&mut registry),
            Namespace::System => system::register(&mut registry),
            Namespace::Server => server::register(&mut registry),
        }
        registry.finalize();
        registry
    }

    pub fn help(&self) -> &'static HelpTable {
        match self {
            Namespace::Git => &git::HELP,
            Namespace::Npm => &npm::HELP,
            Namespace::Docker => &docker::HELP,
            Namespace::Gradle => &gradle::HELP,
            Namespace::Maven => &maven::HELP,
            Namespace::Java => &java::HELP,
            Namespace::Files => &files::HELP,
            Namespace::Shell => &shell::HELP,
            Namespace::System => &system::HELP,
            Namespace::Server => &server::HELP,
        }
    }
}

/// Resolves and runs one namespace invocation end to end.
pub fn execute(ns: Namespace, words: &[String], store: &dyn CustomStore) -> Result<()> {
    let input = words.join(" ");
    let input = input.trim();

    let custom = store.read();
    let overrides = custom.get(ns.name());

    match ns.registry().dispatch(overrides, input, Platform::current()) {
        Resolution::Help { topic } => help::print_help(ns.help(), topic.as_deref()),
        Resolution::Run(spec) => exec::run_command(&spec.cmd),
        Resolution::NotFound => match ns.passthrough_binary() {
            Some(binary) => exec::passthrough(binary, input),
            None => {
                println!("Unknown {} command: {}", ns.name(), input);
                ui::print_info(&format!(
                    "Type \"plainterm {} help\" to see available commands.",
                    ns.name()
                ));
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pattern::Resolution;

    fn resolve(ns: Namespace, input: &str) -> Resolution {
        ns.registry().dispatch(None, input, Platform::Unix)
    }

    fn resolved_cmd(ns: Namespace, input: &str) -> String {
        match resolve(ns, input) {
            Resolution::Run(spec) => spec.cmd,
            other => panic!("{input:?} did not resolve to a command: {other:?}"),
        }
    }

    #[test]
    fn every_namespace_round_trips_through_its_name() {
        for ns in Namespace::ALL {
            assert_eq!(Namespace::from_name(ns.name()), Some(ns));
        }
        assert_eq!(Namespace::from_name("fortran"), None);
    }

    #[test]
    fn tool_namespaces_fall_through_to_their_binary() {
        assert_eq!(Namespace::Git.passthrough_binary(), Some("git"));
        assert_eq!(Namespace::Gradle.passthrough_binary(), Some("./gradlew"));
        assert_eq!(Namespace::Maven.passthrough_binary(), Some("mvn"));
        assert_eq!(Namespace::Files.passthrough_binary(), None);
        assert_eq!(Namespace::Server.passthrough_binary(), None);
    }

    #[test]
    fn canonical_translations_resolve() {
        assert_eq!(resolved_cmd(Namespace::Git, "show changes"), "git status");
        assert_eq!(
            resolved_cmd(Namespace::Git, "rewind 2 commits to trash"),
            "git reset --hard HEAD~2"
        );
        assert_eq!(
            resolved_cmd(Namespace::Npm, "add lodash --dev"),
            "npm install lodash --save-dev"
        );
        assert_eq!(
            resolved_cmd(Namespace::Docker, "run nginx detach"),
            "docker run -d nginx"
        );
    }

    #[test]
    fn help_requests_never_resolve_to_commands() {
        for ns in Namespace::ALL {
            assert_eq!(resolve(ns, ""), Resolution::Help { topic: None });
            assert_eq!(resolve(ns, "help"), Resolution::Help { topic: None });
        }
    }

    #[test]
    fn custom_override_beats_builtin_translation() {
        use crate::store::{CustomCommand, CustomMap, MemStore};

        let mut map = CustomMap::default();
        map.entry("git".to_string()).or_default().insert(
            "show changes".to_string(),
            CustomCommand {
                cmd: "git status --short".to_string(),
                desc: "Custom: git status --short".to_string(),
            },
        );
        let store = MemStore::empty();
        store.write(&map).unwrap();

        let custom = store.read();
        let resolution = Namespace::Git.registry().dispatch(
            custom.get("git"),
            "show changes",
            Platform::Unix,
        );
        match resolution {
            Resolution::Run(spec) => assert_eq!(spec.cmd, "git status --short"),
            other => panic!("expected custom override, got {other:?}"),
        }
    }
}
