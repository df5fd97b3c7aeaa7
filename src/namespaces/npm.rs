use crate::{
    core::{
        exec::Platform,
        pattern::{CommandSpec, Registry},
    },
    help::{HelpSection, HelpTable},
};

pub fn register(r: &mut Registry) {
    r.exact("setup", "npm install", "Installs all project dependencies from package.json");
    r.exact("show packages", "npm list --depth=0", "Shows all installed packages");
    r.exact("show outdated", "npm outdated", "Shows packages that have newer versions");
    r.exact("update", "npm update", "Updates all packages to latest allowed versions");
    r.exact("run start", "npm run start", "Starts the application");
    r.exact("run dev", "npm run dev", "Starts the application in development mode");
    r.exact("run test", "npm test", "Runs the test suite");
    r.exact("run build", "npm run build", "Builds the application for production");
    r.exact("run lint", "npm run lint", "Checks code for style and syntax issues");

    r.arg("add", add);
    r.arg("remove", remove);
    r.arg("run", run);
}

fn add(pkg: &str, _platform: Platform) -> Option<CommandSpec> {
    if pkg.contains("--dev") {
        let name = pkg.replacen("--dev", "", 1);
        let name = name.trim();
        return Some(CommandSpec::new(
            format!("npm install {name} --save-dev"),
            format!("Adds {name} as a dev dependency"),
        ));
    }
    Some(CommandSpec::new(
        format!("npm install {pkg}"),
        format!("Adds {pkg} to your project"),
    ))
}

fn remove(pkg: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("npm uninstall {pkg}"),
        format!("Removes {pkg} from your project"),
    ))
}

fn run(script: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("npm run {script}"),
        format!("Runs the {script} script"),
    ))
}

pub static HELP: HelpTable = HelpTable {
    title: "NPM COMMANDS",
    sections: &[
        HelpSection {
            key: "setup",
            title: "SETUP",
            rows: &[["npm setup", "npm install", "Installs all project dependencies from package.json"]],
        },
        HelpSection {
            key: "packages",
            title: "PACKAGES",
            rows: &[
                ["npm add <package>", "npm install <package>", "Adds a new package to your project"],
                ["npm add <package> --dev", "npm install <pkg> --save-dev", "Adds a package as a dev dependency"],
                ["npm remove <package>", "npm uninstall <package>", "Removes a package from your project"],
                ["npm show packages", "npm list --depth=0", "Shows all installed packages"],
                ["npm show outdated", "npm outdated", "Shows packages that have newer versions"],
                ["npm update", "npm update", "Updates all packages to latest allowed versions"],
            ],
        },
        HelpSection {
            key: "running",
            title: "RUNNING",
            rows: &[
                ["npm run start", "npm run start", "Starts the application"],
                ["npm run dev", "npm run dev", "Starts the application in development mode"],
                ["npm run test", "npm test", "Runs the test suite"],
                ["npm run build", "npm run build", "Builds the application for production"],
                ["npm run lint", "npm run lint", "Checks code for style and syntax issues"],
                ["npm run <script>", "npm run <script>", "Runs any script defined in package.json"],
            ],
        },
    ],
    tips: &[],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pattern::Resolution;

    fn cmd(input: &str) -> String {
        let mut r = Registry::new();
        register(&mut r);
        r.finalize();
        match r.dispatch(None, input, Platform::Unix) {
            Resolution::Run(spec) => spec.cmd,
            other => panic!("{input:?}: {other:?}"),
        }
    }

    #[test]
    fn dev_flag_rewrites_to_save_dev() {
        assert_eq!(cmd("add lodash --dev"), "npm install lodash --save-dev");
        assert_eq!(cmd("add --dev lodash"), "npm install lodash --save-dev");
        assert_eq!(cmd("add lodash"), "npm install lodash");
    }

    #[test]
    fn canned_run_scripts_use_their_exact_forms() {
        assert_eq!(cmd("run test"), "npm test");
        assert_eq!(cmd("run build"), "npm run build");
        // Anything else goes through the generic run resolver.
        assert_eq!(cmd("run deploy:staging"), "npm run deploy:staging");
    }

    #[test]
    fn remove_maps_to_uninstall() {
        assert_eq!(cmd("remove lodash"), "npm uninstall lodash");
    }

    #[test]
    fn bare_patterns_without_arguments_fall_through() {
        let mut r = Registry::new();
        register(&mut r);
        r.finalize();
        assert_eq!(r.dispatch(None, "add", Platform::Unix), Resolution::NotFound);
        assert_eq!(r.dispatch(None, "run", Platform::Unix), Resolution::NotFound);
    }
}
