use crate::{
    core::pattern::Registry,
    help::{HelpSection, HelpTable},
};

pub fn register(r: &mut Registry) {
    r.exact("build", "./gradlew build", "Compiles and builds the entire project");
    r.exact("build clean", "./gradlew clean build", "Clears old files then builds fresh");
    r.exact("build debug", "./gradlew assembleDebug", "Builds the debug version (Android)");
    r.exact("build release", "./gradlew assembleRelease", "Builds the release version (Android)");
    r.exact("run", "./gradlew run", "Runs the application");
    r.exact("run boot", "./gradlew bootRun", "Runs a Spring Boot application");
    r.exact("test", "./gradlew test", "Runs all unit tests");
    r.exact("test device", "./gradlew connectedAndroidTest", "Runs tests on a connected Android device");
    r.exact("lint", "./gradlew lint", "Checks code for potential bugs and style issues");
    r.exact("clean", "./gradlew clean", "Deletes all build outputs");
    r.exact("show tasks", "./gradlew tasks", "Lists all available gradle tasks");
    r.exact("show tasks all", "./gradlew tasks --all", "Lists all tasks including hidden ones");
    r.exact("show dependencies", "./gradlew dependencies", "Shows the full dependency tree");
    r.exact("show projects", "./gradlew projects", "Shows all subprojects in a multi-project build");
    r.exact("show signing", "./gradlew signingReport", "Shows signing configuration for Android builds");
    r.exact("install debug", "./gradlew installDebug", "Installs debug app on connected Android device");
    r.exact("install release", "./gradlew installRelease", "Installs release app on connected Android device");
    r.exact("uninstall debug", "./gradlew uninstallDebug", "Removes debug app from connected Android device");
}

pub static HELP: HelpTable = HelpTable {
    title: "GRADLE COMMANDS",
    sections: &[
        HelpSection {
            key: "building",
            title: "BUILDING",
            rows: &[
                ["gradle build", "./gradlew build", "Compiles and builds the entire project"],
                ["gradle build clean", "./gradlew clean build", "Clears old files then builds fresh"],
                ["gradle build debug", "./gradlew assembleDebug", "Builds the debug version (Android)"],
                ["gradle build release", "./gradlew assembleRelease", "Builds the release version (Android)"],
            ],
        },
        HelpSection {
            key: "running",
            title: "RUNNING",
            rows: &[
                ["gradle run", "./gradlew run", "Runs the application"],
                ["gradle run boot", "./gradlew bootRun", "Runs a Spring Boot application"],
            ],
        },
        HelpSection {
            key: "testing",
            title: "TESTING",
            rows: &[
                ["gradle test", "./gradlew test", "Runs all unit tests"],
                ["gradle test device", "./gradlew connectedAndroidTest", "Runs tests on a connected Android device"],
                ["gradle lint", "./gradlew lint", "Checks code for potential bugs and style issues"],
            ],
        },
        HelpSection {
            key: "show",
            title: "SHOWING INFORMATION",
            rows: &[
                ["gradle show tasks", "./gradlew tasks", "Lists all available gradle tasks"],
                ["gradle show tasks all", "./gradlew tasks --all", "Lists all tasks including hidden ones"],
                ["gradle show dependencies", "./gradlew dependencies", "Shows the full dependency tree"],
                ["gradle show projects", "./gradlew projects", "Shows all subprojects in a multi-project build"],
                ["gradle show signing", "./gradlew signingReport", "Shows signing configuration for Android builds"],
            ],
        },
        HelpSection {
            key: "android",
            title: "ANDROID DEVICE",
            rows: &[
                ["gradle install debug", "./gradlew installDebug", "Installs debug app on connected Android device"],
                ["gradle install release", "./gradlew installRelease", "Installs release app on connected Android device"],
                ["gradle uninstall debug", "./gradlew uninstallDebug", "Removes debug app from connected Android device"],
            ],
        },
        HelpSection {
            key: "cleaning",
            title: "CLEANING",
            rows: &[["gradle clean", "./gradlew clean", "Deletes all build outputs"]],
        },
    ],
    tips: &[],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{exec::Platform, pattern::Resolution};

    fn dispatch(input: &str) -> Resolution {
        let mut r = Registry::new();
        register(&mut r);
        r.finalize();
        r.dispatch(None, input, Platform::Unix)
    }

    #[test]
    fn multi_word_exacts_win_over_their_prefixes() {
        match dispatch("build clean") {
            Resolution::Run(spec) => assert_eq!(spec.cmd, "./gradlew clean build"),
            other => panic!("{other:?}"),
        }
        match dispatch("build") {
            Resolution::Run(spec) => assert_eq!(spec.cmd, "./gradlew build"),
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn unknown_tasks_fall_through_for_passthrough() {
        assert_eq!(dispatch("assembleStaging"), Resolution::NotFound);
    }
}
