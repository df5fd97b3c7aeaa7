use crate::{
    core::pattern::Registry,
    help::{HelpSection, HelpTable},
};

pub fn register(r: &mut Registry) {
    r.exact("build", "mvn package", "Compiles and packages the project");
    r.exact("build clean", "mvn clean package", "Clears old files then builds fresh");
    r.exact("build skip tests", "mvn package -DskipTests", "Builds without running tests (faster)");
    r.exact("run", "mvn exec:java", "Runs the main class");
    r.exact("run boot", "mvn spring-boot:run", "Runs a Spring Boot application");
    r.exact("test", "mvn test", "Runs all unit tests");
    r.exact("clean", "mvn clean", "Deletes all build outputs");
    r.exact("show dependencies", "mvn dependency:tree", "Shows the full dependency tree");
    r.exact("show effective pom", "mvn help:effective-pom", "Shows the resolved pom with all inherited values");
}

pub static HELP: HelpTable = HelpTable {
    title: "MAVEN COMMANDS",
    sections: &[
        HelpSection {
            key: "building",
            title: "BUILDING",
            rows: &[
                ["maven build", "mvn package", "Compiles and packages the project"],
                ["maven build clean", "mvn clean package", "Clears old files then builds fresh"],
                ["maven build skip tests", "mvn package -DskipTests", "Builds without running tests (faster)"],
            ],
        },
        HelpSection {
            key: "running",
            title: "RUNNING",
            rows: &[
                ["maven run", "mvn exec:java", "Runs the main class"],
                ["maven run boot", "mvn spring-boot:run", "Runs a Spring Boot application"],
            ],
        },
        HelpSection {
            key: "testing",
            title: "TESTING",
            rows: &[["maven test", "mvn test", "Runs all unit tests"]],
        },
        HelpSection {
            key: "show",
            title: "SHOWING INFORMATION",
            rows: &[
                ["maven show dependencies", "mvn dependency:tree", "Shows the full dependency tree"],
                ["maven show effective pom", "mvn help:effective-pom", "Shows the resolved pom with all inherited values"],
            ],
        },
        HelpSection {
            key: "cleaning",
            title: "CLEANING",
            rows: &[["maven clean", "mvn clean", "Deletes all build outputs"]],
        },
    ],
    tips: &[],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{exec::Platform, pattern::Resolution};

    #[test]
    fn exact_table_resolves_and_everything_else_falls_through() {
        let mut r = Registry::new();
        register(&mut r);
        r.finalize();
        match r.dispatch(None, "build skip tests", Platform::Unix) {
            Resolution::Run(spec) => assert_eq!(spec.cmd, "mvn package -DskipTests"),
            other => panic!("{other:?}"),
        }
        assert_eq!(
            r.dispatch(None, "verify", Platform::Unix),
            Resolution::NotFound
        );
    }
}
