use crate::{
    core::{
        exec::Platform,
        pattern::{CommandSpec, Registry},
    },
    help::{HelpSection, HelpTable},
};

pub fn register(r: &mut Registry) {
    r.exact("show runtime version", "java -version", "Shows installed Java runtime version");
    r.exact("show compiler version", "javac -version", "Shows Java compiler version");
    r.exact("show installation path", "echo $JAVA_HOME", "Shows where Java is installed");
    r.exact("show classpath", "echo $CLASSPATH", "Shows current classpath");

    r.arg("compile with classpath", compile_with_classpath);
    r.arg("compile with cp", compile_with_classpath);
    r.arg("compile with sourcepath", compile_with_sourcepath);
    r.arg("compile to", compile_to);
    r.arg("compile", compile);
    r.arg("run with classpath", run_with_classpath);
    r.arg("run with cp", run_with_classpath);
    r.arg("run with memory", run_with_memory);
    r.arg("run jar", run_jar);
    r.arg("run", run);
    r.arg("create jar with manifest", create_jar_with_manifest);
    r.arg("create jar", create_jar);
    r.arg("extract jar", extract_jar);
    r.arg("show jar manifest", show_jar_manifest);
    r.arg("show jar", show_jar);
    r.arg("find class", find_class);
    r.arg("find source", find_source);
}

// Most patterns here take "<first token> <rest...>" shapes: the first
// token is a path or name, the remainder is joined verbatim. Too few
// tokens means the precondition fails and dispatch falls through.

fn split_first(args: &str) -> Option<(&str, String)> {
    let mut parts = args.split_whitespace();
    let first = parts.next()?;
    let rest = parts.collect::<Vec<_>>().join(" ");
    if rest.is_empty() {
        return None;
    }
    Some((first, rest))
}

fn first_token(args: &str) -> Option<&str> {
    args.split_whitespace().next()
}

fn compile(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let file = first_token(args)?;
    Some(CommandSpec::new(format!("javac {file}"), "Compiles Java source file"))
}

fn compile_with_classpath(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let (classpath, file) = split_first(args)?;
    Some(CommandSpec::new(
        format!("javac -cp {classpath} {file}"),
        "Compiles with specified classpath",
    ))
}

fn compile_with_sourcepath(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let (sourcepath, file) = split_first(args)?;
    Some(CommandSpec::new(
        format!("javac -sourcepath {sourcepath} {file}"),
        "Compiles with specified source path",
    ))
}

fn compile_to(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let (output_dir, file) = split_first(args)?;
    Some(CommandSpec::new(
        format!("javac -d {output_dir} {file}"),
        "Compiles to specified output directory",
    ))
}

fn run(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let class = first_token(args)?;
    Some(CommandSpec::new(format!("java {class}"), "Runs a compiled Java class"))
}

fn run_with_classpath(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let (classpath, class) = split_first(args)?;
    Some(CommandSpec::new(
        format!("java -cp {classpath} {class}"),
        "Runs with specified classpath",
    ))
}

fn run_with_memory(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let (memory, class) = split_first(args)?;
    Some(CommandSpec::new(
        format!("java -Xmx{memory} {class}"),
        "Runs with specified max memory",
    ))
}

fn run_jar(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let jar = first_token(args)?;
    Some(CommandSpec::new(format!("java -jar {jar}"), "Runs a JAR file"))
}

fn create_jar(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let (jar, files) = split_first(args)?;
    Some(CommandSpec::new(
        format!("jar cvf {jar} {files}"),
        "Creates a JAR archive",
    ))
}

fn create_jar_with_manifest(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let mut parts = args.split_whitespace();
    let manifest = parts.next()?;
    let jar = parts.next()?;
    let files = parts.collect::<Vec<_>>().join(" ");
    if files.is_empty() {
        return None;
    }
    Some(CommandSpec::new(
        format!("jar cvfm {jar} {manifest} {files}"),
        "Creates JAR with manifest",
    ))
}

fn extract_jar(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let jar = first_token(args)?;
    Some(CommandSpec::new(format!("jar xvf {jar}"), "Extracts JAR contents"))
}

fn show_jar(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let jar = first_token(args)?;
    Some(CommandSpec::new(format!("jar tvf {jar}"), "Lists JAR contents"))
}

fn show_jar_manifest(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let jar = first_token(args)?;
    Some(CommandSpec::new(
        format!("unzip -p {jar} META-INF/MANIFEST.MF"),
        "Shows JAR manifest file",
    ))
}

fn find_class(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let class = first_token(args)?;
    Some(CommandSpec::new(
        format!("find . -name \"{class}.class\""),
        "Finds compiled class file",
    ))
}

fn find_source(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let class = first_token(args)?;
    Some(CommandSpec::new(
        format!("find . -name \"{class}.java\""),
        "Finds Java source file",
    ))
}

pub static HELP: HelpTable = HelpTable {
    title: "JAVA COMMANDS",
    sections: &[
        HelpSection {
            key: "compiling",
            title: "COMPILING",
            rows: &[
                ["java compile MyFile.java", "javac MyFile.java", "Compiles a single Java file"],
                ["java compile *.java", "javac *.java", "Compiles all Java files"],
                ["java compile to build/ MyFile.java", "javac -d build/ MyFile.java", "Compiles to output directory"],
                ["java compile with cp lib/* App.java", "javac -cp lib/* App.java", "Compiles with classpath"],
            ],
        },
        HelpSection {
            key: "running",
            title: "RUNNING",
            rows: &[
                ["java run MyClass", "java MyClass", "Runs a compiled class"],
                ["java run with cp lib/* MyClass", "java -cp lib/* MyClass", "Runs with classpath"],
                ["java run jar myapp.jar", "java -jar myapp.jar", "Runs a JAR file"],
                ["java run with memory 512m MyClass", "java -Xmx512m MyClass", "Runs with max memory limit"],
            ],
        },
        HelpSection {
            key: "jar",
            title: "JAR OPERATIONS",
            rows: &[
                ["java create jar app.jar *.class", "jar cvf app.jar *.class", "Creates a JAR archive"],
                ["java create jar with manifest ...", "jar cvfm app.jar MANIFEST ...", "Creates JAR with manifest"],
                ["java extract jar app.jar", "jar xvf app.jar", "Extracts JAR contents"],
                ["java show jar app.jar", "jar tvf app.jar", "Lists files inside JAR"],
                ["java show jar manifest app.jar", "unzip -p app.jar META-INF/...", "Shows the manifest file"],
            ],
        },
        HelpSection {
            key: "version",
            title: "VERSION & PATHS",
            rows: &[
                ["java show runtime version", "java -version", "Shows Java runtime version"],
                ["java show compiler version", "javac -version", "Shows Java compiler version"],
                ["java show installation path", "echo $JAVA_HOME", "Shows Java installation path"],
                ["java show classpath", "echo $CLASSPATH", "Shows current classpath"],
            ],
        },
        HelpSection {
            key: "finding",
            title: "FINDING FILES",
            rows: &[
                ["java find class MyClass", "find . -name \"MyClass.class\"", "Finds compiled .class file"],
                ["java find source MyClass", "find . -name \"MyClass.java\"", "Finds Java source file"],
            ],
        },
    ],
    tips: &[
        "  CLASSPATH TIPS:",
        "  -----------------------------------------------------------------",
        "  * Classpath tells Java where to find your .class files and libraries",
        "  * Use \".\" for current directory: java -cp . MyClass",
        "  * Use \":\" (Mac/Linux) or \";\" (Windows) to separate multiple paths",
        "  * Example: java -cp .:lib/*:bin MyClass",
        "  * Use \"*\" to include all JARs in a folder: java -cp \"lib/*\" MyClass",
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
    fn compile_family_specificity() {
        assert_eq!(cmd("compile Main.java"), "javac Main.java");
        assert_eq!(cmd("compile to build/ Main.java"), "javac -d build/ Main.java");
        assert_eq!(cmd("compile with cp lib/* App.java"), "javac -cp lib/* App.java");
        assert_eq!(
            cmd("compile with classpath lib/* App.java"),
            "javac -cp lib/* App.java"
        );
        assert_eq!(
            cmd("compile with sourcepath src/ App.java"),
            "javac -sourcepath src/ App.java"
        );
    }

    #[test]
    fn compile_to_with_one_token_falls_back_to_plain_compile() {
        // "compile to build/" fails the two-token precondition, then
        // the bare compile pattern takes "to" as the file name.
        assert_eq!(cmd("compile to build/"), "javac to");
    }

    #[test]
    fn run_family() {
        assert_eq!(cmd("run MyClass"), "java MyClass");
        assert_eq!(cmd("run jar app.jar"), "java -jar app.jar");
        assert_eq!(cmd("run with memory 512m MyClass"), "java -Xmx512m MyClass");
        assert_eq!(cmd("run with cp lib/* MyClass"), "java -cp lib/* MyClass");
    }

    #[test]
    fn jar_operations() {
        assert_eq!(cmd("create jar app.jar *.class"), "jar cvf app.jar *.class");
        assert_eq!(
            cmd("create jar with manifest MANIFEST.MF app.jar *.class"),
            "jar cvfm app.jar MANIFEST.MF *.class"
        );
        assert_eq!(cmd("extract jar app.jar"), "jar xvf app.jar");
        assert_eq!(cmd("show jar app.jar"), "jar tvf app.jar");
        assert_eq!(
            cmd("show jar manifest app.jar"),
            "unzip -p app.jar META-INF/MANIFEST.MF"
        );
    }

    #[test]
    fn find_wraps_names_in_extensions() {
        assert_eq!(cmd("find class MyClass"), "find . -name \"MyClass.class\"");
        assert_eq!(cmd("find source MyClass"), "find . -name \"MyClass.java\"");
    }

    #[test]
    fn version_exacts() {
        assert_eq!(cmd("show runtime version"), "java -version");
        assert_eq!(cmd("show installation path"), "echo $JAVA_HOME");
    }
}
