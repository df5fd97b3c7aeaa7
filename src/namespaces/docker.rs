use crate::{
    core::{
        exec::Platform,
        pattern::{CommandSpec, Registry},
    },
    help::{HelpSection, HelpTable},
};

pub fn register(r: &mut Registry) {
    r.exact("show containers", "docker ps", "Shows all running containers");
    r.exact("show all containers", "docker ps -a", "Shows all containers including stopped ones");
    r.exact("show images", "docker images", "Shows all downloaded images");
    r.exact("build", "docker build -t myapp .", "Builds an image from Dockerfile in current folder");

    r.arg("show logs", show_logs);
    r.arg("run", run);
    r.arg("start", start);
    r.arg("stop", stop);
    r.arg("restart", restart);
    r.arg("remove", remove);
    r.arg("build tag", build_tag);
    r.arg("exec", exec);
}

fn show_logs(args: &str, _platform: Platform) -> Option<CommandSpec> {
    if args.contains("follow") {
        let name = args.replacen("follow", "", 1);
        let name = name.trim();
        return Some(CommandSpec::new(
            format!("docker logs -f {name}"),
            format!("Shows and follows logs from {name}"),
        ));
    }
    Some(CommandSpec::new(
        format!("docker logs {args}"),
        format!("Shows output logs from {args}"),
    ))
}

/// `run <image>`, `run <image> detach`, `run <image> port <mapping>`.
/// The detach keyword may appear anywhere after the image name; a port
/// keyword without a following mapping does not resolve.
fn run(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    let image = *parts.first()?;
    if args.contains("detach") {
        return Some(CommandSpec::new(
            format!("docker run -d {image}"),
            format!("Runs {image} in background"),
        ));
    }
    if let Some(i) = parts.iter().position(|&p| p == "port") {
        let mapping = *parts.get(i + 1)?;
        return Some(CommandSpec::new(
            format!("docker run -p {mapping} {image}"),
            format!("Runs {image} with port {mapping}"),
        ));
    }
    Some(CommandSpec::new(
        format!("docker run {image}"),
        format!("Creates and starts a container from {image}"),
    ))
}

fn start(container: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("docker start {container}"),
        format!("Starts {container}"),
    ))
}

fn stop(container: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("docker stop {container}"),
        format!("Stops {container}"),
    ))
}

fn restart(container: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("docker restart {container}"),
        format!("Restarts {container}"),
    ))
}

fn remove(args: &str, _platform: Platform) -> Option<CommandSpec> {
    if let Some(image) = args.strip_prefix("image ") {
        return Some(CommandSpec::new(
            format!("docker rmi {image}"),
            format!("Deletes image {image}"),
        ));
    }
    Some(CommandSpec::new(
        format!("docker rm {args}"),
        format!("Deletes container {args}"),
    ))
}

fn build_tag(tag: &str, _platform: Platform) -> Option<CommandSpec> {
    Some(CommandSpec::new(
        format!("docker build -t {tag} ."),
        format!("Builds image with tag {tag}"),
    ))
}

fn exec(args: &str, _platform: Platform) -> Option<CommandSpec> {
    let mut parts = args.split_whitespace();
    let container = parts.next()?;
    let command = parts.collect::<Vec<_>>().join(" ");
    let command = if command.is_empty() { "bash".to_string() } else { command };
    Some(CommandSpec::new(
        format!("docker exec -it {container} {command}"),
        format!("Opens {command} inside {container}"),
    ))
}

pub static HELP: HelpTable = HelpTable {
    title: "DOCKER COMMANDS",
    sections: &[
        HelpSection {
            key: "show",
            title: "SHOWING INFORMATION",
            rows: &[
                ["docker show containers", "docker ps", "Shows all running containers"],
                ["docker show all containers", "docker ps -a", "Shows all containers including stopped ones"],
                ["docker show images", "docker images", "Shows all downloaded images"],
                ["docker show logs <name>", "docker logs <name>", "Shows output logs from a container"],
                ["docker show logs <name> follow", "docker logs -f <name>", "Shows logs and keeps following new output"],
            ],
        },
        HelpSection {
            key: "running",
            title: "RUNNING",
            rows: &[
                ["docker run <image>", "docker run <image>", "Creates and starts a container from an image"],
                ["docker run <image> detach", "docker run -d <image>", "Runs container in background (detached)"],
                ["docker run <image> port 8080:80", "docker run -p 8080:80 <image>", "Runs container with port mapping"],
            ],
        },
        HelpSection {
            key: "managing",
            title: "MANAGING",
            rows: &[
                ["docker start <name>", "docker start <name>", "Starts a stopped container"],
                ["docker stop <name>", "docker stop <name>", "Stops a running container"],
                ["docker restart <name>", "docker restart <name>", "Stops and starts a container"],
                ["docker remove <name>", "docker rm <name>", "Deletes a stopped container"],
                ["docker remove image <name>", "docker rmi <name>", "Deletes a downloaded image"],
            ],
        },
        HelpSection {
            key: "building",
            title: "BUILDING",
            rows: &[
                ["docker build", "docker build -t myapp .", "Builds an image from Dockerfile"],
                ["docker build tag <tag>", "docker build -t <tag> .", "Builds an image with a specific tag"],
            ],
        },
        HelpSection {
            key: "executing",
            title: "EXECUTING",
            rows: &[
                ["docker exec <name> bash", "docker exec -it <name> bash", "Opens a shell inside a running container"],
            ],
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
    fn run_variants() {
        assert_eq!(cmd("run nginx"), "docker run nginx");
        assert_eq!(cmd("run nginx detach"), "docker run -d nginx");
        assert_eq!(cmd("run nginx port 8080:80"), "docker run -p 8080:80 nginx");
    }

    #[test]
    fn run_with_port_keyword_but_no_mapping_does_not_resolve() {
        assert_eq!(dispatch("run nginx port"), Resolution::NotFound);
    }

    #[test]
    fn log_following() {
        assert_eq!(cmd("show logs web"), "docker logs web");
        assert_eq!(cmd("show logs web follow"), "docker logs -f web");
    }

    #[test]
    fn remove_distinguishes_images_from_containers() {
        assert_eq!(cmd("remove web"), "docker rm web");
        assert_eq!(cmd("remove image nginx:latest"), "docker rmi nginx:latest");
    }

    #[test]
    fn exec_defaults_to_bash() {
        assert_eq!(cmd("exec web"), "docker exec -it web bash");
        assert_eq!(cmd("exec web sh -c ls"), "docker exec -it web sh -c ls");
    }

    #[test]
    fn build_tag_beats_bare_build_exact() {
        assert_eq!(cmd("build"), "docker build -t myapp .");
        assert_eq!(cmd("build tag myapp:1.0"), "docker build -t myapp:1.0 .");
    }
}
