//! Argument vectors for engine command lines.
//!
//! Pure functions so the exact invocation can be checked without an engine.

use edna_common::types::ContainerName;

use crate::backend::{BuildRequest, CreateRequest};

/// Go template printing whether a container is running.
pub const RUNNING_FORMAT: &str = "{{.State.Running}}";

/// `build` arguments. The context directory comes last.
#[must_use]
pub fn build_args(request: &BuildRequest) -> Vec<String> {
    let mut args = vec![
        "build".to_owned(),
        "--tag".to_owned(),
        request.tag.clone(),
        "--file".to_owned(),
        request.dockerfile.display().to_string(),
    ];
    if request.no_cache {
        args.push("--no-cache".to_owned());
    }
    for (key, value) in &request.build_args {
        args.push("--build-arg".to_owned());
        args.push(format!("{key}={value}"));
    }
    args.push(request.context.display().to_string());
    args
}

/// `container inspect` arguments printing the running flag.
#[must_use]
pub fn inspect_args(name: &ContainerName) -> Vec<String> {
    vec![
        "container".to_owned(),
        "inspect".to_owned(),
        "--format".to_owned(),
        RUNNING_FORMAT.to_owned(),
        name.to_string(),
    ]
}

/// `create` arguments. The container keeps a TTY so its default shell
/// stays alive between sessions.
#[must_use]
pub fn create_args(request: &CreateRequest) -> Vec<String> {
    let mut args = vec![
        "create".to_owned(),
        "--name".to_owned(),
        request.name.to_string(),
        "--interactive".to_owned(),
        "--tty".to_owned(),
    ];
    for mount in &request.mounts {
        args.push("--volume".to_owned());
        args.push(mount.to_string());
    }
    for (key, value) in &request.env {
        args.push("--env".to_owned());
        args.push(format!("{key}={value}"));
    }
    args.push(request.image.clone());
    args
}

/// `start` arguments.
#[must_use]
pub fn start_args(name: &ContainerName) -> Vec<String> {
    vec!["start".to_owned(), name.to_string()]
}

/// `rm --force` arguments.
#[must_use]
pub fn remove_args(name: &ContainerName) -> Vec<String> {
    vec!["rm".to_owned(), "--force".to_owned(), name.to_string()]
}

/// `exec --interactive --tty` arguments.
#[must_use]
pub fn exec_args(name: &ContainerName, command: &[String]) -> Vec<String> {
    let mut args = vec![
        "exec".to_owned(),
        "--interactive".to_owned(),
        "--tty".to_owned(),
        name.to_string(),
    ];
    args.extend(command.iter().cloned());
    args
}

/// Renders a command line for logs and dry runs.
#[must_use]
pub fn render(binary: &str, args: &[String]) -> String {
    std::iter::once(binary)
        .chain(args.iter().map(String::as_str))
        .map(quote)
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote(arg: &str) -> String {
    if !arg.is_empty() && !arg.contains(|c: char| c.is_whitespace() || c == '\'' || c == '"') {
        return arg.to_owned();
    }
    format!("'{}'", arg.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    use edna_common::types::MountSpec;

    use super::*;

    fn name() -> ContainerName {
        ContainerName::new("edna")
    }

    #[test]
    fn build_args_order_and_flags() {
        let request = BuildRequest {
            tag: "edna:latest".into(),
            context: PathBuf::from("ctx"),
            dockerfile: PathBuf::from("ctx/Dockerfile"),
            no_cache: true,
            build_args: BTreeMap::from([
                ("ARTIFACT_A".into(), "a.tar.gz".into()),
                ("ARTIFACT_B".into(), "b.tar.gz".into()),
            ]),
        };
        assert_eq!(
            build_args(&request),
            [
                "build", "--tag", "edna:latest", "--file", "ctx/Dockerfile", "--no-cache",
                "--build-arg", "ARTIFACT_A=a.tar.gz", "--build-arg", "ARTIFACT_B=b.tar.gz", "ctx",
            ]
        );
    }

    #[test]
    fn build_args_without_cache_flag() {
        let request = BuildRequest {
            tag: "t".into(),
            context: PathBuf::from("."),
            dockerfile: PathBuf::from("Dockerfile"),
            no_cache: false,
            build_args: BTreeMap::new(),
        };
        assert!(!build_args(&request).contains(&"--no-cache".to_owned()));
    }

    #[test]
    fn create_args_carry_mounts_and_env() {
        let request = CreateRequest {
            name: name(),
            image: "edna:latest".into(),
            mounts: vec![
                MountSpec {
                    raw: None,
                    host_path: "/home/u/data".into(),
                    container_path: "/data".into(),
                },
                MountSpec {
                    raw: Some("/refs:/blastdb".into()),
                    host_path: "/refs".into(),
                    container_path: "/blastdb".into(),
                },
            ],
            env: BTreeMap::from([("BLASTDB".into(), "/blastdb".into())]),
        };
        assert_eq!(
            create_args(&request),
            [
                "create", "--name", "edna", "--interactive", "--tty",
                "--volume", "/home/u/data:/data", "--volume", "/refs:/blastdb",
                "--env", "BLASTDB=/blastdb", "edna:latest",
            ]
        );
    }

    #[test]
    fn exec_args_append_command() {
        let args = exec_args(&name(), &["/bin/bash".to_owned()]);
        assert_eq!(args, ["exec", "--interactive", "--tty", "edna", "/bin/bash"]);
    }

    #[test]
    fn render_quotes_only_when_needed() {
        let args = vec!["build".to_owned(), "my dir".to_owned(), String::new()];
        assert_eq!(render("docker", &args), "docker build 'my dir' ''");
    }

    #[test]
    fn inspect_uses_running_template() {
        assert_eq!(inspect_args(&name())[3], RUNNING_FORMAT);
    }
}
