use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
};

const GIT: &str = "\
cheats:
  - description: reset to remote
    data:
      - git reset --hard origin/main
links:
  - description: pro git book
    data:
      - https://git-scm.com/book
";

fn setup_fixture(root: &Path) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(root.join("git.yaml"), GIT)?;
    std::fs::write(root.join("broken.yaml"), "cheats: [oops\n")?;
    std::fs::write(
        root.join("vim.yaml"),
        "glossary:\n  - description: a remote is not a vim thing\n",
    )?;
    Ok(())
}

fn docsearch_bin() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(bin) = option_env!("CARGO_BIN_EXE_docsearch") {
        return Ok(PathBuf::from(bin));
    }

    let mut path = std::env::current_exe()?;
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("docsearch");

    if cfg!(windows) {
        path.set_extension("exe");
    }

    Ok(path)
}

fn docsearch(
    root: Option<&Path>,
    args: &[&str],
) -> Result<Output, Box<dyn std::error::Error>> {
    let mut cmd = Command::new(docsearch_bin()?);
    cmd.args(args)
        .env_remove("DOCSEARCH_PATH")
        .env_remove("DOCSEARCH_COLORED")
        .env_remove("DOCSEARCH_MATCH_COLORED")
        .env_remove("DOCSEARCH_LOG");
    if let Some(root) = root {
        cmd.env("DOCSEARCH_PATH", root);
    }
    Ok(cmd.output()?)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn dump_topic_prints_text_blocks() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    setup_fixture(tmp.path())?;

    let output = docsearch(Some(tmp.path()), &["-t", "git"])?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "# [git]: reset to remote\n- git reset --hard origin/main\n\n\
         * [git]: pro git book\n- https://git-scm.com/book\n\n"
    );
    Ok(())
}

#[test]
fn search_skips_broken_files() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    setup_fixture(tmp.path())?;

    let output = docsearch(Some(tmp.path()), &["-s", "remote"])?;

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("# [git]: reset to remote\n"));
    assert!(text.contains("% [vim]: a remote is not a vim thing\n"));
    assert!(!text.contains("broken"));
    Ok(())
}

#[test]
fn search_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    setup_fixture(tmp.path())?;

    let output = docsearch(Some(tmp.path()), &["-t", "git", "-j"])?;

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(value["#"][0]["description"], "reset to remote");
    assert_eq!(value["*"][0]["data"][0], "https://git-scm.com/book");
    Ok(())
}

#[test]
fn json_without_results_prints_nothing() -> Result<(), Box<dyn std::error::Error>>
{
    let tmp = tempfile::tempdir()?;
    setup_fixture(tmp.path())?;

    let output = docsearch(Some(tmp.path()), &["-s", "nomatch", "-j"])?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn inventory_lists_all_topics() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    setup_fixture(tmp.path())?;

    let output = docsearch(Some(tmp.path()), &["-i"])?;

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with(&format!("[*] {}\n", tmp.path().display())));
    for topic in ["git", "vim", "broken"] {
        assert!(text.lines().any(|l| l == topic), "missing {topic}");
    }
    Ok(())
}

#[test]
fn pwd_lists_parseable_files() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    setup_fixture(tmp.path())?;

    let output = docsearch(Some(tmp.path()), &["-p", "-s", "x"])?;

    assert!(output.status.success());
    let mut lines: Vec<String> =
        stdout(&output).lines().map(str::to_string).collect();
    lines.sort();
    assert_eq!(
        lines,
        vec![
            tmp.path().join("git.yaml").display().to_string(),
            tmp.path().join("vim.yaml").display().to_string(),
        ]
    );
    Ok(())
}

#[test]
fn env_report_shows_roots() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;

    let output = docsearch(Some(tmp.path()), &["-e"])?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!("[*] DOCSEARCH_PATH\n{}\n\n", tmp.path().display())
    );
    Ok(())
}

#[test]
fn missing_path_variable_exits_with_2() -> Result<(), Box<dyn std::error::Error>>
{
    let output = docsearch(None, &["-s", "x"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("DOCSEARCH_PATH"));
    Ok(())
}

#[test]
fn invalid_pattern_exits_with_1() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    setup_fixture(tmp.path())?;

    let output = docsearch(Some(tmp.path()), &["-s", "(unclosed"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("invalid search pattern")
    );
    Ok(())
}

#[test]
fn fixed_strings_accepts_regex_metacharacters()
-> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    std::fs::write(
        tmp.path().join("c.yaml"),
        "cheats:\n  - description: \"deref (*p)\"\n",
    )?;

    let output = docsearch(Some(tmp.path()), &["-F", "-s", "(*p)"])?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "# [c]: deref (*p)\n\n");
    Ok(())
}
