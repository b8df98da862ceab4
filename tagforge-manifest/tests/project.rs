//! Manifests resolved against real project directories.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tagforge_codegen::WritePolicy;
use tagforge_manifest::{Error, Project, TagforgeToml};

fn project_dir(manifest: &str, files: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(dir.path().join(TagforgeToml::FILE_NAME), manifest).unwrap();
    for file in files {
        let path = dir.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "int main() {}\n").unwrap();
    }
    dir
}

fn resolve(dir: &Path) -> tagforge_manifest::Result<Project> {
    let file = TagforgeToml::open(dir.join(TagforgeToml::FILE_NAME))?;
    Project::resolve(&file, dir)
}

#[test]
fn test_defaults() {
    let dir = project_dir("", &["main.cpp", "lexer.cpp"]);
    let project = resolve(dir.path()).unwrap();

    assert_eq!(
        project.sources(),
        [PathBuf::from("lexer.cpp"), PathBuf::from("main.cpp")]
    );
    assert_eq!(project.entry_source(), Some(Path::new("lexer.cpp")));
    assert_eq!(project.ast_dump(), dir.path().join("g/ast.json"));
    assert_eq!(project.header_path("repr"), dir.path().join("g/repr.g.h"));
    assert_eq!(
        project.binary_path(),
        dir.path().join("o").join(format!("{}.out", project.name()))
    );

    let config = project.run_config();
    assert_eq!(config.write_policy(), WritePolicy::Staged);
    assert_eq!(config.layout().dir(), dir.path().join("g"));
    assert_eq!(config.layout().extension(), "g.h");
}

#[test]
fn test_compile_command() {
    let dir = project_dir(
        r#"
        [project]
        name = "demo"

        [compiler]
        sources = ["src/main.cpp", "src/util.cpp"]
        flags = ["-O2"]
        "#,
        &[],
    );
    let project = resolve(dir.path()).unwrap();

    assert_eq!(
        project.compile_command().to_string(),
        "g++ src/main.cpp src/util.cpp -o o/demo.out -O2"
    );
}

#[test]
fn test_entry_out_of_range() {
    let src = "[compiler]\nentry = 2\n";
    let dir = project_dir(src, &["main.cpp"]);

    let err = resolve(dir.path()).unwrap_err();
    let Error::EntryOutOfRange {
        entry, count, span, ..
    } = *err
    else {
        panic!("expected EntryOutOfRange, got {err:?}");
    };
    assert_eq!((entry, count), (2, 1));
    assert_eq!(span.unwrap().offset(), src.find('2').unwrap());
}

#[test]
fn test_generated_and_output_dirs_are_not_sources() {
    let dir = project_dir(
        "[project]\ngen_dir = \"gen\"\n",
        &["main.cpp", "gen/old.cpp", "o/old.cpp"],
    );
    let project = resolve(dir.path()).unwrap();
    assert_eq!(project.sources(), [PathBuf::from("main.cpp")]);
}

#[test]
fn test_missing_manifest() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = TagforgeToml::open(dir.path().join(TagforgeToml::FILE_NAME)).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));

    let implicit = TagforgeToml::implicit(dir.path().join(TagforgeToml::FILE_NAME));
    let project = Project::resolve(&implicit, dir.path()).unwrap();
    assert!(project.sources().is_empty());
    assert_eq!(project.entry_source(), None);
}
