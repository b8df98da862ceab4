//! Orchestrator runs against real directories.

use std::{
    path::Path,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use tagforge_ast::{Node, NodeKind, ParseError, Tree};
use tagforge_codegen::{
    GeneratedUnit, MemoryTemplates, Orchestrator, OutputLayout, Piece, RunConfig, RunError,
    RunState, TemplateCache, Tool, WritePolicy, tool_fn,
};

fn tree() -> Tree {
    Tree::new(
        Node::translation_unit("main.cpp")
            .with_child(
                Node::new(NodeKind::Namespace, "geo")
                    .with_child(Node::new(NodeKind::StructDecl, "Point").with_tag("named")),
            )
            .with_child(Node::new(NodeKind::StructDecl, "Color").with_tag("named")),
    )
}

fn orchestrator(dir: &Path, policy: WritePolicy) -> Orchestrator {
    Orchestrator::new(
        RunConfig::new(OutputLayout::new(dir)).with_write_policy(policy),
        TemplateCache::new(MemoryTemplates::new().with("banner.h", "// NAME\n")),
    )
}

/// A tool emitting one name function per tagged struct into `unit`.
fn names_tool(tool: &str, unit: &'static str) -> Box<dyn Tool> {
    Box::new(tool_fn(tool, move |cx| {
        let mut out = GeneratedUnit::new(unit).with_includes(["<string>"]);
        for node in cx.collect(&["named"], &[NodeKind::StructDecl])? {
            let mut piece = Piece::new(format!(
                "std::string name({} const&)",
                node.qualified_name()
            ));
            piece.line(&format!("return \"{}\";", node.qualified_name()));
            out.register(node.qualified_name(), piece)?;
        }
        Ok(vec![out])
    }))
}

fn failing_tool(name: &str) -> Box<dyn Tool> {
    Box::new(tool_fn(name, |_| {
        let mut unit = GeneratedUnit::new("never");
        unit.register("k", Piece::flat())?;
        unit.register("k", Piece::flat())?;
        Ok(vec![unit])
    }))
}

fn counting_tool(name: &str, unit: &'static str, calls: Arc<AtomicUsize>) -> Box<dyn Tool> {
    Box::new(tool_fn(name, move |_| {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![GeneratedUnit::new(unit)])
    }))
}

#[test]
fn test_writes_one_file_per_unit() {
    let dir = tempfile::TempDir::new().unwrap();
    let orchestrator = orchestrator(dir.path(), WritePolicy::Staged);

    let report = orchestrator.run_on(&[names_tool("names", "names")], &tree());

    assert_eq!(report.state(), RunState::Completed);
    assert_eq!(report.written().len(), 1);
    assert_eq!(report.written()[0].path, dir.path().join("names.g.h"));

    let content = std::fs::read_to_string(dir.path().join("names.g.h")).unwrap();
    insta::assert_snapshot!(content, @r#"
    #pragma once

    #include <string>

    namespace g
    {
    std::string name(geo::Point const&);
    std::string name(Color const&);

    std::string name(geo::Point const&)
    {
        return "geo::Point";
    }

    std::string name(Color const&)
    {
        return "Color";
    }
    }
    "#);
}

#[test]
fn test_staged_abort_writes_nothing_and_stops() {
    let dir = tempfile::TempDir::new().unwrap();
    let third = Arc::new(AtomicUsize::new(0));
    let tools = vec![
        names_tool("first", "first"),
        failing_tool("second"),
        counting_tool("third", "third", third.clone()),
    ];

    let report = orchestrator(dir.path(), WritePolicy::Staged).run_on(&tools, &tree());

    assert_eq!(report.state(), RunState::Aborted);
    assert_eq!(third.load(Ordering::SeqCst), 0);
    assert!(report.written().is_empty());
    assert!(!dir.path().join("first.g.h").exists());

    match report.error().unwrap() {
        RunError::Tool { tool, category, message } => {
            assert_eq!(tool, "second");
            assert_eq!(*category, "DuplicateKey");
            assert!(message.contains("'k'"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_staged_write_failure_leaves_no_unit_behind() {
    let dir = tempfile::TempDir::new().unwrap();
    // a plain file where the second unit needs a directory
    std::fs::write(dir.path().join("blocker"), "").unwrap();
    let tools: Vec<Box<dyn Tool>> = vec![Box::new(tool_fn("pair", |_| {
        Ok(vec![GeneratedUnit::new("a"), GeneratedUnit::new("blocker/x")])
    }))];

    let report = orchestrator(dir.path(), WritePolicy::Staged).run_on(&tools, &tree());

    assert_eq!(report.state(), RunState::Aborted);
    assert!(matches!(report.error(), Some(RunError::Write { .. })));
    assert!(report.written().is_empty());
    assert!(!dir.path().join("a.g.h").exists());

    let mut entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    entries.sort();
    assert_eq!(entries, ["blocker"]);
}

#[test]
fn test_immediate_abort_keeps_earlier_tools_output() {
    let dir = tempfile::TempDir::new().unwrap();
    let third = Arc::new(AtomicUsize::new(0));
    let tools = vec![
        names_tool("first", "first"),
        failing_tool("second"),
        counting_tool("third", "third", third.clone()),
    ];

    let report = orchestrator(dir.path(), WritePolicy::Immediate).run_on(&tools, &tree());

    assert_eq!(report.state(), RunState::Aborted);
    assert_eq!(third.load(Ordering::SeqCst), 0);
    assert_eq!(report.written().len(), 1);
    assert!(dir.path().join("first.g.h").exists());
    assert!(!dir.path().join("never.g.h").exists());
    assert!(!dir.path().join("third.g.h").exists());
}

#[test]
fn test_identical_runs_produce_identical_files() {
    let a = tempfile::TempDir::new().unwrap();
    let b = tempfile::TempDir::new().unwrap();
    let tools = vec![names_tool("names", "names"), names_tool("more", "more")];

    for dir in [&a, &b] {
        let report = orchestrator(dir.path(), WritePolicy::Staged).run_on(&tools, &tree());
        assert!(report.is_success());
    }

    for unit in ["names.g.h", "more.g.h"] {
        assert_eq!(
            std::fs::read(a.path().join(unit)).unwrap(),
            std::fs::read(b.path().join(unit)).unwrap()
        );
    }
}

#[test]
fn test_parse_failure_runs_no_tool() {
    let dir = tempfile::TempDir::new().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let tools = vec![counting_tool("t", "t", calls.clone())];
    let provider = || -> Result<Tree, ParseError> { Err(ParseError::Provider("no clang".into())) };

    let report = orchestrator(dir.path(), WritePolicy::Staged).run(&tools, &provider);

    assert_eq!(report.state(), RunState::Aborted);
    assert!(matches!(report.error(), Some(RunError::Parse(_))));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_provider_is_called_once_per_run() {
    let dir = tempfile::TempDir::new().unwrap();
    let parses = AtomicUsize::new(0);
    let provider = || -> Result<Tree, ParseError> {
        parses.fetch_add(1, Ordering::SeqCst);
        Ok(tree())
    };
    let tools = vec![names_tool("a", "a"), names_tool("b", "b")];

    let report = orchestrator(dir.path(), WritePolicy::Staged).run(&tools, &provider);

    assert!(report.is_success());
    assert_eq!(parses.load(Ordering::SeqCst), 1);
}

#[test]
fn test_unit_name_collision_between_tools() {
    let dir = tempfile::TempDir::new().unwrap();
    let tools = vec![names_tool("a", "shared"), names_tool("b", "shared")];

    let report = orchestrator(dir.path(), WritePolicy::Staged).run_on(&tools, &tree());

    let err = report.into_result().unwrap_err();
    assert!(matches!(
        err,
        RunError::Tool { ref tool, category: "DuplicateUnit", .. } if tool == "b"
    ));
}

#[test]
fn test_unbalanced_piece_aborts_at_render() {
    let dir = tempfile::TempDir::new().unwrap();
    let tools: Vec<Box<dyn Tool>> = vec![Box::new(tool_fn("open", |_| {
        let mut piece = Piece::flat();
        piece.line("struct X").open_scope();
        let mut unit = GeneratedUnit::new("open");
        unit.register("X", piece)?;
        Ok(vec![unit])
    }))];

    let report = orchestrator(dir.path(), WritePolicy::Immediate).run_on(&tools, &tree());

    assert!(matches!(
        report.error(),
        Some(RunError::Tool { category: "ScopeImbalance", .. })
    ));
    assert!(!dir.path().join("open.g.h").exists());
}

#[test]
fn test_templates_are_shared_across_tools() {
    let dir = tempfile::TempDir::new().unwrap();
    let with_banner = |name: &'static str, value: &'static str| -> Box<dyn Tool> {
        Box::new(tool_fn(name, move |cx| {
            let mut unit = GeneratedUnit::new(name);
            unit.register("banner", cx.template("banner.h", &[("NAME", value)])?)?;
            Ok(vec![unit])
        }))
    };
    let tools = vec![with_banner("one", "first"), with_banner("two", "second")];

    let orchestrator = orchestrator(dir.path(), WritePolicy::Staged);
    assert!(orchestrator.run_on(&tools, &tree()).is_success());

    let two = std::fs::read_to_string(dir.path().join("two.g.h")).unwrap();
    // The first expansion is reused: the second tool's parameter is ignored.
    assert!(two.contains("#define NAME first\n"));
    assert!(orchestrator.templates().is_cached("banner.h"));
}

#[test]
fn test_missing_template_category() {
    let dir = tempfile::TempDir::new().unwrap();
    let tools: Vec<Box<dyn Tool>> = vec![Box::new(tool_fn("t", |cx| {
        cx.template("absent.h", &[])?;
        Ok(Vec::new())
    }))];

    let report = orchestrator(dir.path(), WritePolicy::Staged).run_on(&tools, &tree());
    assert!(matches!(
        report.error(),
        Some(RunError::Tool { category: "TemplateNotFound", .. })
    ));
}
