//! Loading trees from parser dumps.

use tagforge_ast::{AstProvider, JsonDumpProvider, NodeKind, ParseError, Tree, TypeCategory};

const DUMP: &str = r#"
{
  "kind": "translation_unit",
  "name": "main.cpp",
  "children": [
    {
      "kind": "STRUCT_DECL",
      "name": "Person",
      "children": [
        { "kind": "annotate_attr", "name": "Printable" },
        {
          "kind": "struct_decl",
          "name": "SubPerson",
          "children": [
            { "kind": "annotate_attr", "name": "printable" },
            {
              "kind": "field_decl",
              "name": "sub_age",
              "type": {
                "spelling": "int8_t",
                "canonical": "signed char",
                "category": "char",
                "declaration": "int8_t"
              }
            }
          ]
        },
        {
          "kind": "field_decl",
          "name": "name",
          "type": {
            "spelling": "const char *",
            "canonical": "const char *",
            "category": "pointer",
            "pointee": { "spelling": "const char", "canonical": "const char", "category": "char" }
          }
        },
        {
          "kind": "field_decl",
          "name": "sp",
          "type": {
            "spelling": "SubPerson",
            "canonical": "Person::SubPerson",
            "category": "record",
            "declaration": "Person::SubPerson"
          }
        }
      ]
    },
    { "kind": "using_directive", "name": "std" }
  ]
}
"#;

#[test]
fn test_dump_is_normalized_on_load() {
    let tree = Tree::from_json_str(DUMP).expect("valid dump");
    let person = &tree.root().children()[0];

    assert_eq!(*person.kind(), NodeKind::StructDecl);
    assert!(person.has_tag("printable"));

    let fields: Vec<_> = person.fields().map(|f| f.name()).collect();
    assert_eq!(fields, vec!["name", "sp"]);

    let name = person.fields().next().unwrap().ty().unwrap();
    assert!(name.is_c_string());

    let sp = person.fields().nth(1).unwrap().ty().unwrap();
    assert_eq!(sp.category, TypeCategory::Record);
    let sub = tree.record(sp.alias()).expect("nested record is indexed");
    assert_eq!(sub.qualified_name(), "Person::SubPerson");
    assert_eq!(sub.fields().count(), 1);

    let other = &tree.root().children()[1];
    assert_eq!(*other.kind(), NodeKind::Other("using_directive".into()));
}

#[test]
fn test_json_provider_reads_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("ast.json");
    std::fs::write(&path, DUMP).unwrap();

    let tree = JsonDumpProvider::new(&path).parse().unwrap();
    assert_eq!(tree.root().name(), "main.cpp");
}

#[test]
fn test_json_provider_missing_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let err = JsonDumpProvider::new(temp.path().join("missing.json"))
        .parse()
        .unwrap_err();
    assert!(matches!(err, ParseError::Io { .. }));
}

#[test]
fn test_malformed_dump() {
    let err = Tree::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ParseError::Json { path: None, .. }));
}
