use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

use permforge::compiler::{CompileResult, Compiler, Diagnostic, Diagnostics, Group, WorldGroups};
use permforge::config::RootConfig;
use permforge::error::ForgeError;
use permforge::input::{load_custom_worlds, load_global_groups};
use permforge::output::OutputStore;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(config: &str) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.yml"), config).unwrap();
        fs::create_dir_all(dir.path().join("plugins")).unwrap();
        fs::create_dir_all(dir.path().join("worlds")).unwrap();
        Self { dir }
    }

    fn add_plugin_file(&self, name: &str, content: &str) -> &Self {
        fs::write(self.dir.path().join("plugins").join(name), content).unwrap();
        self
    }

    fn add_world_file(&self, name: &str, content: &str) -> &Self {
        fs::write(self.dir.path().join("worlds").join(name), content).unwrap();
        self
    }

    fn out_dir(&self) -> std::path::PathBuf {
        self.dir.path().join("final")
    }

    fn compile(
        &self,
    ) -> Result<(RootConfig, BTreeMap<String, Group>, CompileResult, Diagnostics), ForgeError> {
        let mut diagnostics = Diagnostics::new();
        let config = RootConfig::load(&self.dir.path().join("config.yml"))?;
        let globals = load_global_groups(&self.dir.path().join("plugins"), &mut diagnostics)?;
        let customs =
            load_custom_worlds(&self.dir.path().join("worlds"), &config, &mut diagnostics)?;
        let result = Compiler::new(&config).compile(&globals, &customs, &mut diagnostics)?;
        Ok((config, globals, result, diagnostics))
    }

    fn compile_and_write(&self) -> (usize, Diagnostics) {
        let (config, globals, result, diagnostics) = self.compile().unwrap();
        let written = OutputStore::new(self.out_dir())
            .write_all(&config, &globals, &result)
            .unwrap();
        (written, diagnostics)
    }
}

fn read_groups(path: &Path) -> WorldGroups {
    let content = fs::read_to_string(path).unwrap();
    serde_yaml_bw::from_str(&content).unwrap()
}

#[test]
fn test_end_to_end_suffix_attachment() {
    let fixture = Fixture::new(
        r#"
worlds:
  base: {}
  survival:
    inheritance: [base]
    suffixes: [surv]
groups:
  default:
    vip: true
"#,
    );
    fixture
        .add_plugin_file("myplugin.yml", "myplugin_vip_surv:\n  permissions: [b, a]\n")
        .add_world_file("base.yml", "groups:\n  default:\n    permissions: [chat]\n");

    let (written, diagnostics) = fixture.compile_and_write();
    assert_eq!(written, 2);
    assert!(diagnostics.is_empty());

    let survival = read_groups(&fixture.out_dir().join("survival/groups.yml"));
    let default = &survival.groups["default"];
    assert_eq!(default.inheritance.as_slice(), ["myplugin_vip_surv"]);
    assert_eq!(default.permissions.as_slice(), ["chat"]);

    // Base world never sees the suffix group (no suffixes declared).
    let base = read_groups(&fixture.out_dir().join("base/groups.yml"));
    assert!(base.groups["default"].inheritance.is_empty());

    // The attached name resolves in the global-groups file, pre-sorted.
    let globals = read_groups(&fixture.out_dir().join("globalgroups.yml"));
    assert_eq!(
        globals.groups["myplugin_vip_surv"].permissions.as_slice(),
        ["a", "b"]
    );
}

#[test]
fn test_output_round_trip_is_structurally_identical() {
    let fixture = Fixture::new("worlds: {w: {}}");
    fixture.add_world_file(
        "w.yml",
        r#"
groups:
  default:
    default: true
    info: {prefix: '[d]'}
    permissions: [c.node, a.node, '-b.node']
  mod:
    inheritance: [default]
"#,
    );

    let (config, globals, result, _) = fixture.compile().unwrap();
    OutputStore::new(fixture.out_dir())
        .write_all(&config, &globals, &result)
        .unwrap();

    let reread = read_groups(&fixture.out_dir().join("w/groups.yml"));
    assert_eq!(reread, result.worlds["w"]);
}

#[test]
fn test_virtual_world_resolves_but_is_not_written() {
    let fixture = Fixture::new(
        r#"
worlds:
  template: {folder: ""}
  live: {inheritance: [template]}
"#,
    );
    fixture.add_world_file("template.yml", "groups: {default: {permissions: [a]}}");

    let (written, _) = fixture.compile_and_write();
    assert_eq!(written, 1);
    assert!(!fixture.out_dir().join("template").exists());

    // The virtual world still contributed its groups downstream.
    let live = read_groups(&fixture.out_dir().join("live/groups.yml"));
    assert_eq!(live.groups["default"].permissions.as_slice(), ["a"]);
}

#[test]
fn test_folder_override_renames_output_directory() {
    let fixture = Fixture::new("worlds: {w: {folder: custom_dir}}");
    let (written, _) = fixture.compile_and_write();
    assert_eq!(written, 1);
    assert!(fixture.out_dir().join("custom_dir/groups.yml").exists());
    assert!(!fixture.out_dir().join("w").exists());
}

#[test]
fn test_duplicate_global_group_first_file_wins() {
    let fixture = Fixture::new("worlds: {w: {}}");
    fixture
        .add_plugin_file("a.yml", "plug_vip:\n  permissions: [from.first]\n")
        .add_plugin_file("b.yml", "plug_vip:\n  permissions: [from.second]\n");

    let (_, globals, _, diagnostics) = fixture.compile().unwrap();

    assert_eq!(globals["plug_vip"].permissions.as_slice(), ["from.first"]);
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.iter().any(|d| matches!(
        d,
        Diagnostic::DuplicateGlobalGroup { group, .. } if group == "plug_vip"
    )));
}

#[test]
fn test_global_group_without_permissions_aborts() {
    let fixture = Fixture::new("worlds: {w: {}}");
    fixture.add_plugin_file("bad.yml", "plug_vip:\n  default: true\n");

    let err = fixture.compile().unwrap_err();
    match err {
        ForgeError::MissingPermissions { group, .. } => assert_eq!(group, "plug_vip"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_override_for_undeclared_world_is_ignored() {
    let fixture = Fixture::new("worlds: {w: {}}");
    fixture.add_world_file("ghost.yml", "groups: {default: {permissions: [a]}}");

    let (_, _, result, diagnostics) = fixture.compile().unwrap();

    assert!(!result.worlds.contains_key("ghost"));
    assert!(diagnostics.iter().any(|d| matches!(
        d,
        Diagnostic::UnknownCustomWorld { world, .. } if world == "ghost"
    )));
}

#[test]
fn test_inheritance_cycle_aborts_before_any_output() {
    let fixture = Fixture::new("worlds: {a: {inheritance: [b]}, b: {inheritance: [a]}}");

    let err = fixture.compile().unwrap_err();
    match err {
        ForgeError::UnresolvableInheritance { worlds } => assert_eq!(worlds, ["a", "b"]),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!fixture.out_dir().exists());
}

#[test]
fn test_missing_input_directories_are_treated_as_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.yml"), "worlds: {w: {}}").unwrap();

    let mut diagnostics = Diagnostics::new();
    let config = RootConfig::load(&dir.path().join("config.yml")).unwrap();
    let globals = load_global_groups(&dir.path().join("plugins"), &mut diagnostics).unwrap();
    let customs = load_custom_worlds(&dir.path().join("worlds"), &config, &mut diagnostics).unwrap();
    let result = Compiler::new(&config)
        .compile(&globals, &customs, &mut diagnostics)
        .unwrap();

    assert!(globals.is_empty());
    assert!(customs.is_empty());
    assert!(result.worlds["w"].groups.is_empty());
    assert!(diagnostics.is_empty());
}

#[test]
fn test_empty_world_suffix_requires_explicit_empty_entry() {
    let fixture = Fixture::new(
        r#"
worlds:
  with_empty:
    suffixes: ["", surv]
  without_empty:
    suffixes: [surv]
groups:
  default:
    vip: true
"#,
    );
    fixture
        .add_plugin_file("p.yml", "myplugin_vip:\n  permissions: [a]\n")
        .add_world_file("with_empty.yml", "groups: {default: {}}")
        .add_world_file("without_empty.yml", "groups: {default: {}}");

    let (_, _, result, _) = fixture.compile().unwrap();

    assert_eq!(
        result.worlds["with_empty"].groups["default"]
            .inheritance
            .as_slice(),
        ["myplugin_vip"]
    );
    assert!(result.worlds["without_empty"].groups["default"]
        .inheritance
        .is_empty());
}
