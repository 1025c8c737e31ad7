//! Golden tests for the committed theme files.
//!
//! The files under `themes/` at the workspace root are what the editor
//! extension ships. These tests render the built-in configuration and
//! require byte-identical output, so a change to the surface table or the
//! color math shows up as a reviewable diff of those files.

use std::path::PathBuf;

use tiho_cli::generate::render_all;
use tiho_config::GeneratorConfig;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

#[test]
fn committed_config_matches_defaults() {
    let config = GeneratorConfig::load(&workspace_root().join("tiho.toml")).unwrap();
    assert_eq!(config.output_path(), workspace_root().join("themes"));
    assert_eq!(GeneratorConfig { output_base: None, ..config }, GeneratorConfig::default());
}

#[test]
fn committed_themes_are_current() {
    let config = GeneratorConfig::default();
    let assembler = config.assembler().unwrap();
    let out = workspace_root().join(&config.output_dir);

    let rendered = render_all(&assembler, &config.definitions(), &out).unwrap();
    assert_eq!(rendered.len(), 5);

    for item in &rendered {
        let committed = std::fs::read_to_string(&item.path)
            .unwrap_or_else(|e| panic!("Cannot read {}: {}", item.path.display(), e));
        assert_eq!(
            committed,
            item.contents,
            "{} is out of date; run `tiho generate`",
            item.path.display()
        );
    }
}

#[test]
fn committed_themes_use_only_palette_colors() {
    let config = GeneratorConfig::default();
    let assembler = config.assembler().unwrap();

    for theme in assembler.assemble(&config.definitions()).unwrap() {
        assert!(
            theme.document.colors_trace_to(&theme.palette),
            "{} has a color outside its palette",
            theme.document.name
        );
    }
}
