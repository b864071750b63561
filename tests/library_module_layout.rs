use std::path::Path;

#[test]
fn module_roots_use_directory_mod_layout() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    for module in ["access_log", "config", "shared"] {
        assert!(
            root.join("src").join(module).join("mod.rs").exists(),
            "expected src/{module}/mod.rs to exist as the module root"
        );
        assert!(
            !root.join("src").join(format!("{module}.rs")).exists(),
            "src/{module}.rs would shadow src/{module}/mod.rs"
        );
    }
}
