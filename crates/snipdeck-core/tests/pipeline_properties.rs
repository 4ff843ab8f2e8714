//! Cross-stage properties of the validate -> normalize -> manifest pipeline.

use snipdeck_core::pipeline::{ENTRY_FILE, FALLBACK_ENTRY_SYMBOL};
use snipdeck_core::{
    DisplayFlags, ManifestOptions, Settings, build_public_manifest, normalize, validate,
};

/// Accepted inputs without their own default export.
const ACCEPTED_WITHOUT_EXPORT: &[&str] = &[
    "function Foo(){}",
    "const Button = () => <button>Hi</button>;",
    "const Card = React.memo(function Card() { return null; });",
    "const Input = forwardRef((props, ref) => <input ref={ref} />);",
    "  \n\tfunction  Padded ( ) { return <div/> }\n\n",
    "const LIMIT = 10;",
];

fn default_export_count(code: &str) -> usize {
    code.matches("export default").count()
}

#[test]
fn test_normalize_is_idempotent_for_accepted_inputs() {
    for code in ACCEPTED_WITHOUT_EXPORT {
        assert!(validate(code).is_accepted(), "expected acceptance: {code}");
        let once = normalize(code);
        assert_eq!(normalize(&once), once, "not idempotent: {code}");
    }
}

#[test]
fn test_exactly_one_default_export_after_normalize() {
    for code in ACCEPTED_WITHOUT_EXPORT {
        let out = normalize(code);
        assert_eq!(default_export_count(&out), 1, "in {out}");
    }
}

#[test]
fn test_existing_default_export_is_preserved_verbatim() {
    let code = "export default function Page() { return null; }";
    assert!(validate(code).is_accepted());
    assert_eq!(normalize(code), code);
}

#[test]
fn test_unresolved_component_falls_back_to_app() {
    let out = normalize("const LIMIT = 10;");
    assert!(out.ends_with(&format!("export default {FALLBACK_ENTRY_SYMBOL};")));
}

#[test]
fn test_public_manifest_carries_normalized_code() {
    let code = normalize("unction Foo(){ return null }");
    let options = ManifestOptions::from_settings(&Settings::with_defaults())
        .with_display(DisplayFlags::with_editor());
    let manifest = build_public_manifest(&code, &options);

    assert_eq!(manifest.files[ENTRY_FILE].code, code);
    assert_eq!(manifest.display, DisplayFlags::locked_down());
    assert_eq!(
        manifest.to_json().unwrap(),
        build_public_manifest(&code, &options).to_json().unwrap()
    );
}
