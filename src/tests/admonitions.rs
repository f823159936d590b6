use super::{severities, Admonitions, Severity};
use crate::dom::{parse_html, select_all, NodeExt};
use crate::patches::Patch;
use kuchikikiki::NodeRef;

fn block(doc: &NodeRef, id: &str) -> NodeRef {
    select_all(doc, &format!("#{id}")).unwrap().remove(0)
}

const ADMONITIONS: &str = r#"
<div id="note" class="admonition note"><p class="admonition-title">Note</p></div>
<div id="warning" class="admonition warning"><p>w</p></div>
<div id="caution" class="admonition caution"><p>c</p></div>
<div id="error" class="admonition error"><p>e</p></div>
<div id="danger" class="admonition danger"><p>d</p></div>
<div id="custom" class="admonition admonition-custom"><p>x</p></div>
<div id="both" class="admonition warning danger"><p>b</p></div>
<div id="plain" class="warning"><p>not an admonition</p></div>
"#;

#[test]
fn test_warning_and_caution() {
    let doc = parse_html(ADMONITIONS);
    Admonitions.apply(&doc).unwrap();

    for id in ["warning", "caution"] {
        let b = block(&doc, id);
        assert!(b.has_class("alert"), "{id}");
        assert!(b.has_class("alert-warning"), "{id}");
        assert!(!b.has_class("alert-info"), "{id}");
    }
}

#[test]
fn test_error_and_danger() {
    let doc = parse_html(ADMONITIONS);
    Admonitions.apply(&doc).unwrap();

    for id in ["error", "danger"] {
        let b = block(&doc, id);
        assert!(b.has_class("alert-danger"), "{id}");
        assert!(b.has_class("alert-error"), "{id}");
        assert!(!b.has_class("alert-info"), "{id}");
    }
}

#[test]
fn test_default_is_info() {
    let doc = parse_html(ADMONITIONS);
    let changed = Admonitions.apply(&doc).unwrap().changed;

    assert_eq!(changed, 7);
    for id in ["note", "custom"] {
        let b = block(&doc, id);
        assert!(b.has_class("alert"), "{id}");
        assert!(b.has_class("alert-info"), "{id}");
        assert!(!b.has_class("alert-warning"), "{id}");
    }
}

#[test]
fn test_mixed_severity_keeps_both_variants() {
    let doc = parse_html(ADMONITIONS);
    Admonitions.apply(&doc).unwrap();

    let b = block(&doc, "both");
    assert!(b.has_class("alert-warning"));
    assert!(b.has_class("alert-danger"));
    assert!(!b.has_class("alert-info"));
}

#[test]
fn test_non_admonition_untouched() {
    let doc = parse_html(ADMONITIONS);
    Admonitions.apply(&doc).unwrap();

    assert_eq!(block(&doc, "plain").classes(), vec!["warning"]);
}

#[test]
fn test_severities_from_classes() {
    let doc = parse_html(ADMONITIONS);
    assert_eq!(severities(&block(&doc, "note")), vec![Severity::Info]);
    assert_eq!(severities(&block(&doc, "caution")), vec![Severity::Warning]);
    assert_eq!(
        severities(&block(&doc, "both")),
        vec![Severity::Warning, Severity::Danger]
    );
}
