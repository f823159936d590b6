use super::find_documents;
use std::fs;

#[test]
fn test_walks_directories_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("api/_static")).unwrap();
    fs::write(root.join("index.html"), "").unwrap();
    fs::write(root.join("api/module.HTML"), "").unwrap();
    fs::write(root.join("api/_static/bootstrap-sphinx.js"), "").unwrap();
    fs::write(root.join("objects.inv"), "").unwrap();

    let docs = find_documents(vec![root.to_path_buf()], &["html".to_string()]).unwrap();

    assert_eq!(
        docs,
        vec![root.join("api/module.HTML"), root.join("index.html")]
    );
}

#[test]
fn test_explicit_files_and_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("page.xhtml");
    fs::write(&page, "").unwrap();

    let docs = find_documents(
        vec![page.clone(), page.clone(), dir.path().join("missing")],
        &["html".to_string()],
    )
    .unwrap();

    assert_eq!(docs, vec![page]);
}
