// tests/store.rs

//! Recipe store loading tests: file sources, soft failure, defaults.

mod common;

use common::{serve_http, write_dataset, SAMPLE_DATASET};
use platter::{DataSource, Error, RecipeStore};

#[test]
fn test_load_from_file_url() {
    let (_dir, path) = write_dataset(SAMPLE_DATASET);
    let url = url_for(&path);
    let source = DataSource::parse(&url).unwrap();

    let store = RecipeStore::load(&source);
    assert_eq!(store.len(), 6);
    assert_eq!(store.get(6).unwrap().name, "Tarte aux pommes");
}

#[test]
fn test_missing_recipes_key_gives_empty_store() {
    let (_dir, path) = write_dataset(r#"{"meals": [{"id": 1}]}"#);
    let source = DataSource::Path(path);

    assert!(matches!(RecipeStore::try_load(&source), Err(Error::ParseError(_))));
    assert!(RecipeStore::load(&source).is_empty());
}

#[test]
fn test_missing_file_gives_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let source = DataSource::Path(dir.path().join("absent.json"));

    assert!(matches!(RecipeStore::try_load(&source), Err(Error::IoError(_))));
    assert!(RecipeStore::load(&source).is_empty());
}

#[test]
fn test_sparse_records_load_with_defaults() {
    let (_dir, path) = write_dataset(
        r#"{"recipes": [
            {"id": 1, "name": "Bare"},
            {"id": 2, "name": "Partial", "ingredients": [{"ingredient": "Sel"}], "appliance": "Four"}
        ]}"#,
    );

    let store = RecipeStore::try_load(&DataSource::Path(path)).unwrap();
    assert_eq!(store.len(), 2);

    let bare = store.get(1).unwrap();
    assert!(bare.ingredients.is_empty());
    assert!(bare.ustensils.is_empty());
    assert_eq!(bare.time, 0);

    let partial = store.get(2).unwrap();
    assert_eq!(partial.ingredients[0].quantity, None);
    assert_eq!(partial.appliance, "Four");
}

#[test]
fn test_unreachable_url_gives_empty_store() {
    // Port 9 on localhost is reserved for discard and is not expected to serve HTTP
    let source = DataSource::parse("http://127.0.0.1:9/recipes.json").unwrap();
    assert!(RecipeStore::load(&source).is_empty());
}

#[test]
fn test_http_success_loads_dataset() {
    let url = serve_http("200 OK", SAMPLE_DATASET, 1);
    let source = DataSource::parse(&url).unwrap();

    let store = RecipeStore::load(&source);
    assert_eq!(store.len(), 6);
    assert_eq!(store.get(6).unwrap().name, "Tarte aux pommes");
}

#[test]
fn test_http_error_status_gives_empty_store() {
    let url = serve_http("404 Not Found", r#"{"error": "not found"}"#, 2);
    let source = DataSource::parse(&url).unwrap();

    match RecipeStore::try_load(&source) {
        Err(Error::DownloadError(msg)) => assert!(msg.contains("404"), "unexpected message: {msg}"),
        other => panic!("expected a download error, got {other:?}"),
    }
    assert!(RecipeStore::load(&source).is_empty());
}

#[test]
fn test_http_server_error_with_valid_body_is_rejected() {
    let url = serve_http("500 Internal Server Error", SAMPLE_DATASET, 1);
    let source = DataSource::parse(&url).unwrap();
    assert!(RecipeStore::load(&source).is_empty());
}

#[test]
fn test_http_malformed_body_gives_empty_store() {
    let url = serve_http("200 OK", "<html>oops</html>", 1);
    let source = DataSource::parse(&url).unwrap();

    assert!(matches!(RecipeStore::try_load(&source), Err(Error::ParseError(_))));
}

#[test]
fn test_null_fields_do_not_drop_records() {
    let (_dir, path) = write_dataset(
        r#"{"recipes": [
            {"id": 1, "name": "Limonade", "ustensils": null,
             "ingredients": [{"ingredient": "Citron", "quantity": "1/2"}]},
            {"id": 2, "name": "Riz", "appliance": null},
            "not a recipe"
        ]}"#,
    );

    let store = RecipeStore::try_load(&DataSource::Path(path)).unwrap();
    assert_eq!(store.len(), 2);
    assert!(store.get(1).unwrap().ustensils.is_empty());
    assert_eq!(store.get(1).unwrap().ingredients[0].quantity, Some(0.5));
    assert_eq!(store.get(2).unwrap().appliance, "");
}

fn url_for(path: &std::path::Path) -> String {
    format!("file://{}", path.display())
}
