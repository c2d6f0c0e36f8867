mod common;

use serde_json::{json, Map, Value};

use easysearch_core::types::Method;
use easysearch_core::{Error, ErrorKind};

use common::{client, MockTransport};

fn engine_json(name: &str) -> Value {
    json!({ "id": "e1", "key": "k", "name": name, "slug": name, "updated_at": null, "document_count": 0 })
}

#[test]
fn destroyed_handle_refuses_everything_without_network() -> anyhow::Result<()> {
    let mock = MockTransport::new();
    mock.push_json(&engine_json("bookstore"));
    mock.push(200, "");

    let mut engine = client(&mock).engines().get("e1")?;
    engine.destroy()?;
    assert!(engine.is_destroyed());
    assert_eq!(mock.last().method, Method::Delete);
    assert_eq!(mock.last().path, "engines/e1");

    assert!(matches!(engine.get(), Err(Error::Destroyed("Engine"))));
    assert_eq!(engine.search("dune").unwrap_err().kind(), ErrorKind::State);
    assert_eq!(engine.suggest("du").unwrap_err().kind(), ErrorKind::State);
    assert_eq!(engine.document_types().unwrap_err().kind(), ErrorKind::State);
    assert_eq!(engine.refresh().unwrap_err().kind(), ErrorKind::State);
    assert_eq!(engine.destroy().unwrap_err().kind(), ErrorKind::State);
    assert_eq!(mock.requests().len(), 2);
    Ok(())
}

#[test]
fn failed_destroy_leaves_handle_live() -> anyhow::Result<()> {
    let mock = MockTransport::new();
    mock.push_json(&engine_json("bookstore"));
    mock.push(500, r#"{"error":"boom"}"#);

    let mut engine = client(&mock).engines().get("e1")?;
    let err = engine.destroy().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(!engine.is_destroyed());
    assert_eq!(engine.get()?.name, "bookstore");
    Ok(())
}

#[test]
fn refresh_replaces_attributes_or_marks_gone() -> anyhow::Result<()> {
    let mock = MockTransport::new();
    mock.push_json(&engine_json("bookstore"));
    mock.push_json(&engine_json("library"));
    mock.push(404, r#"{"error":"Record not found"}"#);

    let mut engine = client(&mock).engines().get("e1")?;
    assert_eq!(engine.refresh()?.name, "library");

    let err = engine.refresh().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::State);
    assert!(engine.is_destroyed());
    assert!(engine.clone().into_inner().is_err());
    assert_eq!(mock.requests().len(), 3);
    Ok(())
}

#[test]
fn refresh_keeps_state_on_other_failures() -> anyhow::Result<()> {
    let mock = MockTransport::new();
    mock.push_json(&engine_json("bookstore"));
    mock.push(503, "");

    let mut engine = client(&mock).engines().get("e1")?;
    assert_eq!(engine.refresh().unwrap_err().status(), Some(503));
    assert!(!engine.is_destroyed());
    Ok(())
}

#[test]
fn document_update_sends_fields_then_refreshes() -> anyhow::Result<()> {
    let mock = MockTransport::new();
    mock.push_json(&json!({ "id": "d1", "external_id": "1", "title": "Dune", "year": 1965 }));
    mock.push_json(&json!({ "id": "d1", "external_id": "1", "title": "Dune", "year": 1965 }));
    mock.push_json(&json!({ "id": "d1", "external_id": "1", "title": "Dune", "year": 1966 }));

    let mut document = client(&mock).documents("e1", "books").get("d1")?;
    let mut fields = Map::new();
    fields.insert("year".into(), json!(1966));
    let updated = document.update(&fields)?;
    assert_eq!(updated.fields["year"], json!(1966));

    let requests = mock.requests();
    let methods: Vec<Method> = requests.iter().map(|r| r.method).collect();
    assert_eq!(methods, [Method::Get, Method::Put, Method::Get]);
    assert_eq!(requests[1].path, "engines/e1/document_types/books/documents/d1/update_fields");
    let sent: Value = serde_json::from_str(requests[1].body.as_deref().unwrap_or_default())?;
    assert_eq!(sent, json!({ "fields": { "year": 1966 } }));
    Ok(())
}

#[test]
fn document_type_handle_scopes_its_documents() -> anyhow::Result<()> {
    let mock = MockTransport::new();
    mock.push_json(&json!([
        { "name": "books", "slug": "books", "engine_id": "e1", "document_count": 2 },
        { "name": "Films", "slug": "films", "engine_id": "e1", "document_count": null }
    ]));
    mock.push_json(&json!([]));

    let types = client(&mock).document_types("e1").all()?;
    assert_eq!(types.len(), 2);
    assert_eq!(types[1].get()?.document_count, 0);

    let documents = types[1].documents()?.all()?;
    assert!(documents.is_empty());
    assert_eq!(mock.last().path, "engines/e1/document_types/films/documents");
    Ok(())
}

#[test]
fn destroyed_document_rejects_update_locally() -> anyhow::Result<()> {
    let mock = MockTransport::new();
    mock.push_json(&json!({ "id": "d1", "external_id": "1", "title": "Dune" }));
    mock.push(200, "");

    let mut document = client(&mock).documents("e1", "books").get("d1")?;
    document.destroy()?;
    let sent = mock.requests().len();

    let mut fields = Map::new();
    fields.insert("year".into(), json!(1966));
    assert_eq!(document.update(&fields).unwrap_err().kind(), ErrorKind::State);
    assert_eq!(mock.requests().len(), sent);
    Ok(())
}

#[test]
fn destroyed_document_type_rejects_queries_locally() -> anyhow::Result<()> {
    let mock = MockTransport::new();
    mock.push_json(&json!({ "name": "books", "slug": "books", "engine_id": "e1" }));
    mock.push(200, "");

    let mut books = client(&mock).document_types("e1").get("books")?;
    books.destroy()?;
    let sent = mock.requests().len();

    assert_eq!(books.search("dune").unwrap_err().kind(), ErrorKind::State);
    assert_eq!(books.suggest("du").unwrap_err().kind(), ErrorKind::State);
    assert_eq!(books.documents().unwrap_err().kind(), ErrorKind::State);
    assert_eq!(mock.requests().len(), sent);
    Ok(())
}

#[test]
fn destroyed_domain_rejects_crawls_locally() -> anyhow::Result<()> {
    let mock = MockTransport::new();
    mock.push_json(&json!({ "id": "dm1", "submitted_url": "http://example.com/", "crawling": false }));
    mock.push(200, "");

    let mut domain = client(&mock).domains("e1").get("dm1")?;
    domain.destroy()?;
    assert_eq!(mock.last().path, "engines/e1/domains/dm1");
    let sent = mock.requests().len();

    assert_eq!(domain.recrawl().unwrap_err().kind(), ErrorKind::State);
    assert_eq!(domain.crawl_url("http://example.com/new").unwrap_err().kind(), ErrorKind::State);
    assert_eq!(domain.is_crawling().unwrap_err().kind(), ErrorKind::State);
    assert_eq!(domain.engine_id().unwrap_err().kind(), ErrorKind::State);
    assert_eq!(mock.requests().len(), sent);
    Ok(())
}

#[test]
fn entities_without_identifier_are_rejected() {
    let mock = MockTransport::new();
    mock.push_json(&json!({ "name": "bookstore" }));
    mock.push_json(&json!([{ "id": "e1", "name": "a" }, { "id": null, "name": "b" }]));
    mock.push_json(&engine_json("bookstore"));
    mock.push_json(&json!({ "id": "", "name": "bookstore" }));

    let api = client(&mock).engines();
    assert_eq!(api.get("e1").unwrap_err().kind(), ErrorKind::Decode);
    assert_eq!(api.all().unwrap_err().kind(), ErrorKind::Decode);

    let mut engine = api.get("e1").unwrap();
    assert_eq!(engine.refresh().unwrap_err().kind(), ErrorKind::Decode);
    assert!(!engine.is_destroyed());
    assert_eq!(engine.get().unwrap().id, "e1");
}
