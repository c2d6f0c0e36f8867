mod common;

use serde_json::json;

use easysearch_client::single;
use easysearch_core::types::Method;
use easysearch_core::{Direction, ErrorKind, QueryOptions};

use common::{client, MockTransport};

fn engine_json() -> serde_json::Value {
    json!({
        "id": "e1", "key": "k", "name": "bookstore", "slug": "bookstore",
        "updated_at": "2013-02-20T20:01:42Z", "document_count": 3
    })
}

#[test]
fn engine_search_posts_term_and_options_and_decodes_every_type() -> anyhow::Result<()> {
    let mock = MockTransport::new();
    mock.push_json(&engine_json());
    mock.push_json(&json!({
        "info": {
            "books": { "query": "dune", "total_result_count": 2, "num_pages": 1, "current_page": 1, "per_page": 5 },
            "films": { "query": "dune", "total_result_count": 0, "num_pages": 0, "current_page": 1, "per_page": 5 }
        },
        "records": { "books": [ { "title": "Dune" }, { "title": "Dune Messiah" } ], "films": [] }
    }));

    let engine = client(&mock).engines().get("bookstore")?;
    assert_eq!(engine.get()?.document_count, 3);
    assert!(engine.get()?.updated_at.is_some());

    let options = QueryOptions::builder()
        .per_page(5)
        .sort("books", "year", Direction::Desc)
        .build();
    let results = engine.search_with("dune", &options)?;

    let request = mock.last();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "engines/e1/search");
    assert_eq!(
        mock.last_body(),
        json!({ "q": "dune", "sort_field": { "books": "year" }, "sort_direction": { "books": "desc" }, "per_page": 5 })
    );
    assert!(request.body.unwrap().starts_with(r#"{"q":"dune""#));

    assert_eq!(results.len(), 2);
    assert_eq!(results["books"].info().total_result_count, 2);
    assert_eq!(results["books"].records()[1].field("title"), Some("Dune Messiah"));
    assert!(results["films"].records().is_empty());
    Ok(())
}

#[test]
fn default_options_send_only_the_term() -> anyhow::Result<()> {
    let mock = MockTransport::new();
    mock.push_json(&json!({ "record_count": 1, "records": { "books": [ { "title": "Dune" } ] } }));

    let results = client(&mock).engines().suggest("e1", "du", &QueryOptions::DEFAULT)?;

    assert_eq!(mock.last().path, "engines/e1/suggest");
    assert_eq!(mock.last_body(), json!({ "q": "du" }));
    assert_eq!(results["books"].record_count(), 1);
    Ok(())
}

#[test]
fn document_type_search_returns_its_own_set() -> anyhow::Result<()> {
    let mock = MockTransport::new();
    mock.push_json(&json!({
        "info": { "books": { "query": "dune", "total_result_count": 1, "num_pages": 1, "current_page": 1, "per_page": 20 } },
        "records": { "books": [ { "title": "Dune", "highlight": { "title": "<em>Dune</em>" } } ] }
    }));

    let set = client(&mock)
        .document_types("e1")
        .search_one("books", "dune", &QueryOptions::DEFAULT)?;

    assert_eq!(mock.last().path, "engines/e1/document_types/books/search");
    assert_eq!(set.info().query, "dune");
    assert_eq!(set.records()[0].highlight("title"), Some("<em>Dune</em>"));
    Ok(())
}

#[test]
fn response_without_the_requested_type_is_a_decode_error() {
    let mock = MockTransport::new();
    mock.push_json(&json!({ "record_count": 0, "records": { "films": [] } }));

    let err = client(&mock)
        .document_types("e1")
        .suggest_one("books", "du", &QueryOptions::DEFAULT)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);

    let results = std::collections::HashMap::from([("films".to_string(), 1)]);
    assert!(single(results, "films").is_ok());
}

#[test]
fn transport_failures_are_not_decoded() {
    let mock = MockTransport::new();
    mock.push(500, "not json at all");

    let api = client(&mock).engines();
    let err = api.search("e1", "dune", &QueryOptions::DEFAULT).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status(), Some(500));

    // script exhausted: the mock refuses the connection
    let err = api.search("e1", "dune", &QueryOptions::DEFAULT).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status(), None);
}

#[test]
fn malformed_success_body_is_a_decode_error() {
    let mock = MockTransport::new();
    mock.push(200, r#"{"info":{"books":{}}}"#);

    let err = client(&mock).engines().search("e1", "dune", &QueryOptions::DEFAULT).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}
