//! Integration tests for the catalog module.
//!
//! Each test runs on a fresh in-memory SQLite DB with migrations applied,
//! and exercises the REST layer through the real router via `oneshot`.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{Datelike, Utc};
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use serde_json::{json, Value};
use tower::ServiceExt;

use catalog::{
    config::CatalogConfig,
    contract::{NewAuthor, NewBook},
    domain::service::Service,
    infra::storage::{
        migrations::Migrator,
        sea_orm_repo::{SeaOrmAuthorsRepository, SeaOrmBooksRepository},
    },
};
use restkit::AuthState;

const TOKEN: &str = "test-token";

struct TestCtx {
    router: Router,
    service: Arc<Service>,
}

/// Create a fresh test database (in-memory SQLite) and run migrations.
async fn create_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

/// Build the domain service and the real router on top of one database.
async fn setup() -> TestCtx {
    let db = create_test_db().await;
    let books = Arc::new(SeaOrmBooksRepository::new(db.clone()));
    let authors = Arc::new(SeaOrmAuthorsRepository::new(db));
    let service = Arc::new(Service::new(books, authors, CatalogConfig::default()));
    let auth = Arc::new(AuthState::new(HashMap::from([(
        TOKEN.to_string(),
        "tester".to_string(),
    )])));
    let router = catalog::api::rest::routes::router(service.clone(), auth);
    TestCtx { router, service }
}

/// Seed the two-book fixture used by the scenario tests.
async fn seed_fixture(svc: &Service) -> (i64, i64) {
    let tolkien = svc
        .create_author(NewAuthor {
            name: "J.R.R. Tolkien".to_string(),
        })
        .await
        .expect("seed tolkien");
    let king = svc
        .create_author(NewAuthor {
            name: "Stephen King".to_string(),
        })
        .await
        .expect("seed king");
    svc.create_book(NewBook {
        title: "The Hobbit".to_string(),
        publication_year: 1937,
        author_id: tolkien.id,
    })
    .await
    .expect("seed hobbit");
    svc.create_book(NewBook {
        title: "The Stand".to_string(),
        publication_year: 1978,
        author_id: king.id,
    })
    .await
    .expect("seed stand");
    (tolkien.id, king.id)
}

async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = router.clone().oneshot(req).await.expect("request failed");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        router,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

fn authed(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {TOKEN}"));
    match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn anon(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn titles(body: &Value) -> Vec<String> {
    body["results"]
        .as_array()
        .expect("results array")
        .iter()
        .map(|b| b["title"].as_str().expect("title").to_string())
        .collect()
}

fn years(body: &Value) -> Vec<i64> {
    body["results"]
        .as_array()
        .expect("results array")
        .iter()
        .map(|b| b["publication_year"].as_i64().expect("year"))
        .collect()
}

// --- scenario tests from the API contract ---

#[tokio::test]
async fn filter_by_author_name_is_case_insensitive_substring() -> Result<()> {
    let ctx = setup().await;
    seed_fixture(&ctx.service).await;

    let (status, body) = get(&ctx.router, "/books?author_name=tolkien").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(titles(&body), vec!["The Hobbit"]);
    Ok(())
}

#[tokio::test]
async fn explicit_ascending_year_ordering() -> Result<()> {
    let ctx = setup().await;
    seed_fixture(&ctx.service).await;

    let (status, body) = get(&ctx.router, "/books?ordering=publication_year").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(years(&body), vec![1937, 1978]);
    Ok(())
}

#[tokio::test]
async fn unknown_ordering_field_is_rejected() -> Result<()> {
    let ctx = setup().await;
    seed_fixture(&ctx.service).await;

    let (status, body) = get(&ctx.router, "/books?ordering=not_a_field").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("results").is_none());
    assert_eq!(body["status"], 400);
    Ok(())
}

#[tokio::test]
async fn future_publication_year_is_rejected_with_field_pointer() -> Result<()> {
    let ctx = setup().await;
    let (tolkien, _) = seed_fixture(&ctx.service).await;
    let next_year = Utc::now().year() + 1;

    let req = authed(
        "POST",
        "/books",
        Some(json!({"title": "New", "publication_year": next_year, "author": tolkien})),
    );
    let (status, body) = send(&ctx.router, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["pointer"], "/publication_year");

    // no partial write occurred
    let (_, list) = get(&ctx.router, "/books").await;
    assert_eq!(list["count"], 2);
    Ok(())
}

#[tokio::test]
async fn unauthenticated_delete_is_rejected_before_any_mutation() -> Result<()> {
    let ctx = setup().await;
    seed_fixture(&ctx.service).await;
    let (_, list) = get(&ctx.router, "/books?ordering=id").await;
    let id = list["results"][0]["id"].as_i64().unwrap();

    let (status, _) = send(&ctx.router, anon("DELETE", &format!("/books/{id}"), None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = get(&ctx.router, &format!("/books/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

// --- pipeline behavior ---

#[tokio::test]
async fn default_ordering_is_newest_first() -> Result<()> {
    let ctx = setup().await;
    seed_fixture(&ctx.service).await;

    let (_, default_body) = get(&ctx.router, "/books").await;
    let (_, explicit_body) = get(&ctx.router, "/books?ordering=-publication_year").await;
    assert_eq!(years(&default_body), vec![1978, 1937]);
    assert_eq!(years(&default_body), years(&explicit_body));
    Ok(())
}

#[tokio::test]
async fn ordering_by_joined_author_name_and_descending_prefix() -> Result<()> {
    let ctx = setup().await;
    seed_fixture(&ctx.service).await;

    let (status, body) = get(&ctx.router, "/books?ordering=author__name").await;
    assert_eq!(status, StatusCode::OK);
    // "J.R.R. Tolkien" < "Stephen King"
    assert_eq!(titles(&body), vec!["The Hobbit", "The Stand"]);

    let (_, body) = get(&ctx.router, "/books?ordering=-author__name").await;
    assert_eq!(titles(&body), vec!["The Stand", "The Hobbit"]);
    Ok(())
}

#[tokio::test]
async fn filters_combine_with_logical_and() -> Result<()> {
    let ctx = setup().await;
    seed_fixture(&ctx.service).await;

    // Both books contain "the"; the year bound narrows to one.
    let (_, body) = get(&ctx.router, "/books?title=the&publication_year_min=1950").await;
    assert_eq!(body["count"], 1);
    assert_eq!(titles(&body), vec!["The Stand"]);

    // Disjoint filters yield nothing (AND, never OR).
    let (_, body) = get(
        &ctx.router,
        "/books?author_name=tolkien&publication_year=1978",
    )
    .await;
    assert_eq!(body["count"], 0);
    Ok(())
}

#[tokio::test]
async fn search_is_case_insensitive_substring_across_title_and_author() -> Result<()> {
    let ctx = setup().await;
    seed_fixture(&ctx.service).await;

    // matches author name only
    let (_, body) = get(&ctx.router, "/books?search=TOLK").await;
    assert_eq!(titles(&body), vec!["The Hobbit"]);

    // matches title only
    let (_, body) = get(&ctx.router, "/books?search=stand").await;
    assert_eq!(titles(&body), vec!["The Stand"]);

    // matches both rows (substring of both titles)
    let (_, body) = get(&ctx.router, "/books?search=the").await;
    assert_eq!(body["count"], 2);

    // matches neither
    let (_, body) = get(&ctx.router, "/books?search=zzz").await;
    assert_eq!(body["count"], 0);
    Ok(())
}

#[tokio::test]
async fn search_narrows_filters_rather_than_replacing_them() -> Result<()> {
    let ctx = setup().await;
    seed_fixture(&ctx.service).await;

    let (_, body) = get(&ctx.router, "/books?publication_year_max=1950&search=the").await;
    assert_eq!(titles(&body), vec!["The Hobbit"]);

    let (_, body) = get(&ctx.router, "/books?author_name=king&search=hobbit").await;
    assert_eq!(body["count"], 0);
    Ok(())
}

#[tokio::test]
async fn malformed_filter_values_are_silently_dropped() -> Result<()> {
    let ctx = setup().await;
    seed_fixture(&ctx.service).await;

    for uri in [
        "/books?publication_year=not-a-number",
        "/books?publication_year_min=abc",
        "/books?publication_year_max=",
        "/books?author=xyz",
    ] {
        let (status, body) = get(&ctx.router, uri).await;
        assert_eq!(status, StatusCode::OK, "uri {uri}");
        assert_eq!(body["count"], 2, "uri {uri}");
    }
    Ok(())
}

#[tokio::test]
async fn author_id_filter_composes_with_the_rest() -> Result<()> {
    let ctx = setup().await;
    let (tolkien, _) = seed_fixture(&ctx.service).await;

    let (_, body) = get(&ctx.router, &format!("/books?author={tolkien}")).await;
    assert_eq!(titles(&body), vec!["The Hobbit"]);

    let (_, body) = get(
        &ctx.router,
        &format!("/books?author={tolkien}&publication_year=1978"),
    )
    .await;
    assert_eq!(body["count"], 0);
    Ok(())
}

#[tokio::test]
async fn like_wildcards_in_filter_values_match_literally() -> Result<()> {
    let ctx = setup().await;
    let (tolkien, _) = seed_fixture(&ctx.service).await;
    ctx.service
        .create_book(NewBook {
            title: "100% Hobbit".to_string(),
            publication_year: 2000,
            author_id: tolkien,
        })
        .await?;

    let (_, body) = get(&ctx.router, "/books?title=100%25").await;
    assert_eq!(titles(&body), vec!["100% Hobbit"]);

    // "%" would match everything if passed through unescaped
    let (_, body) = get(&ctx.router, "/books?title=0%25%20h").await;
    assert_eq!(body["count"], 1);
    Ok(())
}

// --- pagination ---

#[tokio::test]
async fn pagination_walk_reproduces_the_full_ordered_set() -> Result<()> {
    let ctx = setup().await;
    let author = ctx
        .service
        .create_author(NewAuthor {
            name: "Prolific".to_string(),
        })
        .await?;
    for i in 0..25 {
        ctx.service
            .create_book(NewBook {
                title: format!("Book {i:02}"),
                publication_year: 1900 + i,
                author_id: author.id,
            })
            .await?;
    }

    let mut seen = Vec::new();
    let (status, body) = get(&ctx.router, "/books?ordering=title").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 25);
    assert_eq!(body["previous"], Value::Null);
    assert_eq!(body["results"].as_array().unwrap().len(), 10);
    assert_eq!(body["next"], "/books?ordering=title&page=2");
    seen.extend(titles(&body));

    let (_, body) = get(&ctx.router, "/books?ordering=title&page=2").await;
    assert_eq!(body["previous"], "/books?ordering=title");
    assert_eq!(body["next"], "/books?ordering=title&page=3");
    assert_eq!(body["results"].as_array().unwrap().len(), 10);
    seen.extend(titles(&body));

    let (_, body) = get(&ctx.router, "/books?ordering=title&page=3").await;
    assert_eq!(body["next"], Value::Null);
    assert_eq!(body["results"].as_array().unwrap().len(), 5);
    seen.extend(titles(&body));

    let expected: Vec<String> = (0..25).map(|i| format!("Book {i:02}")).collect();
    assert_eq!(seen, expected);
    Ok(())
}

#[tokio::test]
async fn page_beyond_range_or_invalid_is_not_found() -> Result<()> {
    let ctx = setup().await;
    seed_fixture(&ctx.service).await;

    for uri in ["/books?page=2", "/books?page=0", "/books?page=abc"] {
        let (status, _) = get(&ctx.router, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "uri {uri}");
    }

    // page 1 of an empty result set is still valid
    let (status, body) = get(&ctx.router, "/books?search=zzz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
    assert_eq!(body["results"].as_array().unwrap().len(), 0);
    Ok(())
}

#[tokio::test]
async fn count_reflects_matches_before_slicing() -> Result<()> {
    let ctx = setup().await;
    let author = ctx
        .service
        .create_author(NewAuthor {
            name: "Prolific".to_string(),
        })
        .await?;
    for i in 0..15 {
        ctx.service
            .create_book(NewBook {
                title: format!("Book {i}"),
                publication_year: 1990,
                author_id: author.id,
            })
            .await?;
    }

    let (_, body) = get(&ctx.router, "/books?publication_year=1990").await;
    assert_eq!(body["count"], 15);
    assert_eq!(body["results"].as_array().unwrap().len(), 10);
    Ok(())
}

// --- mutations ---

#[tokio::test]
async fn authenticated_crud_round_trip() -> Result<()> {
    let ctx = setup().await;
    let (tolkien, king) = seed_fixture(&ctx.service).await;

    // create
    let req = authed(
        "POST",
        "/books",
        Some(json!({"title": "Silmarillion", "publication_year": 1977, "author": tolkien})),
    );
    let (status, created) = send(&ctx.router, req).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["author_id"].as_i64(), Some(tolkien));

    // full replace
    let req = authed(
        "PUT",
        &format!("/books/{id}"),
        Some(json!({"title": "The Silmarillion", "publication_year": 1977, "author": king})),
    );
    let (status, updated) = send(&ctx.router, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "The Silmarillion");
    assert_eq!(updated["author_id"].as_i64(), Some(king));

    // partial patch changes only the supplied field
    let req = authed(
        "PATCH",
        &format!("/books/{id}"),
        Some(json!({"publication_year": 1999})),
    );
    let (status, patched) = send(&ctx.router, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["title"], "The Silmarillion");
    assert_eq!(patched["publication_year"], 1999);

    // delete
    let (status, _) = send(&ctx.router, authed("DELETE", &format!("/books/{id}"), None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = get(&ctx.router, &format!("/books/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn current_year_is_accepted_next_year_is_not() -> Result<()> {
    let ctx = setup().await;
    let (tolkien, _) = seed_fixture(&ctx.service).await;
    let current = Utc::now().year();

    let req = authed(
        "POST",
        "/books",
        Some(json!({"title": "This Year", "publication_year": current, "author": tolkien})),
    );
    let (status, _) = send(&ctx.router, req).await;
    assert_eq!(status, StatusCode::CREATED);

    let req = authed(
        "PATCH",
        "/books/1",
        Some(json!({"publication_year": current + 1})),
    );
    let (status, body) = send(&ctx.router, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["pointer"], "/publication_year");
    Ok(())
}

#[tokio::test]
async fn put_with_missing_fields_is_rejected() -> Result<()> {
    let ctx = setup().await;
    seed_fixture(&ctx.service).await;
    let (_, list) = get(&ctx.router, "/books?ordering=id").await;
    let id = list["results"][0]["id"].as_i64().unwrap();

    let req = authed(
        "PUT",
        &format!("/books/{id}"),
        Some(json!({"title": "Only A Title"})),
    );
    let (status, _) = send(&ctx.router, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn create_with_unknown_author_reference_is_rejected() -> Result<()> {
    let ctx = setup().await;
    seed_fixture(&ctx.service).await;

    let req = authed(
        "POST",
        "/books",
        Some(json!({"title": "Orphan", "publication_year": 1990, "author": 9999})),
    );
    let (status, body) = send(&ctx.router, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["pointer"], "/author");
    Ok(())
}

#[tokio::test]
async fn empty_title_is_rejected() -> Result<()> {
    let ctx = setup().await;
    let (tolkien, _) = seed_fixture(&ctx.service).await;

    let req = authed(
        "POST",
        "/books",
        Some(json!({"title": "   ", "publication_year": 1990, "author": tolkien})),
    );
    let (status, body) = send(&ctx.router, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["pointer"], "/title");
    Ok(())
}

#[tokio::test]
async fn every_write_requires_authentication() -> Result<()> {
    let ctx = setup().await;
    let (tolkien, _) = seed_fixture(&ctx.service).await;

    let writes = [
        anon(
            "POST",
            "/books",
            Some(json!({"title": "X", "publication_year": 1990, "author": tolkien})),
        ),
        anon(
            "PUT",
            "/books/1",
            Some(json!({"title": "X", "publication_year": 1990, "author": tolkien})),
        ),
        anon("PATCH", "/books/1", Some(json!({"title": "X"}))),
        anon("DELETE", "/books/1", None),
        anon("POST", "/authors", Some(json!({"name": "X"}))),
        anon("DELETE", &format!("/authors/{tolkien}"), None),
    ];
    for req in writes {
        let desc = format!("{} {}", req.method(), req.uri());
        let (status, _) = send(&ctx.router, req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{desc}");
    }

    // nothing was written
    let (_, books) = get(&ctx.router, "/books").await;
    let (_, authors) = get(&ctx.router, "/authors").await;
    assert_eq!(books["count"], 2);
    assert_eq!(authors["count"], 2);
    Ok(())
}

#[tokio::test]
async fn deleting_an_author_cascades_to_their_books() -> Result<()> {
    let ctx = setup().await;
    let (tolkien, _) = seed_fixture(&ctx.service).await;
    ctx.service
        .create_book(NewBook {
            title: "The Lord of the Rings".to_string(),
            publication_year: 1954,
            author_id: tolkien,
        })
        .await?;

    let (_, before) = get(&ctx.router, "/books").await;
    assert_eq!(before["count"], 3);

    let (status, _) = send(
        &ctx.router,
        authed("DELETE", &format!("/authors/{tolkien}"), None),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, after) = get(&ctx.router, "/books").await;
    assert_eq!(after["count"], 1);
    assert_eq!(titles(&after), vec!["The Stand"]);

    let (status, _) = get(&ctx.router, &format!("/authors/{tolkien}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

// --- author endpoints ---

#[tokio::test]
async fn author_list_supports_filter_search_and_ordering() -> Result<()> {
    let ctx = setup().await;
    seed_fixture(&ctx.service).await;

    let (_, body) = get(&ctx.router, "/authors?name=king").await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["name"], "Stephen King");

    let (_, body) = get(&ctx.router, "/authors?search=TOLKIEN").await;
    assert_eq!(body["count"], 1);

    // default ordering: name ascending
    let (_, body) = get(&ctx.router, "/authors").await;
    assert_eq!(body["results"][0]["name"], "J.R.R. Tolkien");

    let (_, body) = get(&ctx.router, "/authors?ordering=-name").await;
    assert_eq!(body["results"][0]["name"], "Stephen King");

    let (status, _) = get(&ctx.router, "/authors?ordering=title").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn author_crud_round_trip() -> Result<()> {
    let ctx = setup().await;

    let (status, created) = send(
        &ctx.router,
        authed("POST", "/authors", Some(json!({"name": "Ursula K. Le Guin"}))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = send(
        &ctx.router,
        authed(
            "PUT",
            &format!("/authors/{id}"),
            Some(json!({"name": "U.K. Le Guin"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "U.K. Le Guin");

    let (status, _) = send(&ctx.router, authed("DELETE", &format!("/authors/{id}"), None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = get(&ctx.router, &format!("/authors/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn unknown_ids_yield_not_found() -> Result<()> {
    let ctx = setup().await;
    seed_fixture(&ctx.service).await;

    let (status, _) = get(&ctx.router, "/books/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &ctx.router,
        authed("PATCH", "/books/9999", Some(json!({"title": "X"}))),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&ctx.router, authed("DELETE", "/books/9999", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn undeserializable_query_string_renders_problem_json() -> Result<()> {
    let ctx = setup().await;
    seed_fixture(&ctx.service).await;

    // a duplicated scalar key fails query deserialization
    let resp = ctx
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/books?search=king&search=tolkien")
                .body(Body::empty())
                .unwrap(),
        )
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(ct, "application/problem+json");
    Ok(())
}

#[tokio::test]
async fn errors_render_as_problem_json() -> Result<()> {
    let ctx = setup().await;
    seed_fixture(&ctx.service).await;

    let resp = ctx
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/books?ordering=bogus")
                .body(Body::empty())
                .unwrap(),
        )
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(ct, "application/problem+json");
    Ok(())
}
