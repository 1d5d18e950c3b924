// tests/pagination_flow.rs
//! Multi-page listing flows against a mock server: cursor propagation
//! in query strings and request bodies, and termination conditions.

use futures::TryStreamExt;
use notion_sdk::{
    stream_all, CheckboxCondition, Client, ClientConfig, DatabaseId, Filter, PageId,
    PropertyCondition, User,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> Client {
    let config = ClientConfig::builder("secret_test_key_1234567890")
        .base_url(server.uri())
        .build()
        .expect("Failed to build config");
    Client::with_config(config).expect("Failed to build client")
}

fn person_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "object": "user",
        "id": id,
        "type": "person",
        "person": {},
        "name": name
    })
}

fn page_json(id: &str, title: &str) -> serde_json::Value {
    json!({
        "object": "page",
        "id": id,
        "created_time": "2022-03-01T19:05:00.000Z",
        "last_edited_time": "2022-07-06T19:16:00.000Z",
        "parent": { "type": "database_id", "database_id": "d9824bdc-8445-4327-be8b-5b47500af6ce" },
        "archived": false,
        "properties": {
            "Name": {
                "id": "title",
                "type": "title",
                "title": [
                    { "type": "text", "text": { "content": title }, "plain_text": title }
                ]
            }
        },
        "url": "https://www.notion.so/test"
    })
}

fn user_page(results: Vec<serde_json::Value>, next_cursor: Option<&str>) -> serde_json::Value {
    json!({
        "object": "list",
        "results": results,
        "next_cursor": next_cursor,
        "has_more": next_cursor.is_some(),
        "type": "user",
        "user": {}
    })
}

#[tokio::test]
async fn list_all_users_follows_cursor_chain() {
    let server = MockServer::start().await;

    // The cursor-bearing mock goes first so the follow-up request is
    // matched before the catch-all.
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("start_cursor", "cursor-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_page(
            vec![
                person_json("9a3b5ae0-c6e6-482d-b0e1-ed315ee6dc57", "Kale Turing"),
                person_json("e450a39e-9051-4d36-bc4e-8581611fc592", "Chard Hopper"),
            ],
            None,
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_page(
            vec![person_json(
                "d40e767c-d7af-4b18-a86d-55c61f1e39a4",
                "Avocado Lovelace",
            )],
            Some("cursor-1"),
        )))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let users = client.users.list_all().await.expect("list_all() failed");

    let names: Vec<_> = users.iter().filter_map(|u| u.name.as_deref()).collect();
    assert_eq!(names, vec!["Avocado Lovelace", "Kale Turing", "Chard Hopper"]);
}

#[tokio::test]
async fn query_all_resends_filter_with_cursor() {
    let server = MockServer::start().await;
    let filter_body = json!({
        "property": "In stock",
        "checkbox": { "equals": true }
    });

    Mock::given(method("POST"))
        .and(path("/databases/d9824bdc84454327be8b5b47500af6ce/query"))
        .and(body_json(json!({
            "filter": filter_body,
            "start_cursor": "cursor-1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "results": [ page_json("acc7eb06-05cd-4603-a384-5e1e4f1f4e72", "Ramen") ],
            "next_cursor": null,
            "has_more": false,
            "type": "page_or_database",
            "page_or_database": {}
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/databases/d9824bdc84454327be8b5b47500af6ce/query"))
        .and(body_json(json!({ "filter": filter_body })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "results": [ page_json("59833787-2cf9-4fdf-8782-e53db20768a5", "Tuscan kale") ],
            "next_cursor": "cursor-1",
            "has_more": true,
            "type": "page_or_database",
            "page_or_database": {}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let database_id = DatabaseId::parse("d9824bdc-8445-4327-be8b-5b47500af6ce").unwrap();
    let filter = Filter::property(
        "In stock",
        PropertyCondition::Checkbox(CheckboxCondition::Equals(true)),
    );
    let pages = client
        .databases
        .query_all(&database_id, Some(filter), Vec::new())
        .await
        .expect("query_all() failed");

    let titles: Vec<_> = pages.iter().map(|p| p.title_plain_text()).collect();
    assert_eq!(titles, vec!["Tuscan kale", "Ramen"]);
}

#[tokio::test]
async fn children_all_walks_every_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blocks/598337872cf94fdf8782e53db20768a5/children"))
        .and(query_param("start_cursor", "cursor-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "results": [
                {
                    "object": "block",
                    "id": "acc7eb06-05cd-4603-a384-5e1e4f1f4e72",
                    "created_time": "2022-03-01T19:05:00.000Z",
                    "last_edited_time": "2022-03-01T19:05:00.000Z",
                    "has_children": false,
                    "archived": false,
                    "type": "paragraph",
                    "paragraph": {
                        "rich_text": [
                            { "type": "text", "text": { "content": "Second" }, "plain_text": "Second" }
                        ],
                        "color": "default"
                    }
                }
            ],
            "next_cursor": null,
            "has_more": false,
            "type": "block",
            "block": {}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/blocks/598337872cf94fdf8782e53db20768a5/children"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "results": [
                {
                    "object": "block",
                    "id": "c02fc1d3-db8b-45c5-a222-27595b15aea7",
                    "created_time": "2022-03-01T19:05:00.000Z",
                    "last_edited_time": "2022-03-01T19:05:00.000Z",
                    "has_children": false,
                    "archived": false,
                    "type": "heading_1",
                    "heading_1": {
                        "rich_text": [
                            { "type": "text", "text": { "content": "First" }, "plain_text": "First" }
                        ],
                        "color": "default",
                        "is_toggleable": false
                    }
                }
            ],
            "next_cursor": "cursor-1",
            "has_more": true,
            "type": "block",
            "block": {}
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let parent = PageId::parse("59833787-2cf9-4fdf-8782-e53db20768a5")
        .unwrap()
        .into();
    let blocks = client
        .blocks
        .children_all(&parent)
        .await
        .expect("children_all() failed");

    let texts: Vec<_> = blocks.iter().map(|b| b.plain_text()).collect();
    assert_eq!(texts, vec!["First", "Second"]);
}

#[tokio::test]
async fn stream_all_pulls_pages_on_demand() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("start_cursor", "cursor-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_page(
            vec![person_json("9a3b5ae0-c6e6-482d-b0e1-ed315ee6dc57", "Kale Turing")],
            None,
        )))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_page(
            vec![person_json(
                "d40e767c-d7af-4b18-a86d-55c61f1e39a4",
                "Avocado Lovelace",
            )],
            Some("cursor-1"),
        )))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let users: Vec<User> = stream_all(|cursor| client.users.list(cursor, None))
        .try_collect()
        .await
        .expect("stream_all() failed");

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name.as_deref(), Some("Avocado Lovelace"));
    assert_eq!(users[1].name.as_deref(), Some("Kale Turing"));
}

#[tokio::test]
async fn stale_cursor_without_has_more_stops_the_walk() {
    let server = MockServer::start().await;

    // has_more is authoritative. The leftover cursor must not trigger
    // another request, which the expect(1) below would catch.
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "results": [ person_json("d40e767c-d7af-4b18-a86d-55c61f1e39a4", "Avocado Lovelace") ],
            "next_cursor": "stale-cursor",
            "has_more": false,
            "type": "user",
            "user": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let users = client.users.list_all().await.expect("list_all() failed");

    assert_eq!(users.len(), 1);
}
