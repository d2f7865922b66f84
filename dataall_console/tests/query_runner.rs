use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dataall_console::dataall_gql::ops::worksheet::StartQueryInput;
use dataall_console::dataall_gql::types::QueryStatus;
use dataall_console::dataall_gql::Client;
use dataall_console::{ConsoleError, QueryRunner};

fn query_body(field: &str, status: &str, error: Option<&str>) -> serde_json::Value {
    json!({
        "data": {
            field: {
                "AthenaQueryId": "qid-1",
                "Status": status,
                "Error": error,
                "ElapsedTimeInMs": 120,
                "DataScannedInBytes": 1024,
                "OutputLocation": "s3://dataall-athena-results/qid-1.csv",
                "rows": if status == "SUCCEEDED" {
                    json!([{ "cells": ["eu-west-1", "10234.50"] }])
                } else {
                    json!([])
                },
                "columns": if status == "SUCCEEDED" {
                    json!([
                        { "columnName": "region", "typeName": "varchar" },
                        { "columnName": "revenue", "typeName": "decimal" }
                    ])
                } else {
                    json!([])
                }
            }
        }
    })
}

fn start_input() -> StartQueryInput {
    StartQueryInput {
        environment_uri: "env-1".to_string(),
        sql_body: "select region, sum(amount) from sales group by region".to_string(),
    }
}

fn fast_runner() -> QueryRunner {
    QueryRunner::new(Duration::from_millis(10), 5)
}

#[tokio::test]
async fn polls_until_the_query_succeeds() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "operationName": "startWorksheetQuery" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(query_body("startWorksheetQuery", "RUNNING", None)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    // first poll still running, second poll done
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "operationName": "pollWorksheetQuery" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(query_body("pollWorksheetQuery", "RUNNING", None)),
        )
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "operationName": "pollWorksheetQuery" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(query_body("pollWorksheetQuery", "SUCCEEDED", None)),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let result = fast_runner()
        .run(&client, "ws-1", &start_input())
        .await
        .unwrap();

    assert_eq!(result.status, QueryStatus::Succeeded);
    assert_eq!(result.columns.len(), 2);
    assert_eq!(result.rows[0].cells[0].as_deref(), Some("eu-west-1"));

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn immediate_success_skips_polling() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "operationName": "startWorksheetQuery" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(query_body("startWorksheetQuery", "SUCCEEDED", None)),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let result = fast_runner()
        .run(&client, "ws-1", &start_input())
        .await
        .unwrap();

    assert_eq!(result.status, QueryStatus::Succeeded);
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn failed_query_propagates_the_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "operationName": "startWorksheetQuery" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(query_body("startWorksheetQuery", "RUNNING", None)),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "operationName": "pollWorksheetQuery" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(query_body(
            "pollWorksheetQuery",
            "FAILED",
            Some("SYNTAX_ERROR: table sales does not exist"),
        )))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let err = fast_runner()
        .run(&client, "ws-1", &start_input())
        .await
        .unwrap_err();

    match err {
        ConsoleError::QueryFailed { message } => {
            assert_eq!(message, "SYNTAX_ERROR: table sales does not exist");
        }
        other => panic!("expected QueryFailed, got {other}"),
    }
}

#[tokio::test]
async fn exhausted_poll_budget_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "operationName": "startWorksheetQuery" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(query_body("startWorksheetQuery", "RUNNING", None)),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "operationName": "pollWorksheetQuery" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(query_body("pollWorksheetQuery", "RUNNING", None)),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let runner = QueryRunner::new(Duration::from_millis(5), 3);
    let err = runner.run(&client, "ws-1", &start_input()).await.unwrap_err();

    match err {
        ConsoleError::QueryTimeout {
            athena_query_id,
            polls,
        } => {
            assert_eq!(athena_query_id, "qid-1");
            assert_eq!(polls, 3);
        }
        other => panic!("expected QueryTimeout, got {other}"),
    }

    // one start plus exactly `polls` poll calls
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 4);
}

#[tokio::test]
async fn transport_failure_during_start_propagates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let err = fast_runner()
        .run(&client, "ws-1", &start_input())
        .await
        .unwrap_err();

    assert!(matches!(err, ConsoleError::Api(_)));
}
