use dataall_gql::types::{Dataset, PagedResponse, QueryStatus, ShareObject, Worksheet};

fn load_json(name: &str) -> serde_json::Value {
    let body = std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap();
    serde_json::from_str(&body).unwrap()
}

fn assert_envelope_invariants<T>(envelope: &PagedResponse<T>, page_size: i64) {
    assert!(envelope.nodes.len() as i64 <= page_size);
    if envelope.count == 0 {
        assert_eq!(envelope.pages, 0);
        assert!(envelope.nodes.is_empty());
    } else {
        assert!(envelope.page >= 1);
        assert!(envelope.page <= envelope.pages);
    }
    assert_eq!(envelope.has_previous, envelope.page > 1);
    assert_eq!(envelope.has_next, envelope.page < envelope.pages);
}

#[test]
fn dataset_envelope() {
    let body = load_json("list_datasets.json");
    let envelope: PagedResponse<Dataset> =
        serde_json::from_value(body["data"]["listDatasets"].clone()).unwrap();

    assert_envelope_invariants(&envelope, 10);
    assert_eq!(envelope.count, 25);
    assert_eq!(envelope.nodes[1].label, "customer-profiles");
    assert_eq!(envelope.nodes[1].description, None);
}

#[test]
fn share_request_envelope() {
    let body = load_json("share_requests.json");
    let envelope: PagedResponse<ShareObject> =
        serde_json::from_value(body["data"]["getShareRequestsFromMe"].clone()).unwrap();

    assert_envelope_invariants(&envelope, 10);
    let share = &envelope.nodes[0];
    assert_eq!(share.status, "Submitted");
    assert_eq!(share.principal.as_ref().unwrap().principal_type, "Group");
    assert_eq!(share.statistics.as_ref().unwrap().shared_items, 4);
}

#[test]
fn empty_envelope() {
    let envelope: PagedResponse<Dataset> = serde_json::from_value(serde_json::json!({
        "count": 0,
        "page": 1,
        "pages": 0,
        "hasNext": false,
        "hasPrevious": false,
        "nodes": []
    }))
    .unwrap();
    assert_envelope_invariants(&envelope, 10);
}

#[test]
fn worksheet_with_last_query_result() {
    let body = load_json("worksheet.json");
    let worksheet: Worksheet =
        serde_json::from_value(body["data"]["getWorksheet"].clone()).unwrap();

    let last = worksheet.last_saved_query_result.unwrap();
    assert_eq!(last.status, QueryStatus::Succeeded);
    assert!(last.status.is_terminal());
    assert_eq!(last.data_scanned_in_bytes, Some(5_242_880));
    assert_eq!(last.rows.len(), 2);
}

#[test]
fn query_status_wire_names() {
    let status: QueryStatus = serde_json::from_str(r#""RUNNING""#).unwrap();
    assert_eq!(status, QueryStatus::Running);
    assert!(!status.is_terminal());
    assert_eq!(status.to_string(), "RUNNING");

    let status: QueryStatus = serde_json::from_str(r#""CANCELLED""#).unwrap();
    assert!(status.is_terminal());
}
