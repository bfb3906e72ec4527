use super::*;

// =============================================================
// SampleRecord lenient deserialization
// =============================================================

#[test]
fn sample_record_parses_full_payload() {
    let record: SampleRecord = serde_json::from_value(serde_json::json!({
        "objectKey": "v1/abc.jpg",
        "bucket": "menumatch-labeler-uploads",
        "mealDate": "2026-03-01",
        "mealtime": "lunch",
        "diningHallId": 7,
        "difficulty": "easy",
        "items": [{ "menuItemId": 12, "servings": "1.5" }],
        "createdAt": "2026-03-01T12:30:00Z",
        "uploadedBy": "team"
    }))
    .unwrap();

    assert_eq!(record.object_key, "v1/abc.jpg");
    assert_eq!(record.dining_hall_id, "7");
    assert_eq!(record.items.len(), 1);
    assert_eq!(record.items[0].menu_item_id, "12");
    assert_eq!(record.items[0].servings, Some(1.5));
}

#[test]
fn sample_record_defaults_missing_fields() {
    let record: SampleRecord = serde_json::from_value(serde_json::json!({
        "objectKey": "v1/only-key.png"
    }))
    .unwrap();

    assert_eq!(record.object_key, "v1/only-key.png");
    assert!(record.items.is_empty());
    assert!(record.mealtime.is_empty());
}

#[test]
fn sample_record_tolerates_non_array_items() {
    let record: SampleRecord = serde_json::from_value(serde_json::json!({
        "objectKey": "v1/bad.jpg",
        "items": "corrupted"
    }))
    .unwrap();

    assert!(record.items.is_empty());
}

#[test]
fn plate_item_servings_tolerates_garbage() {
    let item: PlateItem =
        serde_json::from_value(serde_json::json!({ "menuItemId": "4", "servings": "a lot" }))
            .unwrap();
    assert_eq!(item.servings, None);

    let item: PlateItem =
        serde_json::from_value(serde_json::json!({ "menuItemId": "4", "servings": 2 })).unwrap();
    assert_eq!(item.servings, Some(2.0));
}

#[test]
fn catalog_item_id_normalizes_numbers() {
    let item: CatalogItem =
        serde_json::from_value(serde_json::json!({ "id": 42, "name": "Pasta" })).unwrap();
    assert_eq!(item.id, "42");
    assert_eq!(item.name, "Pasta");
}

// =============================================================
// Envelopes and presign descriptors
// =============================================================

#[test]
fn dataset_response_reads_scanned_count() {
    let response: DatasetResponse = serde_json::from_value(serde_json::json!({
        "items": [],
        "scannedCount": 17
    }))
    .unwrap();
    assert_eq!(response.scanned_count, 17);
}

#[test]
fn sample_response_missing_item_is_none() {
    let response: SampleResponse = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(response.item.is_none());
}

#[test]
fn presigned_upload_parses_headers_map() {
    let presign: PresignedUpload = serde_json::from_value(serde_json::json!({
        "uploadUrl": "https://bucket.s3.amazonaws.com/v1/x.jpg?sig=1",
        "method": "PUT",
        "headers": { "Content-Type": "image/jpeg" },
        "objectKey": "v1/x.jpg",
        "bucket": "menumatch-labeler-uploads"
    }))
    .unwrap();

    assert_eq!(presign.method, "PUT");
    assert_eq!(presign.headers.get("Content-Type").map(String::as_str), Some("image/jpeg"));
}

#[test]
fn upload_metadata_serializes_camel_case() {
    let metadata = UploadMetadata {
        object_key: "v1/x.jpg".to_owned(),
        bucket: "b".to_owned(),
        mealtime: "dinner".to_owned(),
        meal_date: "2026-03-01".to_owned(),
        dining_hall_id: "7".to_owned(),
        difficulty: "medium".to_owned(),
        items: vec![UploadItem { menu_item_id: "9".to_owned(), servings: 1.0 }],
    };

    let value = serde_json::to_value(&metadata).unwrap();
    assert_eq!(value["objectKey"], "v1/x.jpg");
    assert_eq!(value["mealDate"], "2026-03-01");
    assert_eq!(value["items"][0]["menuItemId"], "9");
}

// =============================================================
// Mealtime
// =============================================================

#[test]
fn mealtime_round_trips_wire_form() {
    for meal in Mealtime::ALL {
        assert_eq!(Mealtime::parse(meal.as_str()), Some(meal));
    }
    assert_eq!(Mealtime::parse("brunch"), None);
}

#[test]
fn mealtime_label_is_capitalized_wire_form() {
    assert_eq!(Mealtime::Breakfast.label(), "Breakfast");
    assert_eq!(Mealtime::Breakfast.as_str(), "breakfast");
}
