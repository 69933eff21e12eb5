//! Multipart uploads and binary downloads.

mod common;

use chrono::NaiveDate;
use common::mock_backend::{MockBackend, MockResponse};
use rentdesk::api::FileUpload;
use rentdesk::resources::{Payment, PaymentMethod, PaymentStatus, Payments, Rental, Rentals, ResourceClient};

fn payments(mock: &MockBackend) -> ResourceClient<Payments> {
    ResourceClient::new(common::api_client(&mock.base_url()).with_session(&common::customer_session()))
}

/// Payment submission sends the record as a JSON part next to the slip file.
#[tokio::test]
async fn test_submit_with_slip_is_multipart() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{"paymentId": 11, "paymentStatus": "Pending", "slipFileName": "slip.pdf"}"#,
    ))
    .await;

    let payment = Payment {
        rental: Some(Rental::reference(8)),
        amount: Some(150.0),
        payment_method: Some(PaymentMethod::Online),
        payment_status: Some(PaymentStatus::Pending),
        payment_date: NaiveDate::from_ymd_opt(2026, 10, 17),
        transaction_id: Some("TX-99".into()),
        ..Payment::default()
    };
    let slip = FileUpload::new("slip.pdf", b"%PDF-1.4 fake".to_vec());

    let created = payments(&mock).submit_with_slip(&payment, slip).await.unwrap();

    assert_eq!(created.payment_id, Some(11));
    let request = &mock.captured_requests().await[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/api/payments");

    let content_type = request.header("content-type").unwrap();
    assert!(content_type.starts_with("multipart/form-data"), "{}", content_type);
    assert_eq!(request.header("authorization"), Some("Bearer customer-token"));

    let body = request.body_text();
    assert!(body.contains("name=\"payment\""));
    assert!(body.contains("Content-Type: application/json"));
    assert!(body.contains("\"transactionId\":\"TX-99\""));
    assert!(body.contains("name=\"slipFile\"; filename=\"slip.pdf\""));
    assert!(body.contains("Content-Type: application/pdf"));
    assert!(body.contains("%PDF-1.4 fake"));
}

/// Standalone slip and proof uploads use a `file` field.
#[tokio::test]
async fn test_single_file_uploads() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"paymentId": 4}"#)).await;
    mock.enqueue_response(MockResponse::no_content()).await;

    let api = common::api_client(&mock.base_url());
    let slip = FileUpload::new("slip.png", vec![0x89, b'P', b'N', b'G']);
    let updated = ResourceClient::<Payments>::new(api.clone())
        .upload_slip(4, slip)
        .await
        .unwrap();
    let proof = FileUpload::new("licence.jpg", b"jpeg".to_vec());
    let rental = ResourceClient::<Rentals>::new(api)
        .upload_proof(8, proof)
        .await
        .unwrap();

    assert_eq!(updated.and_then(|p| p.payment_id), Some(4));
    assert_eq!(rental, None);

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].path, "/api/payments/4/upload-slip");
    assert!(requests[0].body_text().contains("name=\"file\"; filename=\"slip.png\""));
    assert_eq!(requests[1].path, "/api/rentals/8/upload-proof");
    assert!(requests[1].body_text().contains("Content-Type: image/jpeg"));
}

/// Upload failures are ordinary status errors.
#[tokio::test]
async fn test_upload_error_status() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::text(413, "File too large"))
        .await;

    let err = payments(&mock)
        .upload_slip(4, FileUpload::new("huge.pdf", vec![0; 16]))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "API Error: 413 - File too large");
}

/// The server's file name hint is used when present.
#[tokio::test]
async fn test_download_uses_disposition_name() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(
        MockResponse::bytes("application/pdf", b"%PDF slip")
            .with_header("content-disposition", "attachment; filename=\"slip-4.pdf\""),
    )
    .await;

    let download = payments(&mock).download_slip(4).await.unwrap();

    assert_eq!(download.file_name, "slip-4.pdf");
    assert_eq!(download.content_type.as_deref(), Some("application/pdf"));
    assert_eq!(download.bytes, b"%PDF slip");
    let request = &mock.captured_requests().await[0];
    assert_eq!(request.path, "/api/payments/4/download-slip");
    assert_eq!(request.header("content-type"), None);
}

/// Without a hint the name falls back to `payment-slip-{id}`.
#[tokio::test]
async fn test_download_fallback_name() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::bytes("application/octet-stream", b"raw"))
        .await;

    let download = payments(&mock).download_slip(12).await.unwrap();

    assert_eq!(download.file_name, "payment-slip-12");
}

/// Saved downloads land in the requested directory.
#[tokio::test]
async fn test_download_save_to_dir() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(
        MockResponse::bytes("image/png", b"png-bytes")
            .with_header("content-disposition", "attachment; filename*=UTF-8''slip%20copy.png"),
    )
    .await;
    let dir = tempfile::tempdir().unwrap();

    let download = payments(&mock).download_slip(5).await.unwrap();
    let path = download.save_to(dir.path()).await.unwrap();

    assert_eq!(path, dir.path().join("slip copy.png"));
    assert_eq!(std::fs::read(&path).unwrap(), b"png-bytes");
}

/// Missing download fails with the status message.
#[tokio::test]
async fn test_download_not_found() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::text(404, "No slip uploaded"))
        .await;

    let err = payments(&mock).download_slip(3).await.unwrap_err();

    assert!(err.is_not_found());
}

/// Uploads can be read straight from disk.
#[tokio::test]
async fn test_file_upload_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("receipt.pdf");
    std::fs::write(&path, b"%PDF receipt").unwrap();

    let upload = FileUpload::from_path(&path).await.unwrap();

    assert_eq!(upload.file_name, "receipt.pdf");
    assert_eq!(upload.mime, "application/pdf");
    assert_eq!(upload.bytes, b"%PDF receipt");
}
