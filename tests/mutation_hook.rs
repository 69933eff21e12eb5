//! Mutation primitive: state tracking and pass-through of results.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use rentdesk::api::ApiError;
use rentdesk::hooks::{Mutation, MutationState};
use rentdesk::resources::{Branch, Branches, ResourceClient};

fn create_branch(client: ResourceClient<Branches>) -> Mutation<Branch, Branch> {
    Mutation::new(move |branch: Branch| {
        let client = client.clone();
        async move { client.create(&branch).await }
    })
}

/// A mutation does nothing until executed.
#[tokio::test]
async fn test_mutation_starts_idle() {
    let mock = MockBackend::start().await;
    let client = ResourceClient::<Branches>::new(common::api_client(&mock.base_url()));

    let mutation = create_branch(client);

    assert_eq!(mutation.state(), MutationState::default());
    assert!(mock.captured_requests().await.is_empty());
}

/// Success stores and returns the operation's result.
#[tokio::test]
async fn test_execute_returns_result() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{"branchId": 5, "branchName": "Galle", "location": "Galle Fort"}"#,
    ))
    .await;
    let client = ResourceClient::<Branches>::new(common::api_client(&mock.base_url()));
    let mutation = create_branch(client);

    let created = mutation
        .execute(Branch {
            branch_name: Some("Galle".into()),
            location: Some("Galle Fort".into()),
            ..Branch::default()
        })
        .await
        .unwrap();

    assert_eq!(created.branch_id, Some(5));
    assert_eq!(mutation.data(), Some(created));
    assert!(!mutation.loading());
    assert_eq!(mutation.error(), None);
}

/// Failure records the message and hands the same error back.
#[tokio::test]
async fn test_execute_propagates_error() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::text(409, "Branch exists"))
        .await;
    let client = ResourceClient::<Branches>::new(common::api_client(&mock.base_url()));
    let mutation = create_branch(client);

    let err = mutation.execute(Branch::default()).await.unwrap_err();

    assert!(matches!(
        &err,
        ApiError::Status { status: 409, body } if body == "Branch exists"
    ));
    assert_eq!(mutation.error().as_deref(), Some("API Error: 409 - Branch exists"));
    assert!(!mutation.loading());
}

/// Plain closures work too, with any error type.
#[tokio::test]
async fn test_generic_operation() {
    let double: Mutation<u32, u32, String> = Mutation::new(|n| async move {
        if n == 0 {
            Err("zero".to_string())
        } else {
            Ok(n * 2)
        }
    });

    assert_eq!(double.execute(21).await, Ok(42));
    assert_eq!(double.execute(0).await, Err("zero".to_string()));
    // The earlier result survives the failure.
    assert_eq!(double.data(), Some(42));
    assert_eq!(double.error().as_deref(), Some("zero"));
}
