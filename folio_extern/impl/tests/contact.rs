use std::time::Duration;

use folio_demo::contact::{INVALID, JO};
use folio_extern_contracts::contact::{ContactApiError, ContactApiService};
use folio_extern_impl::contact::{ContactApiServiceConfig, ContactApiServiceImpl};
use folio_testing::contact::{spawn, SpawnedContactEndpoint};
use folio_utils::assert_matches;
use tokio::time::Instant;

#[tokio::test]
async fn accepted() {
    let (sut, endpoint) = make_sut(200).await;

    let result = sut.send_message(JO.clone()).await;

    result.unwrap();
    assert_eq!(endpoint.endpoint.received(), [JO.clone()]);
}

#[tokio::test]
async fn accepted_without_validation() {
    let (sut, endpoint) = make_sut(201).await;

    let result = sut.send_message(INVALID.clone()).await;

    result.unwrap();
    assert_eq!(endpoint.endpoint.received(), [INVALID.clone()]);
}

#[tokio::test]
async fn rejected() {
    let (sut, _endpoint) = make_sut(400).await;

    let result = sut.send_message(JO.clone()).await;

    assert_matches!(
        result,
        Err(ContactApiError::Rejected { status: 400, error })
            if error == "Rejected by the fake contact endpoint"
    );
}

#[tokio::test]
async fn server_error() {
    let (sut, endpoint) = make_sut(500).await;

    let result = sut.send_message(JO.clone()).await;

    assert_matches!(result, Err(ContactApiError::Other(_)));
    assert_eq!(endpoint.endpoint.received().len(), 1);
}

#[tokio::test]
async fn unreachable() {
    let sut = ContactApiServiceImpl::new(ContactApiServiceConfig::Http {
        endpoint: "http://127.0.0.1:1/api/contact".parse::<url::Url>().unwrap().into(),
    })
    .unwrap();

    let result = sut.send_message(JO.clone()).await;

    assert_matches!(result, Err(ContactApiError::Other(_)));
}

#[tokio::test(start_paused = true)]
async fn simulated() {
    let delay = Duration::from_secs(1);
    let sut = ContactApiServiceImpl::new(ContactApiServiceConfig::Simulated { delay }).unwrap();
    let start = Instant::now();

    let result = sut.send_message(JO.clone()).await;

    result.unwrap();
    assert!(start.elapsed() >= delay);
}

async fn make_sut(status: u16) -> (ContactApiServiceImpl, SpawnedContactEndpoint) {
    let endpoint = spawn(status.try_into().unwrap()).await.unwrap();
    let config = ContactApiServiceConfig::new(Some(endpoint.url.clone()), Duration::ZERO);
    (ContactApiServiceImpl::new(config).unwrap(), endpoint)
}
