//! 服务层流程测试：直接调用 gRPC trait 方法，不经过网络

use std::sync::Arc;

use consignment_service::api::ShippingServiceImpl;
use consignment_service::infrastructure::persistence::InMemoryConsignmentRepository;
use consignment_service::proto::shipping_service_server::ShippingService;
use consignment_service::proto::{Consignment, Container, GetRequest};
use tonic::{Code, Request};

fn widgets() -> Consignment {
    Consignment {
        description: "widgets".to_string(),
        weight: 10,
        ..Default::default()
    }
}

async fn list(service: &ShippingServiceImpl) -> Vec<Consignment> {
    service
        .get_consignments(Request::new(GetRequest {}))
        .await
        .unwrap()
        .into_inner()
        .consignments
}

#[tokio::test]
async fn test_empty_service_lists_nothing() {
    let service = ShippingServiceImpl::default();

    assert!(list(&service).await.is_empty());
}

#[tokio::test]
async fn test_create_then_list() {
    let service = ShippingServiceImpl::default();

    let response = service
        .create_consignment(Request::new(widgets()))
        .await
        .unwrap()
        .into_inner();
    assert!(response.created);
    assert_eq!(response.consignment, Some(widgets()));

    assert_eq!(list(&service).await, vec![widgets()]);
}

#[tokio::test]
async fn test_create_echoes_full_record() {
    let service = ShippingServiceImpl::default();
    let input = Consignment {
        id: "external-id".to_string(),
        description: "This is a test consignment".to_string(),
        weight: 550,
        containers: vec![Container {
            id: String::new(),
            customer_id: "cust001".to_string(),
            origin: "Manchester, United Kingdom".to_string(),
            user_id: "user001".to_string(),
        }],
        vessel_id: "vessel001".to_string(),
    };

    let response = service
        .create_consignment(Request::new(input.clone()))
        .await
        .unwrap()
        .into_inner();

    assert!(response.created);
    assert_eq!(response.consignment, Some(input));
}

#[tokio::test]
async fn test_sequential_creates_are_listed_in_order() {
    let service = ShippingServiceImpl::default();
    let a = Consignment {
        description: "A".to_string(),
        ..Default::default()
    };
    let b = Consignment {
        description: "B".to_string(),
        ..Default::default()
    };

    service.create_consignment(Request::new(a.clone())).await.unwrap();
    service.create_consignment(Request::new(b.clone())).await.unwrap();

    assert_eq!(list(&service).await, vec![a, b]);
}

#[tokio::test]
async fn test_list_ignores_request_and_does_not_mutate() {
    let service = ShippingServiceImpl::default();
    service.create_consignment(Request::new(widgets())).await.unwrap();

    let first = list(&service).await;
    let second = list(&service).await;

    assert_eq!(first, second);
    assert_eq!(first.len(), 1);
}

#[tokio::test]
async fn test_repository_failure_is_returned_as_status() {
    let service = ShippingServiceImpl::in_memory(Some(1));
    service.create_consignment(Request::new(widgets())).await.unwrap();

    let status = service
        .create_consignment(Request::new(widgets()))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::ResourceExhausted);
    assert_eq!(list(&service).await, vec![widgets()]);
}

#[tokio::test]
async fn test_services_do_not_share_state() {
    let first = ShippingServiceImpl::default();
    let second = ShippingServiceImpl::new(Arc::new(InMemoryConsignmentRepository::new()));

    first.create_consignment(Request::new(widgets())).await.unwrap();

    assert_eq!(list(&first).await.len(), 1);
    assert!(list(&second).await.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_calls_share_one_repository() {
    let service = Arc::new(ShippingServiceImpl::default());

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                let consignment = Consignment {
                    weight: i,
                    ..Default::default()
                };
                service.create_consignment(Request::new(consignment)).await
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.await.unwrap().unwrap().into_inner().created);
    }

    let mut weights: Vec<i32> = list(&service).await.iter().map(|c| c.weight).collect();
    weights.sort_unstable();
    assert_eq!(weights, (0..50).collect::<Vec<_>>());
}
