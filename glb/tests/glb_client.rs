//! Integration tests for the global load balancer client.
//!
//! A wiremock server stands in for the service; tests assert the
//! requests the client sends (paths, query parameters, bodies,
//! correlation headers) and how it decodes pages, resources, and
//! bodyless deletes.

use dns_glb::{
    CreateLoadBalancerOptions, CreateMonitorOptions, DeletePoolOptions, Error, GetPoolOptions,
    GlbClient, Health, ListLoadBalancersOptions, ListMonitorsOptions, MonitorType,
    UpdateLoadBalancerOptions,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const INSTANCE: &str = "1407a753-a93f-4bb0-9784-bcfc269ee1b3";
const ZONE: &str = "5365b73c-ce6f-4d6f-ad9f-d9c131b26370";
const LB: &str = "24ccf79a-4ae0-4769-b4c8-17f8f230072e";
const POOL: &str = "0fc0bb7c-2fab-476e-8b9b-40fa14bf8e3d";

fn client_for(uri: &str) -> GlbClient {
    GlbClient::builder().base_url(uri).build().unwrap()
}

#[tokio::test]
async fn test_list_load_balancers_preserves_page_numbers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!(
            "/instances/{INSTANCE}/dnszones/{ZONE}/load_balancers"
        )))
        .and(query_param("offset", "1"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "load_balancers": [{
                "id": LB,
                "name": "glb.example.com",
                "enabled": true,
                "ttl": 120,
                "health": "DEGRADED",
                "fallback_pool": POOL,
                "default_pools": [POOL]
            }],
            "offset": 1,
            "limit": 20,
            "count": 1,
            "total_count": 200,
            "first": {"href": "https://api.dns-svcs.cloud.ibm.com/v1/instances/1407a753/dnszones/5365b73c/load_balancers?limit=20"},
            "next": {"href": "https://api.dns-svcs.cloud.ibm.com/v1/instances/1407a753/dnszones/5365b73c/load_balancers?offset=21&limit=20"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let page = client
        .list_load_balancers(ListLoadBalancersOptions {
            instance_id: INSTANCE.to_string(),
            dnszone_id: ZONE.to_string(),
            offset: Some(1),
            limit: Some(20),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.result.offset, 1);
    assert_eq!(page.result.limit, 20);
    assert_eq!(page.result.count, 1);
    assert_eq!(page.result.total_count, 200);
    assert_eq!(page.result.load_balancers.len(), 1);
    assert_eq!(page.result.load_balancers[0].health, Some(Health::Degraded));
    assert!(page
        .result
        .next
        .as_ref()
        .unwrap()
        .href
        .contains("offset=21"));
}

#[tokio::test]
async fn test_create_load_balancer_sends_only_set_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!(
            "/instances/{INSTANCE}/dnszones/{ZONE}/load_balancers"
        )))
        .and(body_json(serde_json::json!({
            "name": "glb.example.com",
            "enabled": true,
            "fallback_pool": POOL,
            "default_pools": [POOL]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": LB,
            "name": "glb.example.com",
            "enabled": true,
            "fallback_pool": POOL,
            "default_pools": [POOL],
            "created_on": "2019-01-01T05:20:00.12345Z"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let lb = client
        .create_load_balancer(CreateLoadBalancerOptions {
            instance_id: INSTANCE.to_string(),
            dnszone_id: ZONE.to_string(),
            name: Some("glb.example.com".to_string()),
            enabled: Some(true),
            fallback_pool: Some(POOL.to_string()),
            default_pools: Some(vec![POOL.to_string()]),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(lb.result.id, LB);
    assert!(lb.result.created_on.is_some());
}

#[tokio::test]
async fn test_update_load_balancer_puts_to_resource_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!(
            "/instances/{INSTANCE}/dnszones/{ZONE}/load_balancers/{LB}"
        )))
        .and(body_json(serde_json::json!({"ttl": 300})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": LB,
            "name": "glb.example.com",
            "enabled": true,
            "ttl": 300,
            "fallback_pool": POOL,
            "default_pools": [POOL]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let lb = client
        .update_load_balancer(UpdateLoadBalancerOptions {
            instance_id: INSTANCE.to_string(),
            dnszone_id: ZONE.to_string(),
            lb_id: LB.to_string(),
            ttl: Some(300),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(lb.result.ttl, Some(300));
}

#[tokio::test]
async fn test_delete_pool_returns_detail_only() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("/instances/{INSTANCE}/pools/{POOL}")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let detail = client
        .delete_pool(DeletePoolOptions {
            instance_id: INSTANCE.to_string(),
            pool_id: POOL.to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(detail.status, 204);
    assert!(detail.body.is_empty());
}

#[tokio::test]
async fn test_get_pool_decodes_origin_health() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/instances/{INSTANCE}/pools/{POOL}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": POOL,
            "name": "us-east-pool",
            "enabled": true,
            "healthy_origins_threshold": 1,
            "origins": [{
                "name": "app-server-1",
                "address": "10.10.16.8",
                "enabled": true,
                "health": true
            }, {
                "name": "app-server-2",
                "address": "10.10.16.9",
                "enabled": true,
                "health": false,
                "health_failure_reason": "connection timeout"
            }],
            "monitor": "7dd6841c-264e-11ea-88df-062967242a6a",
            "health": "DEGRADED"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let pool = client
        .get_pool(GetPoolOptions {
            instance_id: INSTANCE.to_string(),
            pool_id: POOL.to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(pool.result.origins.len(), 2);
    assert_eq!(pool.result.origins[1].health, Some(false));
    assert_eq!(
        pool.result.origins[1].health_failure_reason.as_deref(),
        Some("connection timeout")
    );
    assert_eq!(pool.result.health, Some(Health::Degraded));
}

#[tokio::test]
async fn test_create_monitor_renames_type_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/instances/{INSTANCE}/monitors")))
        .and(body_json(serde_json::json!({
            "name": "healthcheck-monitor",
            "type": "HTTPS",
            "method": "GET",
            "expected_codes": "2xx"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "7dd6841c-264e-11ea-88df-062967242a6a",
            "name": "healthcheck-monitor",
            "type": "HTTPS",
            "method": "GET",
            "expected_codes": "2xx"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let monitor = client
        .create_monitor(CreateMonitorOptions {
            instance_id: INSTANCE.to_string(),
            name: Some("healthcheck-monitor".to_string()),
            monitor_type: Some(MonitorType::Https),
            method: Some(dns_glb::HealthcheckMethod::Get),
            expected_codes: Some("2xx".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(monitor.result.monitor_type, Some(MonitorType::Https));
}

#[tokio::test]
async fn test_correlation_id_header_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/instances/{INSTANCE}/monitors")))
        .and(header("x-correlation-id", "abc-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "monitors": [],
            "offset": 0,
            "limit": 20,
            "count": 0,
            "total_count": 0
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    client
        .list_monitors(ListMonitorsOptions {
            instance_id: INSTANCE.to_string(),
            x_correlation_id: Some("abc-123".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_empty_instance_id_fails_validation_with_zero_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let err = client
        .list_monitors(ListMonitorsOptions::default())
        .await
        .unwrap_err();
    match err {
        Error::Validation(e) => assert!(e.to_string().contains("instance_id")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_lb_id_fails_validation() {
    let server = MockServer::start().await;
    let client = client_for(&server.uri());
    let err = client
        .update_load_balancer(UpdateLoadBalancerOptions {
            instance_id: INSTANCE.to_string(),
            dnszone_id: ZONE.to_string(),
            lb_id: String::new(),
            ttl: Some(300),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/instances/{INSTANCE}/pools/{POOL}")))
        .respond_with(ResponseTemplate::new(200).set_body_string("} this is not valid json {"))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let err = client
        .get_pool(GetPoolOptions {
            instance_id: INSTANCE.to_string(),
            pool_id: POOL.to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
    assert_eq!(err.status_code(), Some(200));
}

#[tokio::test]
async fn test_remote_error_carries_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/instances/{INSTANCE}/pools/{POOL}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "errors": [{"code": "not_found", "message": "pool does not exist"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let err = client
        .get_pool(GetPoolOptions {
            instance_id: INSTANCE.to_string(),
            pool_id: POOL.to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    match err {
        Error::Api(failure) => assert_eq!(failure.status, 404),
        other => panic!("expected Api error, got {other:?}"),
    }
}
