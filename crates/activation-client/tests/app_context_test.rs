use activation_client::helpers::{IdentityError, Session};
use activation_client::lifecycle::AppContext;
use activation_client::model::{ChatMessage, Staff};
use serde_json::json;
use std::sync::Arc;
use store_framework::mock::{MockTransport, RecordingChannel};
use store_framework::{
    ConnectivityBridge, ConnectivityEvent, Method, RecordId, Severity, StoreClient,
};

type Harness = (
    AppContext,
    Arc<MockTransport>,
    Arc<RecordingChannel>,
    ConnectivityBridge,
);

fn context(session: Session) -> Harness {
    let transport = Arc::new(MockTransport::new());
    let channel = Arc::new(RecordingChannel::new());
    let bridge = ConnectivityBridge::new(true);
    let ctx = AppContext::new(transport.clone(), channel.clone(), session, &bridge, 8);
    (ctx, transport, channel, bridge)
}

/// Full end-to-end flow through the wired context.
#[tokio::test]
async fn test_context_wires_stores_to_one_transport() {
    let (ctx, transport, channel, _bridge) = context(Session::new(Some(r#"{"id":7}"#.into())));

    transport
        .expect(Method::Get, "/api/staffs/7")
        .return_ok(json!({ "id": 7, "name": "Ana", "email": "ana@example.com" }));
    transport
        .expect(Method::Get, "/api/navigations")
        .return_ok(json!([{ "id": 1, "key": "stock", "label": "Stock", "visible": true }]));
    transport
        .expect(Method::Put, "/api/navigations/1")
        .return_ok(json!({ "id": 1, "key": "stock", "label": "Stock", "visible": false }));

    let me: Staff = ctx.staff.get(RecordId::from(7)).await.unwrap();
    assert!(ctx.is_my_profile(&me).unwrap());

    let items = ctx.navigation.get_all().await.unwrap();
    let hidden = ctx
        .navigation
        .set_visibility(items[0].id.clone(), false)
        .await
        .unwrap();
    assert!(!hidden.visible);
    assert_eq!(transport.requests()[2].json, Some(json!({ "visible": false })));

    ctx.chat
        .send_message(&ChatMessage {
            sender_id: me.id.clone(),
            sender_name: me.name.clone(),
            text: "hello".to_string(),
            sent_at: 1,
        })
        .await
        .unwrap();
    assert_eq!(channel.documents().len(), 1);

    transport.verify();
    ctx.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_failures_are_reported_by_the_caller() {
    let (ctx, transport, _channel, _bridge) = context(Session::anonymous());
    let mut toasts = ctx.notifier.subscribe();

    transport
        .expect(Method::Get, "/api/campaigns")
        .return_err(store_framework::ApiError::Status {
            status: 500,
            message: "boom".into(),
        });

    if let Err(e) = ctx.campaigns.get_all().await {
        ctx.notifier.error(e.to_string());
    }

    let toast = toasts.recv().await.unwrap();
    assert_eq!(toast.severity, Severity::Error);
    assert_eq!(toast.duration.as_millis(), 5000);
    assert!(toast.message.contains("boom"));

    assert!(matches!(
        ctx.is_my_profile(&RecordId::from(1)),
        Err(IdentityError::Missing)
    ));
    ctx.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_network_status_follows_bridge() {
    let (ctx, _transport, _channel, bridge) = context(Session::anonymous());
    let mut transitions = ctx.network.subscribe();
    assert!(ctx.network.is_online());

    bridge.report(ConnectivityEvent::Offline);
    assert_eq!(transitions.recv().await.unwrap(), false);
    assert!(!ctx.network.is_online());

    bridge.report(ConnectivityEvent::Online);
    assert_eq!(transitions.recv().await.unwrap(), true);
    assert!(ctx.network.is_online());

    ctx.shutdown().await.unwrap();
}
