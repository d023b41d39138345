use crate::config::Config;
use crate::helpers::{Identified, IdentityError, Session};
use crate::stores::{
    CampaignStore, ChatStore, CommentStore, DocumentStore, NavigationStore, SizeStore,
    StaffStore, StockStore, UnitStore, WarehouseStore,
};
use std::sync::Arc;
use store_framework::{
    ApiError, ConnectivitySource, HttpRealtimeChannel, HttpTransport, NetworkMonitor,
    NetworkStatus, Notifier, RealtimeChannel, ResourceClient, Transport,
};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// How many connectivity transitions a slow subscriber may fall behind.
const NETWORK_TRANSITION_CAPACITY: usize = 16;

/// Everything UI code talks to, wired over one transport.
pub struct AppContext {
    pub staff: StaffStore,
    pub warehouses: WarehouseStore,
    pub stocks: StockStore,
    pub units: UnitStore,
    pub sizes: SizeStore,
    pub comments: CommentStore,
    pub documents: DocumentStore,
    pub navigation: NavigationStore,
    pub campaigns: CampaignStore,
    pub chat: ChatStore,
    pub notifier: Notifier,
    pub network: NetworkStatus,
    pub session: Session,
    handles: Vec<JoinHandle<()>>,
}

impl AppContext {
    /// Wires every store and starts the network monitor. Must run inside a Tokio runtime.
    pub fn new(
        transport: Arc<dyn Transport>,
        channel: Arc<dyn RealtimeChannel>,
        session: Session,
        connectivity: &impl ConnectivitySource,
        notification_capacity: usize,
    ) -> Self {
        let (network, monitor_handle) =
            NetworkMonitor::spawn(connectivity, NETWORK_TRANSITION_CAPACITY);
        info!(online = network.is_online(), "Application context started");

        Self {
            staff: StaffStore::new(ResourceClient::new(transport.clone())),
            warehouses: WarehouseStore::new(ResourceClient::new(transport.clone())),
            stocks: StockStore::new(ResourceClient::new(transport.clone())),
            units: UnitStore::new(ResourceClient::new(transport.clone())),
            sizes: SizeStore::new(ResourceClient::new(transport.clone())),
            comments: CommentStore::new(ResourceClient::new(transport.clone())),
            documents: DocumentStore::new(ResourceClient::new(transport.clone())),
            navigation: NavigationStore::new(ResourceClient::new(transport.clone())),
            campaigns: CampaignStore::new(ResourceClient::new(transport)),
            chat: ChatStore::new(channel),
            notifier: Notifier::new(notification_capacity),
            network,
            session,
            handles: vec![monitor_handle],
        }
    }

    /// Production wiring: HTTP transport and realtime channel from `config`.
    pub fn from_config(
        config: &Config,
        connectivity: &impl ConnectivitySource,
    ) -> Result<Self, ApiError> {
        let transport = HttpTransport::with_timeout(&config.api_url, config.http_timeout)?;
        let channel = HttpRealtimeChannel::new(&config.realtime_url);
        Ok(Self::new(
            Arc::new(transport),
            Arc::new(channel),
            Session::new(config.current_user.clone()),
            connectivity,
            config.notification_capacity,
        ))
    }

    /// Whether `user` is the signed-in user of this context's session.
    pub fn is_my_profile(&self, user: &impl Identified) -> Result<bool, IdentityError> {
        crate::helpers::is_my_profile(&self.session, user)
    }

    /// Stops the network monitor and waits for it to finish.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down application context");
        for handle in self.handles {
            handle.abort();
            match handle.await {
                Ok(()) => {}
                Err(e) if e.is_cancelled() => {}
                Err(e) => {
                    warn!(error = %e, "Background task failed");
                    return Err(e.to_string());
                }
            }
        }
        info!("Application context stopped");
        Ok(())
    }
}
