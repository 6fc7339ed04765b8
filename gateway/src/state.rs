use std::sync::Arc;

use crate::config::Upstreams;
use crate::routing::RouteTable;
use crate::service_client::ServiceClient;

#[derive(Clone)]
pub struct GatewayState {
    pub routes: Arc<RouteTable>,
    pub upstreams: Arc<Upstreams>,
    pub client: ServiceClient,
}

impl GatewayState {
    pub fn new(routes: RouteTable, upstreams: Upstreams, client: ServiceClient) -> Self {
        Self {
            routes: Arc::new(routes),
            upstreams: Arc::new(upstreams),
            client,
        }
    }
}
