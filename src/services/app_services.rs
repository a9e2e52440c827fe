// ============================================================================
// APP SERVICES - Explicitly owned service graph shared through Yew context
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::services::auth_service::SessionProvider;
use crate::services::gateway::Gateway;
use crate::services::graphql_client::{GraphqlTransport, HttpTransport};
use crate::services::token_store::{LocalStorageTokenStore, TokenStore};

#[derive(Clone)]
pub struct AppServices {
    pub tokens: Rc<dyn TokenStore>,
    pub gateway: Gateway,
    pub auth: Rc<SessionProvider>,
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.auth, &other.auth)
    }
}

impl AppServices {
    /// Browser wiring: localStorage + fetch
    pub fn from_config(config: &AppConfig) -> Self {
        let transport = HttpTransport::new(config.graphql_url());
        log::info!("🔧 GraphQL endpoint: {}", transport.endpoint());
        Self::with_parts(
            Rc::new(transport),
            Rc::new(LocalStorageTokenStore::new()),
            config.revalidate_session,
        )
    }

    pub fn with_parts(transport: Rc<dyn GraphqlTransport>, tokens: Rc<dyn TokenStore>, revalidate: bool) -> Self {
        let gateway = Gateway::new(transport, tokens.clone());
        let auth = Rc::new(SessionProvider::new(tokens.clone(), gateway.clone(), revalidate));
        Self { tokens, gateway, auth }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::RecordingTransport;
    use crate::services::token_store::MemoryTokenStore;

    #[test]
    fn parts_share_one_token_store() {
        let tokens: Rc<dyn TokenStore> = Rc::new(MemoryTokenStore::new());
        let services = AppServices::with_parts(Rc::new(RecordingTransport::new()), tokens.clone(), true);

        services.tokens.set_credential("abc").unwrap();
        assert_eq!(tokens.get_credential().as_deref(), Some("abc"));

        services.auth.logout();
        assert_eq!(tokens.get_credential(), None);
    }

    #[test]
    fn equality_is_identity() {
        let build = || {
            AppServices::with_parts(
                Rc::new(RecordingTransport::new()),
                Rc::new(MemoryTokenStore::new()),
                false,
            )
        };
        let a = build();
        assert!(a == a.clone());
        assert!(a != build());
    }
}
