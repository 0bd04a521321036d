//! Account session: who is signed in, what they linked, and what they earned.
//!
//! At most one account is active. Every operation other than `login` is a
//! no-op (or returns the zero state) while signed out.

use crate::account::{Account, AccountId};
use crate::config::SessionConfig;
use crate::error::Result;
use crate::platform::{ConnectedPlatform, Platform};
use crate::store::{AccountStore, MemoryStore};
use greencabal_loyalty::{DiscountInfo, LoyaltyState};
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Sign-in details supplied by the authentication layer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    /// Imported counter; falls back to the store when absent
    #[serde(default)]
    pub discount_points: Option<i64>,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_discount_points(mut self, points: i64) -> Self {
        self.discount_points = Some(points);
        self
    }
}

/// The signed-in account and its counter, kept side by side.
#[derive(Debug)]
struct Active {
    account: Account,
    loyalty: LoyaltyState,
}

/// A single user session.
pub struct Session<S: AccountStore = MemoryStore> {
    config: SessionConfig,
    store: S,
    active: Option<Active>,
}

impl Session<MemoryStore> {
    /// Session backed by a private in-memory store.
    pub fn in_memory(config: SessionConfig) -> Self {
        Self::new(config, MemoryStore::new())
    }
}

impl<S: AccountStore> Session<S> {
    /// Create a signed-out session.
    pub fn new(config: SessionConfig, store: S) -> Self {
        Self {
            config,
            store,
            active: None,
        }
    }

    /// Sign in, replacing any account already signed in.
    ///
    /// The counter comes from `discount_points` when given, otherwise from the
    /// store, otherwise zero. A negative import is rejected before anything
    /// changes. The previous account is saved before the store is read, so
    /// signing in again with the same email resumes the live counter.
    pub fn login(&mut self, request: LoginRequest) -> Result<&Account> {
        let imported = request
            .discount_points
            .map(LoyaltyState::try_from_imported)
            .transpose()?;

        if let Some(previous) = &self.active {
            debug!("Replacing signed-in account {}", previous.account.id);
            self.persist(previous)?;
        }

        let loyalty = match imported {
            Some(state) => state,
            None => self.store.load(&request.email)?.unwrap_or_default(),
        };

        let account = Account::new(request.email, request.username);
        info!(
            "Account {} signed in with {} qualifying actions",
            account.id,
            loyalty.qualifying_actions()
        );

        let active = self.active.insert(Active { account, loyalty });
        Ok(&active.account)
    }

    /// Sign out, saving and returning the final counter.
    pub fn logout(&mut self) -> Result<Option<LoyaltyState>> {
        let Some(active) = &self.active else {
            return Ok(None);
        };
        self.persist(active)?;

        let loyalty = active.loyalty;
        info!("Account {} signed out", active.account.id);
        self.active = None;
        Ok(Some(loyalty))
    }

    pub fn is_authenticated(&self) -> bool {
        self.active.is_some()
    }

    /// The signed-in account, if any.
    pub fn account(&self) -> Option<&Account> {
        self.active.as_ref().map(|a| &a.account)
    }

    /// Id of the signed-in account, if any.
    pub fn account_id(&self) -> Option<&AccountId> {
        self.account().map(|a| &a.id)
    }

    /// The signed-in account's counter, if any.
    pub fn loyalty(&self) -> Option<&LoyaltyState> {
        self.active.as_ref().map(|a| &a.loyalty)
    }

    /// Counter for `id`, or `None` unless `id` is the signed-in account.
    pub fn loyalty_for(&self, id: &AccountId) -> Option<&LoyaltyState> {
        self.active
            .as_ref()
            .filter(|a| &a.account.id == id)
            .map(|a| &a.loyalty)
    }

    /// Discount for `id`, or `None` unless `id` is the signed-in account.
    pub fn discount_info_for(&self, id: &AccountId) -> Option<DiscountInfo> {
        self.loyalty_for(id)
            .map(|state| state.discount_info_with(&self.config.policy))
    }

    /// Link a platform. Returns `false` when signed out.
    ///
    /// Linking does not credit a qualifying action by itself.
    pub fn connect_platform(&mut self, platform: Platform) -> bool {
        let Some(active) = self.active.as_mut() else {
            debug!("Ignoring connect to {} while signed out", platform);
            return false;
        };
        active.account.connect(ConnectedPlatform::simulated(platform));
        info!("Account {} connected {}", active.account.id, platform);
        true
    }

    /// Unlink a platform. No-op when signed out or not linked.
    pub fn disconnect_platform(&mut self, platform: Platform) {
        if let Some(active) = self.active.as_mut() {
            if active.account.disconnect(platform) {
                info!("Account {} disconnected {}", active.account.id, platform);
            }
        }
    }

    /// Credit one qualifying action to the signed-in account.
    pub fn record_qualifying_action(&mut self) {
        let policy = self.config.policy;
        let Some(active) = self.active.as_mut() else {
            debug!("Ignoring qualifying action while signed out");
            return;
        };

        let before = active.loyalty.discount_info_with(&policy).discount_percentage;
        active.loyalty.record_qualifying_action();
        let after = active.loyalty.discount_info_with(&policy);

        if after.discount_percentage > before {
            info!(
                "Account {} reached {} discount",
                active.account.id, after
            );
        }
    }

    /// Current discount, or the zero state when signed out.
    pub fn discount_info(&self) -> DiscountInfo {
        let state = self.loyalty().copied().unwrap_or_default();
        state.discount_info_with(&self.config.policy)
    }

    /// The configuration this session was built with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The backing account store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&self, active: &Active) -> Result<()> {
        if active.account.email.is_empty() {
            debug!("Not saving counter for anonymous account {}", active.account.id);
            return Ok(());
        }
        self.store
            .save(&active.account.email, &active.loyalty)
            .map_err(|e| {
                warn!(
                    "Failed to save counter for account {}: {}",
                    active.account.id, e
                );
                e
            })
    }
}
