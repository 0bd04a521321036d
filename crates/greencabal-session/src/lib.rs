//! GreenCabal Session - account sessions with loyalty tracking
//!
//! Tracks the signed-in account, the social platforms it has linked, and
//! its loyalty counter. The discount math lives in `greencabal-loyalty`;
//! this crate only decides whose counter to touch.
//!
//! # Architecture
//!
//! - **Account**: identity and linked platforms, no loyalty data
//! - **Session**: pairs the active account with its `LoyaltyState`
//! - **Store**: seam to the external account store (in-memory by default)
//! - **Config**: policy overrides from the environment
//!
//! # Example
//!
//! ```
//! use greencabal_session::{LoginRequest, Platform, Session, SessionConfig};
//!
//! let mut session = Session::in_memory(SessionConfig::default());
//! session.login(LoginRequest::new("alice@example.com").with_discount_points(252))?;
//! session.connect_platform(Platform::Instagram);
//! session.record_qualifying_action();
//!
//! let info = session.discount_info();
//! assert_eq!(info.to_string(), "12%");
//! assert_eq!(info.progress_label(), "7 to next %");
//! # Ok::<(), greencabal_session::Error>(())
//! ```

pub mod account;
pub mod config;
pub mod error;
pub mod platform;
pub mod session;
pub mod store;

pub use account::{Account, AccountId};
pub use config::SessionConfig;
pub use error::{Error, Result};
pub use greencabal_loyalty::{DiscountInfo, DiscountPolicy, LoyaltyState};
pub use platform::{ConnectedPlatform, Platform};
pub use session::{LoginRequest, Session};
pub use store::{AccountStore, MemoryStore};
