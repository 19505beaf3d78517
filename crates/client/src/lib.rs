//! QuoteForge client-side state layer.
//!
//! The interactive counterpart to the HTTP service: an [`EditorStore`]
//! holding the in-progress contract document together with its derived
//! totals, recomputed synchronously on every mutation through the same
//! pricing module the server uses. Subscribers always observe a
//! consistent, fully-updated document/totals pair; recomputation is
//! never batched or debounced.
//!
//! Also carries the small pieces of UI-adjacent state the editor needs:
//! a notification list with auto-expiry and a placeholder user session
//! flag.

mod editor;
mod notify;
mod patch;
mod session;

pub use crate::editor::{EditorStore, LoadError, SubscriptionId};
pub use crate::notify::{Notification, NotificationCenter, NotificationLevel};
pub use crate::patch::{DiscountPatch, LineItemPatch, MetadataPatch};
pub use crate::session::UserSession;
