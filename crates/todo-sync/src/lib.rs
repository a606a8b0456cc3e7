//! Todo Sync
//!
//! Remote-collection view-model for the todo board:
//! - domain: Item / Draft entities
//! - gateway: CRUD access to the remote collection (trait + HTTP)
//! - store: local state container
//! - partition / focus: derived views
//! - view_model: the operations that keep local state in step with the server

pub mod config;
pub mod domain;
pub mod error;
pub mod focus;
pub mod gateway;
pub mod partition;
pub mod store;
pub mod view_model;

pub use config::GatewayConfig;
pub use domain::{CompletionPatch, Draft, Item, ItemId};
pub use error::{ConfigError, DraftError, GatewayError, SyncResult};
pub use focus::focus_target;
pub use gateway::{HttpGateway, RemoteGateway};
pub use partition::{partition, Partition};
pub use store::{CollectionState, StateCell};
pub use view_model::CollectionViewModel;
