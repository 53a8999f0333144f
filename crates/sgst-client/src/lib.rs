#![doc = include_str!("../README.md")]

mod client;
mod config;
mod error;
mod hooks;
mod mutations;
pub mod navigation;
pub mod notify;
pub mod query;
mod refresh;
mod services;
mod session;
pub mod view;

pub use client::{ClientBuilder, SgstClient};
pub use cookie_store::Cookie;
pub use config::ClientConfig;
pub use error::ClientError;
pub use hooks::Hooks;
pub use mutations::*;
pub use navigation::{NavigateOptions, Navigator};
pub use notify::{MemoryNotifier, Notice, NoticeLevel, Notifier, TracingNotifier};
pub use refresh::RefreshError;
pub use services::{AuthService, EquiposService, ListParams, TalleresService};
pub use session::{SessionSnapshot, SessionState};
pub use sgst_types as types;
