//! # Shy Posts
//!
//! Shy Posts lets an editor hide individual content items from the homepage
//! listing while keeping them visible everywhere else. It is a **host-agnostic
//! library**: the host CMS fires hook points, and this crate registers the two
//! touchpoints it needs: an editorial save handler and a listing-query
//! filter. Nothing else reads the flag.
//!
//! ## Layering
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  Wiring (plugin.rs, hooks.rs)                             │
//! │  - bootstrap(context, registry) registers per-context     │
//! │    components with the host's extension points            │
//! └───────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                            │
//! │  - publish_box: render the toggle + anti-forgery token    │
//! │  - save: guarded flag upsert (fail closed, fail quiet)    │
//! │  - exclude: homepage main-query exclusion clause          │
//! └───────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  Storage & Collaborators                                  │
//! │  - ContentStore trait (FileStore, InMemoryStore)          │
//! │  - Permissions, NonceProvider seams                       │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The flag
//!
//! One metadata key, `shy_post`, with `"1"` meaning hidden. An absent key and
//! any other value both mean visible; unchecking the box writes an empty
//! string rather than deleting the key. The exclusion filter therefore reads
//! `OR(shy_post != "1", shy_post NOT EXISTS)`; the `NOT EXISTS` arm is what
//! keeps never-flagged items on the homepage.
//!
//! ## Execution contexts
//!
//! [`plugin::bootstrap`] wires [`ExecutionContext::Editorial`] to the two
//! editing hooks and [`ExecutionContext::Public`] to the pre-query hook. The
//! listing filter additionally checks front-page and main-query flags on the
//! query itself, so secondary queries on the homepage stay untouched even in
//! a correctly wired public context.
//!
//! [`ExecutionContext::Editorial`]: hooks::ExecutionContext::Editorial
//! [`ExecutionContext::Public`]: hooks::ExecutionContext::Public
//!
//! ## Module Overview
//!
//! - [`model`]: `ContentItem`, metadata values, the `shy_post` key
//! - [`store`]: storage abstraction and implementations
//! - [`commands`]: the three operations
//! - [`hooks`]: hook-point traits and the registry
//! - [`plugin`]: per-context components and `bootstrap`
//! - [`query`]: listing-query descriptor and metadata filter model
//! - [`engine`]: reference listing runner for hosts/tests without one
//! - [`nonce`], [`permissions`]: collaborator seams with default impls
//! - [`sanitize`]: plain-text field sanitization
//! - [`error`]: error types

pub mod commands;
pub mod engine;
pub mod error;
pub mod hooks;
pub mod model;
pub mod nonce;
pub mod permissions;
pub mod plugin;
pub mod query;
pub mod sanitize;
pub mod store;
