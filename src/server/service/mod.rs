//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between
//! the controller (API) layer and the Discord REST API. Services are responsible
//! for:
//!
//! - **OAuth orchestration** (`auth`) - Login URL generation and callback handling
//! - **Upstream access** (`discord`) - Discord REST calls and 429 classification
//! - **Caching** (`guild_cache`) - The rate-limit-aware bot guild cache
//! - **Reconciliation** (`guild`) - Owned-guild filtering with bot presence
//! - **Backoff** (`backoff`) - Login rate-limit wait computation

pub mod auth;
pub mod backoff;
pub mod discord;
pub mod guild;
pub mod guild_cache;
