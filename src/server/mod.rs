//! Server-side backend for the guild dashboard.
//!
//! This module contains the complete backend implementation for the application:
//! HTTP endpoints, the OAuth2 login flow, the bot guild cache, and supporting
//! infrastructure. The backend uses Axum as the web framework, tower-sessions
//! for session management, and the oauth2 crate for the Discord handshake.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - OAuth orchestration, guild cache, reconciliation
//! - **Model Layer** (`model/`) - Domain models and API payload types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and authentication guards
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (HTTP client, OAuth client, cache)
//! - **Startup** (`startup`) - Initialization of clients and the session layer
//! - **Router** (`router`) - Axum route configuration and static asset services
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives the HTTP request and routes to the controller
//! 2. **Middleware** resolves the session user (or rejects/redirects)
//! 3. **Controller** calls into the service layer
//! 4. **Service** talks to the Discord API and/or the bot guild cache
//! 5. **Controller** converts the result to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
