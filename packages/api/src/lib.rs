//! # API crate — TechVision client core
//!
//! This crate is the client-side core of TechVision: the session lifecycle,
//! the credential-attaching HTTP client, and the favorites consistency
//! layer. Platform shells render lists and forms on top of it; everything
//! here is UI-free.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | [`AuthContext`]: login/signup/logout/restore over a [`store::SessionStore`], keeping memory and durable storage in lockstep |
//! | [`client`] | [`ApiClient`] and the [`CredentialProvider`] capability it polls at dispatch time to attach `Authorization: Bearer <token>` |
//! | [`error`] | [`ApiError`] taxonomy and the read-path degrade helper [`error::empty_on_error`] |
//! | [`models`] | Wire types: catalog records, auth payloads, favorites |
//! | [`github`] | Trending project listings |
//! | [`papers`] | Paper listings and categories |
//! | [`favorites`] | Favorites endpoints, [`FavoriteSet`] reconciliation, idempotent toggle |
//! | [`admin`] | Crawl trigger (admin credential required) |
//! | [`seq`] | [`RequestSeq`]: per-view request tokens that make overlapping fetches resolve latest-wins |
//!
//! ## Error policy
//!
//! Write-path failures (login, signup, favorite mutations) propagate to the
//! initiating caller for display. Read-path callers degrade listings to an
//! empty value with [`error::empty_on_error`], which logs and moves on — a
//! failed catalog fetch renders as an empty list, never a crash.

pub mod admin;
pub mod auth;
pub mod client;
pub mod error;
pub mod favorites;
pub mod github;
pub mod models;
pub mod papers;
pub mod seq;

pub use auth::AuthContext;
pub use client::{Anonymous, ApiClient, CredentialProvider};
pub use error::ApiError;
pub use favorites::FavoriteSet;
pub use github::TrendingQuery;
pub use models::{
    Category, EnrichedFavorites, Favorite, FavoriteCreate, GithubProject, ItemType,
    PaginatedResponse, Paper, Token, UserLogin, UserSignup,
};
pub use papers::PaperQuery;
pub use seq::{RequestSeq, SeqToken};

pub use store::{AppConfig, FileStorage, MemoryStorage, Session, SessionStore, Storage, UserInfo};
