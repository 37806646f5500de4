//! Kernel utilities shared across SLM services.
//! Keep this crate lightweight; it provides config loading and the defines
//! catalog on top of the pure domain types.
//!
//! ## Config loading
//! ```rust,ignore
//! use slm_kernel::config::load_config;
//! use slm_kernel::domain::config::SlmConfig;
//!
//! let cfg: SlmConfig = load_config(Some("etc/slm")).unwrap();
//! ```
//!
//! ## Defines catalog
//! ```rust
//! use slm_kernel::catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//! assert!(catalog.verify().is_ok());
//! ```

pub mod catalog;
pub mod config;

pub use slm_domain as domain;
