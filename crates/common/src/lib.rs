//! # common
//!
//! Cross-cutting pieces shared by every scorecast crate:
//!
//! - [`LocatedError`]: the uniform error shape returned at service boundaries
//! - [`logging`]: process-wide tracing initialisation
//! - [`Settings`]: environment driven runtime configuration

pub mod error;
pub mod logging;
pub mod settings;

pub use error::{Categorized, ErrorCategory, LocatedError, Result};
pub use settings::{ScoreFieldMapping, Settings, SettingsError};
