//! certbind - bind a hostname to a certificate and private key as JSON

pub mod binding;
pub mod error;

pub use binding::{BindingBuilder, CertBinding};
pub use error::{CertBindError, FixSuggestion, InputKind, Result};
