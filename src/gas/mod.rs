//! Builder for the [gas.js](https://github.com/CardinalPath/gas) Google Analytics snippet.
//!
//! ```
//! use gas_tag::gas::GasTag;
//!
//! let mut tag = GasTag::new();
//! tag.add_account("UA-1111-1", Some("custom")).unwrap();
//! tag.add_domains([".a.com", ".b.com"]).unwrap();
//! tag.push("_trackPageview").unwrap();
//!
//! let snippet = tag.render();
//! assert!(snippet.contains("_gas.push(['custom._setAccount', 'UA-1111-1']);"));
//! assert!(snippet.contains("_gas.push(['_gasMultiDomain', 'click']);"));
//! ```

mod api;
mod args;
mod calls;
mod config;
pub mod constants;
pub mod error;
mod snippet;

pub use api::{Account, GasTag, MethodSpec, OneOrMany};
pub use args::{CallArgs, Scalar};
pub use config::TagConfig;
pub use snippet::PushStatement;
