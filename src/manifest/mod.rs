//! Bundle manifest
//!
//! Maps each output artifact name to the ordered list of stylesheet sources it is
//! built from. Source order is concatenation order, and therefore rule precedence
//! in the emitted stylesheet.
//!
//! The built-in table is a compile-time constant. A replacement table can be
//! loaded from YAML:
//!
//! ```yaml
//! bundles:
//!   - name: site.min.css
//!     sources:
//!       - variables.scss
//!       - common.scss
//! ```

mod builtin;
mod parser;

pub use builtin::BUILTIN_BUNDLES;
pub use parser::{BundleSpec, Manifest};
