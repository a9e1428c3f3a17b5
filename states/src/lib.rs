//! State primitives shared by the token table crates.
//!
//! - [`Time`]: the mockable clock renders read "now" from
//! - [`Memo`]: a cache recomputed only when its dependency key changes
//! - [`RcKey`]: identity comparison for `Rc` dependencies

mod dep;
mod memo;
mod time;

pub use dep::RcKey;
pub use memo::Memo;
pub use time::Time;
