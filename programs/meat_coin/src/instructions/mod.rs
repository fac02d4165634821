pub mod initialize;
pub mod mint;
pub mod redeem;
pub mod change_admin;

pub use initialize::*;
pub use mint::*;
pub use redeem::*;
pub use change_admin::*;
