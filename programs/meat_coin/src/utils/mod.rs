pub mod token_helpers;

pub use token_helpers::SplTokenTransfer;
