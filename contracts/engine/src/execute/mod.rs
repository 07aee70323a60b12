mod burn;
mod deposit;
mod liquidate;
mod mint;
mod redeem;

pub use burn::*;
pub use deposit::*;
pub use liquidate::*;
pub use mint::*;
pub use redeem::*;
