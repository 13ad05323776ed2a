pub mod epoch;
pub mod precision;

pub use epoch::{Epoch, EPOCH_AD, EPOCH_UNIX};
pub use precision::Precision;
