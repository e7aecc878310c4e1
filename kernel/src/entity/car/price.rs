use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Rental price for one day.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct CarPrice(i32);

impl CarPrice {
    pub fn new(price: impl Into<i32>) -> Self {
        Self(price.into())
    }
}
