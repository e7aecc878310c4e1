use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct OrderSum(i64);

impl OrderSum {
    pub fn new(sum: impl Into<i64>) -> Self {
        Self(sum.into())
    }
}
