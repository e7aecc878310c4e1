use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct CarId(i32);

impl CarId {
    pub fn new(id: impl Into<i32>) -> Self {
        Self(id.into())
    }
}
