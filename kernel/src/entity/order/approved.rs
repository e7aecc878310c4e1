use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct IsApproved(bool);

impl IsApproved {
    pub fn new(value: impl Into<bool>) -> Self {
        Self(value.into())
    }
}
