mod id;
mod model;
mod price;

pub use self::{id::*, model::*, price::*};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct Car {
    id: CarId,
    model: CarModel,
    price: CarPrice,
}

impl Car {
    pub fn new(id: CarId, model: CarModel, price: CarPrice) -> Self {
        Self { id, model, price }
    }
}
