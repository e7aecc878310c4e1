use kernel::prelude::entity::{OrderId, UserId};

pub struct GetRentOrderDto {
    pub id: OrderId,
}

impl GetRentOrderDto {
    pub fn new(id: impl Into<OrderId>) -> Self {
        Self { id: id.into() }
    }
}

pub struct GetUserRentOrdersDto {
    pub user_id: UserId,
}

impl GetUserRentOrdersDto {
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}
