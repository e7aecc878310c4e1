use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{OrderId, RentOrder, UserId};
use crate::KernelError;

/// Filter and ordering of a [`RentOrderQuery::read`].
///
/// Listing criteria return pending orders first, then approved ones,
/// each group in insertion order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum OrderCriteria {
    AllOrderedByApproval,
    ById(OrderId),
    ByUser(UserId),
}

impl OrderCriteria {
    pub fn all_ordered_by_approval() -> Self {
        Self::AllOrderedByApproval
    }

    pub fn by_id(id: impl Into<OrderId>) -> Self {
        Self::ById(id.into())
    }

    pub fn by_user(user_id: impl Into<UserId>) -> Self {
        Self::ByUser(user_id.into())
    }
}

#[async_trait::async_trait]
pub trait RentOrderQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn read(
        &self,
        con: &mut Self::Transaction,
        criteria: &OrderCriteria,
    ) -> error_stack::Result<Vec<RentOrder>, KernelError>;
}

pub trait DependOnRentOrderQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type RentOrderQuery: RentOrderQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn rent_order_query(&self) -> &Self::RentOrderQuery;
}
