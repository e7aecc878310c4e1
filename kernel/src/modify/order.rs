use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::RentOrder;
use crate::KernelError;

#[async_trait::async_trait]
pub trait RentOrderModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        order: &RentOrder,
    ) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        con: &mut Self::Transaction,
        order: &RentOrder,
    ) -> error_stack::Result<(), KernelError>;
    async fn delete(
        &self,
        con: &mut Self::Transaction,
        order: &RentOrder,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnRentOrderModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type RentOrderModifier: RentOrderModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn rent_order_modifier(&self) -> &Self::RentOrderModifier;
}
