use error_stack::Report;
use tracing::{debug, error, warn};

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnRentOrderQuery, OrderCriteria, RentOrderQuery};
use kernel::interface::update::{DependOnRentOrderModifier, RentOrderModifier};
use kernel::prelude::entity::{OrderId, RentOrder};

use crate::transfer::{GetRentOrderDto, GetUserRentOrdersDto};
use crate::ServiceError;

#[async_trait::async_trait]
pub trait GetRentOrderService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnRentOrderQuery
{
    async fn get_all_orders(&self) -> error_stack::Result<Vec<RentOrder>, ServiceError> {
        let criteria = OrderCriteria::all_ordered_by_approval();
        let mut orders = read_orders(self, &criteria).await?;
        orders.iter_mut().for_each(RentOrder::calculate_sum);
        Ok(orders)
    }

    async fn get_order_by_id(
        &self,
        dto: GetRentOrderDto,
    ) -> error_stack::Result<RentOrder, ServiceError> {
        find_order(self, dto.id).await
    }

    async fn get_orders_by_user(
        &self,
        dto: GetUserRentOrdersDto,
    ) -> error_stack::Result<Vec<RentOrder>, ServiceError> {
        let criteria = OrderCriteria::by_user(dto.user_id);
        let mut orders = read_orders(self, &criteria).await?;
        orders.iter_mut().for_each(RentOrder::calculate_sum);
        Ok(orders)
    }
}

impl<T> GetRentOrderService for T where T: DependOnDatabaseConnection + DependOnRentOrderQuery {}

#[async_trait::async_trait]
pub trait ModifyRentOrderService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnRentOrderModifier
{
    async fn create_order(&self, order: RentOrder) -> error_stack::Result<(), ServiceError> {
        ensure_valid_period(&order)?;
        operate_order(self, &order, Operation::Create).await
    }

    async fn update_order(&self, order: RentOrder) -> error_stack::Result<(), ServiceError> {
        ensure_valid_period(&order)?;
        operate_order(self, &order, Operation::Update).await
    }

    async fn delete_order(&self, order: RentOrder) -> error_stack::Result<(), ServiceError> {
        operate_order(self, &order, Operation::Delete).await
    }
}

impl<T> ModifyRentOrderService for T where
    T: DependOnDatabaseConnection + DependOnRentOrderModifier
{
}

#[async_trait::async_trait]
pub trait ApproveRentOrderService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnRentOrderQuery
    + DependOnRentOrderModifier
{
    /// Reads and writes in separate transactions.
    async fn approve_order(
        &self,
        dto: GetRentOrderDto,
    ) -> error_stack::Result<RentOrder, ServiceError> {
        let mut order = find_order(self, dto.id).await?;
        order.approve();
        ensure_valid_period(&order)?;
        operate_order(self, &order, Operation::Update).await?;
        Ok(order)
    }
}

impl<T> ApproveRentOrderService for T where
    T: DependOnDatabaseConnection + DependOnRentOrderQuery + DependOnRentOrderModifier
{
}

#[derive(Debug, Clone, Copy)]
enum Operation {
    Create,
    Update,
    Delete,
}

async fn read_orders<S>(
    service: &S,
    criteria: &OrderCriteria,
) -> error_stack::Result<Vec<RentOrder>, ServiceError>
where
    S: DependOnRentOrderQuery + ?Sized,
{
    let fetched = async {
        let mut transaction = service.database_connection().transact().await?;
        service
            .rent_order_query()
            .read(&mut transaction, criteria)
            .await
    }
    .await;

    match fetched {
        Ok(orders) => {
            debug!("Fetched {} rent orders by {criteria:?}", orders.len());
            Ok(orders)
        }
        Err(report) => {
            let report = report.change_context(ServiceError::Read);
            error!("{report:?}");
            Err(report)
        }
    }
}

async fn find_order<S>(service: &S, id: OrderId) -> error_stack::Result<RentOrder, ServiceError>
where
    S: DependOnRentOrderQuery + ?Sized,
{
    let criteria = OrderCriteria::by_id(id.clone());
    let mut order = read_orders(service, &criteria)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| Report::new(ServiceError::NotFound(id)))?;
    order.calculate_sum();
    Ok(order)
}

async fn operate_order<S>(
    service: &S,
    order: &RentOrder,
    operation: Operation,
) -> error_stack::Result<(), ServiceError>
where
    S: DependOnRentOrderModifier + ?Sized,
{
    let written = async {
        let mut transaction = service.database_connection().transact().await?;
        let modifier = service.rent_order_modifier();
        let applied = match operation {
            Operation::Create => modifier.create(&mut transaction, order).await,
            Operation::Update => modifier.update(&mut transaction, order).await,
            Operation::Delete => modifier.delete(&mut transaction, order).await,
        };
        match applied {
            Ok(()) => transaction.commit().await,
            Err(report) => {
                if let Err(rollback) = transaction.roll_back().await {
                    warn!("{rollback:?}");
                }
                Err(report)
            }
        }
    }
    .await;

    match written {
        Ok(()) => {
            debug!("{operation:?} rent order id = {}", order.id().as_ref());
            Ok(())
        }
        Err(report) => {
            let report = report.change_context(ServiceError::Write);
            error!("{report:?}");
            Err(report)
        }
    }
}

fn ensure_valid_period(order: &RentOrder) -> error_stack::Result<(), ServiceError> {
    if order.has_valid_period() {
        return Ok(());
    }
    Err(Report::new(ServiceError::InvalidPeriod).attach_printable(format!(
        "rent order id = {} starts at {} and ends at {}",
        order.id().as_ref(),
        order.start_date().as_ref(),
        order.end_date().as_ref()
    )))
}
