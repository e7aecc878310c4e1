mod approved;
mod id;
mod period;
mod sum;

pub use self::{approved::*, id::*, period::*, sum::*};
use crate::entity::{Car, UserId};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct RentOrder {
    id: OrderId,
    user_id: UserId,
    car: Car,
    start_date: RentStart,
    end_date: RentEnd,
    sum: OrderSum,
    approved: IsApproved,
}

impl RentOrder {
    pub fn new(
        id: OrderId,
        user_id: UserId,
        car: Car,
        start_date: RentStart,
        end_date: RentEnd,
        sum: OrderSum,
        approved: IsApproved,
    ) -> Self {
        Self {
            id,
            user_id,
            car,
            start_date,
            end_date,
            sum,
            approved,
        }
    }

    pub fn has_valid_period(&self) -> bool {
        self.end_date.as_ref() >= self.start_date.as_ref()
    }

    /// Whole days between start and end, truncated.
    /// A period that ends before it starts counts as zero days.
    pub fn rental_days(&self) -> i64 {
        let duration = *self.end_date.as_ref() - *self.start_date.as_ref();
        duration.whole_days().max(0)
    }

    pub fn calculate_sum(&mut self) {
        let price = i64::from(*self.car.price().as_ref());
        self.sum = OrderSum::new(price.saturating_mul(self.rental_days()));
    }

    pub fn approve(&mut self) {
        self.approved = IsApproved::new(true);
    }
}

#[cfg(test)]
mod test {
    use time::{Duration, OffsetDateTime};

    use crate::entity::{
        Car, CarId, CarModel, CarPrice, DestructRentOrder, IsApproved, OrderId, OrderSum,
        RentEnd, RentOrder, RentStart, UserId,
    };

    fn order(price: i32, length: Duration) -> RentOrder {
        let start = OffsetDateTime::UNIX_EPOCH;
        RentOrder::new(
            OrderId::new(1),
            UserId::new(1),
            Car::new(CarId::new(1), CarModel::new("Lada Vesta"), CarPrice::new(price)),
            RentStart::new(start),
            RentEnd::new(start + length),
            OrderSum::default(),
            IsApproved::default(),
        )
    }

    #[test]
    fn sum_is_price_times_days() {
        let mut order = order(50, Duration::days(3));
        order.calculate_sum();
        assert_eq!(order.sum(), &OrderSum::new(150));
    }

    #[test]
    fn partial_days_are_truncated() {
        let order = order(50, Duration::days(3) + Duration::hours(23));
        assert_eq!(order.rental_days(), 3);
    }

    #[test]
    fn same_day_rent_costs_nothing() {
        let mut order = order(50, Duration::hours(5));
        order.calculate_sum();
        assert!(order.has_valid_period());
        assert_eq!(order.sum(), &OrderSum::new(0));
    }

    #[test]
    fn reversed_period_is_clamped() {
        let mut order = order(50, Duration::days(-2));
        order.calculate_sum();
        assert!(!order.has_valid_period());
        assert_eq!(order.rental_days(), 0);
        assert_eq!(order.sum(), &OrderSum::new(0));
    }

    #[test]
    fn approve() {
        let mut order = order(10, Duration::days(1));
        order.approve();
        let DestructRentOrder { approved, .. } = order.into_destruct();
        assert_eq!(approved, IsApproved::new(true));
    }

    #[test]
    fn negative_price_passes_through() {
        let mut order = order(-20, Duration::days(2));
        order.calculate_sum();
        assert_eq!(order.sum(), &OrderSum::new(-40));
    }
}
