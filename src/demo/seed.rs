//! Seed literals used by the demo sequence.
//!
//! These rows exist purely to demonstrate the operations and are deleted
//! again by the cleanup step. The vin and the contract number are the unique
//! keys the cleanup relies on, so they must stay in sync with the insert
//! statements.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

pub const CAR_BRAND: &str = "Toyota";
pub const CAR_MODEL: &str = "RAV4";
pub const CAR_YEAR: i32 = 2024;
pub const CAR_COLOR: &str = "Серый";
pub const CAR_MILEAGE: i32 = 0;
pub const CAR_VIN: &str = "2T3ZF4DV5NW123456";
pub const CAR_TRANSMISSION: &str = "Автомат";
pub const CAR_FUEL_TYPE: &str = "Бензин";

pub const CUSTOMER_FIRST_NAME: &str = "Андрей";
pub const CUSTOMER_LAST_NAME: &str = "Волков";
pub const CUSTOMER_PHONE: &str = "+79165554433";
pub const CUSTOMER_EMAIL: &str = "andrey.volkov@mail.ru";
pub const CUSTOMER_PASSPORT_SERIES: &str = "4520";
pub const CUSTOMER_PASSPORT_NUMBER: &str = "112233";
pub const CUSTOMER_ADDRESS: &str = "Москва, ул. Солнечная, д. 45";

const TEST_DRIVE_DATE: &str = "2024-02-10 15:30:00";
pub const TEST_DRIVE_DURATION_MINUTES: i32 = 45;
pub const TEST_DRIVE_NOTES: &str = "Новый клиент, интересуется кроссоверами";
/// Pattern the cleanup step uses to find the seeded test drive again.
pub const TEST_DRIVE_NOTES_PATTERN: &str = "%Новый клиент%";

/// Model sold in the sale step; resolved against the available stock, not
/// against the seeded car.
pub const SALE_MODEL: &str = "Rio";
pub const SALE_MANAGER: &str = "Сергей Могрицкий";
pub const SALE_STATUS: &str = "Оплачен";
pub const SALE_PAYMENT_METHOD: &str = "Кредит";
pub const SALE_CONTRACT_NUMBER: &str = "ДГ-2024-006";

/// 3 200 000.00
pub fn car_price() -> Decimal {
    Decimal::new(3_200_000_00, 2)
}

/// 2.5 litres
pub fn car_engine_volume() -> Decimal {
    Decimal::new(25, 1)
}

/// 1 150 000.00
pub fn sale_price() -> Decimal {
    Decimal::new(1_150_000_00, 2)
}

pub fn test_drive_date() -> NaiveDateTime {
    NaiveDateTime::parse_from_str(TEST_DRIVE_DATE, "%Y-%m-%d %H:%M:%S")
        .expect("seed timestamp must be valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn seed_timestamp_parses() {
        let date = test_drive_date();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 2);
        assert_eq!(date.hour(), 15);
    }
}
