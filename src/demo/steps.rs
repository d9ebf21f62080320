//! The six steps of the demo sequence.
//!
//! Each step is an independent function taking the active transaction's
//! connection explicitly. Rows seeded by step 1 are identified by the ids
//! returned from the inserts, and the sale step resolves its car id once
//! rather than re-deriving it per statement, so there is no ambiguity when
//! the stock holds duplicates.

use rust_decimal::Decimal;
use sqlx::PgConnection;
use tracing::info;

use crate::models::AvailableCar;
use crate::utils::errors::DemoResult;

use super::seed;

/// Cars with more mileage than this get the bulk discount.
const HIGH_MILEAGE_THRESHOLD: i32 = 10_000;
/// Mileage added to a car after a recent test drive.
const TEST_DRIVE_MILEAGE: i32 = 30;
/// How far back the mileage update looks for test drives.
const TEST_DRIVE_WINDOW: &str = "3 days";
/// The showroom listing stops after this many cars.
pub const SHOWROOM_LIMIT: i64 = 8;

/// Ids of the rows seeded by step 1, handed to the later steps.
#[derive(Debug, Clone, Copy)]
pub struct SeededIds {
    pub car_id: i32,
    pub customer_id: i32,
}

/// Step 1: insert the demo car and customer.
///
/// The brand is resolved by name inside the insert; the generated ids are
/// returned so later steps never have to look the rows up again.
pub async fn insert_seed_rows(conn: &mut PgConnection) -> DemoResult<SeededIds> {
    info!("1. Adding a new car and customer");

    let car_id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO car (brand_id, model, year, color, price, mileage, vin,
                         engine_volume, transmission, fuel_type, is_available)
        VALUES (
            (SELECT id FROM car_brand WHERE brand_name = $1),
            $2, $3, $4, $5, $6, $7, $8, $9, $10, true
        )
        RETURNING id
        "#,
    )
    .bind(seed::CAR_BRAND)
    .bind(seed::CAR_MODEL)
    .bind(seed::CAR_YEAR)
    .bind(seed::CAR_COLOR)
    .bind(seed::car_price())
    .bind(seed::CAR_MILEAGE)
    .bind(seed::CAR_VIN)
    .bind(seed::car_engine_volume())
    .bind(seed::CAR_TRANSMISSION)
    .bind(seed::CAR_FUEL_TYPE)
    .fetch_one(&mut *conn)
    .await?;

    info!(
        "Added car {} {} (id {})",
        seed::CAR_BRAND,
        seed::CAR_MODEL,
        car_id
    );

    let customer_id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO customer (first_name, last_name, phone, email,
                              passport_series, passport_number, address)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id
        "#,
    )
    .bind(seed::CUSTOMER_FIRST_NAME)
    .bind(seed::CUSTOMER_LAST_NAME)
    .bind(seed::CUSTOMER_PHONE)
    .bind(seed::CUSTOMER_EMAIL)
    .bind(seed::CUSTOMER_PASSPORT_SERIES)
    .bind(seed::CUSTOMER_PASSPORT_NUMBER)
    .bind(seed::CUSTOMER_ADDRESS)
    .fetch_one(&mut *conn)
    .await?;

    info!(
        "Added customer {} {} (id {})",
        seed::CUSTOMER_FIRST_NAME,
        seed::CUSTOMER_LAST_NAME,
        customer_id
    );

    Ok(SeededIds {
        car_id,
        customer_id,
    })
}

/// Step 2: book a test drive for the seeded car and customer.
pub async fn create_test_drive(conn: &mut PgConnection, ids: SeededIds) -> DemoResult<u64> {
    info!("2. Booking a test drive");

    let result = sqlx::query(
        r#"
        INSERT INTO test_drive (car_id, customer_id, drive_date,
                                duration_minutes, manager_notes)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(ids.car_id)
    .bind(ids.customer_id)
    .bind(seed::test_drive_date())
    .bind(seed::TEST_DRIVE_DURATION_MINUTES)
    .bind(seed::TEST_DRIVE_NOTES)
    .execute(&mut *conn)
    .await?;

    info!("Test drive booked: {} row(s)", result.rows_affected());
    Ok(result.rows_affected())
}

/// Step 3: fetch the showroom listing, cheapest first within each brand.
pub async fn list_available_cars(conn: &mut PgConnection) -> DemoResult<Vec<AvailableCar>> {
    info!("3. Available cars in stock");

    let cars = sqlx::query_as::<_, AvailableCar>(
        r#"
        SELECT cb.brand_name,
               c.model,
               c.year,
               c.color,
               c.price,
               c.mileage,
               c.transmission,
               c.fuel_type
        FROM car c
        JOIN car_brand cb ON c.brand_id = cb.id
        WHERE c.is_available = true
        ORDER BY cb.brand_name, c.price
        LIMIT $1
        "#,
    )
    .bind(SHOWROOM_LIMIT)
    .fetch_all(&mut *conn)
    .await?;

    Ok(cars)
}

/// Step 4: sell one available car of the demo sale model.
///
/// When no matching car is left the step reports zero affected rows instead
/// of failing, so a repeat run cannot register a duplicate sale.
pub async fn register_sale(conn: &mut PgConnection, customer_id: i32) -> DemoResult<u64> {
    info!("4. Registering a car sale");

    let car_id: Option<i32> = sqlx::query_scalar(
        "SELECT id FROM car WHERE model = $1 AND is_available = true ORDER BY id LIMIT 1",
    )
    .bind(seed::SALE_MODEL)
    .fetch_optional(&mut *conn)
    .await?;

    let Some(car_id) = car_id else {
        info!(
            "No available {} in stock, sale skipped: 0 row(s)",
            seed::SALE_MODEL
        );
        return Ok(0);
    };

    let result = sqlx::query(
        r#"
        INSERT INTO sale (car_id, customer_id, sale_price, manager_name,
                          status_id, payment_method, contract_number)
        VALUES (
            $1, $2, $3, $4,
            (SELECT id FROM sale_status WHERE status_name = $5),
            $6, $7
        )
        "#,
    )
    .bind(car_id)
    .bind(customer_id)
    .bind(seed::sale_price())
    .bind(seed::SALE_MANAGER)
    .bind(seed::SALE_STATUS)
    .bind(seed::SALE_PAYMENT_METHOD)
    .bind(seed::SALE_CONTRACT_NUMBER)
    .execute(&mut *conn)
    .await?;

    info!(
        "Registered sale of {} under contract {}: {} row(s)",
        seed::SALE_MODEL,
        seed::SALE_CONTRACT_NUMBER,
        result.rows_affected()
    );

    sqlx::query("UPDATE car SET is_available = false WHERE id = $1")
        .bind(car_id)
        .execute(&mut *conn)
        .await?;

    info!("Car {} marked as sold", car_id);
    Ok(result.rows_affected())
}

/// Step 5: bulk price and mileage maintenance.
pub async fn update_car_information(conn: &mut PgConnection) -> DemoResult<()> {
    info!("5. Updating car information");

    let discounted = sqlx::query(
        "UPDATE car SET price = price * $1 WHERE mileage > $2 AND is_available = true",
    )
    .bind(Decimal::new(92, 2))
    .bind(HIGH_MILEAGE_THRESHOLD)
    .execute(&mut *conn)
    .await?;

    info!(
        "Applied the 8% discount to {} car(s) with mileage over {}",
        discounted.rows_affected(),
        HIGH_MILEAGE_THRESHOLD
    );

    let driven = sqlx::query(
        r#"
        UPDATE car
        SET mileage = mileage + $1
        WHERE id IN (
            SELECT car_id FROM test_drive
            WHERE drive_date >= CURRENT_DATE - $2::interval
        )
        "#,
    )
    .bind(TEST_DRIVE_MILEAGE)
    .bind(TEST_DRIVE_WINDOW)
    .execute(&mut *conn)
    .await?;

    info!(
        "Updated mileage for {} car(s) after recent test drives",
        driven.rows_affected()
    );

    Ok(())
}

/// Step 6: remove the seeded rows, children before parents so no delete ever
/// breaks a foreign key.
pub async fn delete_seed_rows(conn: &mut PgConnection) -> DemoResult<()> {
    info!("6. Deleting the demo records");

    let sales = sqlx::query("DELETE FROM sale WHERE contract_number = $1")
        .bind(seed::SALE_CONTRACT_NUMBER)
        .execute(&mut *conn)
        .await?;
    info!("Deleted sales: {} row(s)", sales.rows_affected());

    let drives = sqlx::query("DELETE FROM test_drive WHERE manager_notes LIKE $1")
        .bind(seed::TEST_DRIVE_NOTES_PATTERN)
        .execute(&mut *conn)
        .await?;
    info!("Deleted test drives: {} row(s)", drives.rows_affected());

    let customers = sqlx::query("DELETE FROM customer WHERE email = $1")
        .bind(seed::CUSTOMER_EMAIL)
        .execute(&mut *conn)
        .await?;
    info!("Deleted customers: {} row(s)", customers.rows_affected());

    let cars = sqlx::query("DELETE FROM car WHERE vin = $1")
        .bind(seed::CAR_VIN)
        .execute(&mut *conn)
        .await?;
    info!("Deleted cars: {} row(s)", cars.rows_affected());

    Ok(())
}
