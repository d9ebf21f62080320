//! End-to-end checks for the demo transaction sequence.
//!
//! These need a disposable PostgreSQL database: point TEST_DATABASE_URL at
//! one (credentials in the URL) and run `cargo test -- --ignored`. The
//! scenarios run inside one test function because they share the fixed seed
//! identifiers (vin, contract number, email).

use rust_decimal::{Decimal, RoundingStrategy};
use sqlx::{Connection, PgConnection};

use autosalon_demo::config::DatabaseConfig;
use autosalon_demo::database;
use autosalon_demo::demo::{self, seed, steps};

// Reference cars seeded by the migrations: the Camry matches the bulk
// discount predicate (available, mileage 22000), the Solaris does not
// (mileage 0).
const CAMRY_VIN: &str = "4T1BF1FK5HU123456";
const SOLARIS_VIN: &str = "Z94K241CBLR654321";

fn test_config() -> DatabaseConfig {
    let url = std::env::var("TEST_DATABASE_URL")
        .expect("TEST_DATABASE_URL must point at a disposable PostgreSQL database");
    DatabaseConfig::from_url(url)
}

async fn count_where(
    conn: &mut PgConnection,
    table: &str,
    predicate: &str,
    value: &str,
) -> i64 {
    sqlx::query_scalar(&format!(
        "SELECT COUNT(*) FROM {} WHERE {} = $1",
        table, predicate
    ))
    .bind(value)
    .fetch_one(conn)
    .await
    .expect("count query")
}

async fn price_of(conn: &mut PgConnection, vin: &str) -> Decimal {
    sqlx::query_scalar("SELECT price FROM car WHERE vin = $1")
        .bind(vin)
        .fetch_one(conn)
        .await
        .expect("price query")
}

/// What the database stores after `price * 0.92` lands in a NUMERIC(12,2)
/// column.
fn discounted(price: Decimal) -> Decimal {
    (price * Decimal::new(92, 2)).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[tokio::test]
#[ignore = "needs a PostgreSQL instance via TEST_DATABASE_URL"]
async fn demo_sequence_end_to_end() {
    let config = test_config();
    database::run_migrations(&config).await.expect("migrations");

    let mut conn = database::connect(&config).await.expect("connect");

    // Captured before the run rather than hardcoded, so repeated runs
    // against the same database don't compound the discount into a false
    // failure.
    let camry_before = price_of(&mut conn, CAMRY_VIN).await;
    let solaris_before = price_of(&mut conn, SOLARIS_VIN).await;

    // A clean run commits and the cleanup step removes every seeded row.
    demo::run_demo(&mut conn).await.expect("demo sequence");

    assert_eq!(count_where(&mut conn, "car", "vin", seed::CAR_VIN).await, 0);
    assert_eq!(
        count_where(&mut conn, "customer", "email", seed::CUSTOMER_EMAIL).await,
        0
    );
    assert_eq!(
        count_where(&mut conn, "sale", "contract_number", seed::SALE_CONTRACT_NUMBER).await,
        0
    );
    let leftover_drives: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM test_drive WHERE manager_notes LIKE $1")
            .bind(seed::TEST_DRIVE_NOTES_PATTERN)
            .fetch_one(&mut conn)
            .await
            .expect("count query");
    assert_eq!(leftover_drives, 0, "cleanup must remove the seeded test drive");

    // The discount touched the high-mileage available car exactly once and
    // left the low-mileage one unchanged to the cent.
    assert_eq!(
        price_of(&mut conn, CAMRY_VIN).await,
        discounted(camry_before),
        "high-mileage available car must get exactly the 8% discount"
    );
    assert_eq!(
        price_of(&mut conn, SOLARIS_VIN).await,
        solaris_before,
        "car outside the discount predicate must keep its price"
    );

    // The first run sold the reference Rio; a repeat of the sale step finds
    // no available car and affects zero rows instead of duplicating the sale.
    let mut tx = conn.begin().await.expect("begin");
    let affected = steps::register_sale(&mut tx, 1).await.expect("sale step");
    assert_eq!(affected, 0);
    tx.rollback().await.expect("rollback");

    // A test drive inside the recency window bumps the car's mileage by 30.
    // Runs in its own rolled-back transaction so the shared reference rows
    // stay untouched for later runs.
    let mut tx = conn.begin().await.expect("begin");
    let (solaris_id, mileage_before): (i32, i32) =
        sqlx::query_as("SELECT id, mileage FROM car WHERE vin = $1")
            .bind(SOLARIS_VIN)
            .fetch_one(&mut *tx)
            .await
            .expect("solaris lookup");
    let customer_id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO customer (first_name, last_name, phone, email,
                              passport_series, passport_number, address)
        VALUES ('Ирина', 'Ильина', '+79031112233', 'irina.ilina@mail.ru',
                '4512', '998877', 'Москва, ул. Лесная, д. 7')
        RETURNING id
        "#,
    )
    .fetch_one(&mut *tx)
    .await
    .expect("customer insert");
    sqlx::query(
        r#"
        INSERT INTO test_drive (car_id, customer_id, drive_date,
                                duration_minutes, manager_notes)
        VALUES ($1, $2, NOW(), 30, 'Повторный клиент')
        "#,
    )
    .bind(solaris_id)
    .bind(customer_id)
    .execute(&mut *tx)
    .await
    .expect("test drive insert");

    steps::update_car_information(&mut tx)
        .await
        .expect("bulk update step");

    let mileage_after: i32 = sqlx::query_scalar("SELECT mileage FROM car WHERE id = $1")
        .bind(solaris_id)
        .fetch_one(&mut *tx)
        .await
        .expect("mileage query");
    assert_eq!(
        mileage_after,
        mileage_before + 30,
        "a recent test drive must bump the car's mileage"
    );
    tx.rollback().await.expect("rollback");

    // Occupy the seed vin so step 1 violates the unique constraint; the
    // whole transaction must roll back, leaving no trace of steps 1-6.
    sqlx::query(
        r#"
        INSERT INTO car (brand_id, model, year, color, price, mileage, vin,
                         engine_volume, transmission, fuel_type, is_available)
        VALUES (
            (SELECT id FROM car_brand WHERE brand_name = $1),
            $2, 2020, 'Белый', 1000000.00, 100, $3, 2.0, 'Автомат', 'Бензин', false
        )
        "#,
    )
    .bind(seed::CAR_BRAND)
    .bind("Blocker")
    .bind(seed::CAR_VIN)
    .execute(&mut conn)
    .await
    .expect("blocker insert");

    let result = demo::run_demo(&mut conn).await;
    assert!(result.is_err(), "duplicate vin must fail the sequence");

    assert_eq!(
        count_where(&mut conn, "customer", "email", seed::CUSTOMER_EMAIL).await,
        0,
        "rollback must undo the customer insert"
    );
    assert_eq!(
        count_where(&mut conn, "sale", "contract_number", seed::SALE_CONTRACT_NUMBER).await,
        0,
        "rollback must leave no sale behind"
    );

    // Remove the blocker so the test database stays reusable.
    sqlx::query("DELETE FROM car WHERE vin = $1")
        .bind(seed::CAR_VIN)
        .execute(&mut conn)
        .await
        .expect("blocker cleanup");

    database::close(conn).await;
}
