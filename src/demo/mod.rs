//! The demo transaction runner.
//!
//! Executes the fixed six-step dealership sequence inside one transaction on
//! the single connection: commit when every step succeeds, explicit full
//! rollback on the first error. No retries, no partial application.

pub mod seed;
pub mod steps;
pub mod table;

use sqlx::{Connection, PgConnection};
use tracing::{error, info, warn};

use crate::utils::errors::DemoResult;

/// Run the whole demo sequence in a single transaction.
pub async fn run_demo(conn: &mut PgConnection) -> DemoResult<()> {
    let mut tx = conn.begin().await?;

    match run_steps(&mut tx).await {
        Ok(()) => {
            tx.commit().await?;
            info!("✅ All dealership operations completed");
            Ok(())
        }
        Err(e) => {
            // Keep the step error even if the rollback itself fails.
            if let Err(rollback_err) = tx.rollback().await {
                warn!("Rollback failed: {}", rollback_err);
            }
            error!("❌ Step failed, transaction rolled back");
            Err(e)
        }
    }
}

async fn run_steps(conn: &mut PgConnection) -> DemoResult<()> {
    println!("\n=== АВТОСАЛОН: CRUD DEMO ===\n");

    let ids = steps::insert_seed_rows(conn).await?;
    steps::create_test_drive(conn, ids).await?;

    let cars = steps::list_available_cars(conn).await?;
    print!("{}", table::render(&cars));

    steps::register_sale(conn, ids.customer_id).await?;
    steps::update_car_information(conn).await?;
    steps::delete_seed_rows(conn).await?;

    Ok(())
}
