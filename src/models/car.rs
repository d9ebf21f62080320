use rust_decimal::Decimal;

/// One available car joined with its brand, as returned by the showroom
/// listing query.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AvailableCar {
    pub brand_name: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub price: Decimal,
    pub mileage: i32,
    pub transmission: String,
    pub fuel_type: String,
}
