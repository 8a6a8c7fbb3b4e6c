use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Return time {return_at} is before pickup time {pickup_at}")]
    InvalidBookingWindow {
        pickup_at: chrono::NaiveDateTime,
        return_at: chrono::NaiveDateTime,
    },

    #[error("Invalid date/time '{0}', expected YYYY-MM-DD HH:MM")]
    InvalidDateTime(String),

    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    #[error("Unknown add-on: {0}")]
    UnknownAddon(String),

    #[error("Unknown coupon: {0}")]
    UnknownCoupon(String),

    #[error("Coupon {code} requires a booking total of at least {min_total}")]
    CouponNotApplicable { code: String, min_total: u64 },

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
