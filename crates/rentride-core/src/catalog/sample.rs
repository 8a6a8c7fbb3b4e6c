//! Built-in sample data for the rental catalog.

use chrono::{NaiveDate, NaiveDateTime};

use super::models::{
    Addon, Coupon, FaqEntry, FuelType, InboxMessage, RewardTier, Transmission, Vehicle,
    VehicleCategory,
};

#[allow(clippy::too_many_arguments)]
fn vehicle(
    id: &str,
    brand: &str,
    name: &str,
    category: VehicleCategory,
    seats: u8,
    transmission: Transmission,
    fuel: FuelType,
    daily_rate: u64,
    rating: f32,
    city: &str,
) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        brand: brand.to_string(),
        name: name.to_string(),
        category,
        seats,
        transmission,
        fuel,
        daily_rate,
        rating,
        city: city.to_string(),
    }
}

pub fn vehicles() -> Vec<Vehicle> {
    use FuelType::*;
    use Transmission::*;
    use VehicleCategory::*;

    vec![
        vehicle("swift", "Maruti", "Swift", Hatchback, 5, Manual, Petrol, 1200, 4.3, "Bengaluru"),
        vehicle("i20", "Hyundai", "i20", Hatchback, 5, Automatic, Petrol, 1400, 4.5, "Bengaluru"),
        vehicle("tiago-ev", "Tata", "Tiago EV", Hatchback, 5, Automatic, Electric, 1600, 4.4, "Pune"),
        vehicle("city", "Honda", "City", Sedan, 5, Automatic, Petrol, 2200, 4.6, "Mumbai"),
        vehicle("verna", "Hyundai", "Verna", Sedan, 5, Manual, Diesel, 2000, 4.2, "Pune"),
        vehicle("dzire", "Maruti", "Dzire", Sedan, 5, Manual, Cng, 1500, 4.0, "Delhi"),
        vehicle("creta", "Hyundai", "Creta", Suv, 5, Automatic, Diesel, 2800, 4.7, "Bengaluru"),
        vehicle("xuv700", "Mahindra", "XUV700", Suv, 7, Automatic, Diesel, 3500, 4.8, "Delhi"),
        vehicle("innova", "Toyota", "Innova Crysta", Suv, 7, Manual, Diesel, 3200, 4.6, "Mumbai"),
        vehicle("activa", "Honda", "Activa 6G", Scooter, 2, Automatic, Petrol, 400, 4.1, "Bengaluru"),
        vehicle("ather", "Ather", "450X", Scooter, 2, Automatic, Electric, 550, 4.5, "Pune"),
        vehicle("classic", "Royal Enfield", "Classic 350", Motorcycle, 2, Manual, Petrol, 900, 4.6, "Delhi"),
        vehicle("duke", "KTM", "Duke 390", Motorcycle, 2, Manual, Petrol, 1100, 4.4, "Mumbai"),
    ]
}

pub fn addons() -> Vec<Addon> {
    [
        ("helmet", "Extra helmet", 100),
        ("child-seat", "Child seat", 300),
        ("gps", "GPS navigator", 200),
        ("insurance", "Zero-depreciation cover", 500),
        ("delivery", "Doorstep delivery", 400),
    ]
    .into_iter()
    .map(|(id, name, price)| Addon {
        id: id.to_string(),
        name: name.to_string(),
        price,
    })
    .collect()
}

pub fn coupons() -> Vec<Coupon> {
    [
        ("FIRSTRIDE", "Flat 500 off your first booking", 500, 1500),
        ("WEEKEND1K", "Flat 1000 off weekend trips", 1000, 4000),
        ("RIDE100", "Flat 100 off any booking", 100, 0),
    ]
    .into_iter()
    .map(|(code, description, discount, min_total)| Coupon {
        code: code.to_string(),
        description: description.to_string(),
        discount,
        min_total,
    })
    .collect()
}

pub fn faqs() -> Vec<FaqEntry> {
    [
        (
            "booking",
            "How do I book a vehicle?",
            "Pick a vehicle, choose pickup and return times, add any extras and pay to confirm.",
        ),
        (
            "booking",
            "Can I extend my trip?",
            "Yes, extensions are charged at the same daily rate if the vehicle is available.",
        ),
        (
            "payment",
            "Which payment methods are accepted?",
            "UPI, credit and debit cards, and net banking. GST is added at checkout.",
        ),
        (
            "payment",
            "When is the security deposit refunded?",
            "Within 5 working days of returning the vehicle without damage.",
        ),
        (
            "documents",
            "What documents do I need?",
            "A valid driving licence and a government photo ID uploaded in your profile.",
        ),
        (
            "cancellation",
            "How do I cancel a booking?",
            "Open the trip and tap cancel. Cancellations 24 hours before pickup are free.",
        ),
        (
            "rewards",
            "How do I earn reward points?",
            "Every completed trip and successful referral earns points towards the next tier.",
        ),
    ]
    .into_iter()
    .map(|(topic, question, answer)| FaqEntry {
        topic: topic.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
    })
    .collect()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .unwrap_or_default()
}

pub fn messages() -> Vec<InboxMessage> {
    vec![
        InboxMessage {
            id: 1,
            sender: "Rentride".to_string(),
            subject: "Welcome aboard".to_string(),
            body: "Thanks for signing up. Use FIRSTRIDE for flat 500 off.".to_string(),
            sent_at: at(2024, 3, 1, 9, 0),
            unread: false,
        },
        InboxMessage {
            id: 2,
            sender: "Bookings".to_string(),
            subject: "Booking confirmed: Hyundai Creta".to_string(),
            body: "Your pickup is scheduled at Koramangala hub, 10:00.".to_string(),
            sent_at: at(2024, 3, 8, 18, 30),
            unread: true,
        },
        InboxMessage {
            id: 3,
            sender: "Support".to_string(),
            subject: "Documents verified".to_string(),
            body: "Your driving licence has been verified. You're ready to ride.".to_string(),
            sent_at: at(2024, 3, 5, 11, 15),
            unread: false,
        },
        InboxMessage {
            id: 4,
            sender: "Rewards".to_string(),
            subject: "You reached Silver".to_string(),
            body: "Enjoy priority support and 5% off add-ons.".to_string(),
            sent_at: at(2024, 3, 10, 8, 45),
            unread: true,
        },
        InboxMessage {
            id: 5,
            sender: "Bookings".to_string(),
            subject: "Trip completed: Honda Activa 6G".to_string(),
            body: "Hope you enjoyed the ride. Rate your trip to earn 20 points.".to_string(),
            sent_at: at(2024, 2, 20, 20, 5),
            unread: false,
        },
    ]
}

pub fn reward_tiers() -> Vec<RewardTier> {
    [
        ("Bronze", 0, "Member pricing"),
        ("Silver", 500, "Priority support"),
        ("Gold", 1500, "Free doorstep delivery"),
        ("Platinum", 4000, "Free upgrades when available"),
    ]
    .into_iter()
    .map(|(name, min_points, perk)| RewardTier {
        name: name.to_string(),
        min_points,
        perk: perk.to_string(),
    })
    .collect()
}
