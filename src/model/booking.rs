//! Booking DTOs, including the entities a booking owns.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BookingDto {
    pub id: Uuid,
    pub flight_id: Uuid,
    pub user_id: Uuid,
    pub reference: String,
    pub seat_count: i32,
    pub total_price: i64,
    pub currency: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl BookingDto {
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            flight_id: entity.flight_id,
            user_id: entity.user_id,
            reference: entity.reference,
            seat_count: entity.seat_count,
            total_price: entity.total_price,
            currency: entity.currency,
            status: entity.status,
            created_at: entity.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PassengerDto {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub passport_number: Option<String>,
}

impl PassengerDto {
    pub fn from_entity(entity: entity::passenger::Model) -> Self {
        Self {
            id: entity.id,
            booking_id: entity.booking_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            date_of_birth: entity.date_of_birth,
            passport_number: entity.passport_number,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PaymentDto {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub amount: i64,
    pub currency: String,
    pub provider: String,
    pub status: String,
    pub paid_at: Option<DateTime<Utc>>,
}

impl PaymentDto {
    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            id: entity.id,
            booking_id: entity.booking_id,
            amount: entity.amount,
            currency: entity.currency,
            provider: entity.provider,
            status: entity.status,
            paid_at: entity.paid_at,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BookingServiceDto {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub name: String,
    pub price: i64,
    pub quantity: i32,
}

impl BookingServiceDto {
    pub fn from_entity(entity: entity::booking_service::Model) -> Self {
        Self {
            id: entity.id,
            booking_id: entity.booking_id,
            name: entity.name,
            price: entity.price,
            quantity: entity.quantity,
        }
    }
}
