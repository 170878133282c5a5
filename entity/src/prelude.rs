pub use super::aircraft::Entity as Aircraft;
pub use super::airport::Entity as Airport;
pub use super::booking::Entity as Booking;
pub use super::booking_service::Entity as BookingService;
pub use super::company::Entity as Company;
pub use super::document::Entity as Document;
pub use super::flight::Entity as Flight;
pub use super::passenger::Entity as Passenger;
pub use super::payment::Entity as Payment;
pub use super::refresh_token::Entity as RefreshToken;
pub use super::review::Entity as Review;
pub use super::user::Entity as User;
pub use super::user_alert::Entity as UserAlert;
