use restroute_core::prelude::*;
use serde_json::json;

#[derive(Debug, Clone, RequestDto)]
pub struct Booking {
    pub id: u64,
    pub user_id: String,
    pub nights: u32,
}

#[derive(Debug, Clone, RequestDto)]
pub struct Guest {
    pub name: String,
}

pub struct Bookings;

#[rest_service]
impl RestService for Bookings {
    type Request = Booking;

    fn on_get(&self, request: &Booking) -> ServiceResult {
        Ok(json!({ "id": request.id, "user_id": request.user_id }))
    }

    fn on_post(&self, request: &Booking) -> ServiceResult {
        Ok(json!({ "nights": request.nights }))
    }

    fn on_delete(&self, request: &Booking) -> ServiceResult {
        Ok(json!({ "deleted": request.id }))
    }
}

pub struct Guests;

#[rest_service]
impl RestService for Guests {
    type Request = Guest;

    fn on_put(&self, request: &Guest) -> ServiceResult {
        Ok(json!({ "name": request.name }))
    }
}

/// Both hotel services in one module
pub fn module() -> ServiceModule {
    ServiceModule::new("hotel").with_service::<Bookings>().with_service::<Guests>()
}
