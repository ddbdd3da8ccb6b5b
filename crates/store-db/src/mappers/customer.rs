//! Customer entity <-> model mapper

use store_core::entities::Customer;
use store_core::value_objects::CustomerId;

use crate::models::CustomerModel;

/// Convert CustomerModel to Customer entity
impl From<CustomerModel> for Customer {
    fn from(model: CustomerModel) -> Self {
        Customer {
            id: CustomerId::new(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            middle_name: model.middle_name,
            email: model.email,
            phone: model.phone,
            created_at: model.created_at,
        }
    }
}
