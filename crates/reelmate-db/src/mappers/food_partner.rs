//! FoodPartner entity <- model mapper

use reelmate_core::{FoodPartner, Snowflake};

use crate::models::FoodPartnerModel;

impl From<FoodPartnerModel> for FoodPartner {
    fn from(model: FoodPartnerModel) -> Self {
        FoodPartner {
            id: Snowflake::new(model.id),
            name: model.name,
            email: model.email,
            phone: model.phone,
            address: model.address,
            contact_name: model.contact_name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
