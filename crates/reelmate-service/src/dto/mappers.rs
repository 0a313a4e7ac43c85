//! Entity to DTO mappers

use reelmate_core::{FoodPartner, FoodPost, User};

use crate::services::FoodPartnerProfile;

use super::responses::{
    FoodPartnerProfileResponse, FoodPartnerResponse, FoodPostResponse, UserResponse,
};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            fullname: user.fullname.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<&FoodPartner> for FoodPartnerResponse {
    fn from(partner: &FoodPartner) -> Self {
        Self {
            id: partner.id,
            name: partner.name.clone(),
            email: partner.email.clone(),
            phone: partner.phone.clone(),
            address: partner.address.clone(),
            contact_name: partner.contact_name.clone(),
            created_at: partner.created_at,
        }
    }
}

impl From<FoodPost> for FoodPostResponse {
    fn from(post: FoodPost) -> Self {
        Self {
            id: post.id,
            name: post.name,
            description: post.description,
            video_url: post.video_url,
            food_partner_id: post.food_partner_id,
            like_count: post.like_count,
            save_count: post.save_count,
            created_at: post.created_at,
        }
    }
}

impl From<FoodPartnerProfile> for FoodPartnerProfileResponse {
    fn from(profile: FoodPartnerProfile) -> Self {
        Self {
            food_partner: FoodPartnerResponse::from(&profile.food_partner),
            food_items: profile.food_items.into_iter().map(Into::into).collect(),
        }
    }
}
