use crate::domain::commands::restaurants::{AddRestaurantCommand, UpdateRestaurantCommand};
use crate::domain::models::category::{Category as DomainCategory, UNKNOWN_CATEGORY};
use crate::domain::models::restaurant::DomainRestaurant;
use crate::domain::models::theme::DomainTheme;
use shared::{
    Category as SharedCategory, CreateRestaurantRequest, Restaurant as SharedRestaurant, Theme,
    UpdateRestaurantRequest,
};

/// Mapper between the restaurant/category DTOs and domain models
pub struct RestaurantMapper;

impl RestaurantMapper {
    pub fn to_dto(domain: DomainRestaurant) -> SharedRestaurant {
        SharedRestaurant {
            id: domain.id,
            name: domain.name,
            category: domain
                .category_name
                .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string()),
            category_id: domain.category_id,
            note: domain.note,
            spin_count: domain.spin_count,
        }
    }

    pub fn to_dto_list(domain: Vec<DomainRestaurant>) -> Vec<SharedRestaurant> {
        domain.into_iter().map(Self::to_dto).collect()
    }

    pub fn category_to_dto(domain: DomainCategory) -> SharedCategory {
        SharedCategory {
            id: domain.id,
            name: domain.name,
        }
    }

    pub fn theme_to_dto(domain: DomainTheme) -> Theme {
        Theme {
            name: domain.name,
            display_name: domain.display_name,
        }
    }

    pub fn to_add_command(request: CreateRestaurantRequest) -> AddRestaurantCommand {
        AddRestaurantCommand {
            name: request.name,
            category: request.category,
            note: request.note,
        }
    }

    pub fn to_update_command(id: i64, request: UpdateRestaurantRequest) -> UpdateRestaurantCommand {
        UpdateRestaurantCommand {
            id,
            name: request.name,
            category: request.category,
            note: request.note,
        }
    }
}
