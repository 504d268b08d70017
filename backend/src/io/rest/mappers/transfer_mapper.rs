use crate::domain::commands::transfer::{ExportResult, ImportCommand, ImportEntry};
use crate::io::rest::mappers::restaurant_mapper::RestaurantMapper;
use shared::{ExportResponse, ImportRequest, ImportRestaurant};

pub struct TransferMapper;

impl TransferMapper {
    pub fn to_export_dto(domain: ExportResult) -> ExportResponse {
        ExportResponse {
            restaurants: RestaurantMapper::to_dto_list(domain.restaurants),
            categories: domain
                .categories
                .into_iter()
                .map(RestaurantMapper::category_to_dto)
                .collect(),
        }
    }

    pub fn to_import_command(request: ImportRequest) -> ImportCommand {
        ImportCommand {
            restaurants: request
                .restaurants
                .map(|entries| entries.into_iter().map(Self::to_import_entry).collect()),
        }
    }

    fn to_import_entry(dto: ImportRestaurant) -> ImportEntry {
        ImportEntry {
            name: dto.name,
            category: dto.category,
            note: dto.note,
        }
    }
}
