pub mod describe_zone;
pub mod find_zone_for_record;
pub mod list_zones;

pub use describe_zone::DescribeZoneUseCase;
pub use find_zone_for_record::FindZoneForRecordUseCase;
pub use list_zones::ListZonesUseCase;
