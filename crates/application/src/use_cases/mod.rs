pub mod propagation;
pub mod records;
pub mod zones;

pub use propagation::WaitForPropagationUseCase;
pub use records::{
    AddRecordUseCase, DeleteRecordUseCase, RecordChange, SetRecordUseCase, WaitOptions,
};
pub use zones::{DescribeZoneUseCase, FindZoneForRecordUseCase, ListZonesUseCase};
