use crate::entities::child_record::ChildRecord;
use child_health_booklet_data::models::child_record::ChildRecord as DataChildRecord;

// Conversion functions between domain entities and data models,
// named convert_to_[target_layer]_[model_name].

/// Convert from data model to domain entity
pub fn convert_to_domain_record(data_record: DataChildRecord) -> ChildRecord {
    ChildRecord {
        health_id: data_record.health_id,
        name: data_record.name,
        age: data_record.age,
        weight: data_record.weight,
        height: data_record.height,
        parent: data_record.parent,
        illness: data_record.illness,
        consent: data_record.consent,
        uploaded: data_record.uploaded,
    }
}

/// Convert from domain entity to data model
pub fn convert_to_data_record(record: &ChildRecord) -> DataChildRecord {
    DataChildRecord {
        health_id: record.health_id.clone(),
        name: record.name.clone(),
        age: record.age.clone(),
        weight: record.weight.clone(),
        height: record.height.clone(),
        parent: record.parent.clone(),
        illness: record.illness.clone(),
        consent: record.consent,
        uploaded: record.uploaded,
    }
}
