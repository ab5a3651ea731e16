use sea_orm::ActiveValue;
use tenant_router_sdk::TenantRecord;

use super::entity;

impl From<entity::Model> for TenantRecord {
    fn from(model: entity::Model) -> Self {
        Self {
            tenant_id: model.tenant_id,
            resource_endpoint: model.resource_endpoint,
        }
    }
}

impl From<TenantRecord> for entity::ActiveModel {
    fn from(record: TenantRecord) -> Self {
        Self {
            tenant_id: ActiveValue::Set(record.tenant_id),
            resource_endpoint: ActiveValue::Set(record.resource_endpoint),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_to_record_conversion() {
        let model = entity::Model {
            tenant_id: "tenant1".to_owned(),
            resource_endpoint: "https://tenant1-service.com/resource".to_owned(),
        };

        let record: TenantRecord = model.into();

        assert_eq!(record.tenant_id, "tenant1");
        assert_eq!(record.resource_endpoint, "https://tenant1-service.com/resource");
    }
}
