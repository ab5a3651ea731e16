use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, sea_query::OnConflict};
use tenant_router_sdk::TenantRecord;

use crate::domain::repo::TenantRepository;

use super::entity::{self, Entity as TenantEntity};

/// Tenant storage backed by the `tenant_data` table.
pub struct SeaOrmTenantRepository {
    conn: DatabaseConnection,
}

impl SeaOrmTenantRepository {
    #[must_use]
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl TenantRepository for SeaOrmTenantRepository {
    async fn find_by_id(&self, tenant_id: &str) -> anyhow::Result<Option<TenantRecord>> {
        let model = TenantEntity::find_by_id(tenant_id.to_owned())
            .one(&self.conn)
            .await?;

        Ok(model.map(Into::into))
    }

    async fn upsert(&self, record: TenantRecord) -> anyhow::Result<TenantRecord> {
        let active_model: entity::ActiveModel = record.clone().into();

        TenantEntity::insert(active_model)
            .on_conflict(
                OnConflict::column(entity::Column::TenantId)
                    .update_column(entity::Column::ResourceEndpoint)
                    .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await?;

        Ok(record)
    }

    async fn delete(&self, tenant_id: &str) -> anyhow::Result<bool> {
        let result = TenantEntity::delete_by_id(tenant_id.to_owned())
            .exec(&self.conn)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
