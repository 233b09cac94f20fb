//! Migration: Create elections, receipts and mappings.
//!
//! These tables reference the master data created by the previous migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Elections::Table)
                    .if_not_exists()
                    .col(&mut id_column(Elections::Id))
                    .col(ColumnDef::new(Elections::RoleId).big_integer().not_null())
                    .col(ColumnDef::new(Elections::MemberId).big_integer().not_null())
                    .col(ColumnDef::new(Elections::StartDate).date().not_null())
                    .col(ColumnDef::new(Elections::EndDate).date().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_elections_role")
                            .from(Elections::Table, Elections::RoleId)
                            .to(Roles::Table, Roles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_elections_member")
                            .from(Elections::Table, Elections::MemberId)
                            .to(Members::Table, Members::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookup of the open election of a role
        manager
            .create_index(
                Index::create()
                    .name("idx_elections_role_end_date")
                    .table(Elections::Table)
                    .col(Elections::RoleId)
                    .col(Elections::EndDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Receipts::Table)
                    .if_not_exists()
                    .col(&mut id_column(Receipts::Id))
                    .col(ColumnDef::new(Receipts::DonorId).big_integer().not_null())
                    .col(ColumnDef::new(Receipts::StartDate).date().not_null())
                    .col(ColumnDef::new(Receipts::EndDate).date().not_null())
                    .col(ColumnDef::new(Receipts::AmountCents).big_integer().not_null())
                    .col(ColumnDef::new(Receipts::IssuedOn).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_receipts_donor")
                            .from(Receipts::Table, Receipts::DonorId)
                            .to(Donors::Table, Donors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_receipts_donor")
                    .table(Receipts::Table)
                    .col(Receipts::DonorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Mappings::Table)
                    .if_not_exists()
                    .col(&mut id_column(Mappings::Id))
                    .col(ColumnDef::new(Mappings::Pattern).string().not_null())
                    .col(ColumnDef::new(Mappings::PurposeId).big_integer().null())
                    .col(ColumnDef::new(Mappings::AreaId).big_integer().null())
                    .col(ColumnDef::new(Mappings::CreditorId).big_integer().null())
                    .col(ColumnDef::new(Mappings::DonorId).big_integer().null())
                    .col(ColumnDef::new(Mappings::MemberId).big_integer().null())
                    .foreign_key(&mut set_null_fk(
                        "fk_mappings_purpose",
                        Mappings::PurposeId,
                        Purposes::Table,
                        Purposes::Id,
                    ))
                    .foreign_key(&mut set_null_fk(
                        "fk_mappings_area",
                        Mappings::AreaId,
                        Areas::Table,
                        Areas::Id,
                    ))
                    .foreign_key(&mut set_null_fk(
                        "fk_mappings_creditor",
                        Mappings::CreditorId,
                        Creditors::Table,
                        Creditors::Id,
                    ))
                    .foreign_key(&mut set_null_fk(
                        "fk_mappings_donor",
                        Mappings::DonorId,
                        Donors::Table,
                        Donors::Id,
                    ))
                    .foreign_key(&mut set_null_fk(
                        "fk_mappings_member",
                        Mappings::MemberId,
                        Members::Table,
                        Members::Id,
                    ))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mappings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Receipts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Elections::Table).to_owned())
            .await
    }
}

fn id_column<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .big_integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

fn set_null_fk<C, T, R>(
    name: &str,
    column: C,
    table: T,
    referenced: R,
) -> ForeignKeyCreateStatement
where
    C: IntoIden + 'static,
    T: IntoIden + 'static,
    R: IntoIden + 'static,
{
    ForeignKey::create()
        .name(name)
        .from(Mappings::Table, column)
        .to(table, referenced)
        .on_delete(ForeignKeyAction::SetNull)
        .to_owned()
}

#[derive(Iden)]
enum Elections {
    Table,
    Id,
    RoleId,
    MemberId,
    StartDate,
    EndDate,
}

#[derive(Iden)]
enum Receipts {
    Table,
    Id,
    DonorId,
    StartDate,
    EndDate,
    AmountCents,
    IssuedOn,
}

#[derive(Iden)]
enum Mappings {
    Table,
    Id,
    Pattern,
    PurposeId,
    AreaId,
    CreditorId,
    DonorId,
    MemberId,
}

#[derive(Iden)]
enum Roles {
    Table,
    Id,
}

#[derive(Iden)]
enum Members {
    Table,
    Id,
}

#[derive(Iden)]
enum Donors {
    Table,
    Id,
}

#[derive(Iden)]
enum Purposes {
    Table,
    Id,
}

#[derive(Iden)]
enum Areas {
    Table,
    Id,
}

#[derive(Iden)]
enum Creditors {
    Table,
    Id,
}
