//! Migration: Create the standalone club tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Areas::Table)
                    .if_not_exists()
                    .col(&mut id_column(Areas::Id))
                    .col(ColumnDef::new(Areas::Name).string().not_null())
                    .col(ColumnDef::new(Areas::Description).text().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Purposes::Table)
                    .if_not_exists()
                    .col(&mut id_column(Purposes::Id))
                    .col(ColumnDef::new(Purposes::Name).string().not_null())
                    .col(ColumnDef::new(Purposes::Description).text().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Creditors::Table)
                    .if_not_exists()
                    .col(&mut id_column(Creditors::Id))
                    .col(ColumnDef::new(Creditors::Name).string().not_null())
                    .col(ColumnDef::new(Creditors::Iban).string_len(34).null())
                    .col(ColumnDef::new(Creditors::Street).string().null())
                    .col(ColumnDef::new(Creditors::ZipCode).string().null())
                    .col(ColumnDef::new(Creditors::City).string().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Donors::Table)
                    .if_not_exists()
                    .col(&mut id_column(Donors::Id))
                    .col(ColumnDef::new(Donors::FirstName).string().not_null())
                    .col(ColumnDef::new(Donors::LastName).string().not_null())
                    .col(ColumnDef::new(Donors::Email).string().null())
                    .col(ColumnDef::new(Donors::Street).string().null())
                    .col(ColumnDef::new(Donors::ZipCode).string().null())
                    .col(ColumnDef::new(Donors::City).string().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Members::Table)
                    .if_not_exists()
                    .col(&mut id_column(Members::Id))
                    .col(ColumnDef::new(Members::FirstName).string().not_null())
                    .col(ColumnDef::new(Members::LastName).string().not_null())
                    .col(ColumnDef::new(Members::Email).string().null())
                    .col(ColumnDef::new(Members::Phone).string().null())
                    .col(ColumnDef::new(Members::Street).string().null())
                    .col(ColumnDef::new(Members::ZipCode).string().null())
                    .col(ColumnDef::new(Members::City).string().null())
                    .col(ColumnDef::new(Members::Birthday).date().null())
                    .col(ColumnDef::new(Members::JoinedOn).date().null())
                    .col(ColumnDef::new(Members::UserId).string().null().unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(&mut id_column(Roles::Id))
                    .col(ColumnDef::new(Roles::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Roles::Description).text().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Templates::Table)
                    .if_not_exists()
                    .col(&mut id_column(Templates::Id))
                    .col(ColumnDef::new(Templates::Name).string().not_null())
                    .col(ColumnDef::new(Templates::Content).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Templates::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Members::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Donors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Creditors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Purposes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Areas::Table).to_owned())
            .await
    }
}

/// Auto-incrementing BIGINT primary key
fn id_column<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .big_integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

#[derive(Iden)]
enum Areas {
    Table,
    Id,
    Name,
    Description,
}

#[derive(Iden)]
enum Purposes {
    Table,
    Id,
    Name,
    Description,
}

#[derive(Iden)]
enum Creditors {
    Table,
    Id,
    Name,
    Iban,
    Street,
    ZipCode,
    City,
}

#[derive(Iden)]
enum Donors {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Street,
    ZipCode,
    City,
}

#[derive(Iden)]
enum Members {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    Street,
    ZipCode,
    City,
    Birthday,
    JoinedOn,
    UserId,
}

#[derive(Iden)]
enum Roles {
    Table,
    Id,
    Name,
    Description,
}

#[derive(Iden)]
enum Templates {
    Table,
    Id,
    Name,
    Content,
}
