use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Musics {
    Table,
    Id,
    Title,
    Artist,
    ReleaseDate,
    Duration,
    NumberViews,
    Feat,
    Deleted,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Musics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Musics::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Musics::Title).string().not_null())
                    .col(ColumnDef::new(Musics::Artist).string().not_null())
                    .col(ColumnDef::new(Musics::ReleaseDate).date().not_null())
                    .col(ColumnDef::new(Musics::Duration).time().not_null())
                    .col(
                        ColumnDef::new(Musics::NumberViews)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Musics::Feat)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Musics::Deleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Musics::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Musics::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing pages over live rows in id order
        manager
            .create_index(
                Index::create()
                    .name("idx-musics-deleted-id")
                    .table(Musics::Table)
                    .col(Musics::Deleted)
                    .col(Musics::Id)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Musics::Table).to_owned())
            .await
    }
}
