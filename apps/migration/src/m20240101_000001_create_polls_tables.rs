use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PollsQuestion::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PollsQuestion::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(PollsQuestion::QuestionText)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PollsQuestion::PubDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // The index page filters and sorts on pub_date.
        manager
            .create_index(
                Index::create()
                    .name("idx_polls_question_pub_date")
                    .table(PollsQuestion::Table)
                    .col(PollsQuestion::PubDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PollsChoice::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PollsChoice::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(PollsChoice::QuestionId).uuid().not_null())
                    .col(
                        ColumnDef::new(PollsChoice::ChoiceText)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PollsChoice::Votes)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(PollsChoice::Votes).gte(0)),
                    )
                    .col(
                        ColumnDef::new(PollsChoice::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_polls_choice_question")
                            .from(PollsChoice::Table, PollsChoice::QuestionId)
                            .to(PollsQuestion::Table, PollsQuestion::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PollsChoice::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PollsQuestion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PollsQuestion {
    Table,
    Id,
    QuestionText,
    PubDate,
}

#[derive(DeriveIden)]
enum PollsChoice {
    Table,
    Id,
    QuestionId,
    ChoiceText,
    Votes,
    CreatedAt,
}
