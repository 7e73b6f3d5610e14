//! Choice entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "polls_choice")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub question_id: Uuid,
    pub choice_text: String,
    pub votes: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::question::Entity",
        from = "Column::QuestionId",
        to = "super::question::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Question,
}

impl Related<super::question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Choice.
impl From<Model> for polls_core::domain::Choice {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            question_id: model.question_id,
            choice_text: model.choice_text,
            votes: model.votes,
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from Domain Choice to SeaORM ActiveModel.
impl From<polls_core::domain::Choice> for ActiveModel {
    fn from(choice: polls_core::domain::Choice) -> Self {
        Self {
            id: Set(choice.id),
            question_id: Set(choice.question_id),
            choice_text: Set(choice.choice_text),
            votes: Set(choice.votes),
            created_at: Set(choice.created_at.into()),
        }
    }
}
