//! Book database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Book;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub title: String,
    pub author: String,
    pub category: Option<String>,
    pub year: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub image: Option<String>,
    pub quota: i32,
    pub rack_number: Option<String>,
    #[sea_orm(unique)]
    pub isbn: String,
    pub language: Option<String>,
    pub available_copies: i32,
    pub late_fee: Option<f64>,
    pub can_borrow: bool,
    pub rating: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Book {
    fn from(model: Model) -> Self {
        Book {
            id: model.id,
            title: model.title,
            author: model.author,
            category: model.category,
            year: model.year,
            description: model.description,
            image: model.image,
            quota: model.quota,
            rack_number: model.rack_number,
            isbn: model.isbn,
            language: model.language,
            available_copies: model.available_copies,
            late_fee: model.late_fee,
            can_borrow: model.can_borrow,
            rating: model.rating,
        }
    }
}
