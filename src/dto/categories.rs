use crate::domain::category::Category;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self {
            id: value.id.into_inner(),
            name: value.name.into_inner(),
        }
    }
}
