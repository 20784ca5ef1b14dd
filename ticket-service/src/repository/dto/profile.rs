use crate::repository::entity::ProfileEntity;

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: i64,
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub region: String,
    pub phone: String,
    pub personal_id: String,
    pub type_personal_id: String,
}

impl From<ProfileEntity> for Profile {
    fn from(value: ProfileEntity) -> Self {
        Self {
            id: value._id,
            user_id: value.user_id,
            first_name: value.first_name,
            last_name: value.last_name,
            address: value.address,
            district: value.district,
            city: value.city,
            state: value.state,
            country: value.country,
            region: value.region,
            phone: value.phone,
            personal_id: value.personal_id,
            type_personal_id: value.type_personal_id,
        }
    }
}
