use serde::Deserialize;

#[derive(Deserialize)]
pub struct ProfileEntity {
    pub _id: i64,
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
