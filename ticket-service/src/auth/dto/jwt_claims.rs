use serde::Deserialize;

#[derive(Deserialize)]
pub struct JwtClaims {
    pub user_id: i64,
    pub exp: i64,
}
