///
/// User information retrieved from JWT.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct User {
    pub id: i64,
}

impl User {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}
