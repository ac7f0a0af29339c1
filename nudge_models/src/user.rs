pub type UserId = i64;

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub phone: Option<String>,
    pub timezone: chrono_tz::Tz,
}
