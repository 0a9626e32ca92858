//! Avatar image URL construction

use crate::session::UserId;

/// Placeholder substituted with the user id
pub const USER_ID_PLACEHOLDER: &str = "{user_id}";

pub const DEFAULT_AVATAR_TEMPLATE: &str = "https://vercel.com/api/www/avatar/{user_id}?&s=120";

/// Interpolate the user id into the template. A missing id leaves the
/// segment empty; a broken image is acceptable there.
pub fn avatar_url(template: &str, user_id: Option<&UserId>) -> String {
    let id = user_id.map(UserId::as_str).unwrap_or_default();
    template.replacen(USER_ID_PLACEHOLDER, id, 1)
}
