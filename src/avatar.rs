//! Avatar URLs for users and groups.

/// Requested avatar edge length in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarSize {
    /// Size of the uploaded image.
    #[default]
    Original,
    Small,
    Medium,
    Large,
}

impl AvatarSize {
    pub fn pixels(self) -> u32 {
        match self {
            AvatarSize::Original => 0,
            AvatarSize::Small => 40,
            AvatarSize::Medium => 100,
            AvatarSize::Large => 640,
        }
    }
}

pub fn group_avatar_url(group_id: i64, size: AvatarSize) -> String {
    format!("https://p.qlogo.cn/gh/{}/{}/{}", group_id, group_id, size.pixels())
}

pub fn user_avatar_url(user_id: i64, size: AvatarSize) -> String {
    format!("https://q1.qlogo.cn/g?b=qq&nk={}&s={}", user_id, size.pixels())
}
