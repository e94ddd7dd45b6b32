use chrono::NaiveDateTime;
use uuid::Uuid;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Entities owned by exactly one user.
pub trait Owned {
    fn user_id(&self) -> Uuid;
}

/// Entities carrying a point-in-time date usable for window filtering.
pub trait Dated {
    fn date(&self) -> NaiveDateTime;
}
