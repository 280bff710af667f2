//! Request payloads, response views and typed domain values.

use sea_orm::ActiveModelTrait;

/// Copies every `Some` field of a patch onto an active model.
///
/// Works for `Option<T>` patch fields over `T` columns and for
/// `Option<Option<T>>` patch fields over nullable columns alike.
macro_rules! apply_patch {
    ($patch:ident => $model:ident { $($field:ident),* $(,)? }) => {
        $(
            if let Some(value) = $patch.$field {
                $model.$field = ::sea_orm::Set(value);
            }
        )*
    };
}

pub mod achievement;
pub mod admin;
pub mod auth;
pub mod cms;
pub mod color;
pub mod common;
pub mod content;
pub mod dashboard;
pub mod feature;
pub mod gallery;
pub mod guide;
pub mod hero;
pub mod media;
pub mod navbar;
pub mod partner;
pub mod prelude;
pub mod section;
pub mod setting;
pub mod style;
pub mod testimonial;
pub mod tour;
pub mod video;

/// A partial update that only touches the fields the client sent.
pub trait Patch<A: ActiveModelTrait>: Send {
    fn apply(self, model: &mut A);
}

pub(crate) fn default_true() -> bool {
    true
}
