mod ids;
mod image;
mod notice;
mod target;

pub use ids::RoundId;
pub use image::{ImageState, ImageUrl, ImageUrlError};
pub use notice::Notice;
pub use target::{Target, TargetError, parse_guess};
