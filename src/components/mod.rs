pub mod load_more;
pub mod rating;

pub use load_more::{LoadMore, LoadMoreProps};
pub use rating::{RatingWidget, RatingWidgetProps};
