pub mod animal;
pub mod circle;
pub mod driver;
pub mod output;
pub mod types;

pub use animal::Animal;
pub use circle::Circle;
pub use types::{CircleReport, Report};
