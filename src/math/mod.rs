mod vector;
pub use vector::*;

mod ops;
pub use ops::*;

mod traits;
pub use traits::*;
