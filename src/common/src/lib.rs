pub mod model;
pub mod test;
pub mod utility;
