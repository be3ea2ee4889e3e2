pub mod breguet;
pub mod fuel;
pub mod model;
pub mod params;
pub mod sizing;
